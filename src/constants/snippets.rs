//! Snippet field defaults and accepted choices.

pub const DEFAULT_LANGUAGE: &str = "python";
pub const DEFAULT_STYLE: &str = "friendly";

/// Lexer names accepted for the `language` field.
pub const LANGUAGE_CHOICES: &[&str] = &[
    "bash", "c", "clojure", "cpp", "csharp", "css", "dart", "diff", "docker", "elixir", "erlang",
    "go", "haskell", "html", "java", "javascript", "json", "kotlin", "lua", "make", "markdown",
    "nginx", "ocaml", "perl", "php", "postgresql", "powershell", "python", "python2", "r", "ruby",
    "rust", "scala", "sql", "swift", "text", "toml", "typescript", "xml", "yaml", "zig",
];

/// Highlighting style names accepted for the `style` field.
pub const STYLE_CHOICES: &[&str] = &[
    "abap", "autumn", "borland", "bw", "colorful", "default", "dracula", "emacs", "friendly",
    "fruity", "github-dark", "gruvbox-dark", "gruvbox-light", "igor", "lovelace", "manni",
    "monokai", "murphy", "native", "nord", "paraiso-dark", "paraiso-light", "pastie", "perldoc",
    "rrt", "solarized-dark", "solarized-light", "tango", "trac", "vim", "vs", "xcode", "zenburn",
];
