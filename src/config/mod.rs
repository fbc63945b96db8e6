use std::env;
use std::str::FromStr;

use lazy_static::lazy_static;
use log::warn;

use crate::constants::{
    DEFAULT_PAGE_SIZE, LAST_PAGE_TOKENS, MAX_PAGE_SIZE, PAGE_QUERY_PARAM, PAGE_SIZE_QUERY_PARAM,
};
use crate::pagination::PaginationConfig;

lazy_static! {
    pub static ref CONFIG: Config = Config::from_env();
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub pagination: PaginationConfig,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build the configuration from any variable lookup, e.g. the process environment.
    pub fn from_vars<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            server_host: var("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            server_port: parse_var(&var, "SERVER_PORT", 8080),
            pagination: pagination_from_vars(&var),
        }
    }
}

fn pagination_from_vars<F>(var: &F) -> PaginationConfig
where
    F: Fn(&str) -> Option<String>,
{
    let default_page_size = parse_var(var, "PAGE_SIZE", DEFAULT_PAGE_SIZE);

    // An explicitly empty value turns off client-controlled page sizes.
    let page_size_query_param = match var("PAGE_SIZE_QUERY_PARAM") {
        Some(name) if name.trim().is_empty() => None,
        Some(name) => Some(name.trim().to_string()),
        None => Some(PAGE_SIZE_QUERY_PARAM.to_string()),
    };

    let last_page_tokens = var("LAST_PAGE_TOKENS")
        .map(|raw| split_tokens(&raw))
        .unwrap_or_else(|| LAST_PAGE_TOKENS.iter().map(|t| t.to_string()).collect());

    PaginationConfig {
        default_page_size: (default_page_size > 0).then_some(default_page_size),
        max_page_size: parse_var(var, "MAX_PAGE_SIZE", MAX_PAGE_SIZE),
        page_query_param: var("PAGE_QUERY_PARAM").unwrap_or_else(|| PAGE_QUERY_PARAM.to_string()),
        page_size_query_param,
        last_page_tokens,
    }
}

fn split_tokens(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_var<F, T>(var: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Copy + std::fmt::Display,
{
    match var(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("{} must be a valid number, got {:?}; using {}", key, raw, default);
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = config_from(&[]);
        assert_eq!(config.server_host, "127.0.0.1");
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.pagination, PaginationConfig::default());
        assert_eq!(config.pagination.default_page_size, Some(3));
        assert_eq!(config.pagination.max_page_size, 10);
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = config_from(&[
            ("SERVER_HOST", "0.0.0.0"),
            ("SERVER_PORT", " 9000 "),
            ("PAGE_SIZE", "5"),
            ("MAX_PAGE_SIZE", "50"),
            ("PAGE_QUERY_PARAM", "page"),
            ("PAGE_SIZE_QUERY_PARAM", " size "),
        ]);
        assert_eq!(config.server_host, "0.0.0.0");
        assert_eq!(config.server_port, 9000);
        assert_eq!(config.pagination.default_page_size, Some(5));
        assert_eq!(config.pagination.max_page_size, 50);
        assert_eq!(config.pagination.page_query_param, "page");
        assert_eq!(
            config.pagination.page_size_query_param.as_deref(),
            Some("size")
        );
    }

    #[test]
    fn test_zero_page_size_disables_pagination() {
        let config = config_from(&[("PAGE_SIZE", "0")]);
        assert_eq!(config.pagination.default_page_size, None);
    }

    #[test]
    fn test_empty_page_size_param_disables_client_sizes() {
        let config = config_from(&[("PAGE_SIZE_QUERY_PARAM", "  ")]);
        assert_eq!(config.pagination.page_size_query_param, None);
    }

    #[test]
    fn test_last_page_tokens_are_split_and_trimmed() {
        let config = config_from(&[("LAST_PAGE_TOKENS", " last, end ,,final,")]);
        assert_eq!(config.pagination.last_page_tokens, vec!["last", "end", "final"]);

        let config = config_from(&[("LAST_PAGE_TOKENS", "")]);
        assert!(config.pagination.last_page_tokens.is_empty());
    }

    #[test]
    fn test_unparseable_numbers_fall_back() {
        let config = config_from(&[
            ("SERVER_PORT", "http"),
            ("MAX_PAGE_SIZE", "ten"),
            ("PAGE_SIZE", "-1"),
        ]);
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.pagination.max_page_size, MAX_PAGE_SIZE);
        assert_eq!(config.pagination.default_page_size, Some(DEFAULT_PAGE_SIZE));
    }
}
