//! Snippet-related custom validators.

use validator::ValidationError;

use crate::constants::{LANGUAGE_CHOICES, STYLE_CHOICES};
use crate::validators::{validate_choice, validate_not_blank};

/// Custom validator for the code field. Whitespace-only code counts as blank.
pub fn validate_code(code: &str) -> Result<(), ValidationError> {
    validate_not_blank(code)
}

/// Custom validator for the language field.
pub fn validate_language(language: &str) -> Result<(), ValidationError> {
    validate_choice(language, LANGUAGE_CHOICES)
}

/// Custom validator for the style field.
pub fn validate_style(style: &str) -> Result<(), ValidationError> {
    validate_choice(style, STYLE_CHOICES)
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use validator::Validate;

    use crate::errors::ApiError;
    use crate::models::SnippetRequest;
    use crate::validators::validation_errors_to_api_error;

    fn field_errors(body: serde_json::Value) -> crate::errors::FieldErrors {
        let request: SnippetRequest = serde_json::from_value(body).unwrap();
        match validation_errors_to_api_error(request.validate().unwrap_err()) {
            ApiError::ValidationError { errors, .. } => errors,
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_defaults_fill_optional_fields() {
        let request: SnippetRequest = serde_json::from_value(json!({"code": "x = 1"})).unwrap();
        assert!(request.validate().is_ok());

        let data = request.into_new_snippet();
        assert_eq!(data.title, "");
        assert_eq!(data.code, "x = 1");
        assert!(!data.linenos);
        assert_eq!(data.language, "python");
        assert_eq!(data.style, "friendly");
    }

    #[test]
    fn test_missing_code_is_named() {
        let errors = field_errors(json!({"title": "no code"}));
        assert_eq!(errors["code"], vec!["This field is required."]);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_blank_code_is_rejected() {
        let errors = field_errors(json!({"code": ""}));
        assert_eq!(errors["code"], vec!["This field may not be blank."]);

        let errors = field_errors(json!({"code": "   \n\t"}));
        assert_eq!(errors["code"], vec!["This field may not be blank."]);
    }

    #[test]
    fn test_code_with_surrounding_whitespace_is_kept() {
        let request: SnippetRequest =
            serde_json::from_value(json!({"code": "\n  x = 1\n"})).unwrap();
        assert!(request.validate().is_ok());
        assert_eq!(request.into_new_snippet().code, "\n  x = 1\n");
    }

    #[test]
    fn test_long_title_is_rejected() {
        let errors = field_errors(json!({"code": "x", "title": "t".repeat(101)}));
        assert!(errors.contains_key("title"));

        let ok: SnippetRequest =
            serde_json::from_value(json!({"code": "x", "title": "t".repeat(100)})).unwrap();
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_unknown_choices_are_rejected() {
        let errors = field_errors(json!({"code": "x", "language": "cobol", "style": "neon"}));
        assert_eq!(errors["language"], vec!["\"cobol\" is not a valid choice."]);
        assert_eq!(errors["style"], vec!["\"neon\" is not a valid choice."]);
    }
}
