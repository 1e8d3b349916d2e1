//! Selectable model catalog
//!
//! The host environment decides which models the dropdown offers. The
//! catalog comes from an environment variable so deployments can narrow
//! or extend it without a rebuild; a fixed default list applies when the
//! variable is unset.

/// Environment variable holding a comma-separated model list.
pub const MODELS_ENV_VAR: &str = "CONVERSE_AVAILABLE_MODELS";

/// Default model identifiers offered when the environment is silent.
pub const DEFAULT_MODELS: [&str; 3] = [
    "global.anthropic.claude-sonnet-4-5-20250929-v1:0",
    "global.anthropic.claude-haiku-4-5-20251001-v1:0",
    "qwen.qwen3-coder-480b-a35b-v1:0",
];

/// Models selectable in the UI.
///
/// Reads [`MODELS_ENV_VAR`] (comma separated, entries trimmed, empties
/// dropped) and falls back to [`DEFAULT_MODELS`] when the variable is
/// unset or contains nothing usable.
pub fn available_models() -> Vec<String> {
    match std::env::var(MODELS_ENV_VAR) {
        Ok(raw) => {
            let models = parse_model_list(&raw);
            if models.is_empty() {
                default_models()
            } else {
                models
            }
        }
        Err(_) => default_models(),
    }
}

fn default_models() -> Vec<String> {
    DEFAULT_MODELS.iter().map(|m| m.to_string()).collect()
}

fn parse_model_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_splits_and_trims() {
        let models = parse_model_list("a, b ,c");
        assert_eq!(models, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_parse_drops_empty_entries() {
        let models = parse_model_list("a,,  ,b");
        assert_eq!(models, vec!["a", "b"]);
    }

    #[test]
    fn test_parse_all_blank_is_empty() {
        assert!(parse_model_list(" , ,").is_empty());
        assert!(parse_model_list("").is_empty());
    }

    #[test]
    fn test_defaults_are_three_models() {
        assert_eq!(DEFAULT_MODELS.len(), 3);
        assert_eq!(default_models().len(), 3);
    }
}
