// Configuration type definitions

use serde::Deserialize;

use crate::documents::DEFAULT_DOCUMENT_NAME;

pub const DEFAULT_PLACEHOLDER: &str = "Start typing here...";

/// Editor configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EditorConfig {
    /// Tab name for documents not opened from a file
    #[serde(default = "default_name")]
    pub default_name: String,
    /// Text shown in an empty editor
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

fn default_name() -> String {
    DEFAULT_DOCUMENT_NAME.to_string()
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

impl Default for EditorConfig {
    fn default() -> Self {
        EditorConfig {
            default_name: default_name(),
            placeholder: default_placeholder(),
        }
    }
}

/// Statistics configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatsConfig {
    #[serde(default = "default_show_most_common_word")]
    pub show_most_common_word: bool,
}

fn default_show_most_common_word() -> bool {
    true
}

impl Default for StatsConfig {
    fn default() -> Self {
        StatsConfig {
            show_most_common_word: true,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default)]
    pub stats: StatsConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // Missing sections and fields fall back to defaults
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_missing_fields_use_defaults(
            include_editor_section in prop::bool::ANY,
            include_name_field in prop::bool::ANY,
            include_stats_section in prop::bool::ANY
        ) {
            let mut toml_content = String::new();
            if include_editor_section {
                toml_content.push_str("[editor]\n");
                if include_name_field {
                    toml_content.push_str("default_name = \"Draft\"\n");
                }
            }
            if include_stats_section {
                toml_content.push_str("[stats]\n");
            }

            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok(), "Failed to parse config with missing fields");
            let config = config.unwrap();

            if include_editor_section && include_name_field {
                prop_assert_eq!(config.editor.default_name.as_str(), "Draft");
            } else {
                prop_assert_eq!(config.editor.default_name.as_str(), DEFAULT_DOCUMENT_NAME);
            }
            prop_assert_eq!(config.editor.placeholder.as_str(), DEFAULT_PLACEHOLDER);
            prop_assert!(config.stats.show_most_common_word);
        }
    }

    // Any boolean is accepted for stats.show_most_common_word
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_valid_show_most_common_word(show: bool) {
            let toml_content = format!("[stats]\nshow_most_common_word = {}\n", show);
            let config: Result<Config, _> = toml::from_str(&toml_content);

            prop_assert!(config.is_ok());
            prop_assert_eq!(config.unwrap().stats.show_most_common_word, show);
        }
    }

    #[test]
    fn test_config_default_values() {
        let config = Config::default();
        assert_eq!(config.editor.default_name, "New File");
        assert_eq!(config.editor.placeholder, "Start typing here...");
        assert!(config.stats.show_most_common_word);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[editor]
default_name = "Untitled"
placeholder = "Write something"

[stats]
show_most_common_word = false
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.editor.default_name, "Untitled");
        assert_eq!(config.editor.placeholder, "Write something");
        assert!(!config.stats.show_most_common_word);
    }

    #[test]
    fn test_wrong_type_fails_to_parse() {
        let toml = "[stats]\nshow_most_common_word = \"yes\"";
        let result: Result<Config, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_sections_are_ignored() {
        let toml = "[theme]\nname = \"dark\"\n";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config, Config::default());
    }
}
