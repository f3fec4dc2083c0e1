use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default = "default_true")]
    pub show_nested_types: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            show_nested_types: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// A field carrying any of these is considered encapsulated.
    #[serde(default = "default_encapsulating")]
    pub encapsulating_modifiers: Vec<String>,
    /// Report abstract and interface methods as having unused parameters.
    #[serde(default = "default_true")]
    pub flag_bodiless_methods: bool,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            encapsulating_modifiers: default_encapsulating(),
            flag_bodiless_methods: true,
        }
    }
}

const fn default_true() -> bool { true }

fn default_encapsulating() -> Vec<String> {
    vec!["final".into(), "private".into()]
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclScanToml {
    #[serde(default)]
    pub rules: RuleConfig,
    #[serde(default)]
    pub preferences: Preferences,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub rules: RuleConfig,
    pub preferences: Preferences,
}
