//! TOML configuration for the command-line front end.
//!
//! ```toml
//! lang = "en"
//! format = "json"
//!
//! [animation]
//! enabled = true
//! step_ms = 120
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::i18n::Lang;
use crate::reveal::Timing;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub lang: Lang,
    pub format: OutputFormat,
    pub animation: AnimationConfig,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub enabled: bool,
    #[serde(flatten)]
    pub timing: Timing,
}

impl Config {
    /// Loads a configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content).map_err(|e| match e {
            Error::Config { message } => Error::Config {
                message: format!("{}: {}", path.as_ref().display(), message),
            },
            other => other,
        })
    }

    /// Parses a configuration; missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config {
            message: format!("TOML parsing error: {}", e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(Config::default(), config);
        assert_eq!(Lang::Zh, config.lang);
        assert_eq!(OutputFormat::Text, config.format);
        assert!(!config.animation.enabled);
        assert_eq!(Timing::default(), config.animation.timing);
        assert_eq!(500, config.animation.timing.initial_ms);
    }

    #[test]
    fn partial_override() {
        let config = Config::from_toml_str(
            r#"
            lang = "en"
            format = "json"

            [animation]
            enabled = true
            step_ms = 120
            "#,
        )
        .unwrap();
        assert_eq!(Lang::En, config.lang);
        assert_eq!(OutputFormat::Json, config.format);
        assert!(config.animation.enabled);
        assert_eq!(120, config.animation.timing.step_ms);
        assert_eq!(300, config.animation.timing.highlight_ms);
    }

    #[test]
    fn rejects_bad_values() {
        for content in ["lang = \"fr\"", "format = \"xml\"", "colour = true"] {
            assert!(
                matches!(Config::from_toml_str(content), Err(Error::Config { .. })),
                "{content}"
            );
        }
    }

    #[test]
    fn from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "lang = \"en\"").unwrap();
        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(Lang::En, config.lang);

        assert!(matches!(
            Config::from_file(file.path().with_extension("missing")),
            Err(Error::Io(_))
        ));
    }
}
