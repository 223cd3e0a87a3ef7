use crate::error::{MeasureError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TaggerConfig {
    // Single output per input when true, every candidate otherwise
    #[serde(default = "default_deterministic")]
    pub deterministic: bool,

    // Unit table to load instead of the bundled one
    #[serde(default)]
    pub lexicon: Option<PathBuf>,

    // Longest run of whitespace-separated words tried as one measure
    #[serde(default = "default_max_window")]
    pub max_window: usize,

    // Extra raw spelling -> unit name pairs
    #[serde(default)]
    pub extra_units: HashMap<String, String>,
}

fn default_deterministic() -> bool {
    true
}

fn default_max_window() -> usize {
    4
}

impl Default for TaggerConfig {
    fn default() -> Self {
        Self {
            deterministic: default_deterministic(),
            lexicon: None,
            max_window: default_max_window(),
            extra_units: HashMap::new(),
        }
    }
}

impl TaggerConfig {
    /// Load from a TOML file. A relative `lexicon` path is resolved
    /// against the config file's directory.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| MeasureError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::load_from_str(&content)?;

        if let (Some(lexicon), Some(dir)) = (config.lexicon.as_ref(), path.parent()) {
            if lexicon.is_relative() {
                config.lexicon = Some(dir.join(lexicon));
            }
        }

        Ok(config)
    }

    pub fn load_from_str(content: &str) -> Result<Self> {
        let config: TaggerConfig = toml::from_str(content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_from_empty_document() {
        let config = TaggerConfig::load_from_str("").unwrap();
        assert!(config.deterministic);
        assert_eq!(config.max_window, 4);
        assert!(config.lexicon.is_none());
        assert!(config.extra_units.is_empty());
    }

    #[test]
    fn test_load_from_str() {
        let config = TaggerConfig::load_from_str(
            r#"
deterministic = false
max_window = 2

[extra_units]
st = "stone"
"#,
        )
        .unwrap();
        assert!(!config.deterministic);
        assert_eq!(config.max_window, 2);
        assert_eq!(config.extra_units.get("st").map(String::as_str), Some("stone"));
    }

    #[test]
    fn test_invalid_config() {
        let result = TaggerConfig::load_from_str("deterministic = \"yes\"");
        assert!(matches!(result, Err(MeasureError::ConfigParse(_))));
    }

    #[test]
    fn test_relative_lexicon_resolved_against_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("tagger.toml");
        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "lexicon = \"units.tsv\"").unwrap();

        let config = TaggerConfig::load_from_file(&config_path).unwrap();
        assert_eq!(config.lexicon, Some(dir.path().join("units.tsv")));
    }

    #[test]
    fn test_missing_config_file() {
        let result = TaggerConfig::load_from_file("/nonexistent/tagger.toml");
        assert!(matches!(result, Err(MeasureError::ConfigIo { .. })));
    }
}
