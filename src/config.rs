use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ConfigError;
use crate::scrabble::DEFAULT_BOARD_SIZE;

/// Application configuration, loadable from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Number of rows on the board
    pub rows: usize,
    /// Number of columns on the board
    pub cols: usize,
    /// Newline delimited word list used to judge moves
    pub dictionary: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            rows: DEFAULT_BOARD_SIZE,
            cols: DEFAULT_BOARD_SIZE,
            dictionary: PathBuf::from("words.txt"),
        }
    }
}

impl AppConfig {
    /// Load configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies values given on the command line over whatever was loaded.
    pub fn with_overrides(
        mut self,
        rows: Option<usize>,
        cols: Option<usize>,
        dictionary: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        if let Some(rows) = rows {
            self.rows = rows;
        }
        if let Some(cols) = cols {
            self.cols = cols;
        }
        if let Some(dictionary) = dictionary {
            self.dictionary = dictionary;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 {
            return Err(ConfigError::Validation(
                "rows must be a positive integer".to_string(),
            ));
        }
        if self.cols == 0 {
            return Err(ConfigError::Validation(
                "cols must be a positive integer".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert_eq!(config.rows, 19);
        assert_eq!(config.cols, 19);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"rows": 10}}"#).unwrap();
        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.rows, 10);
        assert_eq!(config.cols, 19);
        assert_eq!(config.dictionary, PathBuf::from("words.txt"));
    }

    #[test]
    fn test_zero_rows_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"rows": 0, "cols": 5}}"#).unwrap();
        assert!(matches!(
            AppConfig::load(file.path()),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_bad_json_and_missing_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "rows = 3").unwrap();
        assert!(matches!(AppConfig::load(file.path()), Err(ConfigError::Parse(_))));

        let missing = Path::new("/no/such/pseudo-scrabble.json");
        assert!(matches!(AppConfig::load(missing), Err(ConfigError::FileRead { .. })));
        assert_eq!(AppConfig::load_or_default(missing).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::default()
            .with_overrides(Some(7), None, Some(PathBuf::from("en.txt")))
            .unwrap();
        assert_eq!((config.rows, config.cols), (7, 19));
        assert_eq!(config.dictionary, PathBuf::from("en.txt"));

        assert!(AppConfig::default().with_overrides(None, Some(0), None).is_err());
    }
}
