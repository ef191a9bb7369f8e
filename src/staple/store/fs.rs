use super::ConfigStore;
use crate::config::GenerationConfig;
use crate::error::{Result, StapleError};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{debug, warn};

const CONFIG_FILENAME: &str = "config.json";

/// Stores options as pretty-printed JSON in `<dir>/config.json`.
pub struct FileConfigStore {
    dir: PathBuf,
}

impl FileConfigStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(CONFIG_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).map_err(StapleError::Io)?;
        }
        Ok(())
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Option<GenerationConfig> {
        let path = self.path();
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return None,
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "could not read stored options, using defaults"
                );
                return None;
            }
        };

        match serde_json::from_str(&content) {
            Ok(config) => {
                debug!(path = %path.display(), "loaded stored options");
                Some(config)
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring malformed stored options");
                None
            }
        }
    }

    fn save(&mut self, config: &GenerationConfig) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(config).map_err(StapleError::Serialization)?;
        fs::write(self.path(), content).map_err(StapleError::Io)?;
        debug!(path = %self.path().display(), "saved options");
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        match fs::remove_file(self.path()) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StapleError::Io(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::JoinMode;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_config() {
        let temp = tempdir().unwrap();
        let store = FileConfigStore::new(temp.path().join("nowhere"));
        assert!(store.load().is_none());
    }

    #[test]
    fn test_save_and_load() {
        let temp = tempdir().unwrap();
        let mut store = FileConfigStore::new(temp.path().join("nested"));

        let config = GenerationConfig {
            min_words: 5,
            join_mode: JoinMode::Fixed,
            separator: " ".to_string(),
            ..GenerationConfig::default()
        };
        store.save(&config).unwrap();

        assert!(store.path().exists());
        assert_eq!(store.load(), Some(config));
    }

    #[test]
    fn test_malformed_file_is_treated_as_absent() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), "{not json").unwrap();
        let store = FileConfigStore::new(temp.path());
        assert!(store.load().is_none());
    }

    #[test]
    fn test_malformed_fields_are_coerced() {
        let temp = tempdir().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILENAME),
            r#"{"min_words": "many", "separator": "."}"#,
        )
        .unwrap();
        let config = FileConfigStore::new(temp.path()).load().unwrap();
        assert_eq!(config.min_words, 3);
        assert_eq!(config.separator, ".");
    }

    #[test]
    fn test_out_of_range_fields_are_coerced() {
        let temp = tempdir().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILENAME),
            r#"{"min_words": 1e30, "number_pool_size": 18446744073709551615}"#,
        )
        .unwrap();
        let config = FileConfigStore::new(temp.path()).load().unwrap();
        assert_eq!(config.min_words, 3);
        assert_eq!(config.number_pool_size, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_clear_removes_file() {
        let temp = tempdir().unwrap();
        let mut store = FileConfigStore::new(temp.path());
        store.save(&GenerationConfig::default()).unwrap();
        store.clear().unwrap();
        assert!(!store.path().exists());
        assert!(store.load().is_none());

        // Clearing twice is fine.
        store.clear().unwrap();
    }
}
