//! Configuration for addressbook

use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::TableLayout;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the address book file
    #[serde(default = "default_book_path")]
    pub book_path: PathBuf,

    /// Width of the name column when listing
    #[serde(default = "default_name_width")]
    pub name_width: usize,

    /// Width of the email column when listing
    #[serde(default = "default_email_width")]
    pub email_width: usize,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default)]
    pub log_level: Option<String>,
}

fn default_book_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("addressbook")
        .join("addressbook.txt")
}

fn default_name_width() -> usize {
    crate::NAME_COL_WIDTH
}

fn default_email_width() -> usize {
    crate::EMAIL_COL_WIDTH
}

impl Default for Config {
    fn default() -> Self {
        Self {
            book_path: default_book_path(),
            name_width: default_name_width(),
            email_width: default_email_width(),
            log_level: None,
        }
    }
}

impl Config {
    /// Load config from an explicit path, then the default locations, then defaults
    pub fn load(path: Option<&PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            return Self::from_file(config_path);
        }

        let candidates = [
            dirs::config_dir().map(|p| p.join("addressbook").join("config.yml")),
            Some(PathBuf::from("addressbook.yml")),
        ];

        match candidates.into_iter().flatten().find(|p| p.exists()) {
            Some(found) => Self::from_file(&found),
            None => Ok(Config::default()),
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).wrap_err_with(|| format!("Failed to read {}", path.display()))?;
        serde_yaml::from_str(&content).wrap_err_with(|| format!("Invalid config in {}", path.display()))
    }

    /// Write this config as YAML
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content).wrap_err_with(|| format!("Failed to write {}", path.display()))
    }

    pub fn layout(&self) -> TableLayout {
        TableLayout {
            name_width: self.name_width,
            email_width: self.email_width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.name_width, 30);
        assert_eq!(config.email_width, 40);
        assert!(config.book_path.ends_with("addressbook/addressbook.txt"));
        assert_eq!(config.layout(), TableLayout::default());
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");
        std::fs::write(&path, "book_path: /tmp/contacts.txt\nname_width: 20\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.book_path, PathBuf::from("/tmp/contacts.txt"));
        assert_eq!(config.name_width, 20);
        assert_eq!(config.email_width, 40);
        assert!(config.log_level.is_none());
    }

    #[test]
    fn test_save_then_load() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");
        let config = Config {
            book_path: temp.path().join("book.txt"),
            name_width: 12,
            email_width: 24,
            log_level: Some("debug".to_string()),
        };

        config.save(&path).unwrap();
        let loaded = Config::load(Some(&path)).unwrap();

        assert_eq!(loaded.book_path, config.book_path);
        assert_eq!(loaded.layout(), config.layout());
        assert_eq!(loaded.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_load_missing_explicit_file_errors() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nope.yml");
        assert!(Config::load(Some(&path)).is_err());
    }
}
