//! Store configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where the document lives and how it is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path of the JSON document.
    pub path: PathBuf,
    /// Write indented JSON instead of the compact form.
    #[serde(default)]
    pub pretty: bool,
}

impl StoreConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            pretty: false,
        }
    }

    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Sibling file the document is staged in before being renamed into place.
    pub(crate) fn staging_path(&self) -> PathBuf {
        staging_path_for(&self.path)
    }
}

fn staging_path_for(path: &Path) -> PathBuf {
    match path.file_name() {
        Some(name) => {
            let mut staged = name.to_os_string();
            staged.push(".tmp");
            path.with_file_name(staged)
        }
        None => path.with_extension("tmp"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staging_path_appends_suffix() {
        let config = StoreConfig::new("/data/questions.json");
        assert_eq!(config.staging_path(), PathBuf::from("/data/questions.json.tmp"));
    }

    #[test]
    fn pretty_defaults_off() {
        let config: StoreConfig = serde_json::from_str(r#"{"path":"q.json"}"#).unwrap();
        assert!(!config.pretty);
        assert!(config.with_pretty(true).pretty);
    }
}
