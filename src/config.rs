use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// Default interchange file, kept for compatibility with exports made by
/// earlier versions of this tool.
pub const DEFAULT_EXPORT_FILE: &str = "eventos.json";

#[derive(Deserialize, Debug, Default)]
pub struct Config {
    /// Where `x` (export) writes and what the import prompt suggests.
    pub export_path: Option<String>,
}

impl Config {
    pub fn get_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "desde", "desde")
            .map(|proj| proj.config_dir().join("config.toml"))
    }

    /// Load from the config dir. A missing file is not an error, a file
    /// that does not parse is.
    pub fn load() -> Result<Self> {
        let Some(path) = Self::get_path() else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Could not read config at {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Could not parse config at {}", path.display()))?;
        Ok(config)
    }

    pub fn export_path(&self) -> String {
        self.export_path
            .clone()
            .unwrap_or_else(|| DEFAULT_EXPORT_FILE.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_path_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.export_path(), "eventos.json");
    }

    #[test]
    fn export_path_from_toml() {
        let cfg: Config = toml::from_str("export_path = \"/tmp/backup.json\"").unwrap();
        assert_eq!(cfg.export_path(), "/tmp/backup.json");
    }

    #[test]
    fn empty_toml_is_all_defaults() {
        let cfg: Config = toml::from_str("").unwrap();
        assert!(cfg.export_path.is_none());
    }
}
