//! `kairos.toml`: static settings read once at startup.
//!
//! ```toml
//! window_mode = "daily"        # or "genesis_tiling" / "genesis"
//! utc_offset_minutes = 120     # local zone used to read HH:MM sunrise input
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use kairos_core::WindowMode;

use crate::error::{Result, StoreError};

pub const CONFIG_FILE: &str = "kairos.toml";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KairosConfig {
    pub window_mode: WindowMode,
    /// Minutes east of UTC for interpreting local sunrise times.
    pub utc_offset_minutes: i64,
}

impl KairosConfig {
    pub fn parse(content: &str) -> Result<Self> {
        let config: KairosConfig = toml::from_str(content)?;
        if config.utc_offset_minutes.abs() > 18 * 60 {
            return Err(StoreError::InvalidData(format!(
                "utc_offset_minutes {} is outside ±18h",
                config.utc_offset_minutes
            )));
        }
        Ok(config)
    }

    /// Load from `path`; a missing file means defaults.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => {
                let config = Self::parse(&content)?;
                tracing::debug!("loaded config from {}: {config:?}", path.display());
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(StoreError::InvalidData(format!(
                "failed to read {}: {e}",
                path.display()
            ))),
        }
    }

    pub fn utc_offset_secs(&self) -> i64 {
        self.utc_offset_minutes * 60
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_default() {
        let config = KairosConfig::parse("").unwrap();
        assert_eq!(config, KairosConfig::default());
        assert_eq!(config.window_mode, WindowMode::Daily);
    }

    #[test]
    fn test_full_config() {
        let config =
            KairosConfig::parse("window_mode = \"genesis_tiling\"\nutc_offset_minutes = -300\n")
                .unwrap();
        assert_eq!(config.window_mode, WindowMode::GenesisTiling);
        assert_eq!(config.utc_offset_secs(), -18_000);
    }

    #[test]
    fn test_genesis_alias() {
        let config = KairosConfig::parse("window_mode = \"genesis\"").unwrap();
        assert_eq!(config.window_mode, WindowMode::GenesisTiling);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            KairosConfig::parse("window_mode = \"weekly\""),
            Err(StoreError::Config(_))
        ));
        assert!(matches!(
            KairosConfig::parse("colour = \"red\""),
            Err(StoreError::Config(_))
        ));
        assert!(matches!(
            KairosConfig::parse("utc_offset_minutes = 5000"),
            Err(StoreError::InvalidData(_))
        ));
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = KairosConfig::load(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, KairosConfig::default());
    }
}
