use std::path::{Path, PathBuf};
use std::{env, fs};

use kairos_core::ensure_offset;

use crate::config::{CONFIG_FILE, KairosConfig};
use crate::error::{Result, StoreError};
use crate::store::Store;

pub const DB_FILE: &str = "kairos.db";

/// Default base directory for all kairos state.
pub fn default_base_dir() -> PathBuf {
    dirs_home().join(".kairos")
}

fn dirs_home() -> PathBuf {
    env::var("HOME")
        .or_else(|_| env::var("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
}

/// The data directory: configuration plus the offset database.
///
/// ```text
/// ~/.kairos/
/// ├── kairos.toml
/// └── kairos.db
/// ```
pub struct KairosHome {
    config: KairosConfig,
    store: Store,
}

impl KairosHome {
    /// Open the data directory, creating it as needed.
    /// `base_dir`: override the base directory (for testing).
    pub fn open(base_dir: Option<&Path>) -> Result<Self> {
        let base = base_dir.map(PathBuf::from).unwrap_or_else(default_base_dir);
        fs::create_dir_all(&base).map_err(|e| {
            StoreError::InvalidData(format!("failed to create {}: {e}", base.display()))
        })?;

        let config = KairosConfig::load(&base.join(CONFIG_FILE))?;
        let mut store = Store::open(&base.join(DB_FILE))?;
        ensure_offset(&mut store)?;
        tracing::debug!("opened kairos home at {}", base.display());

        Ok(Self { config, store })
    }

    pub fn config(&self) -> &KairosConfig {
        &self.config
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut Store {
        &mut self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kairos_core::{SUNRISE_OFFSET_KEY, WindowMode, read_offset, set_offset_from_local_time};
    use tempfile::TempDir;

    #[test]
    fn test_directory_creation() {
        let dir = TempDir::new().unwrap();
        let base = dir.path().join("nested").join("kairos");
        let home = KairosHome::open(Some(&base)).unwrap();
        assert!(base.join(DB_FILE).exists());
        assert_eq!(home.config(), &KairosConfig::default());
        assert_eq!(
            home.store().get_metadata(SUNRISE_OFFSET_KEY).unwrap().as_deref(),
            Some("0")
        );
    }

    #[test]
    fn test_reads_config() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            "window_mode = \"genesis\"\nutc_offset_minutes = 60\n",
        )
        .unwrap();
        let home = KairosHome::open(Some(dir.path())).unwrap();
        assert_eq!(home.config().window_mode, WindowMode::GenesisTiling);
        assert_eq!(home.config().utc_offset_secs(), 3_600);
    }

    #[test]
    fn test_bad_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "window_mode = 3").unwrap();
        assert!(KairosHome::open(Some(dir.path())).is_err());
    }

    #[test]
    fn test_offset_shared_between_opens() {
        let dir = TempDir::new().unwrap();
        {
            let mut home = KairosHome::open(Some(dir.path())).unwrap();
            set_offset_from_local_time(home.store_mut(), "07:00", 0).unwrap();
        }
        let home = KairosHome::open(Some(dir.path())).unwrap();
        assert_eq!(read_offset(home.store()).whole_seconds(), 25_200);
    }
}
