mod config;
pub mod database;
pub mod memory;
pub mod migrations;

pub use config::{
    ChatConfig, Config, Currency, DisplayConfig, NotificationsConfig, ProgressFormat, Theme,
};
pub use database::Database;
pub use memory::MemoryStore;

use std::path::PathBuf;

use crate::addiction::Addiction;
use crate::error::{ConfigError, Result};

/// Persistence port for addiction records.
///
/// Implementations keep records in creation order and store whole records;
/// there is no partial update.
pub trait AddictionStore {
    /// All records, oldest first.
    fn load_all(&self) -> Result<Vec<Addiction>>;

    /// Insert or replace the record with `addiction.id`.
    fn upsert(&mut self, addiction: &Addiction) -> Result<()>;

    /// Remove a record. Returns `false` if no record had that id.
    fn delete(&mut self, id: &str) -> Result<bool>;
}

/// Returns the data directory, creating it if needed.
///
/// `CLEANSLATE_DATA_DIR` wins when set. Otherwise `~/.config/cleanslate`, or
/// `~/.config/cleanslate-dev` when `CLEANSLATE_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("CLEANSLATE_DATA_DIR") {
        Some(custom) => PathBuf::from(custom),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("CLEANSLATE_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("cleanslate-dev")
            } else {
                base_dir.join("cleanslate")
            }
        }
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| ConfigError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
