mod config;
pub mod database;
pub mod kv;
pub mod persistence;
pub mod share;

pub use config::{Config, PomodoroConfig, ShareConfig, StorageBackend, StorageConfig, TickerConfig};
pub use database::SqliteStore;
pub use kv::{JsonFileStore, KeyValueStore, MemoryStore, QueryStore, RecordLayout};
pub use persistence::{
    clear_countdown, load_countdown, load_pomodoro, save_countdown, save_pomodoro,
    COUNTDOWN_KEY, POMODORO_KEY,
};
pub use share::{decode_share_url, share_url};

use std::path::PathBuf;

use crate::error::StorageError;

/// Returns the data directory, creating it if needed.
///
/// `COUNTDOWN_DATA_DIR` wins when set. Otherwise `~/.config/countdown[-dev]/`,
/// with `COUNTDOWN_ENV=dev` selecting the development directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let dir = match std::env::var_os("COUNTDOWN_DATA_DIR") {
        Some(explicit) => PathBuf::from(explicit),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env =
                std::env::var("COUNTDOWN_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("countdown-dev")
            } else {
                base_dir.join("countdown")
            }
        }
    };

    std::fs::create_dir_all(&dir).map_err(StorageError::DataDir)?;
    Ok(dir)
}
