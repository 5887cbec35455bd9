//! Helpers shared by the CLI commands.

use countdown_core::error::Result;
use countdown_core::storage::{JsonFileStore, SqliteStore, StorageBackend};
use countdown_core::{Config, KeyValueStore};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Log to stderr, filtered by `COUNTDOWN_LOG` (default `warn`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("COUNTDOWN_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Configuration plus the store it (or `--backend`) selects.
pub fn open(backend: Option<StorageBackend>) -> Result<(Config, Box<dyn KeyValueStore>)> {
    let config = Config::load()?;
    let backend = backend.unwrap_or(config.storage.backend);
    let store: Box<dyn KeyValueStore> = match backend {
        StorageBackend::File => Box::new(JsonFileStore::open_default()?),
        StorageBackend::Sqlite => Box::new(SqliteStore::open()?),
    };
    tracing::debug!(?backend, "store opened");
    Ok((config, store))
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Bail out with exit code 1 when there is nothing to show.
pub fn no_target() -> ! {
    eprintln!("no countdown set; use `countdown set <date> --name <event>`");
    std::process::exit(1);
}
