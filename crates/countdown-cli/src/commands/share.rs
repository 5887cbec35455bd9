use countdown_core::error::Result;
use countdown_core::storage::{decode_share_url, load_countdown, save_countdown, share_url, StorageBackend};
use countdown_core::{Clock, Event, SystemClock};

use crate::common;

pub fn share(base_url: Option<String>, backend: Option<StorageBackend>) -> Result<()> {
    let (config, store) = common::open(backend)?;
    let Some(data) = load_countdown(&store) else {
        common::no_target();
    };

    let base = base_url.unwrap_or(config.share.base_url);
    println!("{}", share_url(&base, &data)?);
    Ok(())
}

/// Links are stored as-is, even when their target has already passed.
pub fn open(url: &str, backend: Option<StorageBackend>) -> Result<()> {
    let Some(data) = decode_share_url(url) else {
        eprintln!("link carries no countdown (needs `name` and `date` parameters)");
        std::process::exit(1);
    };

    let (_, mut store) = common::open(backend)?;
    save_countdown(&mut store, &data)?;
    common::print_json(&Event::TargetSet {
        event_name: data.event_name,
        target: data.target,
        at: SystemClock.now(),
    })
}
