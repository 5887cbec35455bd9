use clap::Args;
use countdown_core::error::Result;
use countdown_core::storage::{clear_countdown, load_countdown, save_countdown, StorageBackend};
use countdown_core::{parse_target, Clock, Countdown, CountdownData, Event, SystemClock};

use crate::common;

#[derive(Args)]
pub struct SetArgs {
    /// Target: RFC 3339, `YYYY-MM-DD HH:MM[:SS]` (local) or `YYYY-MM-DD`
    pub date: String,
    /// Event name shown above the countdown
    #[arg(long, short)]
    pub name: String,
    /// Keep seconds instead of rounding the target down to the minute
    #[arg(long)]
    pub keep_seconds: bool,
}

pub fn set(args: SetArgs, backend: Option<StorageBackend>) -> Result<()> {
    let (_, mut store) = common::open(backend)?;
    let now = SystemClock.now();

    let mut target = parse_target(&args.date)?;
    if !args.keep_seconds {
        target = target.truncate_to_minute();
    }
    let data = CountdownData::new(&args.name, target, now)?;
    save_countdown(&mut store, &data)?;

    common::print_json(&Event::TargetSet {
        event_name: data.event_name,
        target: data.target,
        at: now,
    })
}

pub fn status(backend: Option<StorageBackend>) -> Result<()> {
    let (config, store) = common::open(backend)?;
    let Some(data) = load_countdown(&store) else {
        common::no_target();
    };

    let snapshot = Countdown::new(data, config.display).snapshot(SystemClock.now());
    common::print_json(&snapshot)
}

pub fn clear(backend: Option<StorageBackend>) -> Result<()> {
    let (_, mut store) = common::open(backend)?;
    clear_countdown(&mut store)?;
    common::print_json(&Event::TargetCleared {
        at: SystemClock.now(),
    })
}
