use std::io::Write;

use countdown_core::error::Result;
use countdown_core::storage::{load_countdown, StorageBackend};
use countdown_core::{Clock, Countdown, CountdownSnapshot, Event, Progress, SystemClock, Ticker};

use crate::common;

/// Widest row of gauges drawn before collapsing the rest into `+N`.
const MAX_GAUGES: usize = 30;

pub fn run(json: bool, backend: Option<StorageBackend>) -> Result<()> {
    let (config, store) = common::open(backend)?;
    let Some(data) = load_countdown(&store) else {
        common::no_target();
    };
    drop(store);

    let countdown = Countdown::new(data.clone(), config.display);
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let finished = runtime.block_on(async move {
        let ticker = Ticker::spawn(countdown, SystemClock, config.ticker, move |snapshot| {
            if json {
                match serde_json::to_string(&Event::Tick(snapshot.clone())) {
                    Ok(line) => println!("{line}"),
                    Err(e) => tracing::warn!(error = %e, "failed to encode tick"),
                }
            } else {
                print!("\r\x1b[2K{}", render_line(snapshot));
                let _ = std::io::stdout().flush();
            }
        });

        // Leaving this select on Ctrl-C drops the ticker, which aborts it.
        tokio::select! {
            joined = ticker.join() => joined.map(|()| true),
            _ = tokio::signal::ctrl_c() => Ok(false),
        }
    })?;

    if !json {
        println!();
    }
    if finished {
        let event = Event::CountdownFinished {
            event_name: data.event_name,
            target: data.target,
            at: SystemClock.now(),
        };
        if json {
            println!("{}", serde_json::to_string(&event)?);
        } else {
            println!("Time's up!");
        }
    }
    Ok(())
}

fn gauge(progress: Progress) -> char {
    match progress.value() {
        p if p <= 0.0 => '○',
        p if p < 0.375 => '◔',
        p if p < 0.625 => '◑',
        p if p < 1.0 => '◕',
        _ => '●',
    }
}

/// `Launch  03:12 Hours  ◑●●`
fn render_line(snapshot: &CountdownSnapshot) -> String {
    let total = snapshot.indicators().len();
    let mut gauges: String = snapshot
        .indicators()
        .take(MAX_GAUGES)
        .map(|indicator| gauge(indicator.progress))
        .collect();
    if total > MAX_GAUGES {
        gauges.push_str(&format!(" +{}", total - MAX_GAUGES));
    }
    format!(
        "{}  {} {}  {}",
        snapshot.event_name, snapshot.text, snapshot.display.label, gauges
    )
}
