use alpha_stats::config::StatisticsConfig;
use alpha_stats::events::{AlphaEvent, load_events_from_file};
use alpha_stats::report::StatisticsReport;
use alpha_stats::statistics::{RuntimeStatistics, SharedRuntimeStatistics};

use anyhow::{Result, anyhow};
use log::{debug, info, warn};
use std::env;
use tokio::sync::mpsc;
use tokio::time::{Duration, interval};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logger with default info level if RUST_LOG not set
    if std::env::var("RUST_LOG").is_err() {
        unsafe { std::env::set_var("RUST_LOG", "info"); }
    }
    env_logger::init();
    info!("Starting Alpha Runtime Statistics");

    // Config file first, optional event file second
    let args: Vec<String> = env::args().collect();
    let config_file = if args.len() > 1 {
        args[1].as_str()
    } else {
        "config.json"
    };

    info!("Loading configuration from: {}", config_file);
    let mut config = StatisticsConfig::load_from_file(config_file)?;
    if let Some(events_path) = args.get(2) {
        config.events_path = Some(events_path.clone());
    }

    let events_path = config
        .events_path
        .clone()
        .ok_or_else(|| anyhow!("No event file given (config events_path or second argument)"))?;
    let currency_symbol = config.currency_symbol()?;
    let rounding = config.smart_rounding();

    let statistics =
        SharedRuntimeStatistics::new(RuntimeStatistics::with_rolling_window(config.rolling_window));

    // Pipeline side: replay lifecycle events one at a time
    let (tx, mut rx) = mpsc::channel::<AlphaEvent>(1000);
    let events = load_events_from_file(&events_path)?;
    tokio::spawn(async move {
        for event in events {
            if tx.send(event).await.is_err() {
                break;
            }
        }
    });

    let mut report_interval = interval(Duration::from_millis(config.report_interval_ms.max(1)));
    let mut applied: u64 = 0;
    let mut rejected: u64 = 0;

    loop {
        tokio::select! {
            maybe_event = rx.recv() => {
                match maybe_event {
                    Some(event) => {
                        if statistics.update(&event).is_ok() {
                            applied += 1;
                        } else {
                            rejected += 1;
                        }
                    }
                    None => break,
                }
            }
            _ = report_interval.tick() => {
                let snapshot = statistics.snapshot_with(currency_symbol, &rounding);
                info!("=== Alpha Runtime Statistics ===\n{}", snapshot);
                debug!("Applied {} events, rejected {}", applied, rejected);
            }
        }
    }

    if rejected > 0 {
        warn!("{} alpha events rejected during replay", rejected);
    }
    info!("Replay complete: {} events applied", applied);

    let report = StatisticsReport::new(
        &config.account_currency,
        rejected,
        statistics.snapshot_with(currency_symbol, &rounding),
    );
    println!("{}", report.to_json_pretty()?);

    Ok(())
}
