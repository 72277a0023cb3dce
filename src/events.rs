//! Alpha lifecycle events and the JSON-lines event source
//!
//! One event per line, e.g.
//! `{"event":"closed","direction":-1.0,"estimated_value":"12.5"}`.
//! Blank lines and lines starting with `#` are skipped.

use crate::score::Score;
use anyhow::{Context, Result};
use log::info;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AlphaEvent {
    Generated,
    Closed {
        direction: f64,
        estimated_value: Decimal,
    },
    AnalysisCompleted {
        score: Score,
    },
}

pub fn parse_events<R: BufRead>(reader: R) -> Result<Vec<AlphaEvent>> {
    let mut events = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read event line {}", index + 1))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let event: AlphaEvent = serde_json::from_str(trimmed)
            .with_context(|| format!("Malformed alpha event on line {}", index + 1))?;
        events.push(event);
    }
    Ok(events)
}

pub fn load_events_from_file(path: &str) -> Result<Vec<AlphaEvent>> {
    let file = File::open(path).with_context(|| format!("Failed to open event file {}", path))?;
    let events = parse_events(BufReader::new(file))?;
    info!("Loaded {} alpha events from {}", events.len(), path);
    Ok(events)
}
