//! Timestamped statistics report handed to telemetry sinks

use crate::snapshot::Snapshot;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct StatisticsReport {
    pub generated_at: String, // RFC 3339, UTC
    pub account_currency: String,
    pub rejected_events: u64,
    pub statistics: Snapshot,
}

impl StatisticsReport {
    pub fn new(account_currency: &str, rejected_events: u64, statistics: Snapshot) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            account_currency: account_currency.to_string(),
            rejected_events,
            statistics,
        }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
