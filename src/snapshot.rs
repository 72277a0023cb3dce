//! Point-in-time statistics snapshot
//!
//! An ordered list of human-readable labels and formatted values. Order is
//! part of the contract: reporting sinks display entries as they come.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

pub mod labels {
    pub const TOTAL_GENERATED: &str = "Total Alphas Generated";
    pub const TOTAL_CLOSED: &str = "Total Alphas Closed";
    pub const TOTAL_ANALYSIS_COMPLETED: &str = "Total Alphas Analysis Completed";
    pub const LONG_COUNT: &str = "Long Alpha Count";
    pub const SHORT_COUNT: &str = "Short Alpha Count";
    pub const LONG_SHORT_RATIO: &str = "Long/Short Ratio";
    pub const TOTAL_ESTIMATED_VALUE: &str = "Total Estimated Alpha Value";
    pub const MEAN_ESTIMATED_VALUE: &str = "Mean Population Estimated Alpha Value";
    pub const MEAN_DIRECTION: &str = "Mean Population Direction";
    pub const MEAN_MAGNITUDE: &str = "Mean Population Magnitude";
    pub const ROLLING_DIRECTION: &str = "Rolling Averaged Population Direction";
    pub const ROLLING_MAGNITUDE: &str = "Rolling Averaged Population Magnitude";

    /// Display order
    pub const ALL: [&str; 12] = [
        TOTAL_GENERATED,
        TOTAL_CLOSED,
        TOTAL_ANALYSIS_COMPLETED,
        LONG_COUNT,
        SHORT_COUNT,
        LONG_SHORT_RATIO,
        TOTAL_ESTIMATED_VALUE,
        MEAN_ESTIMATED_VALUE,
        MEAN_DIRECTION,
        MEAN_MAGNITUDE,
        ROLLING_DIRECTION,
        ROLLING_MAGNITUDE,
    ];
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    entries: Vec<(&'static str, String)>,
}

impl Snapshot {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, label: &'static str, value: String) {
        self.entries.push((label, value));
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, v)| v.as_str())
    }

    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(l, _)| *l)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries.iter().map(|(l, v)| (*l, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Snapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, value) in &self.entries {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.labels().map(str::len).max().unwrap_or(0);
        for (label, value) in self.iter() {
            writeln!(f, "{:<width$}  {}", label, value, width = width)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_in_insertion_order() {
        let mut snapshot = Snapshot::default();
        snapshot.push(labels::SHORT_COUNT, "2".to_string());
        snapshot.push(labels::LONG_COUNT, "5".to_string());

        let json = serde_json::to_string(&snapshot).unwrap();
        assert_eq!(json, r#"{"Short Alpha Count":"2","Long Alpha Count":"5"}"#);
    }

    #[test]
    fn test_get_by_label() {
        let mut snapshot = Snapshot::default();
        snapshot.push(labels::LONG_SHORT_RATIO, "100.00%".to_string());
        assert_eq!(snapshot.get("Long/Short Ratio"), Some("100.00%"));
        assert_eq!(snapshot.get("Missing"), None);
    }

    #[test]
    fn test_display_one_line_per_entry() {
        let mut snapshot = Snapshot::default();
        snapshot.push(labels::TOTAL_GENERATED, "10".to_string());
        snapshot.push(labels::TOTAL_CLOSED, "7".to_string());
        let text = snapshot.to_string();
        assert_eq!(text.lines().count(), 2);
        assert!(text.starts_with("Total Alphas Generated  10"));
    }
}
