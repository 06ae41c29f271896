//! Metric catalog for the WeChat engagement export.
//!
//! Every selectable series in the dashboard is one of the nine numeric columns
//! of the export. A metric has three names: a stable ASCII key used in query
//! strings and JSON, the CSV header it is read from, and the label shown in the
//! dropdown and hover text (the export's own column name).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of metric columns in the export.
pub const METRIC_COUNT: usize = 9;

/// One named numeric column of the dataset.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    ReadCount,
    ReadUsers,
    ShareCount,
    ShareUsers,
    OriginalCount,
    OriginalUsers,
    FavoriteCount,
    FavoriteUsers,
    PostCount,
}

/// Metrics selected when the page first loads.
pub const DEFAULT_SELECTION: [Metric; 2] = [Metric::ReadCount, Metric::ReadUsers];

impl Metric {
    /// Catalog order, which is also the dropdown order.
    pub const ALL: [Metric; METRIC_COUNT] = [
        Metric::ReadCount,
        Metric::ReadUsers,
        Metric::ShareCount,
        Metric::ShareUsers,
        Metric::OriginalCount,
        Metric::OriginalUsers,
        Metric::FavoriteCount,
        Metric::FavoriteUsers,
        Metric::PostCount,
    ];

    /// Position in [`Metric::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Stable identifier used on the wire.
    pub fn key(self) -> &'static str {
        match self {
            Metric::ReadCount => "read_count",
            Metric::ReadUsers => "read_users",
            Metric::ShareCount => "share_count",
            Metric::ShareUsers => "share_users",
            Metric::OriginalCount => "original_count",
            Metric::OriginalUsers => "original_users",
            Metric::FavoriteCount => "favorite_count",
            Metric::FavoriteUsers => "favorite_users",
            Metric::PostCount => "post_count",
        }
    }

    /// CSV header of the column holding this metric.
    pub fn column(self) -> &'static str {
        match self {
            Metric::ReadCount => "阅读次数",
            Metric::ReadUsers => "阅读人数",
            Metric::ShareCount => "分享次数",
            Metric::ShareUsers => "分享人数",
            Metric::OriginalCount => "阅读原文次数",
            Metric::OriginalUsers => "阅读原文人数",
            Metric::FavoriteCount => "收藏次数",
            Metric::FavoriteUsers => "收藏人数",
            Metric::PostCount => "群发篇数",
        }
    }

    /// Display label. The dashboard shows the export's own column names.
    pub fn label(self) -> &'static str {
        self.column()
    }

    pub fn from_key(key: &str) -> Option<Metric> {
        Metric::ALL.into_iter().find(|m| m.key() == key)
    }

    pub fn from_label(label: &str) -> Option<Metric> {
        Metric::ALL.into_iter().find(|m| m.label() == label)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A metric key that is not part of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown metric '{0}'")]
pub struct UnknownMetric(pub String);

impl FromStr for Metric {
    type Err = UnknownMetric;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::from_key(s.trim()).ok_or_else(|| UnknownMetric(s.trim().to_string()))
    }
}

/// Parse a comma-separated list of metric keys.
///
/// An empty string is the empty selection. Repeated keys keep their first
/// position, since a selection is a set.
pub fn parse_metric_list(s: &str) -> Result<Vec<Metric>, UnknownMetric> {
    let mut selection = Vec::new();
    for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let metric: Metric = part.parse()?;
        if !selection.contains(&metric) {
            selection.push(metric);
        }
    }
    Ok(selection)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_matches_index() {
        for (i, metric) in Metric::ALL.iter().enumerate() {
            assert_eq!(metric.index(), i);
        }
    }

    #[test]
    fn test_key_round_trip() {
        for metric in Metric::ALL {
            assert_eq!(Metric::from_key(metric.key()), Some(metric));
            assert_eq!(metric.key().parse::<Metric>().unwrap(), metric);
        }
    }

    #[test]
    fn test_label_lookup() {
        assert_eq!(Metric::from_label("分享次数"), Some(Metric::ShareCount));
        assert_eq!(Metric::from_label("群发篇数"), Some(Metric::PostCount));
        assert_eq!(Metric::from_label("unknown"), None);
    }

    #[test]
    fn test_default_selection_is_first_two() {
        assert_eq!(DEFAULT_SELECTION, [Metric::ALL[0], Metric::ALL[1]]);
    }

    #[test]
    fn test_serde_uses_keys() {
        let json = serde_json::to_string(&Metric::OriginalUsers).unwrap();
        assert_eq!(json, "\"original_users\"");
        let back: Metric = serde_json::from_str("\"favorite_count\"").unwrap();
        assert_eq!(back, Metric::FavoriteCount);
    }

    #[test]
    fn test_parse_metric_list() {
        let list = parse_metric_list("read_count, share_count").unwrap();
        assert_eq!(list, vec![Metric::ReadCount, Metric::ShareCount]);
    }

    #[test]
    fn test_parse_metric_list_empty() {
        assert!(parse_metric_list("").unwrap().is_empty());
        assert!(parse_metric_list(" , ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_metric_list_dedupes() {
        let list = parse_metric_list("post_count,read_count,post_count").unwrap();
        assert_eq!(list, vec![Metric::PostCount, Metric::ReadCount]);
    }

    #[test]
    fn test_parse_metric_list_unknown() {
        let err = parse_metric_list("read_count,likes").unwrap_err();
        assert_eq!(err, UnknownMetric("likes".to_string()));
        assert!(err.to_string().contains("likes"));
    }
}
