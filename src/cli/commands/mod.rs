//! CLI command implementations

pub mod config;
pub mod get;
pub mod list;

pub use config::execute as config;
pub use get::execute as get;
pub use list::execute as list;

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Render an entity's age like `5d`, `3h`, `12m`, `40s`
pub(crate) fn format_age(created: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(created) = created else {
        return "<unknown>".to_string();
    };

    let secs = (now - created).num_seconds().max(0);
    match secs {
        s if s >= 86_400 => format!("{}d", s / 86_400),
        s if s >= 3_600 => format!("{}h", s / 3_600),
        s if s >= 60 => format!("{}m", s / 60),
        s => format!("{}s", s),
    }
}

/// Render labels as `k=v,k=v`
pub(crate) fn format_labels(labels: &BTreeMap<String, String>) -> String {
    if labels.is_empty() {
        return "<none>".to_string();
    }
    labels
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn age_units() {
        let now = Utc::now();
        assert_eq!(format_age(None, now), "<unknown>");
        assert_eq!(format_age(Some(now - Duration::seconds(40)), now), "40s");
        assert_eq!(format_age(Some(now - Duration::minutes(12)), now), "12m");
        assert_eq!(format_age(Some(now - Duration::hours(3)), now), "3h");
        assert_eq!(format_age(Some(now - Duration::days(5)), now), "5d");
        assert_eq!(format_age(Some(now + Duration::hours(1)), now), "0s");
    }

    #[test]
    fn labels_rendering() {
        let mut labels = BTreeMap::new();
        assert_eq!(format_labels(&labels), "<none>");
        labels.insert("tier".to_string(), "front".to_string());
        labels.insert("app".to_string(), "web".to_string());
        assert_eq!(format_labels(&labels), "app=web,tier=front");
    }
}
