//! Moments: the server-side time windows the client polls for.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::session::Region;

/// The current moment as reported by the remote API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Moment {
    pub id: String,
    pub region: Region,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl Moment {
    /// Whether `now` is at most `late_grace` past the end of the window.
    ///
    /// Polls are far apart compared to a window, so most moments are first
    /// seen after they closed.
    pub fn is_recent_at(&self, now: DateTime<Utc>, late_grace: Duration) -> bool {
        self.end_date
            .checked_add_signed(late_grace)
            .map_or(true, |deadline| now < deadline)
    }
}

/// The last moment the user was notified about (or would have been, had
/// notifications been permitted).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub last_seen_id: Option<String>,
    pub observed_region: Option<Region>,
    pub window_start: Option<DateTime<Utc>>,
    pub window_end: Option<DateTime<Utc>>,
}

impl EventRecord {
    pub fn observed(moment: &Moment) -> Self {
        Self {
            last_seen_id: Some(moment.id.clone()),
            observed_region: Some(moment.region.clone()),
            window_start: Some(moment.start_date),
            window_end: Some(moment.end_date),
        }
    }

    pub fn has_seen(&self, moment_id: &str) -> bool {
        self.last_seen_id.as_deref() == Some(moment_id)
    }

    /// True when `moment` starts before the recorded window, i.e. recording
    /// it would roll the cache back.
    pub fn is_older_than_recorded(&self, moment: &Moment) -> bool {
        self.window_start
            .is_some_and(|recorded| moment.start_date < recorded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn moment(id: &str, start_hour: u32) -> Moment {
        Moment {
            id: id.to_string(),
            region: Region::new("europe-west"),
            start_date: Utc.with_ymd_and_hms(2026, 10, 18, start_hour, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2026, 10, 18, start_hour, 2, 0).unwrap(),
        }
    }

    #[test]
    fn observed_copies_window() {
        let m = moment("evt-1", 12);
        let record = EventRecord::observed(&m);

        assert!(record.has_seen("evt-1"));
        assert_eq!(record.window_start, Some(m.start_date));
        assert_eq!(record.window_end, Some(m.end_date));
        assert_eq!(record.observed_region, Some(Region::new("europe-west")));
    }

    #[test]
    fn empty_record_is_never_newer() {
        let record = EventRecord::default();
        assert!(!record.is_older_than_recorded(&moment("evt-1", 1)));
        assert!(!record.has_seen("evt-1"));
    }

    #[test]
    fn detects_rollback() {
        let record = EventRecord::observed(&moment("evt-2", 12));
        assert!(record.is_older_than_recorded(&moment("evt-1", 9)));
        assert!(!record.is_older_than_recorded(&moment("evt-3", 15)));
    }

    #[test]
    fn moment_deserializes_from_api_shape() {
        let json = r#"{
            "id": "evt-42",
            "region": "us-central",
            "startDate": "2026-10-18T12:00:00Z",
            "endDate": "2026-10-18T12:02:00Z"
        }"#;
        let m: Moment = serde_json::from_str(json).unwrap();
        assert_eq!(m.id, "evt-42");
        assert_eq!(m.end_date, Utc.with_ymd_and_hms(2026, 10, 18, 12, 2, 0).unwrap());
    }

    #[test]
    fn recent_moment_includes_late_grace() {
        let start = Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap();
        let m = Moment {
            id: "evt-1".into(),
            region: Region::new("us-central"),
            start_date: start,
            end_date: start + Duration::minutes(2),
        };
        let grace = Duration::minutes(60);

        assert!(m.is_recent_at(start + Duration::minutes(1), grace));
        assert!(m.is_recent_at(start + Duration::minutes(20), grace));
        assert!(!m.is_recent_at(start + Duration::minutes(62), grace));
        assert!(!m.is_recent_at(start + Duration::minutes(3), Duration::zero()));
    }
}
