//! Dedup policy shared by the background dispatcher and the foreground fetch.

use sr_core::moment::{EventRecord, Moment};

/// How a fetched moment relates to what the cache already holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
    /// Same id as `last_seen_id`.
    AlreadySeen,
    /// Different id, but its window starts before the recorded one.
    Older,
    /// Strictly newer than anything recorded.
    New,
}

pub fn classify(record: &EventRecord, moment: &Moment) -> Observation {
    if record.has_seen(&moment.id) {
        Observation::AlreadySeen
    } else if record.is_older_than_recorded(moment) {
        Observation::Older
    } else {
        Observation::New
    }
}
