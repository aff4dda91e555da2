//! Materialized instances of a recurring schedule.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One concrete instance derived from a recurrence rule.
///
/// Occurrences are pure derivations: recomputed on every query, never
/// persisted, and gone once the owning schedule record is deactivated.
/// The rule is the single source of truth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Occurrence {
    #[serde(rename = "startDateTime")]
    pub start: NaiveDateTime,
    #[serde(rename = "endDateTime")]
    pub end: NaiveDateTime,
    /// Calendar date of `start`, a stable per-occurrence key within one
    /// rule's expansion.
    pub instance_date: NaiveDate,
}

impl Occurrence {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Occurrence {
            start,
            end,
            instance_date: start.date(),
        }
    }
}
