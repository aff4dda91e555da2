//! Schedule records as the engine sees them.

use chrono::{NaiveDate, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::recurrence::{RecurrenceRule, RecurrenceType};

/// A stored schedule entry handed in by the query layer.
///
/// The record owns its recurrence rule: the rule changes only when the
/// record is updated and disappears when the record is deactivated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRecord {
    pub id: i64,
    pub title: String,
    #[serde(rename = "startDateTime")]
    pub start: NaiveDateTime,
    #[serde(rename = "endDateTime")]
    pub end: NaiveDateTime,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub recurrence: Option<RecurrenceRule>,
}

impl ScheduleRecord {
    /// A one-off schedule with no recurrence.
    pub fn single(id: i64, title: &str, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        ScheduleRecord {
            id,
            title: title.to_string(),
            start,
            end,
            recurrence: None,
        }
    }

    /// A recurring schedule. The rule shares the record's own span, so
    /// every occurrence inherits the base event's duration.
    pub fn recurring(
        id: i64,
        title: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
        recurrence_type: RecurrenceType,
        end_date: NaiveDate,
        days_of_week: Option<Vec<Weekday>>,
    ) -> Self {
        ScheduleRecord {
            id,
            title: title.to_string(),
            start,
            end,
            recurrence: Some(RecurrenceRule {
                start,
                end,
                recurrence_type,
                end_date,
                days_of_week,
            }),
        }
    }

    pub fn is_recurring(&self) -> bool {
        self.recurrence.is_some()
    }
}
