//! Viewing window for filtering expanded occurrences.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{ScheduleError, ScheduleResult};

/// Inclusive calendar-date window supplied by the query layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    #[serde(rename = "startDate")]
    pub from: NaiveDate,
    #[serde(rename = "endDate")]
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        DateRange { from, to }
    }

    /// Parse a window from the query layer's YYYY-MM-DD strings.
    pub fn from_args(from: &str, to: &str) -> ScheduleResult<Self> {
        Ok(DateRange {
            from: parse_date(from)?,
            to: parse_date(to)?,
        })
    }

    /// The window's opening edge: start of the `from` day.
    pub fn start_bound(&self) -> NaiveDateTime {
        self.from.and_hms_opt(0, 0, 0).unwrap()
    }

    /// The window's closing edge: end of the `to` day.
    pub fn end_bound(&self) -> NaiveDateTime {
        self.to.and_hms_opt(23, 59, 59).unwrap()
    }
}

fn parse_date(s: &str) -> ScheduleResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| ScheduleError::InvalidDate(s.to_string()))
}
