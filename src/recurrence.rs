//! Recurrence rules and their expansion into concrete occurrences.
//!
//! A rule lives inside its owning schedule record and describes the base
//! event's span plus how it repeats. Expansion materializes the ordered
//! occurrence list on demand; nothing here is ever persisted.

use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::advance::nth_anchor;
use crate::error::ScheduleError;
use crate::occurrence::Occurrence;

/// Ceiling on occurrences generated per rule. Keeps a rule with a bound
/// far in the future (say, a daily recurrence ending a century out) from
/// burning unbounded CPU inside one query.
pub const DEFAULT_MAX_INSTANCES: usize = 1000;

/// How often a recurring schedule repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecurrenceType {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl FromStr for RecurrenceType {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DAILY" => Ok(RecurrenceType::Daily),
            "WEEKLY" => Ok(RecurrenceType::Weekly),
            "MONTHLY" => Ok(RecurrenceType::Monthly),
            "YEARLY" => Ok(RecurrenceType::Yearly),
            other => Err(ScheduleError::UnsupportedRecurrence(other.to_string())),
        }
    }
}

/// A recurrence rule embedded in a schedule record.
///
/// `start`/`end` are the base event's own span; every generated
/// occurrence keeps exactly that duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurrenceRule {
    #[serde(rename = "startDateTime")]
    pub start: NaiveDateTime,
    #[serde(rename = "endDateTime")]
    pub end: NaiveDateTime,
    pub recurrence_type: RecurrenceType,
    /// Inclusive bound: no occurrence starts after the end of this day.
    #[serde(rename = "recurrenceEndDate")]
    pub end_date: NaiveDate,
    /// Weekday mask for weekly rules. When absent, a weekly rule reuses
    /// the start's own weekday.
    #[serde(
        rename = "recurrenceDaysOfWeek",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub days_of_week: Option<Vec<Weekday>>,
}

impl RecurrenceRule {
    /// The fixed span shared by every occurrence of this rule.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Expand with the default instance cap.
    pub fn instances(&self) -> Vec<Occurrence> {
        generate_instances(self, DEFAULT_MAX_INSTANCES)
    }
}

/// Expand a rule into its concrete occurrences, ascending by start, at
/// most `max_instances` of them.
///
/// A bound earlier than the rule's own start yields an empty list rather
/// than an error: a misconfigured rule renders an empty calendar, not a
/// failed request.
pub fn generate_instances(rule: &RecurrenceRule, max_instances: usize) -> Vec<Occurrence> {
    if rule.end_date < rule.start.date() {
        return Vec::new();
    }

    match (rule.recurrence_type, rule.days_of_week.as_deref()) {
        (RecurrenceType::Weekly, Some(mask)) if !mask.is_empty() => {
            expand_masked_weekly(rule, mask, max_instances)
        }
        _ => expand_stepped(rule, max_instances),
    }
}

/// Plain cadence walk: emit at the start anchor, then step with
/// `nth_anchor` until the bound or the cap cuts it off.
fn expand_stepped(rule: &RecurrenceRule, max_instances: usize) -> Vec<Occurrence> {
    let duration = rule.duration();
    let mut occurrences = Vec::new();
    let mut step: u32 = 0;

    while occurrences.len() < max_instances {
        let anchor = match nth_anchor(rule.start, rule.recurrence_type, step) {
            Some(anchor) => anchor,
            None => break,
        };
        if anchor.date() > rule.end_date {
            break;
        }
        occurrences.push(Occurrence::new(anchor, anchor + duration));
        step += 1;
    }

    occurrences
}

/// Week-by-week walk for weekly rules with a weekday mask.
///
/// Weeks run Sun..Sat, starting with the (possibly partial) week that
/// contains the rule's start. In that first week only masked weekdays on
/// or after the start's own date count; comparison is by calendar date,
/// never time-of-day. Every later week emits each masked weekday.
fn expand_masked_weekly(
    rule: &RecurrenceRule,
    mask: &[Weekday],
    max_instances: usize,
) -> Vec<Occurrence> {
    let duration = rule.duration();
    let start_date = rule.start.date();
    let time_of_day = rule.start.time();

    // Masked weekdays in Sun..Sat calendar order, deduplicated, so
    // emission stays globally ascending across weeks.
    let mut offsets: Vec<i64> = mask
        .iter()
        .map(|weekday| i64::from(weekday.num_days_from_sunday()))
        .collect();
    offsets.sort_unstable();
    offsets.dedup();

    // Sunday of the week containing the rule's start.
    let week_start =
        start_date - Duration::days(i64::from(start_date.weekday().num_days_from_sunday()));

    let mut occurrences = Vec::new();
    let mut week: i64 = 0;
    'weeks: loop {
        for &offset in &offsets {
            let date = week_start + Duration::days(week * 7 + offset);
            if date < start_date {
                continue;
            }
            if date > rule.end_date || occurrences.len() >= max_instances {
                break 'weeks;
            }
            let anchor = date.and_time(time_of_day);
            occurrences.push(Occurrence::new(anchor, anchor + duration));
        }
        week += 1;
    }

    occurrences
}
