//! Projection of schedule records into display-ready occurrences.

use chrono::{NaiveDate, NaiveDateTime};

use crate::date_range::DateRange;
use crate::occurrence::Occurrence;
use crate::schedule::ScheduleRecord;

/// A display-ready calendar entry: either a one-off record passed
/// through, or one expanded occurrence tagged with its originating
/// schedule. Read-only; holds no state of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayableOccurrence<'a> {
    Single(&'a ScheduleRecord),
    Instance {
        schedule: &'a ScheduleRecord,
        occurrence: Occurrence,
    },
}

impl<'a> DisplayableOccurrence<'a> {
    /// The originating schedule record.
    pub fn schedule(&self) -> &'a ScheduleRecord {
        match self {
            DisplayableOccurrence::Single(record) => record,
            DisplayableOccurrence::Instance { schedule, .. } => schedule,
        }
    }

    pub fn start(&self) -> NaiveDateTime {
        match self {
            DisplayableOccurrence::Single(record) => record.start,
            DisplayableOccurrence::Instance { occurrence, .. } => occurrence.start,
        }
    }

    pub fn end(&self) -> NaiveDateTime {
        match self {
            DisplayableOccurrence::Single(record) => record.end,
            DisplayableOccurrence::Instance { occurrence, .. } => occurrence.end,
        }
    }

    pub fn instance_date(&self) -> NaiveDate {
        match self {
            DisplayableOccurrence::Single(record) => record.start.date(),
            DisplayableOccurrence::Instance { occurrence, .. } => occurrence.instance_date,
        }
    }
}

/// Expand recurring records and merge them with one-off records.
///
/// One-off records pass through unfiltered: the query layer has already
/// scoped them by their stored span. Window filtering applies to expanded
/// occurrences only.
pub fn project<'a>(
    records: &'a [ScheduleRecord],
    window: Option<&DateRange>,
) -> Vec<DisplayableOccurrence<'a>> {
    let mut entries = Vec::new();

    for record in records {
        match &record.recurrence {
            None => entries.push(DisplayableOccurrence::Single(record)),
            Some(rule) => {
                for occurrence in rule.instances() {
                    if window.is_none_or(|w| is_visible(&occurrence, w)) {
                        entries.push(DisplayableOccurrence::Instance {
                            schedule: record,
                            occurrence,
                        });
                    }
                }
            }
        }
    }

    entries
}

/// An occurrence shows up when it starts inside the window, or when it
/// straddles the window's opening edge.
fn is_visible(occurrence: &Occurrence, window: &DateRange) -> bool {
    let open = window.start_bound();
    let starts_inside = occurrence.start >= open && occurrence.start <= window.end_bound();
    starts_inside || straddles_opening_edge(occurrence, open)
}

/// Overlap is anchored on the opening edge only; there is no symmetric
/// straddle test against the closing edge.
fn straddles_opening_edge(occurrence: &Occurrence, open: NaiveDateTime) -> bool {
    occurrence.start <= open && occurrence.end >= open
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recurrence::RecurrenceType;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn daily_record(id: i64, end_date: NaiveDate) -> ScheduleRecord {
        ScheduleRecord::recurring(
            id,
            "Standup",
            at(2026, 1, 1, 9, 0),
            at(2026, 1, 1, 9, 30),
            RecurrenceType::Daily,
            end_date,
            None,
        )
    }

    #[test]
    fn test_single_records_pass_through_even_outside_the_window() {
        let records = vec![ScheduleRecord::single(
            1,
            "Kickoff",
            at(2025, 12, 1, 14, 0),
            at(2025, 12, 1, 15, 0),
        )];
        let window = DateRange::new(day(2026, 1, 3), day(2026, 1, 5));

        let entries = project(&records, Some(&window));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].schedule().id, 1);
        assert!(matches!(entries[0], DisplayableOccurrence::Single(_)));
    }

    #[test]
    fn test_recurring_records_are_filtered_by_the_window() {
        let records = vec![daily_record(2, day(2026, 1, 10))];
        let window = DateRange::new(day(2026, 1, 3), day(2026, 1, 5));

        let entries = project(&records, Some(&window));
        let dates: Vec<NaiveDate> = entries.iter().map(|e| e.instance_date()).collect();
        assert_eq!(dates, vec![day(2026, 1, 3), day(2026, 1, 4), day(2026, 1, 5)]);
        for entry in &entries {
            assert_eq!(entry.schedule().id, 2);
        }
    }

    #[test]
    fn test_no_window_keeps_every_occurrence() {
        let records = vec![daily_record(3, day(2026, 1, 10))];
        assert_eq!(project(&records, None).len(), 10);
    }

    #[test]
    fn test_occurrence_straddling_the_opening_edge_is_kept() {
        // Overnight occurrence runs 22:00 Jan 2 to 02:00 Jan 3; the
        // window opens on Jan 3, so it must still show up.
        let records = vec![ScheduleRecord::recurring(
            4,
            "Night shift",
            at(2026, 1, 2, 22, 0),
            at(2026, 1, 3, 2, 0),
            RecurrenceType::Daily,
            day(2026, 1, 2),
            None,
        )];
        let window = DateRange::new(day(2026, 1, 3), day(2026, 1, 5));

        let entries = project(&records, Some(&window));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].instance_date(), day(2026, 1, 2));
    }

    #[test]
    fn test_occurrence_ending_before_the_window_is_dropped() {
        let records = vec![daily_record(5, day(2026, 1, 2))];
        let window = DateRange::new(day(2026, 1, 4), day(2026, 1, 8));

        assert!(project(&records, Some(&window)).is_empty());
    }

    #[test]
    fn test_mixed_records_merge_in_input_order() {
        let records = vec![
            ScheduleRecord::single(6, "Planning", at(2026, 1, 4, 10, 0), at(2026, 1, 4, 11, 0)),
            daily_record(7, day(2026, 1, 4)),
        ];
        let window = DateRange::new(day(2026, 1, 3), day(2026, 1, 4));

        let entries = project(&records, Some(&window));
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].schedule().id, 6);
        assert_eq!(entries[1].instance_date(), day(2026, 1, 3));
        assert_eq!(entries[2].instance_date(), day(2026, 1, 4));
    }

    #[test]
    fn test_misconfigured_rule_contributes_no_occurrences() {
        // Bound before the rule's start expands to nothing; the record
        // simply vanishes from the projection instead of erroring.
        let records = vec![daily_record(8, day(2025, 12, 1))];
        assert!(project(&records, None).is_empty());
    }
}
