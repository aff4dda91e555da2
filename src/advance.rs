//! Anchor stepping for recurrence expansion.

use chrono::{Days, Months, NaiveDateTime};

use crate::recurrence::RecurrenceType;

/// Compute the start anchor `steps` cadence periods after `origin`.
///
/// Monthly and yearly steps keep the origin's day-of-month; when the
/// target month is too short the day clamps to that month's last day
/// (Jan 31 -> Feb 28, Feb 29 -> Feb 28 in non-leap years). Every step
/// is derived fresh from `origin`, so a clamp in one step never loses
/// the original day for later steps: Jan 31 -> Feb 28 -> Mar 31.
///
/// Returns `None` only when the result would fall outside chrono's
/// representable range.
pub fn nth_anchor(
    origin: NaiveDateTime,
    cadence: RecurrenceType,
    steps: u32,
) -> Option<NaiveDateTime> {
    match cadence {
        RecurrenceType::Daily => origin.checked_add_days(Days::new(u64::from(steps))),
        RecurrenceType::Weekly => origin.checked_add_days(Days::new(7 * u64::from(steps))),
        RecurrenceType::Monthly => origin.checked_add_months(Months::new(steps)),
        RecurrenceType::Yearly => origin.checked_add_months(Months::new(steps.checked_mul(12)?)),
    }
}
