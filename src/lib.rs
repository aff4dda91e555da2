//! Recurring-schedule expansion for taskline calendars.
//!
//! Three pure components, consumed by the surrounding persistence/query
//! layer:
//! - `advance` steps an anchor forward by whole cadence periods
//! - `recurrence` expands a rule into its concrete occurrences
//! - `project` merges expanded and one-off schedules and filters them
//!   against a viewing window
//!
//! Nothing here performs I/O. Occurrences are recomputed on every call
//! and never persisted; a bounded instance cap keeps the work per rule
//! finite no matter how far out its end date lies.

pub mod advance;
pub mod date_range;
pub mod error;
pub mod occurrence;
pub mod project;
pub mod recurrence;
pub mod schedule;

pub use advance::nth_anchor;
pub use date_range::DateRange;
pub use error::{ScheduleError, ScheduleResult};
pub use occurrence::Occurrence;
pub use project::{DisplayableOccurrence, project};
pub use recurrence::{DEFAULT_MAX_INSTANCES, RecurrenceRule, RecurrenceType, generate_instances};
pub use schedule::ScheduleRecord;
