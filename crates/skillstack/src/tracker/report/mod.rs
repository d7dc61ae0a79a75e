mod aggregate;
mod digest;
mod narrative;

pub use aggregate::WeeklyRollup;
pub use digest::{progress_summary, weekly_activity_summary, NO_PROGRESS_DATA, NO_WEEKLY_RECORDS};
pub use narrative::{render_weekly_report, NO_WEEKLY_ACTIVITY};
