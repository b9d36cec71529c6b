//! Projects an interval in days onto an absolute next-review instant.
use chrono::{DateTime, Days, Duration, TimeZone, Utc};

/// `reference` plus `interval_days` calendar days, keeping the wall-clock
/// time in the reference's zone.
///
/// When that wall time falls into a DST gap or fold, the result falls back
/// to a fixed `interval_days * 24h` offset. Results past the representable
/// range saturate at the latest instant chrono supports.
pub fn project_review_date<Tz: TimeZone>(interval_days: u32, reference: &DateTime<Tz>) -> DateTime<Tz> {
    reference
        .clone()
        .checked_add_days(Days::new(u64::from(interval_days)))
        .or_else(|| {
            tracing::debug!(interval_days, "Calendar day addition failed, using fixed days");
            reference
                .clone()
                .checked_add_signed(Duration::days(i64::from(interval_days)))
        })
        .unwrap_or_else(|| DateTime::<Utc>::MAX_UTC.with_timezone(&reference.timezone()))
}
