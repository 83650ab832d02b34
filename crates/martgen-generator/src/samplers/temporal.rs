//! Date and date/time samplers over relative range specifications.

use crate::error::GenerateError;
use chrono::{DateTime, Duration, Months, NaiveDate, Utc};
use martgen_core::{CellValue, DateSpec};
use rand::Rng;

/// Resolve a relative date specification against today.
pub fn resolve_date(spec: DateSpec) -> NaiveDate {
    let today = Utc::now().date_naive();
    match spec {
        DateSpec::YearsAgo(n) => today
            .checked_sub_months(Months::new(n * 12))
            .unwrap_or(today),
        DateSpec::DaysAgo(n) => today - Duration::days(i64::from(n)),
        DateSpec::Today => today,
        DateSpec::DaysAhead(n) => today + Duration::days(i64::from(n)),
        DateSpec::MonthsAhead(n) => today.checked_add_months(Months::new(n)).unwrap_or(today),
    }
}

/// Resolve a relative specification to a UTC instant.
///
/// `Today` means the current moment; other specifications resolve to the
/// start of day for range starts and the end of day for range ends, keeping
/// both bounds inclusive.
fn resolve_instant(spec: DateSpec, is_end: bool) -> DateTime<Utc> {
    if spec == DateSpec::Today {
        return Utc::now();
    }
    let date = resolve_date(spec);
    let time = if is_end {
        date.and_hms_opt(23, 59, 59)
    } else {
        date.and_hms_opt(0, 0, 0)
    };
    // and_hms_opt with constant in-range arguments cannot fail
    time.unwrap_or_default().and_utc()
}

/// Sample a date uniformly distributed in the inclusive range.
pub fn sample_date<R: Rng>(
    rng: &mut R,
    start: DateSpec,
    end: DateSpec,
) -> Result<CellValue, GenerateError> {
    let start = resolve_date(start);
    let end = resolve_date(end);
    if start > end {
        return Err(GenerateError::InvalidRange(format!(
            "date range start {start} is after end {end}"
        )));
    }
    let span_days = (end - start).num_days();
    let offset = rng.random_range(0..=span_days);
    Ok(CellValue::Date(start + Duration::days(offset)))
}

/// Sample a date/time uniformly distributed in the inclusive range, with
/// second granularity.
pub fn sample_datetime<R: Rng>(
    rng: &mut R,
    start: DateSpec,
    end: DateSpec,
) -> Result<CellValue, GenerateError> {
    let start = resolve_instant(start, false);
    let end = resolve_instant(end, true);
    if start > end {
        return Err(GenerateError::InvalidRange(format!(
            "date/time range start {start} is after end {end}"
        )));
    }
    let ts = rng.random_range(start.timestamp()..=end.timestamp());
    let sampled = DateTime::from_timestamp(ts, 0).unwrap_or(start);
    Ok(CellValue::DateTime(sampled))
}
