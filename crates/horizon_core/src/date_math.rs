//! Date arithmetic helpers for projection math.
//!
//! The engine needs two deliberately different elapsed-time measures:
//! fractional years (day-based, for rate compounding) and whole calendar
//! months (for counting discrete contributions and loan payments). They are
//! computed by separate functions here and must never be conflated by
//! callers. Day differences use Rata Die day-numbering so the hot projection
//! loops avoid `jiff::Span` allocation and normalisation.

use jiff::civil::Date;

/// Days per year used when converting a day difference to fractional years.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Today's civil date in the system time zone. The engine never calls this
/// itself — every projection takes an explicit `as_of` so results are
/// reproducible under test; this is the conventional value to pass.
#[must_use]
pub fn today() -> Date {
    jiff::Zoned::now().date()
}

/// Fast leap year check.
#[inline]
pub fn is_leap_year(year: i16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Days in a month without constructing a `jiff::civil::Date`.
#[inline]
pub fn days_in_month(year: i16, month: i8) -> i8 {
    const DAYS: [i8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    if month == 2 && is_leap_year(year) {
        29
    } else {
        DAYS[(month - 1) as usize]
    }
}

/// Convert a civil date to a Rata Die day number (days since 0001-01-01).
///
/// Proleptic Gregorian algorithm, O(1) with no branches beyond the month
/// adjustment.
#[inline]
fn rata_die(d: Date) -> i32 {
    let y = d.year() as i32;
    let m = d.month() as i32;
    let day = d.day() as i32;

    // Shift March = month 1 so Feb (end of "year") is month 12
    let a = (14 - m) / 12;
    let y2 = y - a;
    let m2 = m + 12 * a - 3;

    day + (153 * m2 + 2) / 5 + 365 * y2 + y2 / 4 - y2 / 100 + y2 / 400 - 306
}

/// Number of days between two dates (`end - start`). Positive when
/// `end > start`.
#[inline]
pub fn days_between(start: Date, end: Date) -> i32 {
    rata_die(end) - rata_die(start)
}

/// Elapsed time between two dates in fractional years, day difference over
/// 365.25. Negative when `end < start`.
#[must_use]
#[inline]
pub fn years_between(start: Date, end: Date) -> f64 {
    f64::from(days_between(start, end)) / DAYS_PER_YEAR
}

/// Calendar month difference (`year * 12 + month` delta), ignoring
/// day-of-month. Coarser than [`years_between`] on purpose: contribution and
/// payment counts are whole-month quantities.
#[must_use]
#[inline]
pub fn months_between(start: Date, end: Date) -> i32 {
    (i32::from(end.year()) - i32::from(start.year())) * 12
        + (i32::from(end.month()) - i32::from(start.month()))
}

/// Add `n` calendar months to a date, clamping the day to the length of the
/// target month (2025-01-31 + 1 month = 2025-02-28).
#[must_use]
pub fn add_months(d: Date, n: i32) -> Date {
    let total = i32::from(d.year()) * 12 + i32::from(d.month()) - 1 + n;
    let year = total.div_euclid(12) as i16;
    let month = (total.rem_euclid(12) + 1) as i8;
    let day = d.day().min(days_in_month(year, month));
    jiff::civil::date(year, month, day)
}

/// Add `n` calendar years to a date, clamping Feb 29 to Feb 28 in non-leap
/// target years.
#[must_use]
pub fn add_years(d: Date, n: i32) -> Date {
    add_months(d, n * 12)
}
