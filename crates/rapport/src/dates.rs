use chrono::NaiveDate;

/// Maps a partial-precision period to the first day it covers.
///
/// - `"2023"` → 2023-01-01
/// - `"2023-07"` → 2023-07-01
/// - anything else is read as a full `YYYY-MM-DD` literal
///
/// Returns `None` for input none of the three forms accept; callers treat
/// that as an unplottable period, not an error.
pub fn normalize_period(raw: &str) -> Option<NaiveDate> {
    let value = raw.trim();

    if is_year(value) {
        let year = value.parse().ok()?;
        return NaiveDate::from_ymd_opt(year, 1, 1);
    }

    if let Some((year, month)) = split_year_month(value) {
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, 1) {
            return Some(date);
        }
        // Out-of-range month ("2023-13") falls through to the literal parse.
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Normalizes both endpoints of a closed period range, or `None` when
/// either endpoint is unplottable.
pub fn normalize_range(start: &str, end: &str) -> Option<(NaiveDate, NaiveDate)> {
    Some((normalize_period(start)?, normalize_period(end)?))
}

fn is_year(value: &str) -> bool {
    value.len() == 4 && value.bytes().all(|byte| byte.is_ascii_digit())
}

fn split_year_month(value: &str) -> Option<(i32, u32)> {
    let (year, month) = value.split_once('-')?;
    if !is_year(year) {
        return None;
    }
    if month.len() != 2 || !month.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    Some((year.parse().ok()?, month.parse().ok()?))
}
