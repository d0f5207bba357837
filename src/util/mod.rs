//! Small utility helpers for display fallbacks, time formatting, and
//! width-aware truncation.
//!
//! The functions in this module are intentionally lightweight and
//! dependency-free to keep hot render paths fast and reduce compile times.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// What: Render an optional catalog field, falling back to `"N/A"`.
///
/// Inputs:
/// - `v`: Optional string slice taken from an artwork record.
///
/// Output:
/// - The field text, or `"N/A"` when the field is absent or blank.
#[must_use]
pub fn display_or_na(v: Option<&str>) -> &str {
    match v {
        Some(s) if !s.trim().is_empty() => s,
        _ => "N/A",
    }
}

/// Render an optional year field, falling back to `"N/A"`.
#[must_use]
pub fn year_or_na(v: Option<i64>) -> String {
    v.map_or_else(|| "N/A".to_string(), |y| y.to_string())
}

/// What: Clip a string to a display-cell budget, appending `…` when cut.
///
/// Inputs:
/// - `s`: Source text.
/// - `width`: Maximum number of terminal cells to occupy.
///
/// Output:
/// - The original string when it fits, otherwise a truncated copy ending in
///   a single ellipsis character.
#[must_use]
pub fn truncate_to_width(s: &str, width: usize) -> String {
    if UnicodeWidthStr::width(s) <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let budget = width.saturating_sub(1); // room for the ellipsis
    let mut used = 0usize;
    let mut out = String::new();
    for ch in s.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// Whether `year` is a leap year in the proleptic Gregorian calendar.
const fn is_leap(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// What: Format a Unix timestamp as `"YYYY-MM-DD HH:MM:SS"` (UTC).
///
/// Inputs:
/// - `ts`: Seconds since the epoch, or `None`.
///
/// Output:
/// - The formatted date, an empty string for `None`, or the raw number for
///   pre-epoch values.
#[must_use]
pub fn ts_to_date(ts: Option<i64>) -> String {
    let Some(t) = ts else {
        return String::new();
    };
    if t < 0 {
        return t.to_string();
    }

    let mut days = t / 86_400;
    let sod = t % 86_400;
    let hour = u32::try_from(sod / 3600).unwrap_or(0);
    let minute = u32::try_from((sod % 3600) / 60).unwrap_or(0);
    let second = u32::try_from(sod % 60).unwrap_or(0);

    let mut year: i32 = 1970;
    loop {
        let diy = i64::from(if is_leap(year) { 366 } else { 365 });
        if days >= diy {
            days -= diy;
            year += 1;
        } else {
            break;
        }
    }
    let leap = is_leap(year);
    let mdays = [
        31,
        if leap { 29 } else { 28 },
        31,
        30,
        31,
        30,
        31,
        31,
        30,
        31,
        30,
        31,
    ];
    let mut month: u32 = 1;
    for len in mdays {
        if days >= len {
            days -= len;
            month += 1;
        } else {
            break;
        }
    }
    let day = u32::try_from(days + 1).unwrap_or(1);
    format!("{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_or_na_falls_back_for_missing_and_blank() {
        assert_eq!(display_or_na(Some("Monet")), "Monet");
        assert_eq!(display_or_na(Some("   ")), "N/A");
        assert_eq!(display_or_na(None), "N/A");
    }

    #[test]
    fn year_or_na_formats_negative_years() {
        assert_eq!(year_or_na(Some(-550)), "-550");
        assert_eq!(year_or_na(Some(1889)), "1889");
        assert_eq!(year_or_na(None), "N/A");
    }

    #[test]
    fn truncate_to_width_keeps_short_strings() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("exactly10!", 10), "exactly10!");
    }

    #[test]
    fn truncate_to_width_clips_with_ellipsis() {
        assert_eq!(truncate_to_width("a longer title", 8), "a longe…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn ts_to_date_known_values() {
        assert_eq!(ts_to_date(None), "");
        assert_eq!(ts_to_date(Some(0)), "1970-01-01 00:00:00");
        // 2004-02-29 12:00:00 UTC, a leap day
        assert_eq!(ts_to_date(Some(1_078_056_000)), "2004-02-29 12:00:00");
        assert_eq!(ts_to_date(Some(-1)), "-1");
    }
}
