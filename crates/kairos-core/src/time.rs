//! Wall-clock helpers (no chrono dependency).
//!
//! Uses Howard Hinnant's civil_from_days algorithm for Unix-to-date conversion.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::constants::MILLIS_PER_UTC_DAY;

/// Current UTC time as Unix milliseconds.
pub fn now_unix_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as i64
}

/// UTC midnight at or before `unix_ms`. Floors for pre-1970 instants too.
/// Widened to i128: the midnight before `i64::MIN` is not an i64.
pub fn utc_midnight_ms(unix_ms: i64) -> i128 {
    unix_ms.div_euclid(MILLIS_PER_UTC_DAY) as i128 * MILLIS_PER_UTC_DAY as i128
}

/// Milliseconds elapsed since the preceding UTC midnight.
pub fn millis_since_utc_midnight(unix_ms: i64) -> i64 {
    unix_ms.rem_euclid(MILLIS_PER_UTC_DAY)
}

/// Convert Unix milliseconds to an ISO-8601 UTC string with milliseconds.
pub fn unix_ms_to_iso8601(unix_ms: i64) -> String {
    let days = unix_ms.div_euclid(MILLIS_PER_UTC_DAY);
    let ms_of_day = unix_ms.rem_euclid(MILLIS_PER_UTC_DAY);
    let (y, m, d) = civil_from_days(days);
    format!("{y:04}-{m:02}-{d:02}T{}Z", clock_string(ms_of_day * 1_000, 3))
}

/// `HH:MM:SS` for a microsecond time-of-day, with `frac_digits` (0..=6)
/// fractional digits appended when non-zero.
pub fn clock_string(micros_of_day: i64, frac_digits: u32) -> String {
    let secs = micros_of_day / 1_000_000;
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;
    let base = format!("{hours:02}:{minutes:02}:{seconds:02}");
    if frac_digits == 0 {
        return base;
    }
    let frac = (micros_of_day % 1_000_000) / 10_i64.pow(6 - frac_digits.min(6));
    format!("{base}.{frac:0width$}", width = frac_digits.min(6) as usize)
}

/// Howard Hinnant's civil_from_days: Unix epoch days → (year, month, day).
fn civil_from_days(days: i64) -> (i64, u64, u64) {
    let z = days + 719468;
    let era = if z >= 0 { z } else { z - 146096 } / 146097;
    let doe = (z - era * 146097) as u64;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
    let y = yoe as i64 + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = if m <= 2 { y + 1 } else { y };
    (y, m, d)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::GENESIS_UNIX_MS;

    #[test]
    fn test_unix_epoch() {
        assert_eq!(unix_ms_to_iso8601(0), "1970-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_genesis_date() {
        assert_eq!(unix_ms_to_iso8601(GENESIS_UNIX_MS), "2024-05-10T06:45:41.888Z");
    }

    #[test]
    fn test_pre_epoch() {
        assert_eq!(unix_ms_to_iso8601(-1), "1969-12-31T23:59:59.999Z");
        assert_eq!(utc_midnight_ms(-1), -(MILLIS_PER_UTC_DAY as i128));
    }

    #[test]
    fn test_midnight() {
        let midnight = utc_midnight_ms(GENESIS_UNIX_MS) as i64;
        assert_eq!(unix_ms_to_iso8601(midnight), "2024-05-10T00:00:00.000Z");
        assert_eq!(
            millis_since_utc_midnight(GENESIS_UNIX_MS),
            ((6 * 60 + 45) * 60 + 41) * 1000 + 888
        );
    }

    #[test]
    fn test_midnight_at_extremes() {
        let low = utc_midnight_ms(i64::MIN);
        assert!(low <= i64::MIN as i128);
        assert!(i64::MIN as i128 - low < MILLIS_PER_UTC_DAY as i128);
        assert!(unix_ms_to_iso8601(i64::MIN).ends_with('Z'));
        let high = utc_midnight_ms(i64::MAX);
        assert!(high <= i64::MAX as i128);
        assert!(i64::MAX as i128 - high < MILLIS_PER_UTC_DAY as i128);
    }

    #[test]
    fn test_clock_string() {
        assert_eq!(clock_string(22_320_000_000, 0), "06:12:00");
        assert_eq!(clock_string(22_320_500_000, 3), "06:12:00.500");
    }

    #[test]
    fn test_now_is_recent() {
        let ts = unix_ms_to_iso8601(now_unix_millis());
        assert!(ts.starts_with("20"), "timestamp should be this century: {ts}");
    }
}
