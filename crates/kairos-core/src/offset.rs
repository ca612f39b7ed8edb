//! The sunrise offset: the engine's only persisted, user-mutable input.
//!
//! The engine never reaches for ambient storage. Callers inject an
//! [`OffsetStore`] port; reads are lenient (anything unreadable means a zero
//! offset), writes normalize before persisting and are last-write-wins.

use std::collections::HashMap;
use std::convert::Infallible;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::{MICROS_PER_UTC_DAY, SECONDS_PER_UTC_DAY, SUNRISE_OFFSET_KEY};
use crate::time::{clock_string, millis_since_utc_midnight};

static PERSISTED_DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([+-])?([0-9]*)(?:\.([0-9]*))?\s*$").unwrap());
static LOCAL_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([0-9]{1,2}):([0-9]{2})(?::([0-9]{2})(?:\.([0-9]+))?)?\s*$").unwrap()
});

/// Seconds after UTC midnight at which the solar day begins, held as whole
/// microseconds in `[0, 86400 s)`.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct SunriseOffset {
    micros: i64,
}

impl SunriseOffset {
    pub const ZERO: SunriseOffset = SunriseOffset { micros: 0 };

    /// Any microsecond count, wrapped into one UTC day.
    pub fn from_micros(micros: i64) -> Self {
        Self {
            micros: micros.rem_euclid(MICROS_PER_UTC_DAY),
        }
    }

    pub fn from_seconds(seconds: i64) -> Self {
        let micros = (seconds as i128 * 1_000_000).rem_euclid(MICROS_PER_UTC_DAY as i128);
        Self {
            micros: micros as i64,
        }
    }

    pub fn as_micros(self) -> i64 {
        self.micros
    }

    pub fn whole_seconds(self) -> i64 {
        self.micros / 1_000_000
    }

    /// Parse a persisted decimal-seconds string. Values outside one day are
    /// wrapped; digits past the sixth fractional place are dropped. Anything
    /// that is not a plain decimal yields `None`.
    pub fn parse_persisted(raw: &str) -> Option<Self> {
        let caps = PERSISTED_DECIMAL.captures(raw)?;
        let int_part = caps.get(2).map_or("", |m| m.as_str());
        let frac_part = caps.get(3).map_or("", |m| m.as_str());
        if int_part.is_empty() && frac_part.is_empty() {
            return None;
        }
        let whole: i128 = if int_part.is_empty() {
            0
        } else {
            int_part.parse().ok()?
        };
        let micros = whole.checked_mul(1_000_000)?.checked_add(fraction_micros(frac_part))?;
        let signed = if caps.get(1).is_some_and(|m| m.as_str() == "-") {
            -micros
        } else {
            micros
        };
        Some(Self {
            micros: signed.rem_euclid(MICROS_PER_UTC_DAY as i128) as i64,
        })
    }

    /// Decimal seconds, trailing fractional zeros trimmed.
    pub fn to_persisted(self) -> String {
        let whole = self.micros / 1_000_000;
        let frac = self.micros % 1_000_000;
        if frac == 0 {
            whole.to_string()
        } else {
            let digits = format!("{frac:06}");
            format!("{whole}.{}", digits.trim_end_matches('0'))
        }
    }

    /// Time of day in UTC as `HH:MM:SS`.
    pub fn utc_clock(self) -> String {
        clock_string(self.micros, 0)
    }
}

impl fmt::Display for SunriseOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_persisted())
    }
}

/// First six fractional digits as microseconds, right-padded.
fn fraction_micros(digits: &str) -> i128 {
    let mut micros = 0i128;
    for (i, b) in digits.bytes().take(6).enumerate() {
        micros += (b - b'0') as i128 * 10i128.pow(5 - i as u32);
    }
    micros
}

/// Parse `HH:MM[:SS[.fraction]]` into microseconds after midnight.
/// Returns `None` when the pattern does not match or a field is out of range.
pub fn parse_local_time(text: &str) -> Option<i64> {
    let caps = LOCAL_TIME.captures(text)?;
    let hours: i64 = caps[1].parse().ok()?;
    let minutes: i64 = caps[2].parse().ok()?;
    let seconds: i64 = caps.get(3).map_or(Some(0), |m| m.as_str().parse().ok())?;
    if hours > 23 || minutes > 59 || seconds > 59 {
        return None;
    }
    let frac = caps.get(4).map_or(0, |m| fraction_micros(m.as_str()) as i64);
    Some(((hours * 60 + minutes) * 60 + seconds) * 1_000_000 + frac)
}

/// Key-value port holding the persisted offset.
pub trait OffsetStore {
    type Error: fmt::Display;

    fn load_raw(&self, key: &str) -> Result<Option<String>, Self::Error>;
    fn save_raw(&mut self, key: &str, value: &str) -> Result<(), Self::Error>;
}

/// In-memory port, for tests and hosts that persist elsewhere.
#[derive(Debug, Default, Clone)]
pub struct MemoryOffsetStore {
    values: HashMap<String, String>,
}

impl MemoryOffsetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_raw(value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(SUNRISE_OFFSET_KEY.to_string(), value.to_string());
        store
    }
}

impl OffsetStore for MemoryOffsetStore {
    type Error = Infallible;

    fn load_raw(&self, key: &str) -> Result<Option<String>, Infallible> {
        Ok(self.values.get(key).cloned())
    }

    fn save_raw(&mut self, key: &str, value: &str) -> Result<(), Infallible> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Read the persisted offset. Missing, malformed or unreadable values all
/// read as [`SunriseOffset::ZERO`]; the next explicit set overwrites them.
pub fn read_offset<S: OffsetStore + ?Sized>(store: &S) -> SunriseOffset {
    match store.load_raw(SUNRISE_OFFSET_KEY) {
        Ok(Some(raw)) => SunriseOffset::parse_persisted(&raw).unwrap_or_else(|| {
            tracing::warn!("ignoring malformed sunrise offset {raw:?}; using 0");
            SunriseOffset::ZERO
        }),
        Ok(None) => SunriseOffset::ZERO,
        Err(e) => {
            tracing::warn!("failed to read sunrise offset: {e}; using 0");
            SunriseOffset::ZERO
        }
    }
}

/// Persist a zero offset if none is stored yet, so the key exists from first
/// use. An existing value, even a malformed one, is left for the next
/// explicit set.
pub fn ensure_offset<S: OffsetStore + ?Sized>(store: &mut S) -> Result<SunriseOffset, S::Error> {
    if store.load_raw(SUNRISE_OFFSET_KEY)?.is_none() {
        return write_offset(store, SunriseOffset::ZERO);
    }
    Ok(read_offset(store))
}

/// Normalize and persist an offset.
pub fn write_offset<S: OffsetStore + ?Sized>(
    store: &mut S,
    offset: SunriseOffset,
) -> Result<SunriseOffset, S::Error> {
    store.save_raw(SUNRISE_OFFSET_KEY, &offset.to_persisted())?;
    tracing::info!("sunrise offset set to {offset} s ({} UTC)", offset.utc_clock());
    Ok(offset)
}

/// "Sunrise is now": the offset becomes the time elapsed since UTC midnight.
pub fn set_offset_to_now<S: OffsetStore + ?Sized>(
    store: &mut S,
    now_ms: i64,
) -> Result<SunriseOffset, S::Error> {
    let offset = SunriseOffset::from_micros(millis_since_utc_midnight(now_ms) * 1_000);
    write_offset(store, offset)
}

/// Set the offset from a local `HH:MM[:SS[.fraction]]` string. The local time
/// is shifted by `utc_offset_secs` (seconds east of UTC) into UTC.
///
/// A string that does not parse leaves the stored offset untouched and
/// returns `Ok(None)`.
pub fn set_offset_from_local_time<S: OffsetStore + ?Sized>(
    store: &mut S,
    text: &str,
    utc_offset_secs: i64,
) -> Result<Option<SunriseOffset>, S::Error> {
    let Some(local_micros) = parse_local_time(text) else {
        tracing::debug!("ignoring unparseable sunrise time {text:?}");
        return Ok(None);
    };
    // Whole days of zone shift do not move the time of day.
    let shift_micros = utc_offset_secs.rem_euclid(SECONDS_PER_UTC_DAY) * 1_000_000;
    let offset = SunriseOffset::from_micros(local_micros - shift_micros);
    write_offset(store, offset).map(Some)
}
