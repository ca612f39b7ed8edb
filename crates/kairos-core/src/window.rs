//! Solar day windows: where the current sunrise-relative day starts and ends.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::bridge::{to_micro_pulses, to_micro_pulses_from_micros};
use crate::constants::{DAY_MICRO_PULSES, GENESIS_UNIX_MS, MicroPulses};
use crate::offset::SunriseOffset;
use crate::time::utc_midnight_ms;

/// How the solar window is anchored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowMode {
    /// Today's UTC midnight plus the sunrise offset.
    #[default]
    Daily,
    /// One sunrise at genesis, tiled forward by whole harmonic days.
    #[serde(alias = "genesis")]
    GenesisTiling,
}

impl WindowMode {
    pub fn as_str(self) -> &'static str {
        match self {
            WindowMode::Daily => "daily",
            WindowMode::GenesisTiling => "genesis_tiling",
        }
    }
}

impl fmt::Display for WindowMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WindowMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "daily" => Ok(WindowMode::Daily),
            "genesis" | "genesis_tiling" => Ok(WindowMode::GenesisTiling),
            other => Err(format!(
                "unknown window mode '{other}' (expected 'daily' or 'genesis')"
            )),
        }
    }
}

/// The active solar day as a half-open micro-pulse range `[start, end)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolarWindow {
    pub start: MicroPulses,
    pub end: MicroPulses,
}

impl SolarWindow {
    fn starting_at(start: MicroPulses) -> Self {
        Self {
            start,
            end: start + DAY_MICRO_PULSES,
        }
    }

    pub fn span(&self) -> MicroPulses {
        self.end - self.start
    }

    pub fn contains(&self, micro: MicroPulses) -> bool {
        self.start <= micro && micro < self.end
    }
}

/// Sunrise boundary on the UTC day containing `unix_ms`, in micro-pulses.
fn sunrise_on_day_of(unix_ms: i64, offset: SunriseOffset) -> MicroPulses {
    let boundary_us = utc_midnight_ms(unix_ms) * 1_000 + offset.as_micros() as i128;
    to_micro_pulses_from_micros(boundary_us)
}

/// Daily anchor: today's sunrise is the candidate boundary. Before it, the
/// window is the day ending there; at or after it, the day starting there.
pub fn daily_window(now_ms: i64, offset: SunriseOffset) -> SolarWindow {
    let now = to_micro_pulses(now_ms);
    let candidate = sunrise_on_day_of(now_ms, offset);
    if now < candidate {
        SolarWindow::starting_at(candidate - DAY_MICRO_PULSES)
    } else {
        SolarWindow::starting_at(candidate)
    }
}

/// First sunrise boundary at or after genesis for this offset.
pub fn genesis_sunrise(offset: SunriseOffset) -> MicroPulses {
    let candidate = sunrise_on_day_of(GENESIS_UNIX_MS, offset);
    if candidate < 0 {
        candidate + DAY_MICRO_PULSES
    } else {
        candidate
    }
}

/// Genesis tiling: whole harmonic days from the genesis sunrise, flooring
/// toward negative infinity for instants before it.
pub fn tiled_window(now_ms: i64, offset: SunriseOffset) -> SolarWindow {
    let anchor = genesis_sunrise(offset);
    let now = to_micro_pulses(now_ms);
    let days = (now - anchor).div_euclid(DAY_MICRO_PULSES);
    SolarWindow::starting_at(anchor + days * DAY_MICRO_PULSES)
}

pub fn select_window(mode: WindowMode, now_ms: i64, offset: SunriseOffset) -> SolarWindow {
    let window = match mode {
        WindowMode::Daily => daily_window(now_ms, offset),
        WindowMode::GenesisTiling => tiled_window(now_ms, offset),
    };
    debug_assert_eq!(window.span(), DAY_MICRO_PULSES);
    window
}
