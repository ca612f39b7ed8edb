//! Kairos clock engine.
//!
//! Derives a pulse-based clock and calendar from wall-clock time. One pulse
//! is a breath of `3 + √5` seconds; a harmonic day is 17491.270421 pulses,
//! mapped proportionally onto a 36-beat × 44-step grid and split into six
//! named arcs. Calendar years are 8 months of 42 days in 6-day weeks.
//!
//! Exact throughout: the breath is a fixed-precision big integer, and once a
//! wall-clock instant becomes a micro-pulse count everything downstream is
//! 128-bit integer arithmetic.
//!
//! Zero I/O. The one persisted input, the sunrise offset, comes in through
//! the [`OffsetStore`] port.

pub mod arc;
pub mod bridge;
pub mod calendar;
pub mod constants;
pub mod grid;
pub mod moment;
pub mod offset;
pub mod time;
pub mod window;

pub use arc::{arc_index, arc_name};
pub use bridge::{
    breath_decimal, millis_until_next_pulse, pulse_index, to_micro_pulses,
    to_micro_pulses_from_micros, to_unix_millis,
};
pub use calendar::{
    CalendarCoordinates, DisplayCoordinates, LogicCoordinates, eternal_calendar,
    eternal_day_index, solar_calendar, solar_day_index,
};
pub use constants::{
    ARC_NAMES, DAY_MICRO_PULSES, DAY_NAMES, GENESIS_UNIX_MS, MICRO_PER_PULSE, MONTH_NAMES,
    MicroPulses, SUNRISE_OFFSET_KEY,
};
pub use grid::{GridPosition, grid_position};
pub use moment::{CalendarFrame, Kairos, KairosMoment};
pub use offset::{
    MemoryOffsetStore, OffsetStore, SunriseOffset, ensure_offset, parse_local_time, read_offset,
    set_offset_from_local_time, set_offset_to_now, write_offset,
};
pub use time::{now_unix_millis, unix_ms_to_iso8601};
pub use window::{SolarWindow, WindowMode, daily_window, select_window, tiled_window};
