use serde::Serialize;

use crate::arc::{arc_index, arc_name};
use crate::bridge::{pulse_index, to_micro_pulses};
use crate::calendar::{CalendarCoordinates, eternal_calendar, solar_calendar};
use crate::constants::MicroPulses;
use crate::grid::{
    GridPosition, grid_position, percent_into_day, pulses_into_day, pulses_into_day_exact,
};
use crate::offset::{OffsetStore, SunriseOffset, read_offset};
use crate::time::unix_ms_to_iso8601;
use crate::window::{SolarWindow, WindowMode, select_window};

/// A calendar frame with its names resolved.
#[derive(Clone, Debug, Serialize)]
pub struct CalendarFrame {
    #[serde(flatten)]
    pub coordinates: CalendarCoordinates,
    pub day_name: &'static str,
    pub month_name: &'static str,
}

impl From<CalendarCoordinates> for CalendarFrame {
    fn from(coordinates: CalendarCoordinates) -> Self {
        Self {
            day_name: coordinates.day_name(),
            month_name: coordinates.month_name(),
            coordinates,
        }
    }
}

/// Everything a presentation layer reads for one instant.
#[derive(Clone, Debug, Serialize)]
pub struct KairosMoment {
    pub unix_ms: i64,
    pub utc: String,
    pub mode: WindowMode,
    pub sunrise_offset_seconds: String,
    pub micro_pulses: MicroPulses,
    pub eternal_pulse: i128,
    pub pulses_into_day: i64,
    pub pulses_into_day_exact: f64,
    pub percent_into_day: f64,
    pub grid: GridPosition,
    pub percent_into_step: f64,
    pub window: SolarWindow,
    pub arc_index: usize,
    pub arc: &'static str,
    pub eternal: CalendarFrame,
    pub solar: CalendarFrame,
}

/// Engine facade. Holds only the static window mode; every call is a pure
/// function of its arguments.
#[derive(Clone, Copy, Debug, Default)]
pub struct Kairos {
    mode: WindowMode,
}

impl Kairos {
    pub fn new(mode: WindowMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> WindowMode {
        self.mode
    }

    pub fn window(&self, now_ms: i64, offset: SunriseOffset) -> SolarWindow {
        select_window(self.mode, now_ms, offset)
    }

    pub fn moment(&self, now_ms: i64, offset: SunriseOffset) -> KairosMoment {
        let micro = to_micro_pulses(now_ms);
        let grid = grid_position(micro);
        let window = self.window(now_ms, offset);

        KairosMoment {
            unix_ms: now_ms,
            utc: unix_ms_to_iso8601(now_ms),
            mode: self.mode,
            sunrise_offset_seconds: offset.to_persisted(),
            micro_pulses: micro,
            eternal_pulse: pulse_index(micro),
            pulses_into_day: pulses_into_day(micro),
            pulses_into_day_exact: pulses_into_day_exact(micro),
            percent_into_day: percent_into_day(micro),
            percent_into_step: grid.percent_into_step(),
            grid,
            window,
            arc_index: arc_index(&window, micro),
            arc: arc_name(&window, micro),
            eternal: eternal_calendar(micro).into(),
            solar: solar_calendar(&window).into(),
        }
    }

    /// [`Kairos::moment`] with the offset read from a store port.
    pub fn moment_with_store<S: OffsetStore + ?Sized>(
        &self,
        now_ms: i64,
        store: &S,
    ) -> KairosMoment {
        self.moment(now_ms, read_offset(store))
    }
}
