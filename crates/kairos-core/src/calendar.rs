//! Calendar counters: 8 months × 42 days, 6-day weeks.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DAY_MICRO_PULSES, DAY_NAMES, DAYS_PER_MONTH, DAYS_PER_WEEK, DAYS_PER_YEAR, MONTH_NAMES,
    MicroPulses,
};
use crate::window::SolarWindow;

/// 0-based coordinates, the form arithmetic is done in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogicCoordinates {
    pub year: i64,
    pub day_in_year: i64,
    pub month: i64,
    pub day_in_month: i64,
    pub week_in_month: i64,
    pub day_of_week: i64,
}

/// 1-based coordinates, as shown to people.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayCoordinates {
    pub year: i64,
    pub day_in_year: i64,
    pub month: i64,
    pub day_in_month: i64,
    pub week_in_month: i64,
    pub day_of_week: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarCoordinates {
    pub day_index: i64,
    pub logic: LogicCoordinates,
    pub display: DisplayCoordinates,
}

impl CalendarCoordinates {
    /// Coordinates of an absolute day index. Total over all of `i64`;
    /// negative indices wrap into the preceding year.
    pub fn from_day_index(day_index: i64) -> Self {
        let day_in_year = day_index.rem_euclid(DAYS_PER_YEAR);
        let month = day_in_year / DAYS_PER_MONTH;
        let day_in_month = day_in_year % DAYS_PER_MONTH;

        let logic = LogicCoordinates {
            year: day_index.div_euclid(DAYS_PER_YEAR),
            day_in_year,
            month,
            day_in_month,
            week_in_month: day_in_month / DAYS_PER_WEEK,
            day_of_week: day_in_month % DAYS_PER_WEEK,
        };
        Self {
            day_index,
            logic,
            display: logic.to_display(),
        }
    }

    pub fn day_name(&self) -> &'static str {
        DAY_NAMES[self.logic.day_of_week as usize]
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.logic.month as usize]
    }
}

impl LogicCoordinates {
    pub fn to_display(self) -> DisplayCoordinates {
        DisplayCoordinates {
            year: self.year + 1,
            day_in_year: self.day_in_year + 1,
            month: self.month + 1,
            day_in_month: self.day_in_month + 1,
            week_in_month: self.week_in_month + 1,
            day_of_week: self.day_of_week + 1,
        }
    }
}

fn day_index_at(micro: MicroPulses) -> i64 {
    (micro.max(0) / DAY_MICRO_PULSES) as i64
}

/// Eternal frame: whole harmonic days since genesis, sunrise ignored.
pub fn eternal_day_index(now: MicroPulses) -> i64 {
    day_index_at(now)
}

/// Solar frame: whole harmonic days from genesis to the window's start.
pub fn solar_day_index(window: &SolarWindow) -> i64 {
    day_index_at(window.start)
}

pub fn eternal_calendar(now: MicroPulses) -> CalendarCoordinates {
    CalendarCoordinates::from_day_index(eternal_day_index(now))
}

pub fn solar_calendar(window: &SolarWindow) -> CalendarCoordinates {
    CalendarCoordinates::from_day_index(solar_day_index(window))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_zero() {
        let c = CalendarCoordinates::from_day_index(0);
        assert_eq!(c.logic.year, 0);
        assert_eq!(c.logic.month, 0);
        assert_eq!(c.logic.day_in_month, 0);
        assert_eq!(c.display.day_in_month, 1);
        assert_eq!(c.display.day_of_week, 1);
        assert_eq!(c.day_name(), "Solhara");
        assert_eq!(c.month_name(), "Aethon");
    }

    #[test]
    fn test_month_and_week_boundaries() {
        let c = CalendarCoordinates::from_day_index(41);
        assert_eq!((c.logic.month, c.logic.day_in_month), (0, 41));
        assert_eq!((c.logic.week_in_month, c.logic.day_of_week), (6, 5));
        assert_eq!(c.display.week_in_month, 7);
        assert_eq!(c.day_name(), "Kaelith");

        let c = CalendarCoordinates::from_day_index(42);
        assert_eq!((c.logic.month, c.logic.day_in_month), (1, 0));
        assert_eq!(c.month_name(), "Virelai");

        let c = CalendarCoordinates::from_day_index(335);
        assert_eq!((c.logic.year, c.logic.month, c.display.day_in_month), (0, 7, 42));
        assert_eq!(c.month_name(), "Liora");

        let c = CalendarCoordinates::from_day_index(336);
        assert_eq!((c.logic.year, c.logic.day_in_year), (1, 0));
        assert_eq!(c.display.year, 2);
    }

    #[test]
    fn test_negative_index_wraps() {
        let c = CalendarCoordinates::from_day_index(-1);
        assert_eq!(c.logic.year, -1);
        assert_eq!(c.logic.day_in_year, 335);
        assert_eq!(c.logic.day_of_week, 5);
    }

    #[test]
    fn test_day_index_clamps_before_genesis() {
        assert_eq!(eternal_day_index(-5), 0);
        assert_eq!(eternal_day_index(DAY_MICRO_PULSES - 1), 0);
        assert_eq!(eternal_day_index(DAY_MICRO_PULSES), 1);
        let w = SolarWindow {
            start: -10,
            end: DAY_MICRO_PULSES - 10,
        };
        assert_eq!(solar_day_index(&w), 0);
    }
}
