//! Proportional mapping of the harmonic day onto the 36 × 44 semantic grid.
//!
//! The real day (17491.270421 pulses) and the grid day (17424 grid pulses)
//! differ on purpose. Positions are rescaled from one onto the other with a
//! single integer multiply-then-divide; dividing the real day directly by
//! the grid constants would drift beat boundaries off the harmonic day.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DAY_MICRO_PULSES, GRID_MICRO_BEAT, GRID_MICRO_DAY, GRID_MICRO_STEP, MICRO_PER_PULSE,
    MicroPulses, STEPS_PER_BEAT,
};

/// A position on the semantic grid.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridPosition {
    pub beat: i64,
    pub step: i64,
    /// Position inside the step in `[0, 1)`. Display only.
    pub step_fraction: f64,
    /// Grid micro-pulses into the day, after rescaling.
    pub grid_micro: MicroPulses,
}

impl GridPosition {
    pub fn percent_into_step(&self) -> f64 {
        self.step_fraction * 100.0
    }
}

/// Micro-pulses into the current harmonic day (euclidean, never negative).
pub fn micro_into_day(micro: MicroPulses) -> MicroPulses {
    micro.rem_euclid(DAY_MICRO_PULSES)
}

/// Whole pulses into the current harmonic day.
pub fn pulses_into_day(micro: MicroPulses) -> i64 {
    (micro_into_day(micro) / MICRO_PER_PULSE) as i64
}

/// Pulses into the current harmonic day with the micro-pulse fraction.
pub fn pulses_into_day_exact(micro: MicroPulses) -> f64 {
    micro_into_day(micro) as f64 / MICRO_PER_PULSE as f64
}

/// Share of the harmonic day elapsed, in percent.
pub fn percent_into_day(micro: MicroPulses) -> f64 {
    micro_into_day(micro) as f64 / DAY_MICRO_PULSES as f64 * 100.0
}

/// Rescale micro-pulses-into-day onto the grid's micro-pulse day.
/// Truncates; the product stays well inside `i128`.
pub fn rescale_to_grid(micro_into_day: MicroPulses) -> MicroPulses {
    micro_into_day * GRID_MICRO_DAY / DAY_MICRO_PULSES
}

/// Map an absolute micro-pulse count onto (beat, step, fraction).
pub fn grid_position(micro: MicroPulses) -> GridPosition {
    let grid_micro = rescale_to_grid(micro_into_day(micro));

    let beat = grid_micro / GRID_MICRO_BEAT;
    let in_beat = grid_micro % GRID_MICRO_BEAT;
    let step = (in_beat / GRID_MICRO_STEP).clamp(0, (STEPS_PER_BEAT - 1) as i128);
    let in_step = in_beat - step * GRID_MICRO_STEP;

    GridPosition {
        beat: beat as i64,
        step: step as i64,
        step_fraction: in_step as f64 / GRID_MICRO_STEP as f64,
        grid_micro,
    }
}
