use crate::constants::{ARC_NAMES, ARCS_PER_DAY, DAY_MICRO_PULSES, MicroPulses};
use crate::window::SolarWindow;

/// Index of the active arc (0..=5) within the window.
pub fn arc_index(window: &SolarWindow, now: MicroPulses) -> usize {
    let span = window.span();
    let into_day = (now - window.start).rem_euclid(DAY_MICRO_PULSES);
    // into_day == span cannot happen with a well-formed window, clamp anyway
    (into_day * ARCS_PER_DAY / span).clamp(0, ARCS_PER_DAY - 1) as usize
}

pub fn arc_name(window: &SolarWindow, now: MicroPulses) -> &'static str {
    ARC_NAMES[arc_index(window, now)]
}
