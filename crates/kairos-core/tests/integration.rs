//! Integration tests across the engine:
//! wall clock → pulses → grid / window → calendar → arc.

use kairos_core::{
    DAY_MICRO_PULSES, GENESIS_UNIX_MS, Kairos, MemoryOffsetStore, SunriseOffset, WindowMode,
    arc_index, eternal_day_index, grid_position, read_offset, select_window,
    set_offset_from_local_time, to_micro_pulses, to_unix_millis,
};
use proptest::prelude::*;

/// One breath in whole milliseconds, rounded up.
const BREATH_MS_CEIL: i64 = 5_237;

/// ±300 years around genesis.
const SPAN_MS: i64 = 300 * 365 * 86_400_000;

#[test]
fn genesis_scenario() {
    assert_eq!(to_micro_pulses(GENESIS_UNIX_MS), 0);
    let pos = grid_position(0);
    assert_eq!((pos.beat, pos.step), (0, 0));
    assert_eq!(eternal_day_index(0), 0);

    // exactly one harmonic day later, at the micro-pulse level
    let next_day = DAY_MICRO_PULSES;
    assert_eq!(eternal_day_index(next_day), 1);
    let pos = grid_position(next_day);
    assert_eq!((pos.beat, pos.step), (0, 0));

    // and through the wall clock: the first millisecond at or after that boundary
    let mut ms = to_unix_millis(next_day);
    if to_micro_pulses(ms) < next_day {
        ms += 1;
    }
    let micro = to_micro_pulses(ms);
    assert!(micro >= next_day && micro - next_day < 200);
    assert_eq!(eternal_day_index(micro), 1);
    assert_eq!(eternal_day_index(micro - 200), 0);
}

#[test]
fn sunrise_round_trip() {
    let mut store = MemoryOffsetStore::new();
    set_offset_from_local_time(&mut store, "06:12", 0).unwrap();
    assert_eq!(read_offset(&store).whole_seconds(), 6 * 3600 + 12 * 60);
}

#[test]
fn solar_and_eternal_frames_differ_by_offset() {
    // A day in and well past sunrise: the genesis-tiled solar window starts
    // after the eternal day boundary, so right after the eternal boundary the
    // solar day index lags by one.
    let kairos = Kairos::new(WindowMode::GenesisTiling);
    let offset = SunriseOffset::from_seconds(7 * 3600);
    let boundary_ms = to_unix_millis(10 * DAY_MICRO_PULSES) + 1;
    let m = kairos.moment(boundary_ms, offset);
    assert_eq!(m.eternal.coordinates.day_index, 10);
    assert_eq!(m.solar.coordinates.day_index, 9);
}

#[test]
fn long_span_has_no_drift() {
    // 10,000 harmonic days from genesis is exactly 10,000 · D micro-pulses.
    let far = 10_000 * DAY_MICRO_PULSES;
    let ms = to_unix_millis(far);
    let back = to_micro_pulses(ms);
    assert!((back - far).abs() < 200, "drifted by {}", back - far);
    assert_eq!(eternal_day_index(far), 10_000);
}

proptest! {
    #[test]
    fn monotonic(a in -SPAN_MS..SPAN_MS, b in -SPAN_MS..SPAN_MS) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(
            to_micro_pulses(GENESIS_UNIX_MS + lo) <= to_micro_pulses(GENESIS_UNIX_MS + hi)
        );
    }

    #[test]
    fn reverse_then_forward_is_stable(delta in -SPAN_MS..SPAN_MS) {
        let t = GENESIS_UNIX_MS + delta;
        let p = to_micro_pulses(t);
        let t2 = to_unix_millis(p);
        prop_assert!((t2 - t).abs() <= BREATH_MS_CEIL);
        let p2 = to_micro_pulses(t2);
        let t3 = to_unix_millis(p2);
        let p3 = to_micro_pulses(t3);
        prop_assert_eq!(t3, t2);
        prop_assert_eq!(p3, p2);
    }

    #[test]
    fn grid_in_range(micro in 0i128..DAY_MICRO_PULSES) {
        let pos = grid_position(micro);
        prop_assert!((0..36).contains(&pos.beat));
        prop_assert!((0..44).contains(&pos.step));
        prop_assert!((0.0..1.0).contains(&pos.step_fraction));
    }

    #[test]
    fn window_span_is_one_day(delta in -SPAN_MS..SPAN_MS, offset_us in 0i64..86_400_000_000) {
        let now = GENESIS_UNIX_MS + delta;
        let offset = SunriseOffset::from_micros(offset_us);
        for mode in [WindowMode::Daily, WindowMode::GenesisTiling] {
            let w = select_window(mode, now, offset);
            prop_assert_eq!(w.end - w.start, DAY_MICRO_PULSES);
            prop_assert!(w.contains(to_micro_pulses(now)));
        }
    }

    #[test]
    fn calendar_fields_in_range(d in any::<i64>()) {
        let c = kairos_core::CalendarCoordinates::from_day_index(d);
        prop_assert!((0..336).contains(&c.logic.day_in_year));
        prop_assert!((0..8).contains(&c.logic.month));
        prop_assert!((0..42).contains(&c.logic.day_in_month));
        prop_assert!((0..7).contains(&c.logic.week_in_month));
        prop_assert!((0..6).contains(&c.logic.day_of_week));
        prop_assert_eq!(c.display.day_of_week, c.logic.day_of_week + 1);
    }

    #[test]
    fn arc_non_decreasing(a in 0i128..DAY_MICRO_PULSES, b in 0i128..DAY_MICRO_PULSES) {
        let w = select_window(WindowMode::GenesisTiling, GENESIS_UNIX_MS, SunriseOffset::ZERO);
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(arc_index(&w, w.start + lo) <= arc_index(&w, w.start + hi));
        prop_assert!(arc_index(&w, w.start + hi) <= 5);
    }
}
