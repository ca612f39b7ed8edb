/// Micro-pulse count. Signed and 128 bits wide so that instants before
/// genesis and multiply-before-divide steps never overflow.
pub type MicroPulses = i128;

/// Genesis anchor: 2024-05-10T06:45:41.888Z as Unix milliseconds.
pub const GENESIS_UNIX_MS: i64 = 1_715_323_541_888;

/// Micro-pulses per pulse.
pub const MICRO_PER_PULSE: MicroPulses = 1_000_000;

/// Decimal digits kept after the point in the fixed-precision breath duration.
pub const BREATH_SCALE_DIGITS: u32 = 64;

/// Harmonic day length: 17491.270421 pulses, expressed exactly in micro-pulses.
pub const DAY_MICRO_PULSES: MicroPulses = 17_491_270_421;

/// Beats per day on the semantic grid.
pub const BEATS_PER_DAY: i64 = 36;

/// Steps per beat on the semantic grid.
pub const STEPS_PER_BEAT: i64 = 44;

/// Grid pulses per step.
pub const GRID_PULSES_PER_STEP: i64 = 11;

/// Grid pulses per beat (44 × 11 = 484).
pub const GRID_PULSES_PER_BEAT: i64 = STEPS_PER_BEAT * GRID_PULSES_PER_STEP;

/// Grid pulses per day (36 × 484 = 17424).
pub const GRID_PULSES_PER_DAY: i64 = BEATS_PER_DAY * GRID_PULSES_PER_BEAT;

pub const GRID_MICRO_STEP: MicroPulses = GRID_PULSES_PER_STEP as MicroPulses * MICRO_PER_PULSE;
pub const GRID_MICRO_BEAT: MicroPulses = GRID_PULSES_PER_BEAT as MicroPulses * MICRO_PER_PULSE;
pub const GRID_MICRO_DAY: MicroPulses = GRID_PULSES_PER_DAY as MicroPulses * MICRO_PER_PULSE;

/// Equal arcs per day.
pub const ARCS_PER_DAY: i128 = 6;

/// Calendar shape: 6-day weeks, 7 weeks per month, 8 months per year.
pub const DAYS_PER_WEEK: i64 = 6;
pub const WEEKS_PER_MONTH: i64 = 7;
pub const MONTHS_PER_YEAR: i64 = 8;
pub const DAYS_PER_MONTH: i64 = DAYS_PER_WEEK * WEEKS_PER_MONTH;
pub const DAYS_PER_YEAR: i64 = DAYS_PER_MONTH * MONTHS_PER_YEAR;

/// Wall-clock seconds per UTC day.
pub const SECONDS_PER_UTC_DAY: i64 = 86_400;
pub const MILLIS_PER_UTC_DAY: i64 = SECONDS_PER_UTC_DAY * 1_000;
pub const MICROS_PER_UTC_DAY: i64 = SECONDS_PER_UTC_DAY * 1_000_000;

/// Key under which the sunrise offset is persisted.
pub const SUNRISE_OFFSET_KEY: &str = "sunrise_offset_seconds";

pub const ARC_NAMES: [&str; 6] = [
    "Ignition",
    "Integration",
    "Harmonization",
    "Reflection",
    "Purification",
    "Dream",
];

pub const DAY_NAMES: [&str; 6] = [
    "Solhara", "Aquaris", "Flamora", "Verdari", "Sonari", "Kaelith",
];

pub const MONTH_NAMES: [&str; 8] = [
    "Aethon", "Virelai", "Solari", "Amarin", "Kaelus", "Umbriel", "Noctura", "Liora",
];
