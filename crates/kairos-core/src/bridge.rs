//! Wall-clock ↔ pulse conversion.
//!
//! The breath duration `3 + √5` seconds is irrational, so it is held as a
//! scaled big integer `floor((3 + √5) · 10^BREATH_SCALE_DIGITS)` and every
//! conversion is a single multiply-then-divide over big integers. Results
//! leave this module as plain integers; nothing downstream touches a float.

use std::sync::OnceLock;

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{Signed, ToPrimitive};

use crate::constants::{BREATH_SCALE_DIGITS, GENESIS_UNIX_MS, MICRO_PER_PULSE, MicroPulses};

/// log10 of micro-pulses per pulse.
const MICRO_DIGITS: u32 = 6;

/// Breath duration in seconds, scaled by `10^BREATH_SCALE_DIGITS` and floored.
pub fn breath_scaled() -> &'static BigInt {
    static BREATH: OnceLock<BigInt> = OnceLock::new();
    BREATH.get_or_init(|| {
        let scale = BigUint::from(10u32).pow(BREATH_SCALE_DIGITS);
        // isqrt(5 · 10^2k) = floor(√5 · 10^k)
        let root5 = (BigUint::from(5u32) * &scale * &scale).sqrt();
        BigInt::from(BigUint::from(3u32) * scale + root5)
    })
}

/// Breath duration as a decimal string with the full fixed precision.
pub fn breath_decimal() -> String {
    let digits = breath_scaled().to_string();
    let split = digits.len() - BREATH_SCALE_DIGITS as usize;
    format!("{}.{}", &digits[..split], &digits[split..])
}

fn pow10(exp: u32) -> BigInt {
    BigInt::from(10u32).pow(exp)
}

fn saturate_i128(value: &BigInt) -> i128 {
    value.to_i128().unwrap_or(if value.is_negative() {
        i128::MIN
    } else {
        i128::MAX
    })
}

/// Floor `elapsed` (in units of `10^-unit_digits` seconds since genesis) to
/// whole micro-pulses.
fn floor_micro_pulses(elapsed: i128, unit_digits: u32) -> MicroPulses {
    let numerator = BigInt::from(elapsed) * pow10(MICRO_DIGITS + BREATH_SCALE_DIGITS - unit_digits);
    saturate_i128(&numerator.div_floor(breath_scaled()))
}

/// Absolute micro-pulses since genesis for a Unix millisecond instant.
///
/// Floors rather than rounds, so the mapping is monotonic and re-deriving
/// "now" can never step backwards. Instants before genesis yield negative
/// counts; day-index callers clamp.
pub fn to_micro_pulses(unix_ms: i64) -> MicroPulses {
    let elapsed = unix_ms as i128 - GENESIS_UNIX_MS as i128;
    floor_micro_pulses(elapsed, 3)
}

/// Same as [`to_micro_pulses`] for a Unix microsecond instant.
pub fn to_micro_pulses_from_micros(unix_us: i128) -> MicroPulses {
    let elapsed = unix_us - GENESIS_UNIX_MS as i128 * 1_000;
    floor_micro_pulses(elapsed, 6)
}

/// Advisory reverse conversion: the Unix millisecond instant of a
/// micro-pulse count, rounded half-to-even. Display only; the canonical
/// value is always the micro-pulse count.
pub fn to_unix_millis(micro: MicroPulses) -> i64 {
    let numerator = BigInt::from(micro) * breath_scaled();
    let denominator = pow10(MICRO_DIGITS + BREATH_SCALE_DIGITS - 3);
    let elapsed_ms = saturate_i128(&div_round_half_even(&numerator, &denominator));
    let unix_ms = elapsed_ms.saturating_add(GENESIS_UNIX_MS as i128);
    unix_ms.clamp(i64::MIN as i128, i64::MAX as i128) as i64
}

/// Integer division rounding to nearest, ties to even. `den` must be positive.
fn div_round_half_even(num: &BigInt, den: &BigInt) -> BigInt {
    let (q, r) = num.div_mod_floor(den);
    let twice: BigInt = r * 2;
    match twice.cmp(den) {
        std::cmp::Ordering::Less => q,
        std::cmp::Ordering::Greater => q + 1,
        std::cmp::Ordering::Equal if q.is_odd() => q + 1,
        std::cmp::Ordering::Equal => q,
    }
}

/// Whole pulses elapsed (floor), the "eternal pulse".
pub fn pulse_index(micro: MicroPulses) -> i128 {
    micro.div_euclid(MICRO_PER_PULSE)
}

/// Milliseconds from `unix_ms` until the first whole millisecond at or
/// after the next pulse boundary. Always at least 1.
pub fn millis_until_next_pulse(unix_ms: i64) -> i64 {
    let micro = to_micro_pulses(unix_ms);
    let next = (pulse_index(micro) + 1) * MICRO_PER_PULSE;
    let numerator = BigInt::from(next) * breath_scaled();
    let denominator = pow10(MICRO_DIGITS + BREATH_SCALE_DIGITS - 3);
    let boundary = saturate_i128(&Integer::div_ceil(&numerator, &denominator))
        .saturating_add(GENESIS_UNIX_MS as i128);
    (boundary - unix_ms as i128).clamp(1, i64::MAX as i128) as i64
}
