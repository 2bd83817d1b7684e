// String hash and golden-ratio compression

use crate::TABLE_SIZE;

/// Starting value of the hash accumulator.
pub const HASH_SEED: i64 = 37;

/// Multiplier applied to the accumulator for every code unit.
const MULT_ACC: i64 = 54059;

/// Multiplier applied to each code unit before it is mixed in.
const MULT_CHAR: i64 = 76963;

/// Modulus of the final hash value.
pub const HASH_MODULUS: i64 = 86969;

/// Bits the accumulator is shifted left after each mixing step.
const SHIFT: u32 = 5;

/// Reciprocal of the golden ratio, `(sqrt(5) - 1) / 2`.
fn phi_inverse() -> f64 {
    (5f64.sqrt() - 1.0) / 2.0
}

/// Hash a word into `[0, HASH_MODULUS)`.
///
/// For each UTF-16 code unit `c`:
/// `acc = ((acc * 54059) ^ (c * 76963)) << 5`, on a wrapping `i64`.
/// The overflow is part of the mixing and must not be checked. The signed
/// remainder of the accumulator is then normalized to a non-negative value.
pub fn hash_word(word: &str) -> i64 {
    let acc = word.encode_utf16().fold(HASH_SEED, |acc, unit| {
        (acc.wrapping_mul(MULT_ACC) ^ i64::from(unit).wrapping_mul(MULT_CHAR)) << SHIFT
    });
    acc.rem_euclid(HASH_MODULUS)
}

/// Map a hash value to a slot index in `[0, TABLE_SIZE)`.
///
/// Knuth's multiplicative method: take the fractional part of
/// `hash * phi^-1` and scale it by the table size.
pub fn compress(hash: i64) -> usize {
    let scaled = hash as f64 * phi_inverse();
    let frac = scaled - scaled.floor();
    let index = (TABLE_SIZE as f64 * frac).floor() as usize;
    // frac < 1.0, but guard against rounding up to TABLE_SIZE
    index.min(TABLE_SIZE - 1)
}

/// Slot index of a word: `compress(hash_word(word))`.
pub fn slot_of(word: &str) -> usize {
    compress(hash_word(word))
}
