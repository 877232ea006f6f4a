//! Shared builders for the level-driven generator.
//!
//! ## RNG ordering
//!
//! `generate_with` draws the problem id first, then the left operand, then
//! the right operand. Tests pin seeds to exact problems, so keep that order.

use rand::Rng;

use crate::drill_engine::{
    config::DigitRange,
    models::{Problem, Work},
};

/// Random operand whose digit count falls in `digits`.
///
/// One-digit operands include 0 unless `nonzero` is set.
pub fn random_operand<R: Rng>(rng: &mut R, digits: DigitRange, nonzero: bool) -> u64 {
    let n = rng.gen_range(digits.min..=digits.max);
    let low = match (n, nonzero) {
        (1, false) => 0,
        (1, true)  => 1,
        _          => 10u64.pow(n - 1),
    };
    let high = 10u64.pow(n) - 1;
    rng.gen_range(low..=high)
}

/// Divisors of 1 make for dull drills; single-digit divisors start at 2.
pub fn random_divisor<R: Rng>(rng: &mut R, digits: DigitRange) -> u64 {
    let n = rng.gen_range(digits.min..=digits.max);
    let low = if n == 1 { 2 } else { 10u64.pow(n - 1) };
    rng.gen_range(low..=10u64.pow(n) - 1)
}

/// Assemble the final [`Problem`] for a generated worked solution.
pub fn problem(problem_id: String, level_id: &str, work: Work) -> Problem {
    Problem {
        problem_id,
        level_id: Some(level_id.to_string()),
        work,
        is_editable: true,
    }
}
