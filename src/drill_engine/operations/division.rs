use crate::drill_engine::{
    digits::{digit_at, digit_count},
    models::{DivisionStep, DivisionWork},
};

/// Long division, one step per quotient digit, most significant first.
///
/// Leading dividend digits are gathered until the running value reaches
/// the divisor. From then on every brought-down digit gets its own step,
/// so a zero inside the quotient is written rather than skipped. A dividend
/// smaller than the divisor yields a single step with quotient digit 0.
///
/// Panics if `divisor` is 0.
pub fn build(dividend: u64, divisor: u64) -> DivisionWork {
    assert!(divisor > 0, "divisor must be non-zero");

    let mut steps: Vec<DivisionStep> = Vec::new();
    let mut current = 0u64;

    for position in (0..digit_count(dividend)).rev() {
        current = current * 10 + digit_at(dividend, position);
        let is_last = position == 0;
        if current < divisor && !is_last && steps.is_empty() {
            continue;
        }

        let quotient_digit = current / divisor;
        let multiply = quotient_digit * divisor;
        let subtract = current - multiply;
        steps.push(DivisionStep {
            step_number: steps.len(),
            dividend_part: current,
            quotient_digit,
            multiply,
            subtract,
            bring_down: (!is_last).then(|| digit_at(dividend, position - 1)),
        });
        current = subtract;
    }

    DivisionWork {
        dividend,
        divisor,
        quotient: dividend / divisor,
        remainder: dividend % divisor,
        steps,
    }
}
