use tracing::debug;

use crate::drill_engine::{
    digits::with_ones_digit,
    models::{AdditionWork, Regrouping},
    operations::{column_steps, regroups, ColumnOutcome, ColumnRule},
};

/// Schoolbook addition: carry 1 whenever a column reaches 10.
pub struct CarryRule;

impl ColumnRule for CarryRule {
    const EMITS_OVERFLOW_COLUMN: bool = true;

    fn compute_column(&self, top: u64, bottom: u64, carry_in: u64) -> ColumnOutcome {
        let column_sum = top + bottom + carry_in;
        ColumnOutcome {
            result_digit: column_sum % 10,
            carry_out: u64::from(column_sum >= 10),
        }
    }
}

pub fn build(addend1: u64, addend2: u64) -> AdditionWork {
    AdditionWork {
        addend1,
        addend2,
        sum: addend1 + addend2,
        columns: column_steps(&CarryRule, addend1, addend2),
    }
}

/// Build the columns and, if the level requires a carry and none happened,
/// nudge the operands once so the ones column carries.
pub fn build_with_regrouping(addend1: u64, addend2: u64, regrouping: Regrouping) -> AdditionWork {
    let work = build(addend1, addend2);
    if regrouping == Regrouping::Any || regroups(&work.columns) {
        return work;
    }
    let (a, b) = inject_carry(addend1, addend2);
    debug!(addend1, addend2, adjusted1 = a, adjusted2 = b, "carry injected");
    build(a, b)
}

/// Raise the smaller addend's ones digit until the ones column carries.
///
/// If the larger addend ends in 0 no digit can do it, so that ones digit
/// becomes 1 first. Digit counts never change.
pub fn inject_carry(addend1: u64, addend2: u64) -> (u64, u64) {
    let first_is_smaller = addend1 < addend2;
    let (small, large) = if first_is_smaller { (addend1, addend2) } else { (addend2, addend1) };

    let large = if large % 10 == 0 { with_ones_digit(large, 1) } else { large };
    let needed = 10 - large % 10;
    let small = if small % 10 < needed { with_ones_digit(small, needed) } else { small };

    if first_is_smaller { (small, large) } else { (large, small) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drill_engine::digits::{digit_count, from_digits_ones_first};

    #[test]
    fn scenario_157_plus_286() {
        let work = build(157, 286);
        assert_eq!(work.sum, 443);
        let cols: Vec<(u64, u64, u64, u64)> = work
            .columns
            .iter()
            .map(|c| (c.top_digit, c.bottom_digit, c.result_digit, c.carry_out))
            .collect();
        assert_eq!(cols, vec![(7, 6, 3, 1), (5, 8, 4, 1), (1, 2, 4, 0)]);
        assert_eq!(work.columns[1].carry_in, 1);
        assert_eq!(work.columns[2].carry_in, 1);
    }

    #[test]
    fn final_carry_adds_overflow_column() {
        let work = build(95, 7);
        assert_eq!(work.columns.len(), 3);
        let last = &work.columns[2];
        assert_eq!(last.column_position, 2);
        assert_eq!((last.top_digit, last.bottom_digit), (0, 0));
        assert_eq!(last.result_digit, 1);
        assert_eq!(last.carry_out, 0);
        let digits: Vec<u64> = work.columns.iter().map(|c| c.result_digit).collect();
        assert_eq!(from_digits_ones_first(&digits), 102);
    }

    #[test]
    fn zero_plus_zero_is_one_column() {
        let work = build(0, 0);
        assert_eq!(work.columns.len(), 1);
        assert_eq!(work.columns[0].result_digit, 0);
    }

    #[test]
    fn required_carry_is_injected_once() {
        let work = build_with_regrouping(21, 34, Regrouping::Required);
        assert!(regroups(&work.columns));
        assert_eq!(work.sum, work.addend1 + work.addend2);
        // smaller addend's ones digit raised from 1 to 6
        assert_eq!((work.addend1, work.addend2), (26, 34));
    }

    #[test]
    fn carry_injection_handles_trailing_zero() {
        let (a, b) = inject_carry(40, 12);
        assert_eq!((a, b), (41, 19));
        assert!(regroups(&build(a, b).columns));
    }

    #[test]
    fn existing_carry_is_left_alone() {
        let work = build_with_regrouping(19, 1, Regrouping::Required);
        assert_eq!((work.addend1, work.addend2), (19, 1));
    }

    #[test]
    fn injection_keeps_digit_counts() {
        for a in 0..100u64 {
            for b in 0..100u64 {
                let (x, y) = inject_carry(a, b);
                assert_eq!(digit_count(x), digit_count(a), "{a}+{b}");
                assert_eq!(digit_count(y), digit_count(b), "{a}+{b}");
                assert!(regroups(&build(x, y).columns), "{a}+{b} -> {x}+{y}");
            }
        }
    }
}
