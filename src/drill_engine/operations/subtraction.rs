use tracing::{debug, warn};

use crate::drill_engine::{
    digits::with_ones_digit,
    models::{Regrouping, SubtractionWork},
    operations::{column_steps, regroups, ColumnOutcome, ColumnRule},
};

/// Schoolbook subtraction: borrow 10 from the next column when the top
/// digit (after any borrow it lent) is smaller than the bottom digit.
pub struct BorrowRule;

impl ColumnRule for BorrowRule {
    // minuend ≥ subtrahend, so no borrow survives the last column
    const EMITS_OVERFLOW_COLUMN: bool = false;

    fn compute_column(&self, top: u64, bottom: u64, borrow_in: u64) -> ColumnOutcome {
        if top < bottom + borrow_in {
            ColumnOutcome { result_digit: top + 10 - borrow_in - bottom, carry_out: 1 }
        } else {
            ColumnOutcome { result_digit: top - borrow_in - bottom, carry_out: 0 }
        }
    }
}

/// Put the larger operand first.
pub fn ordered(a: u64, b: u64) -> (u64, u64) {
    if a >= b { (a, b) } else { (b, a) }
}

pub fn build(minuend: u64, subtrahend: u64) -> SubtractionWork {
    assert!(minuend >= subtrahend, "minuend {minuend} < subtrahend {subtrahend}");
    SubtractionWork {
        minuend,
        subtrahend,
        difference: minuend - subtrahend,
        columns: column_steps(&BorrowRule, minuend, subtrahend),
    }
}

/// Build the columns and, if the level requires a borrow and none happened,
/// adjust the operands once so the ones column borrows.
pub fn build_with_regrouping(minuend: u64, subtrahend: u64, regrouping: Regrouping) -> SubtractionWork {
    let work = build(minuend, subtrahend);
    if regrouping == Regrouping::Any || regroups(&work.columns) {
        return work;
    }
    match inject_borrow(minuend, subtrahend) {
        Some((m, s)) => {
            debug!(minuend, subtrahend, adjusted_minuend = m, adjusted_subtrahend = s, "borrow injected");
            build(m, s)
        }
        None => {
            warn!(minuend, subtrahend, "single-digit minuend cannot borrow");
            work
        }
    }
}

/// Give the subtrahend a ones digit one larger than the minuend's, then
/// pull it back by ten if that pushed it past the minuend.
///
/// A minuend ending in 9 first drops its ones digit to 0. Returns `None`
/// when the minuend has a single digit, since nothing can borrow there.
pub fn inject_borrow(minuend: u64, subtrahend: u64) -> Option<(u64, u64)> {
    if minuend < 10 {
        return None;
    }
    let minuend = if minuend % 10 == 9 { with_ones_digit(minuend, 0) } else { minuend };
    let mut subtrahend = with_ones_digit(subtrahend, minuend % 10 + 1);
    if subtrahend > minuend {
        subtrahend -= 10;
    }
    Some((minuend, subtrahend))
}
