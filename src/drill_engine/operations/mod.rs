//! Step generators, one module per operation.
//!
//! Addition and subtraction share the column engine in this file and differ
//! only in their [`ColumnRule`]. Long division has its own routine, and
//! multiplication is expressed through partial products.
//!
//! Every generator here is pure: the same operands always give the same
//! worked solution. Randomness lives in `generator.rs`.

pub mod addition;
pub mod division;
pub mod multiplication;
pub mod subtraction;

use crate::drill_engine::{
    digits::{digit_at, digit_count},
    error::DrillError,
    models::{ColumnStep, Operation, Problem, Regrouping, Work},
};

/// Result digit and outgoing carry/borrow for one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnOutcome {
    pub result_digit: u64,
    pub carry_out: u64,
}

/// Per-column arithmetic for the right-to-left column engine.
pub trait ColumnRule {
    /// A carry left over after the last column becomes one extra column.
    const EMITS_OVERFLOW_COLUMN: bool;

    fn compute_column(&self, top: u64, bottom: u64, carry_in: u64) -> ColumnOutcome;
}

/// Run `rule` over every column of `top` and `bottom`, ones column first.
pub fn column_steps<C: ColumnRule>(rule: &C, top: u64, bottom: u64) -> Vec<ColumnStep> {
    let width = digit_count(top).max(digit_count(bottom));
    let mut columns = Vec::with_capacity(width + 1);
    let mut carry = 0;

    for position in 0..width {
        let top_digit = digit_at(top, position);
        let bottom_digit = digit_at(bottom, position);
        let outcome = rule.compute_column(top_digit, bottom_digit, carry);
        columns.push(ColumnStep {
            column_position: position,
            top_digit,
            bottom_digit,
            result_digit: outcome.result_digit,
            carry_out: outcome.carry_out,
            carry_in: carry,
        });
        carry = outcome.carry_out;
    }

    if carry > 0 && C::EMITS_OVERFLOW_COLUMN {
        columns.push(ColumnStep {
            column_position: width,
            top_digit: 0,
            bottom_digit: 0,
            result_digit: carry,
            carry_out: 0,
            carry_in: carry,
        });
    }
    columns
}

/// True if any column hands a carry/borrow to its neighbour.
pub fn regroups(columns: &[ColumnStep]) -> bool {
    columns.iter().any(|c| c.carry_out > 0)
}

fn direct_id(operation: Operation, left: u64, right: u64) -> String {
    format!("{}-{}-{}", operation.id_prefix(), left, right)
}

fn wrap(operation: Operation, left: u64, right: u64, work: Work) -> Problem {
    Problem {
        problem_id: direct_id(operation, left, right),
        level_id: None,
        work,
        is_editable: true,
    }
}

impl Problem {
    /// Long division of `dividend` by `divisor`.
    pub fn division(dividend: u64, divisor: u64) -> Result<Problem, DrillError> {
        if divisor == 0 {
            return Err(DrillError::ZeroDivisor);
        }
        let work = Work::Division(division::build(dividend, divisor));
        Ok(wrap(Operation::Division, dividend, divisor, work))
    }

    pub fn addition(addend1: u64, addend2: u64) -> Result<Problem, DrillError> {
        Self::addition_with(addend1, addend2, Regrouping::Any)
    }

    /// Addition honouring a level's carry requirement.
    pub fn addition_with(
        addend1: u64,
        addend2: u64,
        regrouping: Regrouping,
    ) -> Result<Problem, DrillError> {
        // Leave headroom for the corrective pass, which can grow an operand by 9.
        let fits = addend1
            .checked_add(addend2)
            .and_then(|s| s.checked_add(18))
            .is_some();
        if !fits {
            return Err(DrillError::Overflow {
                operation: Operation::Addition,
                left: addend1,
                right: addend2,
            });
        }
        let work = addition::build_with_regrouping(addend1, addend2, regrouping);
        let (a, b) = (work.addend1, work.addend2);
        Ok(wrap(Operation::Addition, a, b, Work::Addition(work)))
    }

    /// Subtraction; the operands are swapped when `minuend < subtrahend`.
    pub fn subtraction(minuend: u64, subtrahend: u64) -> Result<Problem, DrillError> {
        Self::subtraction_with(minuend, subtrahend, Regrouping::Any)
    }

    /// Subtraction honouring a level's borrow requirement.
    pub fn subtraction_with(
        minuend: u64,
        subtrahend: u64,
        regrouping: Regrouping,
    ) -> Result<Problem, DrillError> {
        let (minuend, subtrahend) = subtraction::ordered(minuend, subtrahend);
        let work = subtraction::build_with_regrouping(minuend, subtrahend, regrouping);
        let (m, s) = (work.minuend, work.subtrahend);
        Ok(wrap(Operation::Subtraction, m, s, Work::Subtraction(work)))
    }

    pub fn multiplication(multiplicand: u64, multiplier: u64) -> Result<Problem, DrillError> {
        if multiplicand.checked_mul(multiplier).is_none() {
            return Err(DrillError::Overflow {
                operation: Operation::Multiplication,
                left: multiplicand,
                right: multiplier,
            });
        }
        let work = Work::Multiplication(multiplication::build(multiplicand, multiplier));
        Ok(wrap(Operation::Multiplication, multiplicand, multiplier, work))
    }
}
