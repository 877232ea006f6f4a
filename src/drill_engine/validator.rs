//! Per-field checking and whole-problem completion.
//!
//! Expected values are read back out of the worked solution with the same
//! digit arithmetic the generators use. A key that does not belong to the
//! problem has no expected value and never validates.

use crate::drill_engine::{
    catalog::field_catalog,
    digits::{digit_at, digit_count},
    models::{
        AdditionWork, Answer, AnswerSheet, DivisionWork, FieldKey, FieldKind,
        MultiplicationWork, Problem, SubtractionWork, Verdict, Work,
    },
};

/// The value the learner should enter in `key`, if `key` is one of this
/// problem's fields.
pub fn expected_value(problem: &Problem, key: &FieldKey) -> Option<u64> {
    match &problem.work {
        Work::Division(w)       => expected_division(w, key),
        Work::Addition(w)       => expected_addition(w, key),
        Work::Subtraction(w)    => expected_subtraction(w, key),
        Work::Multiplication(w) => expected_multiplication(w, key),
    }
}

/// `digit_at` restricted to the digits `value` actually has.
fn written_digit(value: u64, position: usize) -> Option<u64> {
    (position < digit_count(value)).then(|| digit_at(value, position))
}

fn expected_division(work: &DivisionWork, key: &FieldKey) -> Option<u64> {
    let step = work.steps.get(key.step)?;
    match key.kind {
        FieldKind::Quotient  => Some(step.quotient_digit),
        FieldKind::Multiply  => written_digit(step.multiply, key.position),
        FieldKind::Subtract  => written_digit(step.subtract, key.position),
        FieldKind::BringDown => Some(step.bring_down.unwrap_or(0)),
        _ => None,
    }
}

fn expected_addition(work: &AdditionWork, key: &FieldKey) -> Option<u64> {
    match key.kind {
        FieldKind::Sum => {
            let column = work.columns.get(key.step)?;
            if is_overflow_column(work, key.step) {
                Some(1)
            } else {
                Some(column.result_digit)
            }
        }
        // a carry box is checked against the column that produced it
        FieldKind::Carry => {
            let producer = work.columns.get(key.step.checked_sub(1)?)?;
            (producer.carry_out > 0).then_some(producer.carry_out)
        }
        _ => None,
    }
}

fn is_overflow_column(work: &AdditionWork, position: usize) -> bool {
    position >= digit_count(work.addend1).max(digit_count(work.addend2))
}

fn expected_subtraction(work: &SubtractionWork, key: &FieldKey) -> Option<u64> {
    let column = work.columns.get(key.step)?;
    match key.kind {
        FieldKind::Difference => Some(column.result_digit),
        FieldKind::Borrow     => (column.carry_in > 0).then_some(column.carry_in),
        _ => None,
    }
}

fn expected_multiplication(work: &MultiplicationWork, key: &FieldKey) -> Option<u64> {
    match key.kind {
        FieldKind::Product => written_digit(work.product, key.position),
        FieldKind::Partial => {
            let partial = work.partials.get(key.partial_index?)?;
            written_digit(partial.value, key.position)
        }
        FieldKind::Carry if work.has_single_digit_multiplier() => {
            written_digit(work.product, key.position)?;
            Some(work.carry_at(key.position))
        }
        _ => None,
    }
}

pub fn validate_answer(problem: &Problem, key: &FieldKey, value: u64) -> bool {
    expected_value(problem, key) == Some(value)
}

pub fn grade(problem: &Problem, answer: &Answer) -> Verdict {
    Verdict::from_bool(validate_answer(problem, &answer.key, answer.value))
}

/// Grade every answer on the sheet in place.
pub fn grade_all(problem: &Problem, sheet: &mut AnswerSheet) {
    for answer in sheet.iter_mut() {
        answer.verdict = grade(problem, answer);
    }
}

/// Every catalog field has an answer graded `Correct`.
///
/// Recomputed from the catalog each time; nothing is cached.
pub fn is_problem_complete(problem: &Problem, sheet: &AnswerSheet) -> bool {
    field_catalog(problem)
        .iter()
        .all(|key| sheet.get(key).is_some_and(|a| a.verdict == Verdict::Correct))
}

/// The fully correct answer set, in catalog order.
pub fn correct_answers(problem: &Problem) -> Vec<(FieldKey, u64)> {
    field_catalog(problem)
        .into_iter()
        .filter_map(|key| expected_value(problem, &key).map(|v| (key, v)))
        .collect()
}
