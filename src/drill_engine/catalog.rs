//! Field catalogs: every input box a problem needs, in solving order.
//!
//! The catalog is derived from the problem alone and never stored, so two
//! calls on the same problem always agree. Navigation walks it in order and
//! completion checks require an answer for each entry.

use crate::drill_engine::{
    digits::digit_count,
    models::{
        AdditionWork, DivisionWork, FieldKey, FieldKind, MultiplicationWork, Problem,
        SubtractionWork, Work,
    },
};

pub fn field_catalog(problem: &Problem) -> Vec<FieldKey> {
    match &problem.work {
        Work::Division(w)       => division_fields(w),
        Work::Addition(w)       => addition_fields(w),
        Work::Subtraction(w)    => subtraction_fields(w),
        Work::Multiplication(w) => multiplication_fields(w),
    }
}

/// Per step: quotient, multiply digits (high to low), subtract digits
/// (high to low), then the bring-down if there is one.
fn division_fields(work: &DivisionWork) -> Vec<FieldKey> {
    let mut fields = Vec::new();
    for step in &work.steps {
        let n = step.step_number;
        fields.push(FieldKey::new(n, FieldKind::Quotient, 0));
        for position in (0..digit_count(step.multiply)).rev() {
            fields.push(FieldKey::new(n, FieldKind::Multiply, position));
        }
        for position in (0..digit_count(step.subtract)).rev() {
            fields.push(FieldKey::new(n, FieldKind::Subtract, position));
        }
        if step.bring_down.is_some() {
            fields.push(FieldKey::new(n, FieldKind::BringDown, 0));
        }
    }
    fields
}

/// Per column: the sum digit, then the carry it hands to the next column.
fn addition_fields(work: &AdditionWork) -> Vec<FieldKey> {
    let mut fields = Vec::new();
    for column in &work.columns {
        let c = column.column_position;
        fields.push(FieldKey::new(c, FieldKind::Sum, 0));
        if column.carry_out > 0 {
            fields.push(FieldKey::new(c + 1, FieldKind::Carry, 0));
        }
    }
    fields
}

/// Per column: the borrow mark if the column received one, then the
/// difference digit.
fn subtraction_fields(work: &SubtractionWork) -> Vec<FieldKey> {
    let mut fields = Vec::new();
    for column in &work.columns {
        let c = column.column_position;
        if column.carry_in > 0 {
            fields.push(FieldKey::new(c, FieldKind::Borrow, 0));
        }
        fields.push(FieldKey::new(c, FieldKind::Difference, 0));
    }
    fields
}

/// Partial-product rows (multi-digit multipliers only), then product
/// digits ones first. With a single-digit multiplier each product digit is
/// followed by its carry when one exists, except at the last position.
fn multiplication_fields(work: &MultiplicationWork) -> Vec<FieldKey> {
    let mut fields = Vec::new();

    if !work.has_single_digit_multiplier() {
        for (index, partial) in work.partials.iter().enumerate() {
            for position in 0..digit_count(partial.value) {
                fields.push(FieldKey::partial(index, position));
            }
        }
    }

    let width = digit_count(work.product);
    for position in 0..width {
        fields.push(FieldKey::new(0, FieldKind::Product, position));
        let is_last = position + 1 == width;
        if work.has_single_digit_multiplier() && !is_last && work.carry_at(position) > 0 {
            fields.push(FieldKey::new(0, FieldKind::Carry, position));
        }
    }
    fields
}
