use crate::drill_engine::{
    digits::{digit_at, digit_count},
    models::{MultiplicationWork, PartialProduct},
};

/// Partial products for `multiplicand × multiplier`, ones digit first.
///
/// The product itself comes straight from the multiplication; partials and
/// carries are check values the learner writes along the way.
pub fn build(multiplicand: u64, multiplier: u64) -> MultiplicationWork {
    let partials = (0..digit_count(multiplier))
        .map(|position| {
            let multiplier_digit = digit_at(multiplier, position);
            PartialProduct {
                multiplier_digit,
                position,
                value: multiplicand * multiplier_digit,
            }
        })
        .collect();

    MultiplicationWork {
        multiplicand,
        multiplier,
        product: multiplicand * multiplier,
        partials,
    }
}

impl MultiplicationWork {
    pub fn has_single_digit_multiplier(&self) -> bool {
        self.multiplier < 10
    }

    /// Carry written above `position + 1`: `(multiplicand digit × multiplier) / 10`.
    ///
    /// Only meaningful for single-digit multipliers. The carry coming in
    /// from the previous position is deliberately not added.
    pub fn carry_at(&self, position: usize) -> u64 {
        digit_at(self.multiplicand, position) * self.multiplier / 10
    }
}
