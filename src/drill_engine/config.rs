//! Level catalog: which operands each level draws and what it demands.
//!
//! A built-in catalog ships as [`DrillConfig::default`]. Callers with their
//! own curriculum load one from JSON:
//!
//! ```json
//! { "levels": [
//!   { "id": "add-carry", "operation": "Addition", "difficulty": "Intermediate",
//!     "left_digits": { "min": 3, "max": 3 }, "right_digits": { "min": 3, "max": 3 },
//!     "regrouping": "required" }
//! ] }
//! ```

use std::collections::HashSet;
use serde::{Deserialize, Serialize};

use crate::drill_engine::{
    error::DrillError,
    models::{DifficultyLevel, Operation, Regrouping},
};

/// Operands never exceed nine digits, which keeps every product in a u64.
pub const MAX_OPERAND_DIGITS: u32 = 9;

/// Inclusive range of operand digit counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitRange {
    pub min: u32,
    pub max: u32,
}

impl DigitRange {
    pub const fn exactly(n: u32) -> Self {
        DigitRange { min: n, max: n }
    }

    pub const fn between(min: u32, max: u32) -> Self {
        DigitRange { min, max }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSpec {
    pub id: String,
    pub operation: Operation,
    pub difficulty: DifficultyLevel,
    /// Dividend, first addend, minuend or multiplicand.
    pub left_digits: DigitRange,
    /// Divisor, second addend, subtrahend or multiplier.
    pub right_digits: DigitRange,
    #[serde(default)]
    pub regrouping: Regrouping,
}

impl LevelSpec {
    fn new(
        id: &str,
        operation: Operation,
        difficulty: DifficultyLevel,
        left_digits: DigitRange,
        right_digits: DigitRange,
        regrouping: Regrouping,
    ) -> Self {
        LevelSpec {
            id: id.to_string(),
            operation,
            difficulty,
            left_digits,
            right_digits,
            regrouping,
        }
    }

    fn invalid(&self, reason: impl Into<String>) -> DrillError {
        DrillError::InvalidLevel { id: self.id.clone(), reason: reason.into() }
    }

    pub fn validate(&self) -> Result<(), DrillError> {
        for (name, range) in [("left_digits", self.left_digits), ("right_digits", self.right_digits)] {
            if range.min == 0 || range.min > range.max {
                return Err(self.invalid(format!("{name} {}..={} is empty", range.min, range.max)));
            }
            if range.max > MAX_OPERAND_DIGITS {
                return Err(self.invalid(format!(
                    "{name} allows {} digits, limit is {MAX_OPERAND_DIGITS}",
                    range.max
                )));
            }
        }
        let regroups = matches!(self.operation, Operation::Addition | Operation::Subtraction);
        if self.regrouping == Regrouping::Required && !regroups {
            return Err(self.invalid(format!("{} has no carrying or borrowing", self.operation)));
        }
        // the larger operand becomes the minuend, and it needs a tens digit to lend from
        let minuend_digits = self.left_digits.min.max(self.right_digits.min);
        if self.operation == Operation::Subtraction
            && self.regrouping == Regrouping::Required
            && minuend_digits < 2
        {
            return Err(self.invalid("borrowing needs a minuend of at least two digits"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrillConfig {
    pub levels: Vec<LevelSpec>,
}

impl Default for DrillConfig {
    fn default() -> Self {
        use DifficultyLevel::*;
        use Operation::*;
        use Regrouping::*;

        let d = DigitRange::exactly;
        let levels = vec![
            LevelSpec::new("add-basic",  Addition,       Beginner,     d(2), d(2), Any),
            LevelSpec::new("add-carry",  Addition,       Intermediate, d(3), d(3), Required),
            LevelSpec::new("add-large",  Addition,       Advanced,     DigitRange::between(4, 5), DigitRange::between(3, 5), Required),
            LevelSpec::new("sub-basic",  Subtraction,    Beginner,     d(2), d(1), Any),
            LevelSpec::new("sub-borrow", Subtraction,    Intermediate, d(3), d(2), Required),
            LevelSpec::new("sub-large",  Subtraction,    Advanced,     DigitRange::between(4, 5), DigitRange::between(3, 4), Required),
            LevelSpec::new("mul-single", Multiplication, Beginner,     d(2), d(1), Any),
            LevelSpec::new("mul-triple", Multiplication, Intermediate, d(3), d(1), Any),
            LevelSpec::new("mul-multi",  Multiplication, Advanced,     d(3), d(2), Any),
            LevelSpec::new("div-single", Division,       Beginner,     d(2), d(1), Any),
            LevelSpec::new("div-long",   Division,       Intermediate, DigitRange::between(3, 4), d(1), Any),
            LevelSpec::new("div-double", Division,       Advanced,     DigitRange::between(4, 5), d(2), Any),
        ];
        DrillConfig { levels }
    }
}

impl DrillConfig {
    /// Parse and validate a level catalog.
    pub fn from_json_str(json: &str) -> Result<Self, DrillError> {
        let config: DrillConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String, DrillError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), DrillError> {
        let mut seen = HashSet::new();
        for level in &self.levels {
            level.validate()?;
            if !seen.insert(level.id.as_str()) {
                return Err(level.invalid("duplicate level id"));
            }
        }
        Ok(())
    }

    pub fn level(&self, id: &str) -> Result<&LevelSpec, DrillError> {
        self.levels
            .iter()
            .find(|l| l.id == id)
            .ok_or_else(|| DrillError::UnknownLevel(id.to_string()))
    }

    pub fn levels_for(&self, operation: Operation) -> impl Iterator<Item = &LevelSpec> {
        self.levels.iter().filter(move |l| l.operation == operation)
    }
}
