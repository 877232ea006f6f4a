use std::fmt;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Operation / level metadata
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    Division,
    Addition,
    Subtraction,
    Multiplication,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Operation::Division       => "Long Division",
            Operation::Addition       => "Column Addition",
            Operation::Subtraction    => "Column Subtraction",
            Operation::Multiplication => "Multiplication",
        };
        write!(f, "{}", s)
    }
}

impl Operation {
    pub fn symbol(self) -> char {
        match self {
            Operation::Division       => '÷',
            Operation::Addition       => '+',
            Operation::Subtraction    => '−',
            Operation::Multiplication => '×',
        }
    }

    /// Prefix used for problem ids, e.g. `"DIV-1A2B3C4D"`.
    pub fn id_prefix(self) -> &'static str {
        match self {
            Operation::Division       => "DIV",
            Operation::Addition       => "ADD",
            Operation::Subtraction    => "SUB",
            Operation::Multiplication => "MUL",
        }
    }

    /// How "next"/"previous" walk the field catalog for this operation.
    ///
    /// Division resumes at the first field still needing work; the column
    /// operations step through adjacent boxes.
    pub fn next_strategy(self) -> NextStrategy {
        match self {
            Operation::Division => NextStrategy::FirstIncomplete,
            Operation::Addition | Operation::Subtraction | Operation::Multiplication => {
                NextStrategy::Adjacent
            }
        }
    }

    /// After submission, keyboard next/previous is ignored for these
    /// operations. Clicking a box and auto-advance keep working.
    pub fn locks_navigation_after_submit(self) -> bool {
        matches!(self, Operation::Division | Operation::Addition)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DifficultyLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DifficultyLevel::Beginner     => write!(f, "Beginner"),
            DifficultyLevel::Intermediate => write!(f, "Intermediate"),
            DifficultyLevel::Advanced     => write!(f, "Advanced"),
        }
    }
}

/// Whether a level insists on at least one carry (addition) or borrow
/// (subtraction).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Regrouping {
    #[default]
    Any,
    Required,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NextStrategy {
    /// Move to the neighbouring catalog entry.
    Adjacent,
    /// Jump to the first entry that is empty or graded incorrect.
    FirstIncomplete,
}

// ---------------------------------------------------------------------------
// Worked solutions
// ---------------------------------------------------------------------------

/// One long-division stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivisionStep {
    pub step_number: usize,
    /// Running remainder × 10 + the digit brought into this stage.
    pub dividend_part: u64,
    pub quotient_digit: u64,
    pub multiply: u64,
    pub subtract: u64,
    /// Next dividend digit; `None` on the final stage.
    pub bring_down: Option<u64>,
}

/// One place-value column of an addition or subtraction.
///
/// `carry_out` is the carry (addition) or borrow (subtraction) this column
/// hands to `column_position + 1`; `carry_in` is what it received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnStep {
    pub column_position: usize,
    pub top_digit: u64,
    pub bottom_digit: u64,
    pub result_digit: u64,
    pub carry_out: u64,
    pub carry_in: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialProduct {
    pub multiplier_digit: u64,
    /// Place of `multiplier_digit` in the multiplier (0 = ones).
    pub position: usize,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivisionWork {
    pub dividend: u64,
    pub divisor: u64,
    pub quotient: u64,
    pub remainder: u64,
    /// Solving order: most significant chunk first.
    pub steps: Vec<DivisionStep>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionWork {
    pub addend1: u64,
    pub addend2: u64,
    pub sum: u64,
    /// Ones column first.
    pub columns: Vec<ColumnStep>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtractionWork {
    pub minuend: u64,
    pub subtrahend: u64,
    pub difference: u64,
    /// Ones column first.
    pub columns: Vec<ColumnStep>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiplicationWork {
    pub multiplicand: u64,
    pub multiplier: u64,
    pub product: u64,
    /// One entry per multiplier digit, ones digit first.
    pub partials: Vec<PartialProduct>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum Work {
    Division(DivisionWork),
    Addition(AdditionWork),
    Subtraction(SubtractionWork),
    Multiplication(MultiplicationWork),
}

impl Work {
    pub fn operation(&self) -> Operation {
        match self {
            Work::Division(_)       => Operation::Division,
            Work::Addition(_)       => Operation::Addition,
            Work::Subtraction(_)    => Operation::Subtraction,
            Work::Multiplication(_) => Operation::Multiplication,
        }
    }

    /// `(left, right)` as written in the problem: dividend/divisor,
    /// addends, minuend/subtrahend, multiplicand/multiplier.
    pub fn operands(&self) -> (u64, u64) {
        match self {
            Work::Division(w)       => (w.dividend, w.divisor),
            Work::Addition(w)       => (w.addend1, w.addend2),
            Work::Subtraction(w)    => (w.minuend, w.subtrahend),
            Work::Multiplication(w) => (w.multiplicand, w.multiplier),
        }
    }

    /// Final result. For division this is the quotient; see
    /// [`DivisionWork::remainder`].
    pub fn result(&self) -> u64 {
        match self {
            Work::Division(w)       => w.quotient,
            Work::Addition(w)       => w.sum,
            Work::Subtraction(w)    => w.difference,
            Work::Multiplication(w) => w.product,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub problem_id: String,
    /// Level the problem was drawn from; `None` for hand-built problems.
    pub level_id: Option<String>,
    pub work: Work,
    /// UI state only: cleared once the problem is solved.
    pub is_editable: bool,
}

impl Problem {
    pub fn operation(&self) -> Operation {
        self.work.operation()
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (left, right) = self.work.operands();
        write!(f, "{} {} {}", left, self.operation().symbol(), right)
    }
}

// ---------------------------------------------------------------------------
// Fields and answers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Quotient,
    Multiply,
    Subtract,
    BringDown,
    Sum,
    Carry,
    Difference,
    Borrow,
    Product,
    Partial,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FieldKind::Quotient   => "quotient",
            FieldKind::Multiply   => "multiply",
            FieldKind::Subtract   => "subtract",
            FieldKind::BringDown  => "bring_down",
            FieldKind::Sum        => "sum",
            FieldKind::Carry      => "carry",
            FieldKind::Difference => "difference",
            FieldKind::Borrow     => "borrow",
            FieldKind::Product    => "product",
            FieldKind::Partial    => "partial",
        };
        write!(f, "{}", s)
    }
}

/// Identifies one input box.
///
/// `step` is the division step number or the column position; it is 0 for
/// multiplication, whose boxes are addressed by `position` and
/// `partial_index` alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldKey {
    pub step: usize,
    pub kind: FieldKind,
    pub position: usize,
    pub partial_index: Option<usize>,
}

impl FieldKey {
    pub fn new(step: usize, kind: FieldKind, position: usize) -> Self {
        FieldKey { step, kind, position, partial_index: None }
    }

    pub fn partial(partial_index: usize, position: usize) -> Self {
        FieldKey {
            step: 0,
            kind: FieldKind::Partial,
            position,
            partial_index: Some(partial_index),
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.partial_index {
            Some(idx) => write!(f, "{}[{}]@{}", self.kind, idx, self.position),
            None      => write!(f, "{}#{}@{}", self.kind, self.step, self.position),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    #[default]
    Pending,
    Correct,
    Incorrect,
}

impl Verdict {
    pub fn from_bool(correct: bool) -> Self {
        if correct { Verdict::Correct } else { Verdict::Incorrect }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub key: FieldKey,
    pub value: u64,
    pub verdict: Verdict,
    pub entered_at: DateTime<Utc>,
}

impl Answer {
    pub fn new(key: FieldKey, value: u64) -> Self {
        Answer { key, value, verdict: Verdict::Pending, entered_at: Utc::now() }
    }
}

/// Answers for one problem, at most one per field key, in entry order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSheet {
    answers: Vec<Answer>,
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the answer for `answer.key`.
    pub fn upsert(&mut self, answer: Answer) {
        match self.answers.iter_mut().find(|a| a.key == answer.key) {
            Some(slot) => *slot = answer,
            None       => self.answers.push(answer),
        }
    }

    pub fn get(&self, key: &FieldKey) -> Option<&Answer> {
        self.answers.iter().find(|a| a.key == *key)
    }

    pub fn get_mut(&mut self, key: &FieldKey) -> Option<&mut Answer> {
        self.answers.iter_mut().find(|a| a.key == *key)
    }

    pub fn remove(&mut self, key: &FieldKey) -> Option<Answer> {
        let idx = self.answers.iter().position(|a| a.key == *key)?;
        Some(self.answers.remove(idx))
    }

    pub fn clear(&mut self) {
        self.answers.clear();
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Answer> {
        self.answers.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Answer> {
        self.answers.iter_mut()
    }
}

// ---------------------------------------------------------------------------
// Request type
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrillRequest {
    pub level_id: String,
    pub rng_seed: Option<u64>,
}

impl DrillRequest {
    /// Request a problem from `level_id` seeded from entropy.
    pub fn new(level_id: impl Into<String>) -> Self {
        DrillRequest { level_id: level_id.into(), rng_seed: None }
    }

    pub fn seeded(level_id: impl Into<String>, seed: u64) -> Self {
        DrillRequest { level_id: level_id.into(), rng_seed: Some(seed) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sheet_replaces_answer_for_same_key() {
        let key = FieldKey::new(0, FieldKind::Sum, 0);
        let mut sheet = AnswerSheet::new();
        sheet.upsert(Answer::new(key, 3));
        sheet.upsert(Answer::new(key, 4));
        assert_eq!(sheet.len(), 1);
        assert_eq!(sheet.get(&key).map(|a| a.value), Some(4));
    }

    #[test]
    fn sheet_remove_destroys_answer() {
        let key = FieldKey::new(1, FieldKind::Carry, 0);
        let mut sheet = AnswerSheet::new();
        sheet.upsert(Answer::new(key, 1));
        assert!(sheet.remove(&key).is_some());
        assert!(sheet.get(&key).is_none());
        assert!(sheet.remove(&key).is_none());
    }

    #[test]
    fn partial_keys_differ_by_index() {
        assert_ne!(FieldKey::partial(0, 1), FieldKey::partial(1, 1));
    }

    #[test]
    fn strategies_per_operation() {
        assert_eq!(Operation::Division.next_strategy(), NextStrategy::FirstIncomplete);
        assert_eq!(Operation::Addition.next_strategy(), NextStrategy::Adjacent);
        assert_eq!(Operation::Subtraction.next_strategy(), NextStrategy::Adjacent);
        assert_eq!(Operation::Multiplication.next_strategy(), NextStrategy::Adjacent);
    }
}
