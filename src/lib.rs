//! # arith_drill_gen
//!
//! Step-by-step drills for grade-school arithmetic: long division, column
//! addition with carrying, column subtraction with borrowing, and
//! multiplication with partial products.
//!
//! ## How it works
//!
//! 1. Build a [`Problem`] directly from operands (`Problem::division(84, 12)`)
//!    or draw one from a level with [`generate_problem`] and a
//!    [`DrillRequest`].
//! 2. The problem carries its worked solution: division steps, addition or
//!    subtraction columns, or multiplication partial products.
//! 3. [`field_catalog`] lists every box the learner fills, in solving order.
//!    That list is both the completion checklist and the navigation order.
//! 4. A [`DrillSession`] takes key presses, records [`Answer`]s, moves the
//!    focus and grades everything on submit.
//!
//! ## Key features
//!
//! - **Deterministic**: `rng_seed: Some(u64)` reproduces the exact problem.
//!   Any `rand::Rng` can be injected through [`generate_with`].
//! - **Regrouping levels**: a level marked `Regrouping::Required` always
//!   produces at least one carry or borrow.
//! - **Two navigation strategies**: division jumps to the first box that
//!   is empty or wrong; the column operations move box by box.
//!
//! ## Quick start
//!
//! ```rust
//! use arith_drill_gen::{
//!     field_catalog, generate_problem, DrillConfig, DrillRequest, DrillSession, KeyInput,
//!     Problem, SessionOutcome,
//! };
//!
//! let problem = Problem::addition(157, 286).unwrap();
//! assert_eq!(field_catalog(&problem).len(), 5);
//!
//! let mut session = DrillSession::new(problem);
//! for digit in [3, 1, 4, 1, 4] {
//!     session.handle_key(KeyInput::Digit(digit));
//! }
//! assert_eq!(session.handle_key(KeyInput::Enter), SessionOutcome::Submitted { complete: true });
//!
//! // Level-driven, reproducible:
//! let config = DrillConfig::default();
//! let drill = generate_problem(&config, &DrillRequest::seeded("div-long", 42)).unwrap();
//! println!("{} ({})", drill, drill.problem_id);
//! ```

pub mod drill_engine;

// Convenience re-exports so callers can use `arith_drill_gen::generate_problem`
// directly without reaching into `drill_engine::`.
pub use drill_engine::{
    are_all_fields_filled, correct_answers, digit_at, digit_count, expected_value,
    field_catalog, generate_problem, generate_with, grade, grade_all, is_problem_complete,
    to_board_state, validate_answer, Answer, AnswerSheet, DifficultyLevel, DrillConfig,
    DrillError, DrillRequest, DrillSession, FieldKey, FieldKind, KeyInput, LevelSpec, Navigator,
    NextStrategy, Operation, Problem, Regrouping, SessionOutcome, Verdict, Work,
};

#[cfg(test)]
mod tests;
