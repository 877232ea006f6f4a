//! Core drill engine: worked solutions, field catalogs, grading and focus.
//!
//! ## Module overview
//!
//! | Module       | Purpose |
//! |--------------|---------|
//! | `models`     | Shared types: problems, steps, field keys, answers, requests |
//! | `digits`     | Base-10 digit extraction and counting |
//! | `operations` | Step generators for division, addition, subtraction, multiplication |
//! | `catalog`    | Ordered list of every input box a problem needs |
//! | `validator`  | Expected values, per-field grading, completion |
//! | `navigation` | Focus state machine with adjacent and first-incomplete strategies |
//! | `session`    | Problem + answers + focus handled as one unit per key press |
//! | `config`     | Level catalog, built in or loaded from JSON |
//! | `helpers`    | Random operand builders used by the generator |
//! | `generator`  | Single entry point `generate_problem()` |
//! | `board`      | JSON snapshot for the rendering layer |
//! | `error`      | `DrillError` |

pub mod board;
pub mod catalog;
pub mod config;
pub mod digits;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod models;
pub mod navigation;
pub mod operations;
pub mod session;
pub mod validator;

// Re-export the public API surface so callers can use
// `drill_engine::generate_problem` without reaching into sub-modules.
pub use board::to_board_state;
pub use catalog::field_catalog;
pub use config::{DigitRange, DrillConfig, LevelSpec};
pub use digits::{digit_at, digit_count};
pub use error::DrillError;
pub use generator::{generate_problem, generate_with};
pub use models::{
    AdditionWork, Answer, AnswerSheet, ColumnStep, DifficultyLevel, DivisionStep, DivisionWork,
    DrillRequest, FieldKey, FieldKind, MultiplicationWork, NextStrategy, Operation,
    PartialProduct, Problem, Regrouping, SubtractionWork, Verdict, Work,
};
pub use navigation::{are_all_fields_filled, Navigator};
pub use session::{DrillSession, KeyInput, SessionOutcome};
pub use validator::{
    correct_answers, expected_value, grade, grade_all, is_problem_complete, validate_answer,
};
