//! One problem being worked: problem, answers, focus and submission state.
//!
//! These four pieces change together. Every input event goes through
//! [`DrillSession::handle_key`], and a new problem replaces the whole
//! session rather than patching it.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::drill_engine::{
    catalog::field_catalog,
    models::{Answer, AnswerSheet, FieldKey, Problem, Verdict},
    navigation::{are_all_fields_filled, Navigator},
    validator::{grade, grade_all, is_problem_complete},
};

/// Input already decoded by the widget layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyInput {
    Digit(u8),
    Backspace,
    Enter,
    Next,
    Previous,
    Click(FieldKey),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionOutcome {
    Ignored,
    Entered { key: FieldKey, verdict: Verdict },
    Cleared(FieldKey),
    Moved(FieldKey),
    Submitted { complete: bool },
    SubmitRejected { missing: usize },
    /// Enter after submission: the caller should load the next problem.
    NextProblem,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrillSession {
    problem: Problem,
    answers: AnswerSheet,
    navigator: Navigator,
    is_submitted: bool,
}

impl DrillSession {
    pub fn new(problem: Problem) -> Self {
        let navigator = Navigator::for_problem(&problem, &field_catalog(&problem));
        DrillSession {
            problem,
            answers: AnswerSheet::new(),
            navigator,
            is_submitted: false,
        }
    }

    pub fn problem(&self) -> &Problem {
        &self.problem
    }

    pub fn answers(&self) -> &AnswerSheet {
        &self.answers
    }

    pub fn focus(&self) -> Option<&FieldKey> {
        self.navigator.focus()
    }

    pub fn is_submitted(&self) -> bool {
        self.is_submitted
    }

    pub fn catalog(&self) -> Vec<FieldKey> {
        field_catalog(&self.problem)
    }

    pub fn is_complete(&self) -> bool {
        is_problem_complete(&self.problem, &self.answers)
    }

    /// Swap in a new problem, dropping every answer.
    pub fn regenerate(&mut self, problem: Problem) {
        *self = DrillSession::new(problem);
    }

    /// Start the current problem over.
    pub fn reset(&mut self) {
        let mut problem = self.problem.clone();
        problem.is_editable = true;
        self.regenerate(problem);
    }

    /// Record `value` for `key`. Before submission the answer is pending;
    /// afterwards it is graded straight away.
    pub fn enter_value(&mut self, key: FieldKey, value: u64) -> Verdict {
        let mut answer = Answer::new(key, value);
        if self.is_submitted {
            answer.verdict = grade(&self.problem, &answer);
        }
        let verdict = answer.verdict;
        self.answers.upsert(answer);
        if self.is_submitted {
            self.problem.is_editable = !self.is_complete();
        }
        verdict
    }

    pub fn handle_key(&mut self, input: KeyInput) -> SessionOutcome {
        match input {
            KeyInput::Digit(d) => self.type_digit(d),
            KeyInput::Backspace => {
                if !self.problem.is_editable {
                    return SessionOutcome::Ignored;
                }
                let Some(key) = self.navigator.focus().copied() else {
                    return SessionOutcome::Ignored;
                };
                match self.answers.remove(&key) {
                    Some(_) => SessionOutcome::Cleared(key),
                    None    => SessionOutcome::Ignored,
                }
            }
            KeyInput::Enter => {
                if self.is_submitted {
                    SessionOutcome::NextProblem
                } else {
                    self.submit()
                }
            }
            KeyInput::Next | KeyInput::Previous => {
                if self.is_submitted && self.problem.operation().locks_navigation_after_submit() {
                    debug!(problem_id = %self.problem.problem_id, "navigation locked after submit");
                    return SessionOutcome::Ignored;
                }
                let catalog = self.catalog();
                let moved = if input == KeyInput::Next {
                    self.navigator.move_next(&catalog, &self.answers)
                } else {
                    self.navigator.move_previous(&catalog, &self.answers)
                };
                self.moved_outcome(moved)
            }
            KeyInput::Click(key) => {
                self.navigator.jump_to(key);
                SessionOutcome::Moved(key)
            }
        }
    }

    /// Fill the focused box and auto-advance.
    fn type_digit(&mut self, digit: u8) -> SessionOutcome {
        if digit > 9 || !self.problem.is_editable {
            return SessionOutcome::Ignored;
        }
        let Some(key) = self.navigator.focus().copied() else {
            return SessionOutcome::Ignored;
        };
        let verdict = self.enter_value(key, u64::from(digit));
        let catalog = self.catalog();
        self.navigator.move_next(&catalog, &self.answers);
        SessionOutcome::Entered { key, verdict }
    }

    fn moved_outcome(&self, moved: bool) -> SessionOutcome {
        match (moved, self.navigator.focus()) {
            (true, Some(key)) => SessionOutcome::Moved(*key),
            _ => SessionOutcome::Ignored,
        }
    }

    /// Grade everything if every box has a value; otherwise refuse.
    pub fn submit(&mut self) -> SessionOutcome {
        let catalog = self.catalog();
        if !are_all_fields_filled(&catalog, &self.answers) {
            let missing = catalog.iter().filter(|k| self.answers.get(k).is_none()).count();
            debug!(problem_id = %self.problem.problem_id, missing, "submit rejected");
            return SessionOutcome::SubmitRejected { missing };
        }

        grade_all(&self.problem, &mut self.answers);
        let complete = is_problem_complete(&self.problem, &self.answers);
        self.is_submitted = true;
        self.problem.is_editable = !complete;
        self.navigator.defocus();
        debug!(problem_id = %self.problem.problem_id, complete, "submitted");
        SessionOutcome::Submitted { complete }
    }
}
