//! Focus navigation over a field catalog.
//!
//! The navigator's only state is the focused field. `None` means nothing
//! is focused, which is where a submitted problem lands. Movement takes the
//! catalog and answer sheet as arguments so it always sees the current
//! problem rather than a stale copy.

use serde::{Deserialize, Serialize};

use crate::drill_engine::models::{AnswerSheet, FieldKey, NextStrategy, Problem, Verdict};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Navigator {
    strategy: NextStrategy,
    focus: Option<FieldKey>,
}

impl Navigator {
    pub fn new(strategy: NextStrategy) -> Self {
        Navigator { strategy, focus: None }
    }

    /// Navigator for `problem`, focused on the first catalog entry.
    pub fn for_problem(problem: &Problem, catalog: &[FieldKey]) -> Self {
        Navigator {
            strategy: problem.operation().next_strategy(),
            focus: catalog.first().copied(),
        }
    }

    pub fn strategy(&self) -> NextStrategy {
        self.strategy
    }

    pub fn focus(&self) -> Option<&FieldKey> {
        self.focus.as_ref()
    }

    pub fn jump_to(&mut self, key: FieldKey) {
        self.focus = Some(key);
    }

    pub fn defocus(&mut self) {
        self.focus = None;
    }

    /// Move forward. Returns whether the focus changed.
    pub fn move_next(&mut self, catalog: &[FieldKey], sheet: &AnswerSheet) -> bool {
        let target = match self.strategy {
            NextStrategy::Adjacent        => self.adjacent(catalog, 1),
            NextStrategy::FirstIncomplete => self
                .first_needing_work(catalog.iter(), sheet)
                .or_else(|| self.adjacent(catalog, 1)),
        };
        self.set(target)
    }

    /// Move backward. Returns whether the focus changed.
    pub fn move_previous(&mut self, catalog: &[FieldKey], sheet: &AnswerSheet) -> bool {
        let target = match self.strategy {
            NextStrategy::Adjacent        => self.adjacent(catalog, -1),
            NextStrategy::FirstIncomplete => {
                // walk backwards from the focus, wrapping past the start
                let start = self.index_in(catalog).unwrap_or(0);
                let order = catalog[..start].iter().rev().chain(catalog[start..].iter().rev());
                self.first_needing_work(order, sheet)
                    .or_else(|| self.adjacent(catalog, -1))
            }
        };
        self.set(target)
    }

    fn set(&mut self, target: Option<FieldKey>) -> bool {
        match target {
            Some(key) if self.focus != Some(key) => {
                self.focus = Some(key);
                true
            }
            _ => false,
        }
    }

    fn index_in(&self, catalog: &[FieldKey]) -> Option<usize> {
        let focus = self.focus?;
        catalog.iter().position(|k| *k == focus)
    }

    fn adjacent(&self, catalog: &[FieldKey], offset: isize) -> Option<FieldKey> {
        let idx = self.index_in(catalog)?;
        let target = idx.checked_add_signed(offset)?;
        catalog.get(target).copied()
    }

    fn first_needing_work<'a>(
        &self,
        mut order: impl Iterator<Item = &'a FieldKey>,
        sheet: &AnswerSheet,
    ) -> Option<FieldKey> {
        order
            .find(|k| Some(**k) != self.focus && needs_work(k, sheet))
            .copied()
    }
}

/// Empty, or graded wrong.
fn needs_work(key: &FieldKey, sheet: &AnswerSheet) -> bool {
    sheet.get(key).map_or(true, |a| a.verdict == Verdict::Incorrect)
}

/// Every catalog field has an answer, right or wrong. Gates submission.
pub fn are_all_fields_filled(catalog: &[FieldKey], sheet: &AnswerSheet) -> bool {
    catalog.iter().all(|key| sheet.get(key).is_some())
}
