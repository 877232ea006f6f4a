//! Unit tests for the `arith_drill_gen` crate.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Determinism | Same seed → identical problem; different seeds → varied operands |
//! | Worked scenarios | 84 ÷ 12, 157 + 286, 23 × 4, 52 − 28 end to end |
//! | Round trip | The correct answer set completes every generated problem |
//! | Navigation | Starting focus, end-of-catalog no-op, submit gating |
//! | Levels | Every built-in level produces a valid, editable problem |

use crate::drill_engine::{
    correct_answers, field_catalog, generate_problem, is_problem_complete, Answer, AnswerSheet,
    DrillConfig, DrillRequest, DrillSession, FieldKey, FieldKind, KeyInput, Operation, Problem,
    SessionOutcome, Verdict, Work,
};

// ── helpers ──────────────────────────────────────────────────────────────────

/// Five seeds that span different RNG states.
const SEEDS: [u64; 5] = [1, 42, 999, 0xDEAD_BEEF, 7];

fn all_level_ids() -> Vec<String> {
    DrillConfig::default().levels.into_iter().map(|l| l.id).collect()
}

fn generate(level: &str, seed: u64) -> Problem {
    generate_problem(&DrillConfig::default(), &DrillRequest::seeded(level, seed))
        .unwrap_or_else(|e| panic!("{level} seed={seed}: {e}"))
}

/// Type the correct answer set through a session, box by box, clicking each
/// box first so the order does not depend on the navigation strategy.
fn solve_by_clicking(problem: Problem) -> DrillSession {
    let answers = correct_answers(&problem);
    let mut session = DrillSession::new(problem);
    for (key, value) in answers {
        session.handle_key(KeyInput::Click(key));
        session.handle_key(KeyInput::Digit(value as u8));
    }
    session
}

// ── determinism ──────────────────────────────────────────────────────────────

#[test]
fn same_seed_produces_identical_problem() {
    for level in all_level_ids() {
        let a = generate(&level, 12345);
        let b = generate(&level, 12345);
        assert_eq!(a, b, "problem mismatch for {level}");
        assert_eq!(field_catalog(&a), field_catalog(&b), "catalog mismatch for {level}");
    }
}

#[test]
fn different_seeds_produce_varied_operands() {
    let mut same_count = 0usize;
    let pairs = 40u64;
    for seed in 0..pairs {
        let a = generate("add-carry", seed);
        let b = generate("add-carry", seed + 500);
        if a.work.operands() == b.work.operands() {
            same_count += 1;
        }
    }
    assert!(
        same_count < pairs as usize / 4,
        "Too many identical problems across different seeds ({same_count}/{pairs})"
    );
}

#[test]
fn entropy_seed_produces_a_valid_problem() {
    let p = generate_problem(&DrillConfig::default(), &DrillRequest::new("mul-single")).unwrap();
    assert!(p.problem_id.starts_with("MUL-"));
    assert!(p.is_editable);
    assert!(!field_catalog(&p).is_empty());
}

// ── worked scenarios ─────────────────────────────────────────────────────────

#[test]
fn scenario_84_div_12_single_step() {
    let p = Problem::division(84, 12).unwrap();
    let Work::Division(w) = &p.work else { panic!("not a division") };
    assert_eq!(w.steps.len(), 1);
    assert_eq!((w.steps[0].quotient_digit, w.steps[0].multiply, w.steps[0].subtract), (7, 84, 0));
    assert_eq!(w.steps[0].bring_down, None);
    assert_eq!((w.quotient, w.remainder), (7, 0));

    assert_eq!(field_catalog(&p).len(), 4);

    // the quotient alone is not enough; the multiply and subtract boxes count too
    let mut partial = DrillSession::new(p.clone());
    partial.handle_key(KeyInput::Digit(7));
    assert_eq!(partial.submit(), SessionOutcome::SubmitRejected { missing: 3 });

    let mut session = solve_by_clicking(p);
    let quotient = FieldKey::new(0, FieldKind::Quotient, 0);
    assert_eq!(session.answers().get(&quotient).map(|a| a.value), Some(7));
    assert_eq!(session.submit(), SessionOutcome::Submitted { complete: true });
}

#[test]
fn scenario_157_plus_286() {
    let p = Problem::addition(157, 286).unwrap();
    let Work::Addition(w) = &p.work else { panic!("not an addition") };
    let summary: Vec<(u64, u64)> = w.columns.iter().map(|c| (c.result_digit, c.carry_out)).collect();
    assert_eq!(summary, vec![(3, 1), (4, 1), (4, 0)]);
    assert_eq!(w.sum, 443);
}

#[test]
fn scenario_23_times_4() {
    let p = Problem::multiplication(23, 4).unwrap();
    let Work::Multiplication(w) = &p.work else { panic!("not a multiplication") };
    assert_eq!(w.product, 92);
    assert_eq!(w.carry_at(0), 1);
    let values: Vec<u64> = correct_answers(&p).into_iter().map(|(_, v)| v).collect();
    // product 2, carry 1, product 9
    assert_eq!(values, vec![2, 1, 9]);
}

#[test]
fn scenario_52_minus_28() {
    let p = Problem::subtraction(52, 28).unwrap();
    let Work::Subtraction(w) = &p.work else { panic!("not a subtraction") };
    assert_eq!((w.columns[0].result_digit, w.columns[0].carry_out), (4, 1));
    assert_eq!((w.columns[1].result_digit, w.columns[1].carry_out), (2, 0));
    assert_eq!(w.difference, 24);
}

// ── round trip ───────────────────────────────────────────────────────────────

#[test]
fn correct_answers_complete_every_generated_problem() {
    for level in all_level_ids() {
        for seed in SEEDS {
            let p = generate(&level, seed);
            let mut sheet = AnswerSheet::new();
            for (key, value) in correct_answers(&p) {
                let mut answer = Answer::new(key, value);
                answer.verdict = Verdict::from_bool(crate::validate_answer(&p, &key, value));
                assert_eq!(answer.verdict, Verdict::Correct, "{level} seed={seed} {key}");
                sheet.upsert(answer);
            }
            assert_eq!(sheet.len(), field_catalog(&p).len());
            assert!(is_problem_complete(&p, &sheet), "{level} seed={seed}: {p}");
        }
    }
}

#[test]
fn session_solved_by_typing_is_complete() {
    for level in all_level_ids() {
        let p = generate(&level, 42);
        let mut session = solve_by_clicking(p);
        assert_eq!(
            session.handle_key(KeyInput::Enter),
            SessionOutcome::Submitted { complete: true },
            "{level}"
        );
        assert!(!session.problem().is_editable);
    }
}

#[test]
fn one_wrong_digit_blocks_completion() {
    let p = Problem::division(9876, 7).unwrap();
    let answers = correct_answers(&p);
    let mut session = DrillSession::new(p);
    for (i, (key, value)) in answers.iter().enumerate() {
        let typed = if i == 3 { (value + 1) % 10 } else { *value };
        session.handle_key(KeyInput::Click(*key));
        session.handle_key(KeyInput::Digit(typed as u8));
    }
    assert_eq!(session.submit(), SessionOutcome::Submitted { complete: false });
    let wrong = session.answers().iter().filter(|a| a.verdict == Verdict::Incorrect).count();
    assert_eq!(wrong, 1);
}

// ── navigation ───────────────────────────────────────────────────────────────

#[test]
fn starting_focus_per_operation() {
    let cases = [
        (Problem::division(84, 12).unwrap(), FieldKey::new(0, FieldKind::Quotient, 0)),
        (Problem::addition(157, 286).unwrap(), FieldKey::new(0, FieldKind::Sum, 0)),
        (Problem::subtraction(52, 28).unwrap(), FieldKey::new(0, FieldKind::Difference, 0)),
        (Problem::multiplication(23, 4).unwrap(), FieldKey::new(0, FieldKind::Product, 0)),
    ];
    for (p, expected) in cases {
        let op = p.operation();
        let session = DrillSession::new(p);
        assert_eq!(session.focus(), Some(&expected), "{op}");
    }
}

#[test]
fn next_at_last_entry_is_noop() {
    for p in [
        Problem::addition(157, 286).unwrap(),
        Problem::subtraction(52, 28).unwrap(),
        Problem::multiplication(23, 4).unwrap(),
    ] {
        let last = *field_catalog(&p).last().unwrap();
        let mut session = DrillSession::new(p);
        session.handle_key(KeyInput::Click(last));
        assert_eq!(session.handle_key(KeyInput::Next), SessionOutcome::Ignored);
        assert_eq!(session.focus(), Some(&last));
    }
}

#[test]
fn division_next_jumps_to_first_empty_box() {
    let p = Problem::division(756, 3).unwrap();
    let catalog = field_catalog(&p);
    let mut session = DrillSession::new(p);
    // answer the fourth box out of order, then ask for "next"
    session.handle_key(KeyInput::Click(catalog[3]));
    session.handle_key(KeyInput::Digit(5));
    session.handle_key(KeyInput::Click(catalog[3]));
    assert_eq!(session.handle_key(KeyInput::Next), SessionOutcome::Moved(catalog[0]));
}

#[test]
fn submit_rejected_while_any_field_is_empty() {
    for level in all_level_ids() {
        let p = generate(&level, 3);
        let answers = correct_answers(&p);
        let mut session = DrillSession::new(p);
        for (key, value) in answers.iter().skip(1) {
            session.enter_value(*key, *value);
        }
        assert_eq!(
            session.handle_key(KeyInput::Enter),
            SessionOutcome::SubmitRejected { missing: 1 },
            "{level}"
        );
    }
}

// ── levels ───────────────────────────────────────────────────────────────────

#[test]
fn every_builtin_level_has_matching_operation() {
    let config = DrillConfig::default();
    for level in &config.levels {
        let p = generate(&level.id, 77);
        assert_eq!(p.operation(), level.operation, "{}", level.id);
        let expected_prefix = match level.operation {
            Operation::Division       => "div-",
            Operation::Addition       => "add-",
            Operation::Subtraction    => "sub-",
            Operation::Multiplication => "mul-",
        };
        assert!(level.id.starts_with(expected_prefix));
    }
}

#[test]
fn multi_digit_multiplier_levels_include_partials() {
    for seed in SEEDS {
        let p = generate("mul-multi", seed);
        let partials = field_catalog(&p)
            .iter()
            .filter(|k| k.kind == FieldKind::Partial)
            .count();
        assert!(partials > 0, "seed={seed}: {p}");
    }
}
