//! Worked demo of every built-in level.
//!
//! Run with: `cargo run --example worked`
//!
//! 1. **One problem per level** with a fixed seed, printed with its worked
//!    solution and the boxes the learner fills in solving order.
//! 2. **A scripted session** that types a wrong digit, submits, fixes it
//!    and submits again.
//!
//! Set `RUST_LOG=arith_drill_gen=debug` to watch generation and grading.

use arith_drill_gen::{
    correct_answers, field_catalog, generate_problem, DrillConfig, DrillRequest, DrillSession,
    KeyInput, Problem, Work,
};
use tracing_subscriber::EnvFilter;

fn print_work(problem: &Problem) {
    match &problem.work {
        Work::Division(w) => {
            for s in &w.steps {
                let bring = s.bring_down.map(|d| format!(", bring down {d}")).unwrap_or_default();
                println!(
                    "    step {}: {} ÷ {} = {}, {} × {} = {}, {} − {} = {}{}",
                    s.step_number, s.dividend_part, w.divisor, s.quotient_digit,
                    s.quotient_digit, w.divisor, s.multiply,
                    s.dividend_part, s.multiply, s.subtract, bring
                );
            }
            println!("    = {} remainder {}", w.quotient, w.remainder);
        }
        Work::Addition(w) => {
            for c in &w.columns {
                println!(
                    "    column {}: {} + {} + {} → {} carry {}",
                    c.column_position, c.top_digit, c.bottom_digit, c.carry_in,
                    c.result_digit, c.carry_out
                );
            }
            println!("    = {}", w.sum);
        }
        Work::Subtraction(w) => {
            for c in &w.columns {
                println!(
                    "    column {}: {} − {} (lent {}) → {} borrow {}",
                    c.column_position, c.top_digit, c.bottom_digit, c.carry_in,
                    c.result_digit, c.carry_out
                );
            }
            println!("    = {}", w.difference);
        }
        Work::Multiplication(w) => {
            for p in &w.partials {
                println!(
                    "    {} × {} (place {}) = {}",
                    w.multiplicand, p.multiplier_digit, p.position, p.value
                );
            }
            println!("    = {}", w.product);
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = DrillConfig::default();

    println!();
    println!("══ Built-in levels ══");
    for level in &config.levels {
        let problem = match generate_problem(&config, &DrillRequest::seeded(level.id.clone(), 42)) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("  {}: {e}", level.id);
                continue;
            }
        };
        println!();
        println!("  [{} — {}]  {}  ID: {}", level.id, level.difficulty, problem, problem.problem_id);
        print_work(&problem);
        let boxes: Vec<String> = correct_answers(&problem)
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect();
        println!("    boxes: {}", boxes.join(" "));
    }

    println!();
    println!("══ Scripted session: 52 − 28 ══");
    let problem = match Problem::subtraction(52, 28) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };
    let tens = field_catalog(&problem)[2];
    let mut session = DrillSession::new(problem);
    for key in [KeyInput::Digit(4), KeyInput::Digit(1), KeyInput::Digit(3), KeyInput::Enter] {
        println!("  {key:?} → {:?}", session.handle_key(key));
    }
    for key in [KeyInput::Click(tens), KeyInput::Digit(2), KeyInput::Enter] {
        println!("  {key:?} → {:?}", session.handle_key(key));
    }
    println!("  complete: {}", session.is_complete());
    println!();
    println!("{}", arith_drill_gen::to_board_state(&session));
}
