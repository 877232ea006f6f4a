use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};
use tracing::debug;

use crate::drill_engine::{
    config::{DrillConfig, LevelSpec},
    error::DrillError,
    helpers::{problem, random_divisor, random_operand},
    models::{DrillRequest, Operation, Problem, Work},
    operations::{addition, division, multiplication, subtraction},
};

/// Generate a problem id from operation + rng, e.g. `"ADD-0F3A91C2"`.
fn make_problem_id(operation: Operation, rng: &mut impl RngCore) -> String {
    format!("{}-{:08X}", operation.id_prefix(), rng.next_u32())
}

/// Core entry point: look up the level and build a problem from it.
///
/// `rng_seed: Some(_)` makes the result reproducible; `None` seeds from
/// entropy.
pub fn generate_problem(config: &DrillConfig, request: &DrillRequest) -> Result<Problem, DrillError> {
    let level = config.level(&request.level_id)?;
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };
    generate_with(&mut rng, level)
}

/// Build a problem for `level` from an injected random source.
pub fn generate_with<R: Rng>(rng: &mut R, level: &LevelSpec) -> Result<Problem, DrillError> {
    level.validate()?;
    let problem_id = make_problem_id(level.operation, rng);

    let work = match level.operation {
        Operation::Division => {
            let dividend = random_operand(rng, level.left_digits, false);
            let divisor = random_divisor(rng, level.right_digits);
            Work::Division(division::build(dividend, divisor))
        }
        Operation::Addition => {
            let a = random_operand(rng, level.left_digits, false);
            let b = random_operand(rng, level.right_digits, false);
            Work::Addition(addition::build_with_regrouping(a, b, level.regrouping))
        }
        Operation::Subtraction => {
            let a = random_operand(rng, level.left_digits, false);
            let b = random_operand(rng, level.right_digits, false);
            let (minuend, subtrahend) = subtraction::ordered(a, b);
            Work::Subtraction(subtraction::build_with_regrouping(minuend, subtrahend, level.regrouping))
        }
        Operation::Multiplication => {
            let multiplicand = random_operand(rng, level.left_digits, false);
            let multiplier = random_operand(rng, level.right_digits, true);
            Work::Multiplication(multiplication::build(multiplicand, multiplier))
        }
    };

    let (left, right) = work.operands();
    debug!(level = %level.id, %problem_id, left, right, "generated problem");
    Ok(problem(problem_id, &level.id, work))
}
