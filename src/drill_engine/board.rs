use serde_json::{json, Value};

use crate::drill_engine::{
    digits::digits_ones_first,
    models::{FieldKey, Operation, Verdict, Work},
    session::DrillSession,
};

fn verdict_str(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Pending   => "pending",
        Verdict::Correct   => "correct",
        Verdict::Incorrect => "incorrect",
    }
}

/// Operand digits most significant first, as they are written on paper.
fn written(value: u64) -> Value {
    let mut digits = digits_ones_first(value);
    digits.reverse();
    json!(digits)
}

/// Row label the renderer places a box in.
fn row_for(operation: Operation, key: &FieldKey) -> String {
    use crate::drill_engine::models::FieldKind::*;
    match (operation, key.kind) {
        (_, Carry) | (_, Borrow)   => "regroup".to_string(),
        (_, Partial)               => format!("partial_{}", key.partial_index.unwrap_or(0)),
        (Operation::Division, kind) => format!("step_{}_{}", key.step, kind),
        _                          => "result".to_string(),
    }
}

/// One entry per catalog box, in solving order.
fn boxes(session: &DrillSession) -> Value {
    let operation = session.problem().operation();
    let focus = session.focus();
    let entries = session
        .catalog()
        .iter()
        .map(|key| {
            let answer = session.answers().get(key);
            json!({
                "key": key,
                "label": key.to_string(),
                "row": row_for(operation, key),
                "value": answer.map(|a| a.value),
                "verdict": verdict_str(answer.map_or(Verdict::Pending, |a| a.verdict)),
                "focused": focus == Some(key),
            })
        })
        .collect();
    Value::Array(entries)
}

/// Map a [`DrillSession`] to the JSON snapshot the rendering layer draws.
///
/// Nothing here is needed to grade or navigate; it only mirrors state.
pub fn to_board_state(session: &DrillSession) -> Value {
    let problem = session.problem();
    let (left, right) = problem.work.operands();
    let remainder = match &problem.work {
        Work::Division(w) => Some(w.remainder),
        _ => None,
    };

    json!({
        "problem_id": problem.problem_id,
        "level_id": problem.level_id,
        "operation": problem.operation(),
        "symbol": problem.operation().symbol().to_string(),
        "left": written(left),
        "right": written(right),
        "remainder": if session.is_submitted() { json!(remainder) } else { Value::Null },
        "is_editable": problem.is_editable,
        "is_submitted": session.is_submitted(),
        "is_complete": session.is_complete(),
        "focus": session.focus(),
        "boxes": boxes(session),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drill_engine::{models::Problem, session::KeyInput};

    #[test]
    fn board_lists_every_box_in_order() {
        let session = DrillSession::new(Problem::addition(157, 286).unwrap());
        let board = to_board_state(&session);
        assert_eq!(board["operation"], "Addition");
        assert_eq!(board["left"], json!([1, 5, 7]));
        let boxes = board["boxes"].as_array().unwrap();
        assert_eq!(boxes.len(), 5);
        assert_eq!(boxes[0]["focused"], true);
        assert_eq!(boxes[1]["row"], "regroup");
        assert!(boxes.iter().all(|b| b["verdict"] == "pending" && b["value"].is_null()));
    }

    #[test]
    fn board_reflects_answers_and_submission() {
        let mut session = DrillSession::new(Problem::division(84, 12).unwrap());
        for d in [7, 8, 4, 0] {
            session.handle_key(KeyInput::Digit(d));
        }
        session.submit();
        let board = to_board_state(&session);
        assert_eq!(board["is_complete"], true);
        assert_eq!(board["remainder"], 0);
        assert!(board["focus"].is_null());
        let boxes = board["boxes"].as_array().unwrap();
        assert_eq!(boxes[0]["value"], 7);
        assert_eq!(boxes[0]["row"], "step_0_quotient");
        assert!(boxes.iter().all(|b| b["verdict"] == "correct"));
    }
}
