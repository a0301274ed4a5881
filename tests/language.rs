use std::fs;

use shunt::{
    Environment, Error, Session, Value,
    error::{EvalError, LexError},
    evaluate,
};

fn run_lines(lines: &[&str]) -> (Environment, Result<Value, Error>) {
    let mut env = Environment::new();
    let mut last = Ok(Value::Null);

    for line in lines {
        last = evaluate(line, &mut env);
        if last.is_err() {
            break;
        }
    }

    (env, last)
}

fn assert_success(lines: &[&str], expected: Value) {
    match run_lines(lines).1 {
        Ok(value) => assert_eq!(value, expected, "script {lines:?}"),
        Err(e) => panic!("Script {lines:?} failed: {e}"),
    }
}

fn assert_failure(lines: &[&str]) -> Error {
    match run_lines(lines).1 {
        Ok(value) => panic!("Script {lines:?} succeeded with {value} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn assignment_persists_across_lines() {
    assert_success(&["x = 5", "x"], Value::Integer(5));
    assert_success(&["x = 5", "y = x * 2", "y - x"], Value::Integer(5));
}

#[test]
fn assignment_yields_the_stored_value() {
    assert_success(&["x = 1 + 2"], Value::Integer(3));
}

#[test]
fn multiplication_before_addition() {
    assert_success(&["2 + 3 * 4"], Value::Integer(14));
    assert_success(&["(2 + 3) * 4"], Value::Integer(20));
}

#[test]
fn equal_precedence_groups_to_the_right() {
    assert_success(&["10 - 3 - 2"], Value::Integer(9));
    assert_success(&["8 / 4 / 2"], Value::Integer(4));
}

#[test]
fn division_binds_tighter_than_multiplication() {
    assert_success(&["2 * 3 / 6"], Value::Integer(0));
    assert_success(&["8 / 4 * 2"], Value::Integer(4));
}

#[test]
fn negation_of_a_negative() {
    assert_success(&["3 - -2"], Value::Integer(5));
}

#[test]
fn not_binds_loosest() {
    assert_success(&["!true && false"], Value::Boolean(true));
}

#[test]
fn comparison_binds_looser_than_assignment() {
    let (env, result) = run_lines(&["x = 1 < 2"]);

    assert_eq!(result.unwrap(), Value::Boolean(true));
    assert_eq!(env.get("x"), Some(&Value::Integer(1)));
}

#[test]
fn compound_assignments() {
    assert_success(&["x = 5", "x += 2"], Value::Integer(7));
    assert_success(&["x = 7", "x /= 2", "x"], Value::Integer(3));
    assert_success(&["x = 3", "x **= 2"], Value::Integer(9));
    assert_success(&["x = 6", "x &= 3"], Value::Integer(2));
    assert_success(&["x = 1.5", "x *= 2"], Value::Float(3.0));
}

#[test]
fn on_the_fly_assignment() {
    let (env, result) = run_lines(&["2 * (y = 4)"]);

    assert_eq!(result.unwrap(), Value::Integer(8));
    assert_eq!(env.get("y"), Some(&Value::Integer(4)));
}

#[test]
fn on_the_fly_assignment_binds_tighter_than_addition() {
    let (env, result) = run_lines(&["(y = 2 + 3)"]);

    assert_eq!(result.unwrap(), Value::Integer(5));
    assert_eq!(env.get("y"), Some(&Value::Integer(2)));
}

#[test]
fn identifiers_resolve_when_consumed() {
    assert_success(&["y + (y = 3)"], Value::Integer(6));
}

#[test]
fn plus_after_a_closing_paren_is_unary() {
    assert!(matches!(assert_failure(&["(1) + 2"]),
                     Error::Eval(EvalError::MalformedExpression { .. })));
}

#[test]
fn unknown_characters_are_ignored() {
    assert_success(&["4 @+ 1"], Value::Integer(5));
}

#[test]
fn type_mismatch_is_error() {
    let e = assert_failure(&["true + 1"]);
    assert!(matches!(e, Error::Eval(EvalError::TypeMismatch { .. })));
}

#[test]
fn compound_assignment_needs_a_number() {
    assert!(matches!(assert_failure(&["y += 1"]),
                     Error::Eval(EvalError::TypeMismatch { .. })));
    assert!(matches!(assert_failure(&["b = true", "b += 1"]),
                     Error::Eval(EvalError::TypeMismatch { .. })));
}

#[test]
fn compound_assignment_needs_a_numeric_value() {
    for (lines, kept) in [(["x = 1", "x += true"], 1), (["x = 6", "x &= null"], 6)] {
        let (env, result) = run_lines(&lines);

        assert!(matches!(result, Err(Error::Eval(EvalError::TypeMismatch { .. }))),
                "{lines:?} gave {result:?}");
        assert_eq!(env.get("x"), Some(&Value::Integer(kept)));
    }
}

#[test]
fn assignment_to_a_literal_is_error() {
    assert!(matches!(assert_failure(&["5 += 1"]),
                     Error::Eval(EvalError::TypeMismatch { .. })));
}

#[test]
fn division_by_zero_keeps_earlier_state() {
    let mut session = Session::new();

    session.eval_line("x = 5").unwrap();
    let e = session.eval_line("y = x / 0").unwrap_err();

    assert!(matches!(e, Error::Eval(EvalError::Arithmetic { .. })));
    assert_eq!(session.eval_line("x").unwrap(), Value::Integer(5));
    assert_eq!(session.environment().get("y"), None);
}

#[test]
fn assignments_before_a_failure_are_kept() {
    let (env, result) = run_lines(&["x = (a = 2) * (b = true)"]);

    assert!(matches!(result, Err(Error::Eval(EvalError::TypeMismatch { .. }))));
    assert_eq!(env.get("a"), Some(&Value::Integer(2)));
    assert_eq!(env.get("b"), Some(&Value::Boolean(true)));
    assert_eq!(env.get("x"), None);
}

#[test]
fn malformed_expressions() {
    for source in ["", "1 2", "(1 + 2", "1 + 2)", "1 = 2", "* 3"] {
        assert!(matches!(assert_failure(&[source]),
                         Error::Eval(EvalError::MalformedExpression { .. })),
                "{source:?} was not reported as malformed");
    }
}

#[test]
fn lexing_errors() {
    assert!(matches!(assert_failure(&["1.2.3"]),
                     Error::Lex(LexError::TooManyDecimalPoints { .. })));
    assert!(matches!(assert_failure(&["1 +"]),
                     Error::Lex(LexError::IncompleteOperator { .. })));
    assert!(matches!(assert_failure(&["1\n-2"]),
                     Error::Lex(LexError::UnexpectedTokenBeforeMinus { .. })));
}

#[test]
fn error_messages_name_the_phase() {
    let e = assert_failure(&["1 / 0"]);
    assert!(e.to_string().starts_with("evaluation error: arithmetic error"),
            "unexpected message: {e}");

    let e = assert_failure(&["1.2.3"]);
    assert_eq!(e.to_string(),
               "lex error: too many decimal points in '1.2.3' at position 0");
}

#[test]
fn example_script() {
    let script = fs::read_to_string("tests/example.calc").expect("missing file");
    let mut out = Vec::new();
    let mut err = Vec::new();

    let failures = Session::new().run(script.as_bytes(), &mut out, &mut err, None)
                                 .unwrap();

    assert_eq!(failures, 0, "{}", String::from_utf8_lossy(&err));
    assert_eq!(String::from_utf8(out).unwrap(), "3\n10\n16\n256\ntrue\n");
}
