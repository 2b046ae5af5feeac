mod common;

use object_console::value::Value;
use object_console::{EvalError, Outcome, Session};
use pretty_assertions::assert_eq;

#[test]
fn arity_filters_candidates() {
    let mut session = Session::new(common::person());
    // Two arguments never match the one-parameter Say.
    let err = session.eval_line("Say(\"a\", \"b\")").unwrap_err();
    assert!(matches!(err, EvalError::NoOverload { arity: 2, .. }));
    assert_eq!(
        session.eval_line("SayTwoThings(\"a\", \"b\")").unwrap(),
        Outcome::Value(Value::Str("a and b".into()))
    );
}

#[test]
fn declaration_order_decides_between_same_arity_overloads() {
    let mut session = Session::new(common::person());
    // 5 is an i8 literal; it converts into the i16 overload declared first.
    assert_eq!(
        session.eval_line("Pick(5)").unwrap(),
        Outcome::Value(Value::Str("i16:5".into()))
    );
    // 100000 does not fit i16, so the i64 overload is the first to accept.
    assert_eq!(
        session.eval_line("Pick(100000)").unwrap(),
        Outcome::Value(Value::Str("i64:100000".into()))
    );
}

#[test]
fn null_argument_needs_a_nullable_parameter() {
    let mut session = Session::new(common::person());
    assert_eq!(
        session.eval_line("Greet(null)").unwrap(),
        Outcome::Value(Value::Str("hello, stranger".into()))
    );
    assert_eq!(
        session.eval_line("Greet(\"Bart\")").unwrap(),
        Outcome::Value(Value::Str("hello, Bart".into()))
    );
    let err = session.eval_line("Say(null)").unwrap_err();
    assert!(matches!(err, EvalError::NoOverload { .. }));
}

#[test]
fn zero_arity_call_matches_by_name() {
    let mut session = Session::new(common::person());
    assert_eq!(
        session.eval_line("Jump()").unwrap(),
        Outcome::Value(Value::Str("Bart jumped".into()))
    );
}

#[test]
fn string_arguments_convert_to_numeric_parameters() {
    let mut session = Session::new(common::person());
    assert_eq!(
        session.eval_line("Pick(\"7\")").unwrap(),
        Outcome::Value(Value::Str("i16:7".into()))
    );
}
