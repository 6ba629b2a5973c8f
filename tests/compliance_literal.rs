/// Backtick-delimited JSON literals (`` `...` ``), of every JSON shape.
mod common;
use common::*;

#[test]
fn scalar_literals() {
    assert_eq!(search("`5`", "null"), int(5));
    assert_eq!(search("`-5`", "null"), int(-5));
    assert_eq!(search("`1.5`", "null"), Value::double(1.5));
    assert_eq!(search("`true`", "null"), Value::Boolean(true));
    assert_eq!(search("`false`", "null"), Value::Boolean(false));
    assert_eq!(search("`null`", "null"), Value::Null);
    assert_eq!(search(r#"`"hello"`"#, "null"), str("hello"));
}

#[test]
fn array_literal() {
    assert_eq!(
        search("`[1, 2, 3]`", "null"),
        arr(vec![int(1), int(2), int(3)])
    );
}

#[test]
fn object_literal() {
    assert_eq!(search(r#"`{"a": 1, "b": 2}`"#, "null"), doc(r#"{"a":1,"b":2}"#));
}

#[test]
fn literal_is_independent_of_the_current_value() {
    assert_eq!(search("`5`", r#"{"a":1}"#), int(5));
}

#[test]
fn literal_as_a_function_argument() {
    assert_eq!(search("contains(`[1,2,3]`, `2`)", "null"), Value::Boolean(true));
}

#[test]
fn nested_literal_structures() {
    assert_eq!(
        search("`{\"a\": [1, 2, {\"b\": true}]}`.a[2].b", "null"),
        Value::Boolean(true)
    );
}

#[test]
fn malformed_literal_json_is_a_compile_error() {
    assert!(matches!(
        compile_err("`{invalid`"),
        jmespath_query::CompileError::InvalidLiteralJson { .. }
    ));
}
