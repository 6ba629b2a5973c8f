/// The built-in function library: arity/type checking plus each
/// function's documented behavior.
mod common;
use common::*;
use jmespath_query::RuntimeError;

#[test]
fn abs_avg_ceil_floor() {
    assert_eq!(search("abs(`-5`)", "null"), int(5));
    assert_eq!(search("avg(`[1,2,3]`)", "null"), Value::double(2.0));
    assert_eq!(search("avg(`[]`)", "null"), Value::Null);
    assert_eq!(search("ceil(`1.1`)", "null"), Value::double(2.0));
    assert_eq!(search("floor(`1.9`)", "null"), Value::double(1.0));
}

#[test]
fn contains_on_array_and_string() {
    assert_eq!(search("contains(`[1,2,3]`, `2`)", "null"), Value::Boolean(true));
    assert_eq!(
        search("contains('hello world', 'world')", "null"),
        Value::Boolean(true)
    );
    assert_eq!(
        search("contains('hello', `5`)", "null"),
        Value::Boolean(false)
    );
}

#[test]
fn contains_on_a_non_string_non_array_subject_is_a_runtime_error() {
    // DESIGN.md's Open Question decision: `contains`'s signature only
    // admits an array or string subject, so any other type fails the
    // type gate rather than degrading to a silent `false`/`Null`.
    assert!(matches!(
        search_err("contains(`5`, `1`)", "null"),
        RuntimeError::InvalidType { .. }
    ));
}

#[test]
fn starts_with_and_ends_with() {
    assert_eq!(search("starts_with('hello', 'he')", "null"), Value::Boolean(true));
    assert_eq!(search("ends_with('hello', 'lo')", "null"), Value::Boolean(true));
}

#[test]
fn join_glues_a_string_array() {
    assert_eq!(search("join(', ', `[\"a\",\"b\",\"c\"]`)", "null"), str("a, b, c"));
}

#[test]
fn keys_and_values() {
    let json = r#"{"a":1,"b":2}"#;
    let mut keys = match search("keys(@)", json) {
        Value::Array(items) => items
            .into_iter()
            .map(|v| match v {
                Value::String(s) => s,
                _ => panic!("expected string key"),
            })
            .collect::<Vec<_>>(),
        _ => panic!("expected array"),
    };
    keys.sort();
    assert_eq!(keys, vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn length_of_string_array_object() {
    assert_eq!(search("length(@)", r#""café""#), int(4));
    assert_eq!(search("length(@)", "[1,2,3]"), int(3));
    assert_eq!(search("length(@)", r#"{"a":1,"b":2}"#), int(2));
}

#[test]
fn map_applies_expression_to_each_element() {
    let json = r#"[{"a":1},{"a":2}]"#;
    assert_eq!(search("map(&a, @)", json), arr(vec![int(1), int(2)]));
}

#[test]
fn max_min_and_their_by_variants() {
    assert_eq!(search("max(`[3,1,2]`)", "null"), int(3));
    assert_eq!(search("min(`[3,1,2]`)", "null"), int(1));
    assert_eq!(search("max(`[]`)", "null"), Value::Null);

    let people = r#"[{"name":"john","age":75},{"name":"jane","age":78}]"#;
    assert_eq!(search("max_by(@, &age).name", people), str("jane"));
    assert_eq!(search("min_by(@, &age).name", people), str("john"));
}

#[test]
fn merge_overrides_left_to_right_and_identity_with_empty() {
    assert_eq!(
        search("merge(a, b)", r#"{"a":{"a":1,"b":2},"b":{"b":3,"c":4}}"#),
        doc(r#"{"a":1,"b":3,"c":4}"#)
    );
    assert_eq!(search("merge(a, `{}`)", r#"{"a":{"x":1}}"#), doc(r#"{"x":1}"#));
}

#[test]
fn not_null_returns_first_non_null_argument() {
    assert_eq!(search("not_null(a, b, c)", r#"{"a":null,"b":null,"c":3}"#), int(3));
}

#[test]
fn reverse_array_and_string() {
    assert_eq!(search("reverse(`[1,2,3]`)", "null"), arr(vec![int(3), int(2), int(1)]));
    assert_eq!(search("reverse('abc')", "null"), str("cba"));
}

#[test]
fn sort_and_sort_by() {
    assert_eq!(search("sort(`[3,1,2]`)", "null"), arr(vec![int(1), int(2), int(3)]));
    let people = r#"[{"age":30},{"age":10},{"age":20}]"#;
    assert_eq!(
        search("sort_by(@, &age)[*].age", people),
        arr(vec![int(10), int(20), int(30)])
    );
}

#[test]
fn sort_rejects_heterogeneous_key_types() {
    // `sort`'s signature itself only admits an all-number or all-string
    // array, so a mixed array is rejected at the type gate before
    // `fn_sort` ever runs.
    let err = search_err("sort(@)", r#"[1, "a"]"#);
    assert!(matches!(err, RuntimeError::InvalidType { .. }));
}

#[test]
fn sort_by_rejects_heterogeneous_key_types() {
    // `sort_by`'s signature admits any array; the mixed-key-type failure
    // is a semantic error discovered while comparing keys, not a type-gate
    // failure, so it surfaces as `InvalidValue`.
    let json = r#"[{"k":1},{"k":"a"}]"#;
    let err = search_err("sort_by(@, &k)", json);
    assert!(matches!(err, RuntimeError::InvalidValue { .. }));
}

#[test]
fn sum_of_numbers() {
    assert_eq!(search("sum(`[1,2,3]`)", "null"), Value::double(6.0));
}

#[test]
fn to_array_to_number_to_string() {
    assert_eq!(search("to_array(`5`)", "null"), arr(vec![int(5)]));
    assert_eq!(search("to_array(`[1]`)", "null"), arr(vec![int(1)]));
    assert_eq!(search("to_number('42')", "null"), int(42));
    assert_eq!(search("to_number('nope')", "null"), Value::Null);
    assert_eq!(search("to_string(`5`)", "null"), str("5"));
    assert_eq!(search("to_string('x')", "null"), str("x"));
}

#[test]
fn type_returns_the_jmespath_type_name() {
    assert_eq!(search("type(@)", "null"), str("null"));
    assert_eq!(search("type(@)", "[1]"), str("array"));
    assert_eq!(search("type(@)", r#"{"a":1}"#), str("object"));
}

#[test]
fn unknown_function_is_a_runtime_error() {
    let err = search_err("unknown(@)", "null");
    assert_eq!(err, RuntimeError::UnknownFunction("unknown".to_string()));
}

#[test]
fn wrong_arity_is_a_runtime_error() {
    assert!(matches!(
        search_err("abs(@, @)", "`1`"),
        RuntimeError::InvalidArity { .. }
    ));
}

#[test]
fn wrong_argument_type_is_a_runtime_error() {
    assert!(matches!(
        search_err("abs(@)", r#""not a number""#),
        RuntimeError::InvalidType { .. }
    ));
}
