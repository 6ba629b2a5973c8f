/// The pipe operator (`|`): evaluates the RHS against the LHS's result,
/// stopping any projection the LHS was part of (unlike `.`, which would
/// continue distributing over a projection).
mod common;
use common::*;

#[test]
fn pipe_threads_the_result_of_the_left_into_the_right() {
    assert_eq!(search("a | b", r#"{"a":{"b":1}}"#), int(1));
}

#[test]
fn pipe_stops_a_projection_the_dot_operator_would_continue() {
    // people[*].first | [0] indexes into the *projected array*, not into
    // each projected element (which `.` would do).
    let json = r#"{"people":[{"first":"a"},{"first":"b"}]}"#;
    assert_eq!(search("people[*].first | [0]", json), str("a"));
}

#[test]
fn pipe_after_a_flatten_projection() {
    assert_eq!(search("[] | [0]", "[[1,2],[3,4]]"), int(1));
}

#[test]
fn pipe_is_left_associative_and_chains() {
    let json = r#"{"a":{"b":{"c":42}}}"#;
    assert_eq!(search("a | b | c", json), int(42));
}

#[test]
fn pipe_binds_looser_than_or_and_and() {
    // `a || b | c`: `||` binds first (LBP 2 > pipe's LBP 1), so this is
    // `(a || b) | c`.
    let json = r#"{"a":null,"b":{"c":5},"c":99}"#;
    assert_eq!(search("a || b | c", json), int(5));
}
