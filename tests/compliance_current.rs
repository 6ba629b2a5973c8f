/// The current-node operator `@`.
mod common;
use common::*;

#[test]
fn at_alone_returns_the_whole_document() {
    assert_eq!(search("@", r#"{"a":1}"#), doc(r#"{"a":1}"#));
}

#[test]
fn at_as_a_function_argument() {
    assert_eq!(search("length(@)", r#"[1,2,3]"#), int(3));
}

#[test]
fn at_inside_a_projection_is_the_current_element() {
    assert_eq!(
        search("[*].@", r#"[1,2,3]"#),
        arr(vec![int(1), int(2), int(3)])
    );
}

#[test]
fn at_as_a_filter_subject() {
    assert_eq!(
        search("[?@ > `1`]", r#"[1,2,3]"#),
        arr(vec![int(2), int(3)])
    );
}
