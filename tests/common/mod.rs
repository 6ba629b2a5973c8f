#![allow(dead_code)]
/// Shared helpers for the compliance test suites: parse a JSON document into
/// this crate's `Value`, compile and run a JMESPath expression against it.
pub use jmespath_query::{compile, CompileError, RuntimeError, Value};

pub fn doc(json: &str) -> Value {
    serde_json::from_str::<serde_json::Value>(json)
        .unwrap_or_else(|e| panic!("invalid test fixture JSON {json:?}: {e}"))
        .into()
}

pub fn search(expr: &str, json: &str) -> Value {
    let expression = compile(expr).unwrap_or_else(|e| panic!("compile({expr:?}) failed: {e}"));
    expression
        .search_with_default(&doc(json))
        .unwrap_or_else(|e| panic!("search({expr:?}) failed: {e}"))
}

pub fn search_err(expr: &str, json: &str) -> RuntimeError {
    let expression = compile(expr).unwrap_or_else(|e| panic!("compile({expr:?}) failed: {e}"));
    expression
        .search_with_default(&doc(json))
        .expect_err("expected a RuntimeError")
}

pub fn compile_err(expr: &str) -> CompileError {
    compile(expr).expect_err("expected a CompileError")
}

pub fn int(n: i64) -> Value {
    Value::int(n)
}

pub fn str(s: &str) -> Value {
    Value::String(s.to_string())
}

pub fn arr(items: Vec<Value>) -> Value {
    Value::array(items)
}
