#![no_main]
use arbitrary::{Arbitrary, Unstructured};
use jmespath_query::{compile, Runtime, Value};
use libfuzzer_sys::fuzz_target;

// A small, bounded-depth JSON value generator — deep/huge documents aren't
// interesting here, only shape diversity (nulls, mixed arrays/objects,
// integers vs. doubles) hitting every `interpret` match arm.
#[derive(Debug)]
enum FuzzValue {
    Null,
    Bool(bool),
    Int(i64),
    Double(u8),
    Str(u8),
    Array(Vec<FuzzValue>),
    Object(Vec<(u8, FuzzValue)>),
}

const DOUBLES: &[f64] = &[0.0, -0.0, 0.5, -1.5, f64::NAN, f64::INFINITY, f64::MAX];
const STRINGS: &[&str] = &["", "a", "hello", "café", "42", "-10"];
const KEYS: &[&str] = &["a", "b", "c"];

impl FuzzValue {
    fn arbitrary_depth(u: &mut Unstructured<'_>, depth: usize) -> arbitrary::Result<Self> {
        let max = if depth == 0 { 4 } else { 6 };
        match u.int_in_range(0u8..=max)? {
            0 => Ok(FuzzValue::Null),
            1 => Ok(FuzzValue::Bool(u.arbitrary()?)),
            2 => Ok(FuzzValue::Int(u.arbitrary()?)),
            3 => Ok(FuzzValue::Double(u.arbitrary()?)),
            4 => Ok(FuzzValue::Str(u.arbitrary()?)),
            5 => {
                let len = u.int_in_range(0u8..=4)? as usize;
                let mut items = Vec::with_capacity(len);
                for _ in 0..len {
                    items.push(FuzzValue::arbitrary_depth(u, depth - 1)?);
                }
                Ok(FuzzValue::Array(items))
            }
            _ => {
                let len = u.int_in_range(0u8..=4)? as usize;
                let mut items = Vec::with_capacity(len);
                for _ in 0..len {
                    items.push((u.arbitrary()?, FuzzValue::arbitrary_depth(u, depth - 1)?));
                }
                Ok(FuzzValue::Object(items))
            }
        }
    }

    fn to_value(&self) -> Value {
        match self {
            FuzzValue::Null => Value::Null,
            FuzzValue::Bool(b) => Value::Boolean(*b),
            FuzzValue::Int(n) => Value::int(*n),
            FuzzValue::Double(idx) => Value::double(DOUBLES[*idx as usize % DOUBLES.len()]),
            FuzzValue::Str(idx) => Value::String(STRINGS[*idx as usize % STRINGS.len()].to_string()),
            FuzzValue::Array(items) => Value::array(items.iter().map(FuzzValue::to_value).collect()),
            FuzzValue::Object(items) => Value::object(
                items
                    .iter()
                    .map(|(k, v)| (KEYS[*k as usize % KEYS.len()].to_string(), v.to_value()))
                    .collect(),
            ),
        }
    }
}

impl<'a> Arbitrary<'a> for FuzzValue {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        FuzzValue::arbitrary_depth(u, 3)
    }
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    expr_bytes: Vec<u8>,
    value: FuzzValue,
}

// Any JMESPath expression that compiles must evaluate against any
// JSON-shaped `Value` without panicking — only `Null`, a `Value`, or a
// `RuntimeError` are acceptable outcomes.
fuzz_target!(|input: FuzzInput| {
    let Ok(expr) = std::str::from_utf8(&input.expr_bytes) else {
        return;
    };
    let Ok(compiled) = compile(expr) else {
        return;
    };
    let value = input.value.to_value();
    let _ = compiled.search(&value, &Runtime::default());
});
