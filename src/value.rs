/// The JMESPath value model.
///
/// A closed sum type with exactly the variants the JMESPath specification
/// defines: `Null`, `String`, `Number`, `Boolean`, `Array`, `Object`, and
/// `ExpressionRef` — a captured sub-AST carried as a first-class value,
/// produced only by `&expr` and consumed only by higher-order functions
/// like `sort_by`/`map`.
///
/// `Object` keeps entries in a `Vec<(String, Value)>` rather than a hash
/// map: JMESPath never requires key lookup by arbitrary external code at
/// a rate that would justify the indirection, and preserving insertion
/// order makes `merge` and object construction straightforward even
/// though `keys`/`values` iteration order is unspecified.
use std::cmp::Ordering;
use std::fmt::Write as _;

use crate::parser::Ast;

/// A numeric value: integers and doubles are tracked separately so that
/// integer-producing operations (`length`, literal integers, `to_number`
/// on integral strings) round-trip losslessly and compare equal to their
/// literal form, while mixed integer/double arithmetic promotes to double.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    Int(i64),
    Double(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(n) => n as f64,
            Number::Double(f) => f,
        }
    }

    pub fn is_integer(self) -> bool {
        matches!(self, Number::Int(_))
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Number::Int(a), Number::Int(b)) => a == b,
            _ => self.as_f64() == other.as_f64(),
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (*self, *other) {
            (Number::Int(a), Number::Int(b)) => Some(a.cmp(&b)),
            _ => self.as_f64().partial_cmp(&other.as_f64()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    String(String),
    Number(Number),
    Boolean(bool),
    Array(Vec<Value>),
    Object(Vec<(String, Value)>),
    /// A captured sub-expression, produced by `&expr` and evaluated lazily
    /// by higher-order functions. Equality is structural equality of the
    /// inner AST; never mutated once constructed.
    ExpressionRef(Box<Ast>),
}

impl Value {
    pub fn int(n: i64) -> Value {
        Value::Number(Number::Int(n))
    }

    pub fn double(f: f64) -> Value {
        Value::Number(Number::Double(f))
    }

    pub fn array(items: Vec<Value>) -> Value {
        Value::Array(items)
    }

    pub fn object(entries: Vec<(String, Value)>) -> Value {
        Value::Object(entries)
    }

    /// The JMESPath type name, as returned by the `type` built-in.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::String(_) => "string",
            Value::Number(_) => "number",
            Value::Boolean(_) => "boolean",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::ExpressionRef(_) => "expression",
        }
    }

    /// JMESPath truthiness: booleans as themselves, strings/arrays/objects
    /// truthy iff non-empty, numbers always truthy, `Null` and
    /// `ExpressionRef` always falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::ExpressionRef(_) => false,
            Value::Boolean(b) => *b,
            Value::Number(_) => true,
            Value::String(s) => !s.is_empty(),
            Value::Array(a) => !a.is_empty(),
            Value::Object(o) => !o.is_empty(),
        }
    }

    /// Field access (`.name`). `Null` on any non-`Object` subject or a
    /// missing key — this is always a "no result", never an error.
    pub fn get_field(&self, name: &str) -> Value {
        match self {
            Value::Object(entries) => entries
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.clone())
                .unwrap_or(Value::Null),
            _ => Value::Null,
        }
    }

    /// Index access (`[i]`) with negative-index wraparound. `Null` on any
    /// non-`Array` subject or an out-of-range index.
    pub fn get_index(&self, index: i64) -> Value {
        match self {
            Value::Array(items) => {
                let len = items.len() as i64;
                let i = if index < 0 { index + len } else { index };
                if i < 0 || i >= len {
                    Value::Null
                } else {
                    items[i as usize].clone()
                }
            }
            _ => Value::Null,
        }
    }

    /// Ordering is defined only for `(Number, Number)` and `(String,
    /// String)` (codepoint order). Every other pairing has no defined
    /// comparison; the caller (the interpreter's `Comparison` node) turns
    /// `None` into a `Null` result rather than an error.
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a.partial_cmp(b),
            (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }

    /// Full equality: numeric equality for numbers (so `1 == 1.0`),
    /// element-wise for arrays, key-and-value equality (order-insensitive)
    /// for objects, structural equality of the captured AST for
    /// expression references.
    pub fn values_equal(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.values_equal(y))
            }
            (Value::Object(a), Value::Object(b)) => {
                a.len() == b.len()
                    && a.iter().all(|(k, v)| {
                        b.iter()
                            .find(|(k2, _)| k2 == k)
                            .is_some_and(|(_, v2)| v.values_equal(v2))
                    })
            }
            (Value::ExpressionRef(a), Value::ExpressionRef(b)) => a == b,
            _ => false,
        }
    }

    /// Renders canonical JSON. `ExpressionRef` has no JSON form and is
    /// rendered as `null` — it can only ever appear as an intermediate
    /// value passed to a higher-order function, never as a top-level
    /// `search` result under normal use, since no built-in returns one
    /// directly.
    pub fn json(&self) -> String {
        let mut out = String::new();
        write_json(self, &mut out);
        out
    }
}

fn write_json(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Boolean(true) => out.push_str("true"),
        Value::Boolean(false) => out.push_str("false"),
        Value::Number(Number::Int(n)) => {
            let _ = write!(out, "{n}");
        }
        Value::Number(Number::Double(f)) => {
            if f.is_finite() {
                let _ = write!(out, "{f}");
            } else {
                out.push_str("null");
            }
        }
        Value::String(s) => write_json_string(s, out),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_json(item, out);
            }
            out.push(']');
        }
        Value::Object(entries) => {
            out.push('{');
            for (i, (key, val)) in entries.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_json_string(key, out);
                out.push(':');
                write_json(val, out);
            }
            out.push('}');
        }
        Value::ExpressionRef(_) => out.push_str("null"),
    }
}

fn write_json_string(s: &str, out: &mut String) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

/// Converts a `serde_json::Value` into this crate's `Value`. Used by the
/// lexer to materialize embedded literal JSON (`` `...` ``) and available
/// to callers that already have a `serde_json::Value` document and want
/// to `search` it directly. Decoding JSON from raw bytes/text is otherwise
/// outside this crate's scope — that's the collaborator's job.
impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Value {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::int(i)
                } else {
                    Value::double(n.as_f64().unwrap_or(0.0))
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}
