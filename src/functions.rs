/// The function registry: a name-to-implementation table checked at call
/// time against a declared `Signature`, plus the 26 built-in functions
/// JMESPath defines. `Runtime::register` lets a caller add their own,
/// checked by the same type lattice.
use std::cmp::Ordering;
use std::collections::HashMap;

use crate::error::RuntimeError;
use crate::interpreter;
use crate::value::{Number, Value};

/// The type lattice used to validate arguments before a built-in runs.
/// `TypedArray` checks every element; `Union` accepts any of its members.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgType {
    Any,
    Null,
    String,
    Number,
    Boolean,
    Object,
    Array,
    ExpRef,
    TypedArray(Box<ArgType>),
    Union(Vec<ArgType>),
}

impl ArgType {
    fn matches(&self, v: &Value) -> bool {
        match self {
            ArgType::Any => true,
            ArgType::Null => matches!(v, Value::Null),
            ArgType::String => matches!(v, Value::String(_)),
            ArgType::Number => matches!(v, Value::Number(_)),
            ArgType::Boolean => matches!(v, Value::Boolean(_)),
            ArgType::Object => matches!(v, Value::Object(_)),
            ArgType::Array => matches!(v, Value::Array(_)),
            ArgType::ExpRef => matches!(v, Value::ExpressionRef(_)),
            ArgType::TypedArray(inner) => match v {
                Value::Array(items) => items.iter().all(|item| inner.matches(item)),
                _ => false,
            },
            ArgType::Union(options) => options.iter().any(|t| t.matches(v)),
        }
    }
}

impl std::fmt::Display for ArgType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArgType::Any => write!(f, "any"),
            ArgType::Null => write!(f, "null"),
            ArgType::String => write!(f, "string"),
            ArgType::Number => write!(f, "number"),
            ArgType::Boolean => write!(f, "boolean"),
            ArgType::Object => write!(f, "object"),
            ArgType::Array => write!(f, "array"),
            ArgType::ExpRef => write!(f, "expression"),
            ArgType::TypedArray(inner) => write!(f, "array[{inner}]"),
            ArgType::Union(options) => {
                let parts: Vec<String> = options.iter().map(|t| t.to_string()).collect();
                write!(f, "{}", parts.join("|"))
            }
        }
    }
}

/// A function's declared arity and argument types. `variadic`, when
/// present, is the type every argument past `params.len()` must satisfy;
/// without it, arity is exactly `params.len()`.
#[derive(Debug, Clone)]
pub struct Signature {
    pub params: Vec<ArgType>,
    pub variadic: Option<ArgType>,
}

impl Signature {
    pub fn exact(params: Vec<ArgType>) -> Signature {
        Signature {
            params,
            variadic: None,
        }
    }

    pub fn with_varargs(params: Vec<ArgType>, variadic: ArgType) -> Signature {
        Signature {
            params,
            variadic: Some(variadic),
        }
    }

    fn expected_arity(&self) -> String {
        match &self.variadic {
            Some(_) => format!("at least {}", self.params.len()),
            None => format!("{}", self.params.len()),
        }
    }

    fn check(&self, name: &str, args: &[Value]) -> Result<(), RuntimeError> {
        let min = self.params.len();
        if args.len() < min || (self.variadic.is_none() && args.len() > min) {
            return Err(RuntimeError::InvalidArity {
                name: name.to_string(),
                expected: self.expected_arity(),
                got: args.len(),
            });
        }
        for (i, (ty, arg)) in self.params.iter().zip(args.iter()).enumerate() {
            if !ty.matches(arg) {
                return Err(RuntimeError::InvalidType {
                    name: name.to_string(),
                    position: i,
                    expected: ty.to_string(),
                    got: arg.type_name().to_string(),
                });
            }
        }
        if let Some(variadic) = &self.variadic {
            for (i, arg) in args.iter().enumerate().skip(min) {
                if !variadic.matches(arg) {
                    return Err(RuntimeError::InvalidType {
                        name: name.to_string(),
                        position: i,
                        expected: variadic.to_string(),
                        got: arg.type_name().to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

type BuiltinFn = fn(&[Value], &Runtime) -> Result<Value, RuntimeError>;

struct FunctionEntry {
    signature: Signature,
    implementation: BuiltinFn,
}

/// The set of functions a `search` call can invoke by name. `Runtime::default()`
/// carries the 26 built-ins; `register` adds (or overrides) entries.
pub struct Runtime {
    functions: HashMap<String, FunctionEntry>,
}

impl Runtime {
    pub fn new() -> Runtime {
        Runtime {
            functions: HashMap::new(),
        }
    }

    pub fn register(&mut self, name: &str, signature: Signature, implementation: BuiltinFn) {
        self.functions.insert(
            name.to_string(),
            FunctionEntry {
                signature,
                implementation,
            },
        );
    }

    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value, RuntimeError> {
        let entry = self
            .functions
            .get(name)
            .ok_or_else(|| RuntimeError::UnknownFunction(name.to_string()))?;
        entry.signature.check(name, args)?;
        (entry.implementation)(args, self)
    }
}

impl Default for Runtime {
    /// A `Runtime` pre-populated with the 26 built-in functions.
    fn default() -> Runtime {
        let mut rt = Runtime::new();
        use ArgType::*;

        rt.register("abs", Signature::exact(vec![Number]), fn_abs);
        rt.register("avg", Signature::exact(vec![TypedArray(Box::new(Number))]), fn_avg);
        rt.register("ceil", Signature::exact(vec![Number]), fn_ceil);
        rt.register("floor", Signature::exact(vec![Number]), fn_floor);
        rt.register(
            "contains",
            Signature::exact(vec![Union(vec![String, Array]), Any]),
            fn_contains,
        );
        rt.register(
            "ends_with",
            Signature::exact(vec![String, String]),
            fn_ends_with,
        );
        rt.register(
            "starts_with",
            Signature::exact(vec![String, String]),
            fn_starts_with,
        );
        rt.register(
            "join",
            Signature::exact(vec![String, TypedArray(Box::new(String))]),
            fn_join,
        );
        rt.register("keys", Signature::exact(vec![Object]), fn_keys);
        rt.register("values", Signature::exact(vec![Object]), fn_values);
        rt.register(
            "length",
            Signature::exact(vec![Union(vec![String, Array, Object])]),
            fn_length,
        );
        rt.register("map", Signature::exact(vec![ExpRef, Array]), fn_map);
        rt.register(
            "max",
            Signature::exact(vec![Union(vec![
                TypedArray(Box::new(Number)),
                TypedArray(Box::new(String)),
            ])]),
            fn_max,
        );
        rt.register(
            "min",
            Signature::exact(vec![Union(vec![
                TypedArray(Box::new(Number)),
                TypedArray(Box::new(String)),
            ])]),
            fn_min,
        );
        rt.register("max_by", Signature::exact(vec![Array, ExpRef]), fn_max_by);
        rt.register("min_by", Signature::exact(vec![Array, ExpRef]), fn_min_by);
        rt.register(
            "merge",
            Signature::with_varargs(vec![], Object),
            fn_merge,
        );
        rt.register("not_null", Signature::with_varargs(vec![], Any), fn_not_null);
        rt.register(
            "reverse",
            Signature::exact(vec![Union(vec![String, Array])]),
            fn_reverse,
        );
        rt.register(
            "sort",
            Signature::exact(vec![Union(vec![
                TypedArray(Box::new(Number)),
                TypedArray(Box::new(String)),
            ])]),
            fn_sort,
        );
        rt.register(
            "sort_by",
            Signature::exact(vec![Array, ExpRef]),
            fn_sort_by,
        );
        rt.register("sum", Signature::exact(vec![TypedArray(Box::new(Number))]), fn_sum);
        rt.register("to_array", Signature::exact(vec![Any]), fn_to_array);
        rt.register("to_number", Signature::exact(vec![Any]), fn_to_number);
        rt.register("to_string", Signature::exact(vec![Any]), fn_to_string);
        rt.register("type", Signature::exact(vec![Any]), fn_type);

        rt
    }
}

/// Evaluates a captured `&expr` value against `subject`. Used by the
/// higher-order functions (`map`, `sort_by`, `max_by`, `min_by`).
fn apply_expr_ref(expr_ref: &Value, subject: &Value, runtime: &Runtime) -> Result<Value, RuntimeError> {
    match expr_ref {
        Value::ExpressionRef(ast) => interpreter::interpret(subject, ast, runtime),
        other => Err(RuntimeError::InvalidType {
            name: "<expr-ref>".to_string(),
            position: 0,
            expected: "expression".to_string(),
            got: other.type_name().to_string(),
        }),
    }
}

fn number_key(name: &str, position: usize, v: &Value) -> Result<f64, RuntimeError> {
    match v {
        Value::Number(n) => Ok(n.as_f64()),
        other => Err(RuntimeError::InvalidType {
            name: name.to_string(),
            position,
            expected: "number".to_string(),
            got: other.type_name().to_string(),
        }),
    }
}

fn sort_key_cmp(name: &str, a: &Value, b: &Value) -> Result<Ordering, RuntimeError> {
    match a.compare(b) {
        Some(ord) => Ok(ord),
        None => Err(RuntimeError::InvalidValue {
            name: name.to_string(),
            message: format!(
                "cannot compare {} and {}: keys must be a consistent type of number or string",
                a.type_name(),
                b.type_name()
            ),
        }),
    }
}

fn fn_abs(args: &[Value], _rt: &Runtime) -> Result<Value, RuntimeError> {
    match &args[0] {
        Value::Number(Number::Int(n)) => Ok(n
            .checked_abs()
            .map(Value::int)
            .unwrap_or_else(|| Value::double((*n as f64).abs()))),
        Value::Number(Number::Double(f)) => Ok(Value::double(f.abs())),
        _ => unreachable!("checked by signature"),
    }
}

fn fn_avg(args: &[Value], _rt: &Runtime) -> Result<Value, RuntimeError> {
    let Value::Array(items) = &args[0] else {
        unreachable!("checked by signature")
    };
    if items.is_empty() {
        return Ok(Value::Null);
    }
    let mut total = 0.0;
    for item in items {
        total += number_key("avg", 0, item)?;
    }
    Ok(Value::double(total / items.len() as f64))
}

fn fn_ceil(args: &[Value], _rt: &Runtime) -> Result<Value, RuntimeError> {
    match &args[0] {
        Value::Number(Number::Int(n)) => Ok(Value::int(*n)),
        Value::Number(Number::Double(f)) => Ok(Value::double(f.ceil())),
        _ => unreachable!("checked by signature"),
    }
}

fn fn_floor(args: &[Value], _rt: &Runtime) -> Result<Value, RuntimeError> {
    match &args[0] {
        Value::Number(Number::Int(n)) => Ok(Value::int(*n)),
        Value::Number(Number::Double(f)) => Ok(Value::double(f.floor())),
        _ => unreachable!("checked by signature"),
    }
}

fn fn_contains(args: &[Value], _rt: &Runtime) -> Result<Value, RuntimeError> {
    let found = match &args[0] {
        Value::Array(items) => items.iter().any(|item| item.values_equal(&args[1])),
        Value::String(s) => match &args[1] {
            Value::String(needle) => s.contains(needle.as_str()),
            _ => false,
        },
        _ => unreachable!("checked by signature"),
    };
    Ok(Value::Boolean(found))
}

fn fn_ends_with(args: &[Value], _rt: &Runtime) -> Result<Value, RuntimeError> {
    let (Value::String(s), Value::String(suffix)) = (&args[0], &args[1]) else {
        unreachable!("checked by signature")
    };
    Ok(Value::Boolean(s.ends_with(suffix.as_str())))
}

fn fn_starts_with(args: &[Value], _rt: &Runtime) -> Result<Value, RuntimeError> {
    let (Value::String(s), Value::String(prefix)) = (&args[0], &args[1]) else {
        unreachable!("checked by signature")
    };
    Ok(Value::Boolean(s.starts_with(prefix.as_str())))
}

fn fn_join(args: &[Value], _rt: &Runtime) -> Result<Value, RuntimeError> {
    let (Value::String(glue), Value::Array(items)) = (&args[0], &args[1]) else {
        unreachable!("checked by signature")
    };
    let parts: Vec<&str> = items
        .iter()
        .map(|v| match v {
            Value::String(s) => s.as_str(),
            _ => unreachable!("checked by signature"),
        })
        .collect();
    Ok(Value::String(parts.join(glue.as_str())))
}

fn fn_keys(args: &[Value], _rt: &Runtime) -> Result<Value, RuntimeError> {
    let Value::Object(entries) = &args[0] else {
        unreachable!("checked by signature")
    };
    Ok(Value::array(
        entries.iter().map(|(k, _)| Value::String(k.clone())).collect(),
    ))
}

fn fn_values(args: &[Value], _rt: &Runtime) -> Result<Value, RuntimeError> {
    let Value::Object(entries) = &args[0] else {
        unreachable!("checked by signature")
    };
    Ok(Value::array(entries.iter().map(|(_, v)| v.clone()).collect()))
}

fn fn_length(args: &[Value], _rt: &Runtime) -> Result<Value, RuntimeError> {
    let n = match &args[0] {
        Value::String(s) => s.chars().count(),
        Value::Array(items) => items.len(),
        Value::Object(entries) => entries.len(),
        _ => unreachable!("checked by signature"),
    };
    Ok(Value::int(n as i64))
}

fn fn_map(args: &[Value], rt: &Runtime) -> Result<Value, RuntimeError> {
    let Value::Array(items) = &args[1] else {
        unreachable!("checked by signature")
    };
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        out.push(apply_expr_ref(&args[0], item, rt)?);
    }
    Ok(Value::array(out))
}

fn fn_max(args: &[Value], _rt: &Runtime) -> Result<Value, RuntimeError> {
    let Value::Array(items) = &args[0] else {
        unreachable!("checked by signature")
    };
    let mut best: Option<&Value> = None;
    for item in items {
        best = match best {
            None => Some(item),
            Some(cur) => match sort_key_cmp("max", item, cur)? {
                Ordering::Greater => Some(item),
                _ => Some(cur),
            },
        };
    }
    Ok(best.cloned().unwrap_or(Value::Null))
}

fn fn_min(args: &[Value], _rt: &Runtime) -> Result<Value, RuntimeError> {
    let Value::Array(items) = &args[0] else {
        unreachable!("checked by signature")
    };
    let mut best: Option<&Value> = None;
    for item in items {
        best = match best {
            None => Some(item),
            Some(cur) => match sort_key_cmp("min", item, cur)? {
                Ordering::Less => Some(item),
                _ => Some(cur),
            },
        };
    }
    Ok(best.cloned().unwrap_or(Value::Null))
}

fn fn_max_by(args: &[Value], rt: &Runtime) -> Result<Value, RuntimeError> {
    let Value::Array(items) = &args[0] else {
        unreachable!("checked by signature")
    };
    let mut best: Option<(Value, &Value)> = None;
    for item in items {
        let key = apply_expr_ref(&args[1], item, rt)?;
        best = match best {
            None => Some((key, item)),
            Some((best_key, best_item)) => match sort_key_cmp("max_by", &key, &best_key)? {
                Ordering::Greater => Some((key, item)),
                _ => Some((best_key, best_item)),
            },
        };
    }
    Ok(best.map(|(_, v)| v.clone()).unwrap_or(Value::Null))
}

fn fn_min_by(args: &[Value], rt: &Runtime) -> Result<Value, RuntimeError> {
    let Value::Array(items) = &args[0] else {
        unreachable!("checked by signature")
    };
    let mut best: Option<(Value, &Value)> = None;
    for item in items {
        let key = apply_expr_ref(&args[1], item, rt)?;
        best = match best {
            None => Some((key, item)),
            Some((best_key, best_item)) => match sort_key_cmp("min_by", &key, &best_key)? {
                Ordering::Less => Some((key, item)),
                _ => Some((best_key, best_item)),
            },
        };
    }
    Ok(best.map(|(_, v)| v.clone()).unwrap_or(Value::Null))
}

fn fn_merge(args: &[Value], _rt: &Runtime) -> Result<Value, RuntimeError> {
    let mut result: Vec<(String, Value)> = Vec::new();
    for arg in args {
        let Value::Object(entries) = arg else {
            unreachable!("checked by signature")
        };
        for (k, v) in entries {
            match result.iter_mut().find(|(rk, _)| rk == k) {
                Some(slot) => slot.1 = v.clone(),
                None => result.push((k.clone(), v.clone())),
            }
        }
    }
    Ok(Value::object(result))
}

fn fn_not_null(args: &[Value], _rt: &Runtime) -> Result<Value, RuntimeError> {
    Ok(args
        .iter()
        .find(|v| !matches!(v, Value::Null))
        .cloned()
        .unwrap_or(Value::Null))
}

fn fn_reverse(args: &[Value], _rt: &Runtime) -> Result<Value, RuntimeError> {
    match &args[0] {
        Value::Array(items) => {
            let mut items = items.clone();
            items.reverse();
            Ok(Value::array(items))
        }
        Value::String(s) => Ok(Value::String(s.chars().rev().collect())),
        _ => unreachable!("checked by signature"),
    }
}

fn fn_sort(args: &[Value], _rt: &Runtime) -> Result<Value, RuntimeError> {
    let Value::Array(items) = &args[0] else {
        unreachable!("checked by signature")
    };
    let mut items = items.clone();
    let mut err = None;
    items.sort_by(|a, b| match sort_key_cmp("sort", a, b) {
        Ok(ord) => ord,
        Err(e) => {
            err.get_or_insert(e);
            Ordering::Equal
        }
    });
    match err {
        Some(e) => Err(e),
        None => Ok(Value::array(items)),
    }
}

fn fn_sort_by(args: &[Value], rt: &Runtime) -> Result<Value, RuntimeError> {
    let Value::Array(items) = &args[0] else {
        unreachable!("checked by signature")
    };
    let mut keyed = Vec::with_capacity(items.len());
    for item in items {
        keyed.push((apply_expr_ref(&args[1], item, rt)?, item.clone()));
    }
    let mut err = None;
    keyed.sort_by(|(a, _), (b, _)| match sort_key_cmp("sort_by", a, b) {
        Ok(ord) => ord,
        Err(e) => {
            err.get_or_insert(e);
            Ordering::Equal
        }
    });
    match err {
        Some(e) => Err(e),
        None => Ok(Value::array(keyed.into_iter().map(|(_, v)| v).collect())),
    }
}

fn fn_sum(args: &[Value], _rt: &Runtime) -> Result<Value, RuntimeError> {
    let Value::Array(items) = &args[0] else {
        unreachable!("checked by signature")
    };
    let mut total = 0.0;
    for item in items {
        total += number_key("sum", 0, item)?;
    }
    Ok(Value::double(total))
}

fn fn_to_array(args: &[Value], _rt: &Runtime) -> Result<Value, RuntimeError> {
    match &args[0] {
        Value::Array(_) => Ok(args[0].clone()),
        other => Ok(Value::array(vec![other.clone()])),
    }
}

fn fn_to_number(args: &[Value], _rt: &Runtime) -> Result<Value, RuntimeError> {
    match &args[0] {
        Value::Number(_) => Ok(args[0].clone()),
        Value::String(s) => {
            if let Ok(i) = s.parse::<i64>() {
                Ok(Value::int(i))
            } else if let Ok(f) = s.parse::<f64>() {
                Ok(Value::double(f))
            } else {
                Ok(Value::Null)
            }
        }
        _ => Ok(Value::Null),
    }
}

fn fn_to_string(args: &[Value], _rt: &Runtime) -> Result<Value, RuntimeError> {
    match &args[0] {
        Value::String(_) => Ok(args[0].clone()),
        other => Ok(Value::String(other.json())),
    }
}

fn fn_type(args: &[Value], _rt: &Runtime) -> Result<Value, RuntimeError> {
    Ok(Value::String(args[0].type_name().to_string()))
}
