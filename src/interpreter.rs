/// Tree-walking evaluator: recursively applies an `Ast` to a `Value`,
/// producing another `Value`. Every case that has no defined result
/// (field access on a non-object, index on a non-array, a projection
/// over a non-array subject, ...) resolves silently to `Null` rather
/// than erroring — the only errors that can escape `interpret` come
/// from function calls, via `Runtime::call`.
use crate::error::RuntimeError;
use crate::functions::Runtime;
use crate::parser::{Ast, Comparator};
use crate::slice;
use crate::value::Value;

pub fn interpret(value: &Value, ast: &Ast, runtime: &Runtime) -> Result<Value, RuntimeError> {
    match ast {
        Ast::Identity => Ok(value.clone()),
        Ast::Field(name) => Ok(value.get_field(name)),
        Ast::Index(i) => Ok(value.get_index(*i)),
        Ast::Literal(v) => Ok(v.clone()),
        Ast::ExpRef(inner) => Ok(Value::ExpressionRef(inner.clone())),

        Ast::Not(inner) => {
            let v = interpret(value, inner, runtime)?;
            Ok(Value::Boolean(!v.is_truthy()))
        }

        Ast::Flatten(inner) => match interpret(value, inner, runtime)? {
            Value::Array(items) => {
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        Value::Array(nested) => out.extend(nested),
                        other => out.push(other),
                    }
                }
                Ok(Value::array(out))
            }
            _ => Ok(Value::Null),
        },

        Ast::ObjectValues(inner) => match interpret(value, inner, runtime)? {
            Value::Object(entries) => {
                Ok(Value::array(entries.into_iter().map(|(_, v)| v).collect()))
            }
            _ => Ok(Value::Null),
        },

        Ast::Slice { start, stop, step } => match value {
            Value::Array(items) => Ok(Value::array(slice::slice(items, *start, *stop, *step))),
            _ => Ok(Value::Null),
        },

        Ast::SubExpr { lhs, rhs } => {
            let l = interpret(value, lhs, runtime)?;
            interpret(&l, rhs, runtime)
        }

        Ast::Or { lhs, rhs } => {
            let l = interpret(value, lhs, runtime)?;
            if l.is_truthy() {
                Ok(l)
            } else {
                interpret(value, rhs, runtime)
            }
        }

        Ast::And { lhs, rhs } => {
            let l = interpret(value, lhs, runtime)?;
            if l.is_truthy() {
                interpret(value, rhs, runtime)
            } else {
                Ok(l)
            }
        }

        Ast::Comparison { op, lhs, rhs } => {
            let l = interpret(value, lhs, runtime)?;
            let r = interpret(value, rhs, runtime)?;
            match op {
                Comparator::Eq => Ok(Value::Boolean(l.values_equal(&r))),
                Comparator::Ne => Ok(Value::Boolean(!l.values_equal(&r))),
                _ => match l.compare(&r) {
                    // Ordering is only defined between two numbers or two
                    // strings; anything else makes `<`, `<=`, `>`, `>=`
                    // resolve to null rather than false.
                    None => Ok(Value::Null),
                    Some(ord) => {
                        let result = match op {
                            Comparator::Lt => ord.is_lt(),
                            Comparator::Le => ord.is_le(),
                            Comparator::Gt => ord.is_gt(),
                            Comparator::Ge => ord.is_ge(),
                            Comparator::Eq | Comparator::Ne => unreachable!(),
                        };
                        Ok(Value::Boolean(result))
                    }
                },
            }
        }

        Ast::Condition { predicate, then } => {
            if interpret(value, predicate, runtime)?.is_truthy() {
                interpret(value, then, runtime)
            } else {
                Ok(Value::Null)
            }
        }

        Ast::Projection { lhs, rhs } => match interpret(value, lhs, runtime)? {
            Value::Array(items) => {
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    let projected = interpret(&item, rhs, runtime)?;
                    if !matches!(projected, Value::Null) {
                        out.push(projected);
                    }
                }
                Ok(Value::array(out))
            }
            _ => Ok(Value::Null),
        },

        // Multi-select forms bypass evaluation entirely on a null subject
        // rather than evaluating each branch against null.
        Ast::MultiList(items) => {
            if matches!(value, Value::Null) {
                return Ok(Value::Null);
            }
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                out.push(interpret(value, item, runtime)?);
            }
            Ok(Value::array(out))
        }

        Ast::MultiHash(pairs) => {
            if matches!(value, Value::Null) {
                return Ok(Value::Null);
            }
            let mut out = Vec::with_capacity(pairs.len());
            for (key, expr) in pairs {
                out.push((key.clone(), interpret(value, expr, runtime)?));
            }
            Ok(Value::object(out))
        }

        Ast::Function(name, args) => {
            let mut evaluated = Vec::with_capacity(args.len());
            for arg in args {
                evaluated.push(interpret(value, arg, runtime)?);
            }
            runtime.call(name, &evaluated)
        }
    }
}
