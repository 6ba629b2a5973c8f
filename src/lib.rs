//! A JMESPath query engine: compiles an expression once with [`compile`]
//! and evaluates it against any number of [`Value`] documents with
//! [`Expression::search_with_default`] or [`Expression::search`].
//!
//! ```
//! use jmespath_query::{compile, Value};
//!
//! let expr = compile("people[*].first").unwrap();
//! let doc: Value = serde_json::json!({
//!     "people": [{"first": "a"}, {"first": "b"}]
//! })
//! .into();
//! let result = expr.search_with_default(&doc).unwrap();
//! assert_eq!(result, Value::array(vec![Value::String("a".into()), Value::String("b".into())]));
//! ```

mod error;
mod functions;
mod interpreter;
mod lexer;
mod parser;
mod slice;
mod value;

pub use error::{CompileError, RuntimeError};
pub use functions::{ArgType, Runtime, Signature};
pub use parser::{Ast, Comparator};
pub use value::{Number, Value};

/// Compiles a JMESPath expression. The source is borrowed only for the
/// duration of the call; the returned `Expression` owns its own copy and
/// its parsed `Ast`, and may be evaluated against any number of values.
pub fn compile(expression: &str) -> Result<Expression, CompileError> {
    let ast = parser::parse(expression)?;
    Ok(Expression {
        source: expression.to_string(),
        ast,
    })
}

/// A parsed, ready-to-evaluate JMESPath expression.
#[derive(Debug, Clone)]
pub struct Expression {
    source: String,
    ast: Ast,
}

impl Expression {
    /// The original expression text this was compiled from.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// The parsed AST, for callers that want to inspect or re-evaluate it
    /// without going through `search` (e.g. to embed it as a function
    /// argument's expression reference).
    pub fn ast(&self) -> &Ast {
        &self.ast
    }

    /// Evaluates this expression against `value`, dispatching function
    /// calls through `runtime`. Use this to evaluate against a `Runtime`
    /// extended with [`Runtime::register`]; most callers without custom
    /// functions want [`Expression::search_with_default`] instead.
    pub fn search(&self, value: &Value, runtime: &Runtime) -> Result<Value, RuntimeError> {
        interpreter::interpret(value, &self.ast, runtime)
    }

    /// Evaluates this expression against `value` using a fresh
    /// `Runtime::default()` — the 26 built-in functions, nothing more.
    pub fn search_with_default(&self, value: &Value) -> Result<Value, RuntimeError> {
        self.search(value, &Runtime::default())
    }
}

impl PartialEq for Expression {
    fn eq(&self, other: &Self) -> bool {
        self.ast == other.ast
    }
}
