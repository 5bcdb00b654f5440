//! Core library for the `reckon` calculator: a recursive-descent evaluator
//! for `+ - * /` over decimal numbers and parentheses, plus the
//! read-evaluate-print driver used by the binary.

pub mod diagnostics;
pub mod evaluator;
pub mod repl;
pub mod value;

pub use diagnostics::{EvalError, ReckonError};
pub use evaluator::{Evaluator, evaluate};
pub use repl::{Repl, Reply, Session, respond};
pub use value::Number;
