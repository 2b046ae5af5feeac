//! Explore and manipulate a live object graph from a text prompt.
//!
//! An input line is one chained expression — member reads (`Pet.Name`),
//! method calls (`Say("hi")`), indexing (`Scores[0]`) and assignment
//! (`Name="Carl"`) — evaluated against the current context. `->` in front of
//! an expression navigates into its result; `return` navigates back out.
//! Objects join the graph by implementing [`object::Object`], a hand-written
//! descriptor table standing in for reflection.

pub mod context;
pub mod errors;
pub mod object;
pub mod shell;
pub mod value;

mod eval;
mod literal;
mod resolver;
mod scan;

use context::ContextStack;
use errors::Result;
use value::Value;

/// What one input line did.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    /// Blank line; nothing happened.
    Empty,
    /// The expression produced a value.
    Value(Value),
    /// `->` navigation: the value is now the current context.
    Pushed(Value),
    /// `return` dropped the current context.
    Popped,
    /// `return` at the base context; nothing to pop.
    AtBase,
}

/// One interactive session: the expression evaluator plus the stack of
/// contexts the user has navigated into.
pub struct Session {
    stack: ContextStack,
}

impl Session {
    pub fn new(base: Value) -> Self {
        Self {
            stack: ContextStack::new(base),
        }
    }

    pub fn current(&self) -> &Value {
        self.stack.current()
    }

    pub fn stack(&self) -> &ContextStack {
        &self.stack
    }

    /// Evaluate one input line against the current context.
    ///
    /// The context stack only changes on a successful `->` push or an
    /// explicit `return`; a failing line leaves it untouched.
    pub fn eval_line(&mut self, line: &str) -> Result<Outcome> {
        let mut text = line.trim();
        if text.is_empty() {
            return Ok(Outcome::Empty);
        }
        if text == "return" {
            return Ok(if self.stack.pop() {
                Outcome::Popped
            } else {
                Outcome::AtBase
            });
        }
        let push = text.starts_with("->");
        if push {
            text = text[2..].trim_start();
        }
        let ctx = self.stack.current().clone();
        let value = eval::eval_expr(text, &ctx)?;
        if push {
            self.stack.push(value.clone());
            Ok(Outcome::Pushed(value))
        } else {
            Ok(Outcome::Value(value))
        }
    }
}

/// Evaluate a single expression against an object without keeping a session.
pub fn eval(expr: &str, ctx: &Value) -> Result<Value> {
    eval::eval_expr(expr, ctx)
}

pub use errors::EvalError;
pub use object::{into_value, Object};
