use tracing::debug;

use crate::errors::{EvalError, Result};
use crate::literal;
use crate::resolver;
use crate::scan::{self, Bracket};
use crate::value::Value;

/// Evaluate one expression against a context.
///
/// Recursive descent driven by the first trigger character: `.` reads a
/// property and continues on its value, `(` invokes a method, `[` indexes an
/// ordered sequence, `=` assigns to a property, and a trigger-free token
/// goes to the literal parser. Errors propagate straight up, so one input
/// line produces at most one diagnostic no matter how deep the recursion.
pub fn eval_expr(text: &str, ctx: &Value) -> Result<Value> {
    if ctx.is_null() {
        return Err(EvalError::UnknownMember(text.trim().to_string()));
    }
    let mut text = text.trim();
    if let Some(stripped) = text.strip_prefix('.') {
        text = stripped.trim_start();
    }
    let token = scan::scan(text);
    debug!(name = token.name, trigger = ?token.trigger, "dispatch");
    match token.trigger {
        Some('.') => {
            let value = resolver::read_property(ctx, token.name.trim())?;
            eval_expr(&token.rest[1..], &value)
        }
        Some('(') => {
            let (open, close) = scan::match_pair(token.rest, Bracket::Round)?;
            let args = scan::split_args(&token.rest[open + 1..close])
                .into_iter()
                // Arguments are sub-expressions evaluated against the
                // original context, not the callee.
                .map(|arg| eval_expr(arg, ctx))
                .collect::<Result<Vec<_>>>()?;
            let result = resolver::invoke(ctx, token.name.trim(), args)?;
            chain(&token.rest[close + 1..], result)
        }
        Some('[') => {
            let (open, close) = scan::match_pair(token.rest, Bracket::Square)?;
            let index_value = eval_expr(&token.rest[open + 1..close], ctx)?;
            let index = index_value.as_i64().ok_or(EvalError::NotAnIndex)?;
            let name = token.name.trim();
            let sequence = if name.is_empty() {
                ctx.clone()
            } else {
                resolver::read_property(ctx, name)?
            };
            let items = sequence.as_seq().ok_or_else(|| {
                EvalError::NotIndexable(if name.is_empty() { "context" } else { name }.to_string())
            })?;
            let element = usize::try_from(index)
                .ok()
                .and_then(|i| items.get(i))
                .cloned()
                .ok_or(EvalError::IndexOutOfRange {
                    index,
                    len: items.len(),
                })?;
            chain(&token.rest[close + 1..], element)
        }
        Some('=') => {
            let value = eval_expr(&token.rest[1..], ctx)?;
            resolver::write_property(ctx, token.name.trim(), value)
        }
        _ => literal::parse(text, Some(ctx))
            .ok_or_else(|| EvalError::UnknownMember(text.to_string())),
    }
}

/// Continue evaluating the text after a closing bracket against the value it
/// produced; one leading `.` is skipped.
fn chain(rest: &str, value: Value) -> Result<Value> {
    let rest = rest.trim_start();
    let rest = rest.strip_prefix('.').unwrap_or(rest);
    if rest.trim().is_empty() {
        Ok(value)
    } else {
        eval_expr(rest, &value)
    }
}
