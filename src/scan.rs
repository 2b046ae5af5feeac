use crate::errors::{EvalError, Result};

/// Characters that select a grammar production.
const TRIGGERS: [char; 4] = ['.', '(', '[', '='];

/// Result of scanning one expression: the text before the first trigger, the
/// trigger itself (None when the whole input is a bare token), and the
/// remainder starting at the trigger.
#[derive(Debug, PartialEq, Eq)]
pub struct Token<'a> {
    pub name: &'a str,
    pub trigger: Option<char>,
    pub rest: &'a str,
}

/// Find the first syntactically significant character. No depth awareness:
/// the trigger may sit inside what a later pass recognizes as a nested
/// sub-expression; callers re-validate with [`match_pair`] before committing.
pub fn scan(s: &str) -> Token<'_> {
    match s.find(&TRIGGERS[..]) {
        Some(i) => Token {
            name: &s[..i],
            trigger: s[i..].chars().next(),
            rest: &s[i..],
        },
        None => Token {
            name: s,
            trigger: None,
            rest: "",
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bracket {
    Round,
    Square,
}

impl Bracket {
    fn open(self) -> char {
        match self {
            Bracket::Round => '(',
            Bracket::Square => '[',
        }
    }

    fn close(self) -> char {
        match self {
            Bracket::Round => ')',
            Bracket::Square => ']',
        }
    }
}

/// Find the byte index of the first opening bracket of `kind` and of the
/// closing bracket that balances it, honoring nesting of the same kind.
/// Brackets of the other kind are ignored here.
pub fn match_pair(s: &str, kind: Bracket) -> Result<(usize, usize)> {
    let mut open_at: Option<usize> = None;
    let mut depth = 0usize;
    for (i, c) in s.char_indices() {
        if c == kind.open() {
            if open_at.is_none() {
                open_at = Some(i);
            }
            depth += 1;
        } else if c == kind.close() {
            if depth == 0 {
                return Err(EvalError::Parse(format!(
                    "unbalanced `{}` at byte {i}",
                    kind.close()
                )));
            }
            depth -= 1;
            if depth == 0 {
                // open_at is set whenever depth was raised above zero
                return Ok((open_at.unwrap_or(0), i));
            }
        }
    }
    Err(EvalError::Parse(format!(
        "unbalanced `{}` in `{s}`",
        kind.open()
    )))
}

/// Split the text between a matched pair of parentheses into top-level
/// arguments. Only round-bracket depth guards a comma; square brackets and
/// quoted strings are not tracked (see DESIGN.md).
pub fn split_args(inner: &str) -> Vec<&str> {
    if inner.trim().is_empty() {
        return Vec::new();
    }
    let mut out = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    for (i, c) in inner.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                out.push(&inner[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    out.push(&inner[start..]);
    out
}
