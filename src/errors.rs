use thiserror::Error;

/// Everything that can go wrong while evaluating one input line.
///
/// All variants except [`EvalError::Invocation`] are resolution-level: the
/// shell collapses them into a single "command unknown" notification.
/// `Invocation` means the resolved method itself failed and is reported
/// distinctly.
#[derive(Debug, Error)]
pub enum EvalError {
    #[error("parse error: {0}")]
    Parse(String),

    #[error("unknown member `{0}`")]
    UnknownMember(String),

    #[error("property `{0}` is not readable")]
    NotReadable(String),

    #[error("property `{0}` is not writable")]
    NotWritable(String),

    #[error("no overload of `{name}` accepts {arity} argument(s)")]
    NoOverload { name: String, arity: usize },

    #[error("cannot convert value for `{0}`")]
    Conversion(String),

    #[error("`{0}` is not an ordered sequence")]
    NotIndexable(String),

    #[error("index expression did not yield an integer")]
    NotAnIndex,

    #[error("index {index} out of range (length {len})")]
    IndexOutOfRange { index: i64, len: usize },

    #[error("`{name}` failed: {message}")]
    Invocation { name: String, message: String },
}

impl EvalError {
    /// Invocation failures come from inside a successfully resolved method;
    /// everything else is a parse/resolution problem with the input line.
    pub fn is_invocation(&self) -> bool {
        matches!(self, EvalError::Invocation { .. })
    }
}

pub type Result<T> = std::result::Result<T, EvalError>;
