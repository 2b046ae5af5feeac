use std::fmt;

use itertools::Itertools;
use serde_json::Value as Json;

use crate::object::ObjectHandle;

/// One runtime value flowing between the parser, the resolver and the
/// context stack. Integers carry their width so that overload resolution can
/// distinguish `Say(i8)` from `Say(i64)`; the literal parser always produces
/// the narrowest width that fits.
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    F64(f64),
    Str(String),
    /// Ordered sequence, indexable with `[n]`.
    Seq(Vec<Value>),
    /// Generic structured data deserialized from a bare token.
    Json(Json),
    /// Shared handle into the live object graph.
    Object(ObjectHandle),
}

/// Declared type of a property or method parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ty {
    Bool,
    I8,
    I16,
    I32,
    I64,
    F64,
    Str,
    Seq,
    Object,
    /// Accepts any value unchanged.
    Any,
}

/// Parameter/property type descriptor. A `Null` argument only matches a
/// nullable slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamType {
    pub ty: Ty,
    pub nullable: bool,
}

impl ParamType {
    pub const fn of(ty: Ty) -> Self {
        Self { ty, nullable: false }
    }

    pub const fn nullable(ty: Ty) -> Self {
        Self { ty, nullable: true }
    }
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The runtime kind of this value, for coercion checks.
    pub fn ty(&self) -> Ty {
        match self {
            // Null has no type of its own; `Any` keeps the match total and
            // the nullable check happens before the kind check.
            Value::Null => Ty::Any,
            Value::Bool(_) => Ty::Bool,
            Value::I8(_) => Ty::I8,
            Value::I16(_) => Ty::I16,
            Value::I32(_) => Ty::I32,
            Value::I64(_) => Ty::I64,
            Value::F64(_) => Ty::F64,
            Value::Str(_) => Ty::Str,
            Value::Seq(_) => Ty::Seq,
            Value::Json(_) => Ty::Any,
            Value::Object(_) => Ty::Object,
        }
    }

    /// Widen any integer width to i64; `None` for non-integers.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::I8(n) => Some(*n as i64),
            Value::I16(n) => Some(*n as i64),
            Value::I32(n) => Some(*n as i64),
            Value::I64(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_seq(&self) -> Option<&[Value]> {
        match self {
            Value::Seq(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Narrowest signed integer width that can represent `n`.
    pub fn narrow_int(n: i64) -> Value {
        if let Ok(v) = i8::try_from(n) {
            Value::I8(v)
        } else if let Ok(v) = i16::try_from(n) {
            Value::I16(v)
        } else if let Ok(v) = i32::try_from(n) {
            Value::I32(v)
        } else {
            Value::I64(n)
        }
    }

    /// Normalize deserialized JSON: scalars and arrays become native kinds
    /// (numbers via the narrowest-width policy), maps stay wrapped.
    pub fn from_json(json: Json) -> Value {
        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::narrow_int(i)
                } else {
                    Value::F64(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Json::String(s) => Value::Str(s),
            Json::Array(items) => Value::Seq(items.into_iter().map(Value::from_json).collect()),
            map @ Json::Object(_) => Value::Json(map),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        use Value::*;
        match (self, other) {
            (Null, Null) => true,
            (Bool(a), Bool(b)) => a == b,
            (F64(a), F64(b)) => a == b,
            (Str(a), Str(b)) => a == b,
            (Seq(a), Seq(b)) => a == b,
            (Json(a), Json(b)) => a == b,
            // Object handles compare by identity, not by contents.
            (Object(a), Object(b)) => std::rc::Rc::ptr_eq(a, b),
            _ => match (self.as_i64(), other.as_i64()) {
                (Some(a), Some(b)) => a == b && self.ty() == other.ty(),
                _ => false,
            },
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::I8(n) => write!(f, "{n}"),
            Value::I16(n) => write!(f, "{n}"),
            Value::I32(n) => write!(f, "{n}"),
            Value::I64(n) => write!(f, "{n}"),
            Value::F64(n) => write!(f, "{n}"),
            Value::Str(s) => write!(f, "{s}"),
            Value::Seq(items) => {
                write!(f, "[{}]", items.iter().map(|v| v.to_string()).join(", "))
            }
            Value::Json(json) => write!(f, "{json}"),
            Value::Object(handle) => write!(f, "{}", handle.borrow().type_name()),
        }
    }
}
