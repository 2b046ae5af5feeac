use tracing::debug;

use crate::errors::{EvalError, Result};
use crate::object::ObjectHandle;
use crate::value::{ParamType, Ty, Value};

fn as_object<'a>(ctx: &'a Value, member: &str) -> Result<&'a ObjectHandle> {
    match ctx {
        Value::Object(handle) => Ok(handle),
        _ => Err(EvalError::UnknownMember(member.to_string())),
    }
}

/// Read a public property by display name.
pub fn read_property(ctx: &Value, display: &str) -> Result<Value> {
    let handle = as_object(ctx, display)?;
    let object = handle.borrow();
    let info = object
        .properties()
        .into_iter()
        .find(|p| p.display_name() == display)
        .ok_or_else(|| EvalError::UnknownMember(display.to_string()))?;
    if !info.readable {
        return Err(EvalError::NotReadable(display.to_string()));
    }
    object
        .get(info.name)
        .ok_or_else(|| EvalError::UnknownMember(display.to_string()))
}

/// Write a public property by display name, coercing the value to the
/// property's declared type first. Returns the value actually stored.
pub fn write_property(ctx: &Value, display: &str, value: Value) -> Result<Value> {
    let handle = as_object(ctx, display)?;
    let info = handle
        .borrow()
        .properties()
        .into_iter()
        .find(|p| p.display_name() == display)
        .ok_or_else(|| EvalError::UnknownMember(display.to_string()))?;
    if !info.writable {
        return Err(EvalError::NotWritable(display.to_string()));
    }
    let coerced =
        coerce(&value, &info.ty).ok_or_else(|| EvalError::Conversion(display.to_string()))?;
    handle.borrow_mut().set(info.name, coerced.clone())?;
    Ok(coerced)
}

/// Resolve an overloaded method by display name and argument list, then
/// invoke it.
///
/// Candidates are tried in declaration order; the first whose parameters all
/// accept the arguments (exactly or by conversion) wins. A failed conversion
/// only disqualifies that candidate. An error raised by the method body
/// itself comes back as-is from `Object::call` and is never confused with a
/// resolution failure.
pub fn invoke(ctx: &Value, display: &str, args: Vec<Value>) -> Result<Value> {
    let handle = as_object(ctx, display)?;
    let methods = handle.borrow().methods();
    let mut name_seen = false;
    for (index, method) in methods.iter().enumerate() {
        if method.display_name() != display {
            continue;
        }
        name_seen = true;
        if method.params.len() != args.len() {
            continue;
        }
        if let Some(coerced) = coerce_all(&args, &method.params) {
            // `display` can't be named inside `debug!`: the macro expansion
            // does `use tracing::field::display`, which shadows the local.
            let method_name = display;
            debug!(method = method_name, index, arity = args.len(), "invoking");
            return handle.borrow_mut().call(index, coerced);
        }
    }
    if name_seen {
        Err(EvalError::NoOverload {
            name: display.to_string(),
            arity: args.len(),
        })
    } else {
        Err(EvalError::UnknownMember(display.to_string()))
    }
}

fn coerce_all(args: &[Value], params: &[ParamType]) -> Option<Vec<Value>> {
    args.iter()
        .zip(params)
        .map(|(arg, param)| coerce(arg, param))
        .collect()
}

/// Convert `value` to the declared `param` type. `None` means the conversion
/// is not possible; callers decide whether that is fatal.
///
/// Null only matches a nullable slot. Beyond exact kind matches the rules
/// follow the usual scripting-friendly set: integer width changes when the
/// value fits, integer to float, fraction-free float to integer, and string
/// parse/format against numbers and booleans.
pub fn coerce(value: &Value, param: &ParamType) -> Option<Value> {
    if value.is_null() {
        return param.nullable.then_some(Value::Null);
    }
    if param.ty == Ty::Any || value.ty() == param.ty {
        return Some(value.clone());
    }
    match param.ty {
        Ty::I8 | Ty::I16 | Ty::I32 | Ty::I64 => {
            let wide = match value {
                Value::F64(f) if f.fract() == 0.0 && f.is_finite() => Some(*f as i64),
                Value::Str(s) => s.trim().parse::<i64>().ok(),
                other => other.as_i64(),
            }?;
            int_of_width(wide, param.ty)
        }
        Ty::F64 => match value {
            Value::Str(s) => s.trim().parse::<f64>().ok().map(Value::F64),
            other => other.as_i64().map(|n| Value::F64(n as f64)),
        },
        Ty::Bool => value
            .as_str()
            .and_then(|s| s.trim().parse::<bool>().ok())
            .map(Value::Bool),
        Ty::Str => match value {
            Value::Bool(_)
            | Value::I8(_)
            | Value::I16(_)
            | Value::I32(_)
            | Value::I64(_)
            | Value::F64(_) => Some(Value::Str(value.to_string())),
            _ => None,
        },
        // No conversions into sequences or object handles.
        Ty::Seq | Ty::Object | Ty::Any => None,
    }
}

fn int_of_width(n: i64, ty: Ty) -> Option<Value> {
    match ty {
        Ty::I8 => i8::try_from(n).ok().map(Value::I8),
        Ty::I16 => i16::try_from(n).ok().map(Value::I16),
        Ty::I32 => i32::try_from(n).ok().map(Value::I32),
        Ty::I64 => Some(Value::I64(n)),
        _ => None,
    }
}
