use crate::resolver;
use crate::value::Value;

/// Convert a bare token into a typed value. Conversions are attempted in a
/// fixed priority order; the first that succeeds wins:
/// null, bool, i8, i16, i32, i64, f64, double-quoted string, single-quoted
/// string, then (with a target) a readable property of that name, or
/// (without a target) generic JSON deserialization.
///
/// Trying integer widths narrowest-first is what gives literals their width:
/// `5` is an i8, `1000` an i16, `1000000` an i32. Overload resolution
/// depends on this.
pub fn parse(token: &str, target: Option<&Value>) -> Option<Value> {
    let t = token.trim();
    if t == "null" {
        return Some(Value::Null);
    }
    if t.eq_ignore_ascii_case("true") {
        return Some(Value::Bool(true));
    }
    if t.eq_ignore_ascii_case("false") {
        return Some(Value::Bool(false));
    }
    if let Ok(n) = t.parse::<i8>() {
        return Some(Value::I8(n));
    }
    if let Ok(n) = t.parse::<i16>() {
        return Some(Value::I16(n));
    }
    if let Ok(n) = t.parse::<i32>() {
        return Some(Value::I32(n));
    }
    if let Ok(n) = t.parse::<i64>() {
        return Some(Value::I64(n));
    }
    if let Ok(n) = t.parse::<f64>() {
        return Some(Value::F64(n));
    }
    if let Some(s) = quoted(t, '"') {
        return Some(Value::Str(s));
    }
    if let Some(s) = quoted(t, '\'') {
        return Some(Value::Str(s));
    }
    match target {
        Some(ctx) => resolver::read_property(ctx, t).ok(),
        None => serde_json::from_str(t).ok().map(Value::from_json),
    }
}

/// Accept `token` as a string literal quoted with `quote`. The content must
/// not itself contain an unescaped quote of the same kind; standard
/// backslash escapes are decoded.
fn quoted(token: &str, quote: char) -> Option<String> {
    let inner = token.strip_prefix(quote)?.strip_suffix(quote)?;
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == quote {
            return None;
        }
        if c == '\\' {
            match chars.next() {
                Some('n') => out.push('\n'),
                Some('t') => out.push('\t'),
                Some('r') => out.push('\r'),
                Some(nc) => out.push(nc),
                None => return None,
            }
        } else {
            out.push(c);
        }
    }
    Some(out)
}
