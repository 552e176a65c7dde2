use super::constants::{
    Field,
    ValueKind,
    CLOSE_BRACE,
    OPEN_BRACE,
    TCL_LIST_NONE,
};
use crate::errors::IappError;
use crate::template::Value;
use crate::util::strings::split_tokens;

/// Converts the trimmed raw text of a field into its result `Value` according to the field kind.
///
/// # Errors
///
/// Returns `IappError::MalformedTclList` if a `BracedList` field holds something other than a
/// braced list, the bare `none` token, or nothing at all.
pub fn to_value(
    field: &Field,
    raw: &str,
) -> Result<Value, IappError> {
    match field.kind {
        ValueKind::Raw => Ok(Value::Text(raw.to_owned())),
        ValueKind::BareList => Ok(Value::List(split_tokens(raw))),
        ValueKind::BracedList => parse_braced_list(field.name, raw),
    }
}

fn parse_braced_list(
    name: &str,
    raw: &str,
) -> Result<Value, IappError> {
    let raw = raw.trim();

    if raw == TCL_LIST_NONE {
        return Ok(Value::Text(TCL_LIST_NONE.to_owned()));
    }

    if raw.is_empty() {
        return Ok(Value::List(vec![]));
    }

    let inner = raw
        .strip_prefix(OPEN_BRACE)
        .and_then(|s| s.strip_suffix(CLOSE_BRACE))
        .ok_or_else(|| IappError::malformed_tcl_list(name, raw))?;

    // nested lists are not something a module list can hold
    if inner.contains([OPEN_BRACE, CLOSE_BRACE]) {
        return Err(IappError::malformed_tcl_list(name, raw));
    }

    Ok(Value::List(split_tokens(inner)))
}
