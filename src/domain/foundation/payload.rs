//! Field extraction for untyped request payloads.
//!
//! Request value objects are built from arbitrary JSON. Validation runs in
//! two passes over the required fields: presence first, then type. A field is
//! present unless it is missing, `null`, `false`, numeric zero or the empty
//! string.

use serde_json::Value;

use super::{DomainError, ErrorCode};

/// Error codes raised by a payload that fails one of the two passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayloadCodes {
    pub missing: ErrorCode,
    pub mistyped: ErrorCode,
}

/// Returns true when `value` counts as a supplied field.
pub fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => *flag,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// Extracts `fields` from `payload` as strings, in the order given.
///
/// Every field is checked for presence before any field is checked for type,
/// so a payload that is both incomplete and mistyped reports `missing`.
pub fn required_strings<const N: usize>(
    payload: &Value,
    fields: [&str; N],
    codes: PayloadCodes,
) -> Result<[String; N], DomainError> {
    let values = fields.map(|field| payload.get(field));

    if let Some(position) = values.iter().position(|value| !is_present(*value)) {
        return Err(DomainError::from_code(codes.missing).with_detail("field", fields[position]));
    }

    let mut strings: [String; N] = std::array::from_fn(|_| String::new());
    for ((slot, value), field) in strings.iter_mut().zip(values).zip(fields) {
        match value {
            Some(Value::String(s)) => slot.clone_from(s),
            _ => {
                return Err(DomainError::from_code(codes.mistyped).with_detail("field", field));
            }
        }
    }

    Ok(strings)
}
