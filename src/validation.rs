//! Shared field-level checks used by every record's dict decoder.
//!
//! A slot is the `serde_json::Value` stored under a field's key in a dict
//! form. A missing key reads as a null slot and fails the same type check
//! as a mistyped one.

use serde_json::{Map, Value};

use crate::error::{Result, ValidationError};

static NULL: Value = Value::Null;

/// Read a field's slot from a dict form; missing keys read as null.
#[must_use]
pub fn slot<'a>(dict: &'a Map<String, Value>, field: &str) -> &'a Value {
    dict.get(field).unwrap_or(&NULL)
}

/// Decode a slot that must hold an opaque string id.
///
/// # Errors
///
/// Fails with [`ValidationError::InvalidIdType`] unless the slot holds a
/// string.
pub fn require_id(slot: &Value, field: &'static str) -> Result<String> {
    slot.as_str()
        .map(str::to_owned)
        .ok_or(ValidationError::InvalidIdType { field })
}

/// Decode a slot that must hold a plain string.
///
/// # Errors
///
/// Fails with [`ValidationError::InvalidStringType`] unless the slot holds
/// a string.
pub fn require_string(slot: &Value, field: &'static str) -> Result<String> {
    slot.as_str()
        .map(str::to_owned)
        .ok_or(ValidationError::InvalidStringType { field })
}

/// Decode a slot that must hold an integer.
///
/// JSON floats, booleans, and numeric strings are not integers.
///
/// # Errors
///
/// Fails with [`ValidationError::InvalidIntType`] unless the slot holds an
/// integer.
pub fn require_int(slot: &Value, field: &'static str) -> Result<i64> {
    slot.as_i64()
        .ok_or(ValidationError::InvalidIntType { field })
}

/// Reject state names containing the reserved `#` separator.
///
/// `#` separates exploration ids from state names elsewhere in the system.
/// Non-ASCII names pass.
///
/// # Errors
///
/// Fails with [`ValidationError::InvalidStateNameChar`] if the name
/// contains `#`.
pub fn check_state_name(state_name: &str) -> Result<()> {
    if state_name.contains('#') {
        return Err(ValidationError::InvalidStateNameChar);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_require_id_accepts_string() {
        assert_eq!(require_id(&json!("abc"), "job_id").unwrap(), "abc");
    }

    #[test]
    fn test_require_id_rejects_int() {
        let err = require_id(&json!(1), "job_id").unwrap_err();
        assert_eq!(err, ValidationError::InvalidIdType { field: "job_id" });
    }

    #[test]
    fn test_require_int_rejects_float_and_string() {
        assert!(require_int(&json!(2.5), "exp_version").is_err());
        assert!(require_int(&json!("1"), "exp_version").is_err());
        assert_eq!(require_int(&json!(3), "exp_version").unwrap(), 3);
    }

    #[test]
    fn test_missing_key_reads_as_null() {
        let dict = Map::new();
        assert!(slot(&dict, "state_name").is_null());
        assert!(require_string(slot(&dict, "state_name"), "state_name").is_err());
    }

    #[test]
    fn test_check_state_name() {
        assert!(check_state_name("a state name").is_ok());
        assert!(check_state_name("網站有中").is_ok());
        assert_eq!(
            check_state_name("A string #").unwrap_err(),
            ValidationError::InvalidStateNameChar
        );
    }
}
