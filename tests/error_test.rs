//! Tests for error types
//!
//! External callers match on the display strings when rejecting a request
//! or aborting a persistence write, so the exact wording is load-bearing.

use classifier_domain::ValidationError;

#[test]
fn test_invalid_id_type_error() {
    let error = ValidationError::InvalidIdType { field: "job_id" };
    assert_eq!(format!("{error}"), "Expected id to be a string");
}

#[test]
fn test_invalid_string_type_error() {
    let error = ValidationError::InvalidStringType { field: "exp_id" };
    assert_eq!(format!("{error}"), "Expected exp_id to be a string");
}

#[test]
fn test_invalid_int_type_error() {
    let error = ValidationError::InvalidIntType {
        field: "exp_version",
    };
    assert_eq!(format!("{error}"), "Expected exp_version to be an int");
}

#[test]
fn test_invalid_state_name_char_error() {
    let error = ValidationError::InvalidStateNameChar;
    assert_eq!(format!("{error}"), "Invalid character # in the state name");
}

#[test]
fn test_invalid_algorithm_id_error() {
    let error = ValidationError::InvalidAlgorithmId {
        algorithm_id: "abc".to_string(),
    };
    assert_eq!(format!("{error}"), "Invalid algorithm id");
}

#[test]
fn test_invalid_shape_errors() {
    let error = ValidationError::InvalidShape {
        field: "classifier_data",
        expected: "dict",
    };
    assert_eq!(format!("{error}"), "Expected classifier_data to be a dict");

    let error = ValidationError::InvalidShape {
        field: "training_data",
        expected: "list",
    };
    assert_eq!(format!("{error}"), "Expected training_data to be a list");
}

#[test]
fn test_invalid_status_error() {
    let error = ValidationError::InvalidStatus {
        status: "DONE".to_string(),
    };
    let error_str = format!("{error}");
    assert!(error_str.contains("Invalid status"));
    assert!(error_str.contains("DONE"));
}

#[test]
fn test_error_debug() {
    let error = ValidationError::InvalidStateNameChar;
    let debug_str = format!("{error:?}");
    assert!(debug_str.contains("InvalidStateNameChar"));
}

#[test]
fn test_error_carries_field_name() {
    // The variant keeps the field even when the display string is generic.
    let error = ValidationError::InvalidIdType { field: "job_id" };
    assert_eq!(error, ValidationError::InvalidIdType { field: "job_id" });
    assert_ne!(error, ValidationError::InvalidIdType { field: "exp_id" });
}

#[test]
fn test_result_type_alias() {
    fn returns_result() -> classifier_domain::Result<i32> {
        Ok(42)
    }

    let result = returns_result();
    assert_eq!(result.unwrap(), 42);
}

#[test]
fn test_result_type_alias_error() {
    fn returns_error() -> classifier_domain::Result<i32> {
        Err(ValidationError::InvalidStateNameChar)
    }

    let result = returns_error();
    assert!(result.is_err());
}
