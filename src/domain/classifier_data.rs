//! Classifier Data - snapshot of a trained classifier's parameters

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Result, ValidationError};
use crate::registry::AlgorithmRegistry;
use crate::validation::{self, slot};

/// Snapshot of a trained classifier's parameters for one exploration state.
///
/// Replaced wholesale when a classifier is retrained, never mutated in
/// place. `classifier_data` is an algorithm-specific mapping whose layout
/// is versioned by `data_schema_version`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassifierData {
    classifier_id: String,
    exp_id: String,
    exp_version_when_created: i64,
    state_name: String,
    algorithm_id: String,
    classifier_data: Value,
    data_schema_version: i64,
}

impl ClassifierData {
    /// Create a new classifier data record.
    ///
    /// # Arguments
    ///
    /// * `classifier_id` - Unique identifier for the trained classifier
    /// * `exp_id` - ID of the exploration the classifier serves
    /// * `exp_version_when_created` - Exploration version at training time
    /// * `state_name` - Name of the state the classifier serves
    /// * `algorithm_id` - Identifier of the training algorithm family
    /// * `classifier_data` - Algorithm-specific parameter mapping
    /// * `data_schema_version` - Schema version of `classifier_data`
    #[must_use]
    pub fn new(
        classifier_id: impl Into<String>,
        exp_id: impl Into<String>,
        exp_version_when_created: i64,
        state_name: impl Into<String>,
        algorithm_id: impl Into<String>,
        classifier_data: Value,
        data_schema_version: i64,
    ) -> Self {
        Self {
            classifier_id: classifier_id.into(),
            exp_id: exp_id.into(),
            exp_version_when_created,
            state_name: state_name.into(),
            algorithm_id: algorithm_id.into(),
            classifier_data,
            data_schema_version,
        }
    }

    /// Get the classifier ID.
    #[must_use]
    pub fn classifier_id(&self) -> &str {
        &self.classifier_id
    }

    /// Get the exploration ID.
    #[must_use]
    pub fn exp_id(&self) -> &str {
        &self.exp_id
    }

    /// Get the exploration version the classifier was trained against.
    #[must_use]
    pub const fn exp_version_when_created(&self) -> i64 {
        self.exp_version_when_created
    }

    /// Get the name of the state the classifier serves.
    #[must_use]
    pub fn state_name(&self) -> &str {
        &self.state_name
    }

    /// Get the algorithm id.
    #[must_use]
    pub fn algorithm_id(&self) -> &str {
        &self.algorithm_id
    }

    /// Get the algorithm-specific parameter mapping.
    #[must_use]
    pub const fn classifier_data(&self) -> &Value {
        &self.classifier_data
    }

    /// Get the schema version of the parameter mapping.
    #[must_use]
    pub const fn data_schema_version(&self) -> i64 {
        self.data_schema_version
    }

    /// Project the record to its dict form, keyed by field name.
    #[must_use]
    pub fn to_dict(&self) -> Map<String, Value> {
        let mut dict = Map::new();
        dict.insert(
            "classifier_id".to_string(),
            Value::from(self.classifier_id.clone()),
        );
        dict.insert("exp_id".to_string(), Value::from(self.exp_id.clone()));
        dict.insert(
            "exp_version_when_created".to_string(),
            Value::from(self.exp_version_when_created),
        );
        dict.insert(
            "state_name".to_string(),
            Value::from(self.state_name.clone()),
        );
        dict.insert(
            "algorithm_id".to_string(),
            Value::from(self.algorithm_id.clone()),
        );
        dict.insert("classifier_data".to_string(), self.classifier_data.clone());
        dict.insert(
            "data_schema_version".to_string(),
            Value::from(self.data_schema_version),
        );
        dict
    }

    /// Rebuild a record from its dict form.
    ///
    /// Fields are type-checked in constructor order; a missing key fails
    /// the same check as a mistyped one.
    ///
    /// # Errors
    ///
    /// Fails with the [`ValidationError`] of the first mistyped field.
    pub fn from_dict(dict: &Map<String, Value>) -> Result<Self> {
        let classifier_id = validation::require_id(slot(dict, "classifier_id"), "classifier_id")?;
        let exp_id = validation::require_id(slot(dict, "exp_id"), "exp_id")?;
        let exp_version_when_created = validation::require_int(
            slot(dict, "exp_version_when_created"),
            "exp_version_when_created",
        )?;
        let state_name = validation::require_string(slot(dict, "state_name"), "state_name")?;
        let algorithm_id = validation::require_string(slot(dict, "algorithm_id"), "algorithm_id")?;
        let classifier_data = slot(dict, "classifier_data").clone();
        let data_schema_version =
            validation::require_int(slot(dict, "data_schema_version"), "data_schema_version")?;

        Ok(Self {
            classifier_id,
            exp_id,
            exp_version_when_created,
            state_name,
            algorithm_id,
            classifier_data,
            data_schema_version,
        })
    }

    /// Check the value constraints the field types cannot express.
    ///
    /// Checks, in order: the state name contains no `#`, the algorithm id
    /// is allow-listed, and `classifier_data` is a mapping. The first
    /// violation fails; the record is never mutated.
    ///
    /// # Errors
    ///
    /// Fails with the [`ValidationError`] of the first violated constraint.
    pub fn validate(&self, algorithms: &AlgorithmRegistry) -> Result<()> {
        validation::check_state_name(&self.state_name)?;
        algorithms.check(&self.algorithm_id)?;
        if !self.classifier_data.is_object() {
            return Err(ValidationError::InvalidShape {
                field: "classifier_data",
                expected: "dict",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> ClassifierData {
        ClassifierData::new(
            "job_request_id1",
            "exp_id1",
            1,
            "a state name",
            "LDAStringClassifier",
            json!({"alpha": 1.0}),
            1,
        )
    }

    #[test]
    fn test_classifier_data_getters() {
        let record = sample();
        assert_eq!(record.classifier_id(), "job_request_id1");
        assert_eq!(record.exp_id(), "exp_id1");
        assert_eq!(record.exp_version_when_created(), 1);
        assert_eq!(record.state_name(), "a state name");
        assert_eq!(record.algorithm_id(), "LDAStringClassifier");
        assert_eq!(record.data_schema_version(), 1);
    }

    #[test]
    fn test_classifier_data_validate_ok() {
        let registry = AlgorithmRegistry::default();
        assert!(sample().validate(&registry).is_ok());
    }

    #[test]
    fn test_classifier_data_rejects_list_blob() {
        let registry = AlgorithmRegistry::default();
        let record = ClassifierData::new(
            "job_request_id1",
            "exp_id1",
            1,
            "a state name",
            "LDAStringClassifier",
            json!([]),
            1,
        );
        assert_eq!(
            record.validate(&registry).unwrap_err().to_string(),
            "Expected classifier_data to be a dict"
        );
    }
}
