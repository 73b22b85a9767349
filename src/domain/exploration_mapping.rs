//! Classifier Exploration Mapping - which classifier serves which state

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;
use crate::validation::{self, slot};

/// Association from an exploration, version, and state to the classifier
/// currently serving it.
///
/// A pure association record: many mappings may reference the same
/// classifier. Uniqueness of the (`exp_id`, `exp_version`, `state_name`)
/// triple is owned by the storage layer, not by this object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClassifierExplorationMapping {
    exp_id: String,
    exp_version: i64,
    state_name: String,
    classifier_id: String,
}

impl ClassifierExplorationMapping {
    /// Create a new mapping record.
    ///
    /// # Arguments
    ///
    /// * `exp_id` - ID of the exploration
    /// * `exp_version` - Version of the exploration
    /// * `state_name` - Name of the state served by the classifier
    /// * `classifier_id` - ID of the classifier serving that state
    #[must_use]
    pub fn new(
        exp_id: impl Into<String>,
        exp_version: i64,
        state_name: impl Into<String>,
        classifier_id: impl Into<String>,
    ) -> Self {
        Self {
            exp_id: exp_id.into(),
            exp_version,
            state_name: state_name.into(),
            classifier_id: classifier_id.into(),
        }
    }

    /// Get the exploration ID.
    #[must_use]
    pub fn exp_id(&self) -> &str {
        &self.exp_id
    }

    /// Get the exploration version.
    #[must_use]
    pub const fn exp_version(&self) -> i64 {
        self.exp_version
    }

    /// Get the name of the state served by the classifier.
    #[must_use]
    pub fn state_name(&self) -> &str {
        &self.state_name
    }

    /// Get the ID of the classifier serving the state.
    #[must_use]
    pub fn classifier_id(&self) -> &str {
        &self.classifier_id
    }

    /// Project the record to its dict form, keyed by field name.
    ///
    /// Non-ASCII state names round-trip exactly.
    #[must_use]
    pub fn to_dict(&self) -> Map<String, Value> {
        let mut dict = Map::new();
        dict.insert("exp_id".to_string(), Value::from(self.exp_id.clone()));
        dict.insert("exp_version".to_string(), Value::from(self.exp_version));
        dict.insert(
            "state_name".to_string(),
            Value::from(self.state_name.clone()),
        );
        dict.insert(
            "classifier_id".to_string(),
            Value::from(self.classifier_id.clone()),
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
    /// Fails with the [`crate::ValidationError`] of the first mistyped
    /// field.
    pub fn from_dict(dict: &Map<String, Value>) -> Result<Self> {
        let exp_id = validation::require_string(slot(dict, "exp_id"), "exp_id")?;
        let exp_version = validation::require_int(slot(dict, "exp_version"), "exp_version")?;
        let state_name = validation::require_string(slot(dict, "state_name"), "state_name")?;
        let classifier_id = validation::require_id(slot(dict, "classifier_id"), "classifier_id")?;

        Ok(Self {
            exp_id,
            exp_version,
            state_name,
            classifier_id,
        })
    }

    /// Check the value constraints the field types cannot express.
    ///
    /// The state name must not contain `#`; everything else is enforced by
    /// the field types at the decoding boundary.
    ///
    /// # Errors
    ///
    /// Fails with [`crate::ValidationError::InvalidStateNameChar`] if the
    /// state name contains `#`.
    pub fn validate(&self) -> Result<()> {
        validation::check_state_name(&self.state_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_getters() {
        let mapping = ClassifierExplorationMapping::new("exp_id1", 2, "網站有中", "classifier_id1");
        assert_eq!(mapping.exp_id(), "exp_id1");
        assert_eq!(mapping.exp_version(), 2);
        assert_eq!(mapping.state_name(), "網站有中");
        assert_eq!(mapping.classifier_id(), "classifier_id1");
    }

    #[test]
    fn test_mapping_validate() {
        let mapping = ClassifierExplorationMapping::new("exp_id1", 2, "網站有中", "classifier_id1");
        assert!(mapping.validate().is_ok());

        let bad = ClassifierExplorationMapping::new("exp_id1", 2, "A string #", "classifier_id1");
        assert_eq!(
            bad.validate().unwrap_err().to_string(),
            "Invalid character # in the state name"
        );
    }
}
