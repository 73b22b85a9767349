//! Classifier Training Job - a queued request to train one classifier

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Result, ValidationError};
use crate::registry::AlgorithmRegistry;
use crate::validation::{self, slot};

/// Status of a training job.
///
/// Transitions are driven by the external job-processing pipeline; this
/// crate only distinguishes recognized values from unrecognized ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrainingJobStatus {
    /// Job is created but not yet picked up by the pipeline.
    New,
    /// Job has been submitted to the training backend.
    Pending,
    /// Training finished and the resulting classifier was stored.
    Complete,
    /// Training failed; the pipeline decides whether to retry.
    Failed,
}

impl TrainingJobStatus {
    /// Wire name of the status, as stored in the dict form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "NEW",
            Self::Pending => "PENDING",
            Self::Complete => "COMPLETE",
            Self::Failed => "FAILED",
        }
    }
}

impl fmt::Display for TrainingJobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrainingJobStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "NEW" => Ok(Self::New),
            "PENDING" => Ok(Self::Pending),
            "COMPLETE" => Ok(Self::Complete),
            "FAILED" => Ok(Self::Failed),
            other => Err(ValidationError::InvalidStatus {
                status: other.to_string(),
            }),
        }
    }
}

/// Training answers captured for one answer group of a state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnswerGroup {
    answer_group_index: i64,
    answers: Vec<String>,
}

impl AnswerGroup {
    /// Create a new answer group.
    #[must_use]
    pub const fn new(answer_group_index: i64, answers: Vec<String>) -> Self {
        Self {
            answer_group_index,
            answers,
        }
    }

    /// Get the index of the answer group within its state.
    #[must_use]
    pub const fn answer_group_index(&self) -> i64 {
        self.answer_group_index
    }

    /// Get the raw answers supplied for this group.
    #[must_use]
    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    /// Project the group to its dict form.
    #[must_use]
    pub fn to_dict(&self) -> Map<String, Value> {
        let mut dict = Map::new();
        dict.insert(
            "answer_group_index".to_string(),
            Value::from(self.answer_group_index),
        );
        dict.insert("answers".to_string(), Value::from(self.answers.clone()));
        dict
    }

    /// Rebuild a group from its dict form.
    ///
    /// # Errors
    ///
    /// Fails with the [`ValidationError`] of the first mistyped field.
    pub fn from_dict(dict: &Map<String, Value>) -> Result<Self> {
        let answer_group_index =
            validation::require_int(slot(dict, "answer_group_index"), "answer_group_index")?;
        let answers = match slot(dict, "answers") {
            Value::Array(values) => values
                .iter()
                .map(|value| validation::require_string(value, "answers"))
                .collect::<Result<Vec<_>>>()?,
            _ => {
                return Err(ValidationError::InvalidShape {
                    field: "answers",
                    expected: "list",
                })
            }
        };
        Ok(Self {
            answer_group_index,
            answers,
        })
    }
}

/// A unit of work requesting training of a classifier for one exploration
/// state.
///
/// Carries the training data captured from the state's answer groups and
/// the job's pipeline status. By convention `job_id` is
/// `<exp_id>.<random>`; the convention is owned by the id generator, not
/// checked here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClassifierTrainingJob {
    job_id: String,
    algorithm_id: String,
    interaction_id: String,
    exp_id: String,
    exp_version: i64,
    state_name: String,
    status: TrainingJobStatus,
    training_data: Vec<AnswerGroup>,
}

impl ClassifierTrainingJob {
    /// Create a new training job record.
    ///
    /// # Arguments
    ///
    /// * `job_id` - Unique identifier for the job
    /// * `algorithm_id` - Identifier of the training algorithm family
    /// * `interaction_id` - Interaction type the training data came from
    /// * `exp_id` - ID of the exploration the job trains for
    /// * `exp_version` - Exploration version the training data was taken at
    /// * `state_name` - Name of the state being trained
    /// * `status` - Current pipeline status
    /// * `training_data` - Ordered answer groups to train on
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        job_id: impl Into<String>,
        algorithm_id: impl Into<String>,
        interaction_id: impl Into<String>,
        exp_id: impl Into<String>,
        exp_version: i64,
        state_name: impl Into<String>,
        status: TrainingJobStatus,
        training_data: Vec<AnswerGroup>,
    ) -> Self {
        Self {
            job_id: job_id.into(),
            algorithm_id: algorithm_id.into(),
            interaction_id: interaction_id.into(),
            exp_id: exp_id.into(),
            exp_version,
            state_name: state_name.into(),
            status,
            training_data,
        }
    }

    /// Get the job ID.
    #[must_use]
    pub fn job_id(&self) -> &str {
        &self.job_id
    }

    /// Get the algorithm id.
    #[must_use]
    pub fn algorithm_id(&self) -> &str {
        &self.algorithm_id
    }

    /// Get the interaction id the training data came from.
    #[must_use]
    pub fn interaction_id(&self) -> &str {
        &self.interaction_id
    }

    /// Get the exploration ID.
    #[must_use]
    pub fn exp_id(&self) -> &str {
        &self.exp_id
    }

    /// Get the exploration version the training data was taken at.
    #[must_use]
    pub const fn exp_version(&self) -> i64 {
        self.exp_version
    }

    /// Get the name of the state being trained.
    #[must_use]
    pub fn state_name(&self) -> &str {
        &self.state_name
    }

    /// Get the current pipeline status.
    #[must_use]
    pub const fn status(&self) -> TrainingJobStatus {
        self.status
    }

    /// Get the ordered answer-group training data.
    #[must_use]
    pub fn training_data(&self) -> &[AnswerGroup] {
        &self.training_data
    }

    /// Set the job status.
    ///
    /// Transition ordering is owned by the job pipeline, not checked here.
    pub fn update_status(&mut self, status: TrainingJobStatus) {
        self.status = status;
    }

    /// Project the record to its dict form, keyed by field name.
    ///
    /// `status` projects to its wire name and `training_data` to an ordered
    /// array of answer-group dicts.
    #[must_use]
    pub fn to_dict(&self) -> Map<String, Value> {
        let mut dict = Map::new();
        dict.insert("job_id".to_string(), Value::from(self.job_id.clone()));
        dict.insert(
            "algorithm_id".to_string(),
            Value::from(self.algorithm_id.clone()),
        );
        dict.insert(
            "interaction_id".to_string(),
            Value::from(self.interaction_id.clone()),
        );
        dict.insert("exp_id".to_string(), Value::from(self.exp_id.clone()));
        dict.insert("exp_version".to_string(), Value::from(self.exp_version));
        dict.insert(
            "state_name".to_string(),
            Value::from(self.state_name.clone()),
        );
        dict.insert("status".to_string(), Value::from(self.status.as_str()));
        dict.insert(
            "training_data".to_string(),
            Value::Array(
                self.training_data
                    .iter()
                    .map(|group| Value::Object(group.to_dict()))
                    .collect(),
            ),
        );
        dict
    }

    /// Rebuild a record from its dict form.
    ///
    /// Fields are type-checked in constructor order; a missing key fails
    /// the same check as a mistyped one. `training_data` must be an array
    /// of answer-group dicts.
    ///
    /// # Errors
    ///
    /// Fails with the [`ValidationError`] of the first mistyped field.
    pub fn from_dict(dict: &Map<String, Value>) -> Result<Self> {
        let job_id = validation::require_id(slot(dict, "job_id"), "job_id")?;
        let algorithm_id = validation::require_string(slot(dict, "algorithm_id"), "algorithm_id")?;
        let interaction_id =
            validation::require_string(slot(dict, "interaction_id"), "interaction_id")?;
        let exp_id = validation::require_id(slot(dict, "exp_id"), "exp_id")?;
        let exp_version = validation::require_int(slot(dict, "exp_version"), "exp_version")?;
        let state_name = validation::require_string(slot(dict, "state_name"), "state_name")?;
        let status = validation::require_string(slot(dict, "status"), "status")?.parse()?;
        let training_data = match slot(dict, "training_data") {
            Value::Array(values) => values
                .iter()
                .map(|value| {
                    value
                        .as_object()
                        .ok_or(ValidationError::InvalidShape {
                            field: "training_data",
                            expected: "list",
                        })
                        .and_then(AnswerGroup::from_dict)
                })
                .collect::<Result<Vec<_>>>()?,
            _ => {
                return Err(ValidationError::InvalidShape {
                    field: "training_data",
                    expected: "list",
                })
            }
        };

        Ok(Self {
            job_id,
            algorithm_id,
            interaction_id,
            exp_id,
            exp_version,
            state_name,
            status,
            training_data,
        })
    }

    /// Check the value constraints the field types cannot express.
    ///
    /// Checks, in order: the state name contains no `#` and the algorithm
    /// id is allow-listed. Status recognition and training-data shape are
    /// enforced by the field types at the decoding boundary.
    ///
    /// # Errors
    ///
    /// Fails with the [`ValidationError`] of the first violated constraint.
    pub fn validate(&self, algorithms: &AlgorithmRegistry) -> Result<()> {
        validation::check_state_name(&self.state_name)?;
        algorithms.check(&self.algorithm_id)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_training_data() -> Vec<AnswerGroup> {
        vec![
            AnswerGroup::new(1, vec!["a1".to_string(), "a2".to_string()]),
            AnswerGroup::new(2, vec!["a2".to_string(), "a3".to_string()]),
        ]
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(TrainingJobStatus::New.as_str(), "NEW");
        assert_eq!(TrainingJobStatus::Pending.as_str(), "PENDING");
        assert_eq!(TrainingJobStatus::Complete.as_str(), "COMPLETE");
        assert_eq!(TrainingJobStatus::Failed.as_str(), "FAILED");
    }

    #[test]
    fn test_status_parse_round_trip() {
        for status in [
            TrainingJobStatus::New,
            TrainingJobStatus::Pending,
            TrainingJobStatus::Complete,
            TrainingJobStatus::Failed,
        ] {
            assert_eq!(status.as_str().parse::<TrainingJobStatus>(), Ok(status));
        }
        assert!("DONE".parse::<TrainingJobStatus>().is_err());
    }

    #[test]
    fn test_update_status() {
        let mut job = ClassifierTrainingJob::new(
            "exp_id1.SOME_RANDOM_STRING",
            "LDAStringClassifier",
            "TextInput",
            "exp_id1",
            1,
            "a state name",
            TrainingJobStatus::New,
            sample_training_data(),
        );
        assert_eq!(job.status(), TrainingJobStatus::New);
        job.update_status(TrainingJobStatus::Pending);
        assert_eq!(job.status(), TrainingJobStatus::Pending);
        job.update_status(TrainingJobStatus::Complete);
        assert_eq!(job.status(), TrainingJobStatus::Complete);
    }

    #[test]
    fn test_answer_group_round_trip() {
        let group = AnswerGroup::new(1, vec!["a1".to_string()]);
        let rebuilt = AnswerGroup::from_dict(&group.to_dict()).unwrap();
        assert_eq!(group, rebuilt);
    }
}
