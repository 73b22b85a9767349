//! Classifier domain records.
//!
//! Three independent, leaf-level value types share the same contract:
//! project to a dict form (`to_dict`), rebuild from one (`from_dict`), and
//! check value constraints (`validate`).
//!
//! ## Schema Overview
//!
//! ```text
//! ClassifierData ──< ClassifierExplorationMapping (many-to-one)
//!      │                  (exp_id, exp_version, state_name) → classifier_id
//!      └── produced by the pipeline from a ClassifierTrainingJob
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use classifier_domain::domain::{AnswerGroup, ClassifierTrainingJob, TrainingJobStatus};
//! use classifier_domain::AlgorithmRegistry;
//!
//! let job = ClassifierTrainingJob::new(
//!     "exp_id1.SOME_RANDOM_STRING",
//!     "LDAStringClassifier",
//!     "TextInput",
//!     "exp_id1",
//!     1,
//!     "a state name",
//!     TrainingJobStatus::New,
//!     vec![AnswerGroup::new(1, vec!["a1".into(), "a2".into()])],
//! );
//! job.validate(&AlgorithmRegistry::default())?;
//! # Ok::<(), classifier_domain::ValidationError>(())
//! ```

mod classifier_data;
mod exploration_mapping;
mod training_job;

pub use classifier_data::ClassifierData;
pub use exploration_mapping::ClassifierExplorationMapping;
pub use training_job::{AnswerGroup, ClassifierTrainingJob, TrainingJobStatus};
