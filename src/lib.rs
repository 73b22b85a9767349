//! # Classifier Domain: Answer-Classification Training Records
//!
//! Domain objects for a machine-learning-assisted answer-classification
//! feature: trained-classifier snapshots, training jobs, and the mapping
//! that associates a trained classifier with the exploration state it
//! serves.
//!
//! Every record follows the same contract:
//!
//! - `to_dict()` projects the record to a `serde_json` mapping keyed by the
//!   record's field names, consumed by the persistence layer.
//! - `from_dict()` rebuilds a record from that mapping, rejecting a field of
//!   the wrong type with a descriptive [`ValidationError`].
//! - `validate()` checks the value constraints the field types cannot
//!   express (reserved characters, allow-listed algorithm ids, blob shape)
//!   and fails on the first violation.
//!
//! The crate performs no I/O: persistence, the training pipeline, and
//! request handling are external collaborators that call `validate` before
//! acting on a record.
//!
//! ## Example
//!
//! ```rust
//! use classifier_domain::domain::ClassifierExplorationMapping;
//!
//! let mapping =
//!     ClassifierExplorationMapping::new("exp_id1", 2, "a state name", "classifier_id1");
//! mapping.validate()?;
//!
//! let dict = mapping.to_dict();
//! assert_eq!(dict["exp_id"], "exp_id1");
//! # Ok::<(), classifier_domain::ValidationError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod domain;
pub mod error;
pub mod registry;
pub mod validation;

pub use error::{Result, ValidationError};
pub use registry::AlgorithmRegistry;
