//! Algorithm allow-list configuration.
//!
//! The set of recognized classifier algorithm ids is owned by the embedding
//! application's configuration, so records receive it at validation time
//! instead of hardcoding it.

use std::collections::HashSet;

use tracing::debug;

use crate::error::{Result, ValidationError};

/// Algorithm id of the LDA-based string classifier.
pub const LDA_STRING_CLASSIFIER: &str = "LDAStringClassifier";

/// Allow-list of recognized classifier algorithm ids.
///
/// The default registry recognizes only [`LDA_STRING_CLASSIFIER`];
/// applications with additional algorithm families build their own set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlgorithmRegistry {
    algorithm_ids: HashSet<String>,
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        Self::with_algorithms([LDA_STRING_CLASSIFIER])
    }
}

impl AlgorithmRegistry {
    /// Build a registry from an arbitrary set of algorithm ids.
    #[must_use]
    pub fn with_algorithms<I, S>(algorithm_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            algorithm_ids: algorithm_ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Add an algorithm id to the allow-list.
    pub fn register(&mut self, algorithm_id: impl Into<String>) {
        let algorithm_id = algorithm_id.into();
        debug!(%algorithm_id, "registering classifier algorithm");
        self.algorithm_ids.insert(algorithm_id);
    }

    /// Whether the registry recognizes the given algorithm id.
    #[must_use]
    pub fn contains(&self, algorithm_id: &str) -> bool {
        self.algorithm_ids.contains(algorithm_id)
    }

    /// Check membership in the allow-list.
    ///
    /// # Errors
    ///
    /// Fails with [`ValidationError::InvalidAlgorithmId`] for unrecognized
    /// ids.
    pub fn check(&self, algorithm_id: &str) -> Result<()> {
        if !self.contains(algorithm_id) {
            return Err(ValidationError::InvalidAlgorithmId {
                algorithm_id: algorithm_id.to_string(),
            });
        }
        Ok(())
    }
}
