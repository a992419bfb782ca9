use crate::modules::material_tracking::use_cases::transition_material_status::handler::ApplicationError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchFailure {
    pub key: String,
    #[serde(serialize_with = "serialize_error")]
    pub error: ApplicationError,
}

fn serialize_error<S: serde::Serializer>(
    error: &ApplicationError,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(error)
}

/// Per-key outcome of a batch. Both lists are sorted by key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchResult {
    pub succeeded: Vec<String>,
    pub failed: Vec<BatchFailure>,
}

impl BatchResult {
    pub fn record(&mut self, key: String, outcome: Result<(), ApplicationError>) {
        match outcome {
            Ok(()) => self.succeeded.push(key),
            Err(error) => self.failed.push(BatchFailure { key, error }),
        }
    }

    pub fn sort(&mut self) {
        self.succeeded.sort();
        self.failed.sort_by(|a, b| a.key.cmp(&b.key));
    }

    pub fn summary(&self) -> String {
        format!(
            "{} succeeded, {} failed",
            self.succeeded.len(),
            self.failed.len()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BatchError {
    #[error("batch could not start: {0}")]
    Unavailable(String),
}
