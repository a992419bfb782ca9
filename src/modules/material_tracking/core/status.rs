use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid material status: {0:?}")]
pub struct InvalidStatus(pub String);

/// Procurement state of a single material. Any state may move to any other,
/// including backwards, so operators can correct mistakes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
}

impl MaterialStatus {
    pub const ALL: [MaterialStatus; 4] = [
        MaterialStatus::Pending,
        MaterialStatus::Processing,
        MaterialStatus::Shipped,
        MaterialStatus::Delivered,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MaterialStatus::Pending => "pending",
            MaterialStatus::Processing => "processing",
            MaterialStatus::Shipped => "shipped",
            MaterialStatus::Delivered => "delivered",
        }
    }

    /// Severity used when sorting by status; higher means further along.
    pub fn rank(self) -> u8 {
        match self {
            MaterialStatus::Pending => 0,
            MaterialStatus::Processing => 1,
            MaterialStatus::Shipped => 2,
            MaterialStatus::Delivered => 3,
        }
    }
}

impl fmt::Display for MaterialStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MaterialStatus {
    type Err = InvalidStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MaterialStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| InvalidStatus(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Completed,
    Cancelled,
}
