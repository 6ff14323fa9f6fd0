use serde::{Deserialize, Serialize};

/// Body returned alongside every non-success status.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "test"), derive(PartialEq, Eq))]
pub struct Error {
    pub code: u16,
    pub message: String,
}
