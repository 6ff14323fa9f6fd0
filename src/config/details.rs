use std::time::Duration;

use educe::Educe;
use serde::{Deserialize, Serialize};

/// Song details provider. Without an `url` the built-in stub is used.
#[derive(Debug, Clone, Serialize, Deserialize, Educe)]
#[educe(Default)]
#[serde(default)]
pub struct Details {
    pub url: Option<String>,
    /// Request timeout in seconds.
    #[educe(Default(expression = 10))]
    pub timeout: u64,
}

impl Details {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}
