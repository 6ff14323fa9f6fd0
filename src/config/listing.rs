use serde::{Deserialize, Serialize};

use crate::store::Count;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Listing {
    pub count: Count,
}
