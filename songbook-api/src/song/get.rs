use serde::{Deserialize, Serialize};

use crate::pagination::VersePage;

/// Query of the verse view. `page` is the 1-based verse index.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Request {
    pub page: Option<u32>,
}

pub type Response = VersePage;
