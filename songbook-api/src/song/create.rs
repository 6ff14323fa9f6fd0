use serde::{Deserialize, Serialize};

use super::Song;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "test"), derive(fake::Dummy))]
pub struct Request {
    pub group: String,
    #[serde(alias = "song")]
    pub title: String,
}

pub type Response = Song;
