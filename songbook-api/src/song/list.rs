use serde::{Deserialize, Serialize};

use super::Song;
use crate::pagination::Paged;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Request {
    pub search_query: String,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

pub type Response = Paged<Song>;
