use serde::{Deserialize, Serialize};

use crate::song::Song;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "test"), derive(PartialEq, Eq))]
pub struct Paged<T> {
    pub items: Vec<T>,
    pub current_page: u32,
    pub total_pages: u64,
}

/// A song whose `text` only holds the verse at `current_verse`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "test"), derive(PartialEq, Eq))]
pub struct VersePage {
    pub song: Song,
    pub current_verse: u32,
    pub total_verses: usize,
}
