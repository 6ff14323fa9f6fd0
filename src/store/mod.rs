mod postgres;

use async_trait::async_trait;
pub use postgres::Postgres;
use serde::{Deserialize, Serialize};
use songbook_api::song::{Data, Song};

use crate::Error;

/// What the total of a search counts when a query is given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Count {
    /// Only songs matching the query.
    #[default]
    Filtered,
    /// Every stored song, regardless of the query.
    Global,
}

#[derive(Debug, Clone, Copy)]
pub struct Search<'a> {
    /// Full-text query, `None` lists every song.
    pub query: Option<&'a str>,
    pub limit: u32,
    pub offset: u64,
    pub count: Count,
}

/// Persistence of songs. Every write is atomic.
#[async_trait]
pub trait Store: Send + Sync {
    /// Songs ordered by creation time together with the total count.
    async fn search(&self, search: Search<'_>) -> Result<(Vec<Song>, u64), Error>;

    async fn get(&self, id: i64) -> Result<Song, Error>;

    async fn insert(&self, data: &Data) -> Result<Song, Error>;

    async fn update(&self, id: i64, data: &Data) -> Result<Song, Error>;

    async fn delete(&self, id: i64) -> Result<(), Error>;
}
