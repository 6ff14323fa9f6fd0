mod merge;

use std::sync::Arc;

pub use merge::merge;
use songbook_api::pagination::{Paged, VersePage};
use songbook_api::song::{update, Data, Song};

use crate::details::Provider;
use crate::pagination::{self, PageRequest};
use crate::store::{Count, Search, Store};
use crate::Error;

#[derive(Clone)]
pub struct Service {
    store: Arc<dyn Store>,
    details: Arc<dyn Provider>,
    count: Count,
}

impl Service {
    pub fn new(store: Arc<dyn Store>, details: Arc<dyn Provider>, count: Count) -> Self {
        Self { store, details, count }
    }

    #[tracing::instrument(skip(self))]
    pub async fn add(&self, group: &str, title: &str) -> Result<Song, Error> {
        if group.is_empty() {
            return Err(Error::Validation("Song group should not be empty".into()));
        }
        if title.is_empty() {
            return Err(Error::Validation("Song title should not be empty".into()));
        }

        let details = self.details.lookup(group, title).await.map_err(Error::DetailsLookupFailed)?;
        let song = self
            .store
            .insert(&Data {
                group: group.to_owned(),
                title: title.to_owned(),
                text: details.text,
                release_date: details.release_date,
                link: details.link,
            })
            .await?;
        tracing::info!(id = song.id, "added song");
        Ok(song)
    }

    /// Lists songs matching `search_query`, every song when it is blank.
    pub async fn list(
        &self,
        search_query: &str,
        page: u32,
        limit: u32,
    ) -> Result<Paged<Song>, Error> {
        let request = PageRequest::new(page, limit);
        let search_query = search_query.trim();
        let (items, count) = self
            .store
            .search(Search {
                query: if search_query.is_empty() { None } else { Some(search_query) },
                limit: request.limit,
                offset: request.offset(),
                count: self.count,
            })
            .await?;
        Ok(Paged { items, current_page: request.page, total_pages: request.total_pages(count) })
    }

    pub async fn get(&self, id: i64) -> Result<Song, Error> {
        self.store.get(id).await
    }

    /// Fetches a song keeping only the verse at the 1-based `page` in its text.
    pub async fn get_verse_page(&self, id: i64, page: u32) -> Result<VersePage, Error> {
        let mut song = self.get(id).await?;
        let page = if page == 0 { pagination::DEFAULT_PAGE } else { page };

        let verses: Vec<_> = pagination::split_verses(&song.data.text).collect();
        let (verse, total_verses) = pagination::select_verse(&verses, page)?;
        song.data.text = verse.to_owned();

        Ok(VersePage { song, current_verse: page, total_verses })
    }

    #[tracing::instrument(skip(self))]
    pub async fn update(&self, id: i64, patch: update::Request) -> Result<Song, Error> {
        let song = self.get(id).await?;
        let song = self.store.update(id, &merge(song.data, patch)).await?;
        tracing::info!("updated song");
        Ok(song)
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), Error> {
        self.store.delete(id).await?;
        tracing::info!("deleted song");
        Ok(())
    }
}
