use async_trait::async_trait;
use diesel::{ExpressionMethods, QueryDsl, SelectableHelper};
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use diesel_full_text_search::configuration::TsConfigurationByName;
use diesel_full_text_search::{websearch_to_tsquery_with_search_config, TsVectorExtensions};
use songbook_api::song::{Data, Song};

use super::{Count, Search, Store};
use crate::database::Database;
use crate::orm::songs;
use crate::Error;

const SIMPLE_TS_CONFIGURATION: TsConfigurationByName = TsConfigurationByName("simple");

#[derive(Clone)]
pub struct Postgres {
    database: Database,
}

impl Postgres {
    pub fn new(database: Database) -> Self {
        Self { database }
    }
}

#[async_trait]
impl Store for Postgres {
    async fn search(&self, search: Search<'_>) -> Result<(Vec<Song>, u64), Error> {
        let limit = i64::from(search.limit);
        let offset = i64::try_from(search.offset)
            .map_err(|_| Error::Validation("Requested page is too large".into()))?;
        let mut conn = self.database.get().await?;

        let songs = if let Some(query) = search.query {
            songs::table
                .filter(songs::ts.matches(websearch_to_tsquery_with_search_config(
                    SIMPLE_TS_CONFIGURATION,
                    query,
                )))
                .order_by((songs::created_at, songs::id))
                .limit(limit)
                .offset(offset)
                .select(songs::Song::as_select())
                .get_results(&mut conn)
                .await?
        } else {
            songs::table
                .order_by((songs::created_at, songs::id))
                .limit(limit)
                .offset(offset)
                .select(songs::Song::as_select())
                .get_results(&mut conn)
                .await?
        };

        let count: i64 = match (search.query, search.count) {
            (Some(query), Count::Filtered) => {
                songs::table
                    .filter(songs::ts.matches(websearch_to_tsquery_with_search_config(
                        SIMPLE_TS_CONFIGURATION,
                        query,
                    )))
                    .count()
                    .get_result(&mut conn)
                    .await?
            }
            _ => songs::table.count().get_result(&mut conn).await?,
        };

        Ok((songs.into_iter().map(Song::from).collect(), count.unsigned_abs()))
    }

    async fn get(&self, id: i64) -> Result<Song, Error> {
        Ok(songs::table
            .find(id)
            .select(songs::Song::as_select())
            .get_result(&mut self.database.get().await?)
            .await?
            .into())
    }

    async fn insert(&self, data: &Data) -> Result<Song, Error> {
        let new = songs::Data::from(data);
        let song = self
            .database
            .get()
            .await?
            .transaction::<_, Error, _>(|conn| {
                async move {
                    Ok(diesel::insert_into(songs::table)
                        .values(&new)
                        .returning(songs::Song::as_returning())
                        .get_result(conn)
                        .await?)
                }
                .scope_boxed()
            })
            .await?;
        tracing::debug!(id = song.id, "inserted song");
        Ok(song.into())
    }

    async fn update(&self, id: i64, data: &Data) -> Result<Song, Error> {
        let changes = songs::Data::from(data);
        let song = self
            .database
            .get()
            .await?
            .transaction::<_, Error, _>(|conn| {
                async move {
                    Ok(diesel::update(songs::table.find(id))
                        .set(&changes)
                        .returning(songs::Song::as_returning())
                        .get_result(conn)
                        .await?)
                }
                .scope_boxed()
            })
            .await?;
        tracing::debug!(id, "updated song");
        Ok(song.into())
    }

    async fn delete(&self, id: i64) -> Result<(), Error> {
        let deleted = self
            .database
            .get()
            .await?
            .transaction::<_, Error, _>(|conn| {
                async move {
                    Ok(diesel::delete(songs::table.filter(songs::id.eq(id))).execute(conn).await?)
                }
                .scope_boxed()
            })
            .await?;
        if deleted == 0 {
            Err(Error::NotFound)
        } else {
            tracing::debug!(id, "deleted song");
            Ok(())
        }
    }
}
