//! Lookup of lyrics, release date and link for a song being added.

mod client;
mod stub;

use std::sync::Arc;

use async_trait::async_trait;
pub use client::Client;
use serde::{Deserialize, Serialize};
pub use stub::Stub;
use time::Date;

time::serde::format_description!(release_date, Date, "[day].[month].[year]");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongDetails {
    #[serde(with = "release_date")]
    pub release_date: Date,
    pub text: String,
    pub link: String,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Request(#[from] reqwest::Error),
    #[error("Could not encode song details query: {0}")]
    EncodeQuery(#[from] serde_html_form::ser::Error),
    #[error("Song details provider responded with status {0}")]
    Status(reqwest::StatusCode),
}

#[async_trait]
pub trait Provider: Send + Sync {
    async fn lookup(&self, group: &str, title: &str) -> Result<SongDetails, Error>;
}

pub fn from_config(config: &crate::config::Details) -> Result<Arc<dyn Provider>, Error> {
    Ok(if let Some(ref url) = config.url {
        tracing::info!(%url, "using song details provider");
        Arc::new(Client::new(url, config.timeout())?)
    } else {
        tracing::warn!("song details provider url is not set, falling back to stub details");
        Arc::new(Stub)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_details() {
        let details: SongDetails = serde_json::from_str(
            r#"{
                "releaseDate": "16.07.2006",
                "text": "Ooh baby, don't you know I suffer?",
                "link": "https://www.youtube.com/watch?v=Xsp3_a-PMTw"
            }"#,
        )
        .unwrap();
        assert_eq!(details.release_date, time::macros::date!(2006 - 07 - 16));
        assert_eq!(details.text, "Ooh baby, don't you know I suffer?");
        assert_eq!(details.link, "https://www.youtube.com/watch?v=Xsp3_a-PMTw");
    }

    #[test]
    fn test_deserialize_invalid_date() {
        assert!(serde_json::from_str::<SongDetails>(
            r#"{"releaseDate": "2006-16-07", "text": "", "link": ""}"#
        )
        .is_err());
    }
}
