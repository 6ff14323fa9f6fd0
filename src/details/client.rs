use std::time::Duration;

use async_trait::async_trait;
use concat_string::concat_string;
use serde::Serialize;

use super::{Error, Provider, SongDetails};

#[derive(Serialize)]
struct Query<'a> {
    group: &'a str,
    song: &'a str,
}

/// HTTP client of a song details API serving `GET /info?group=..&song=..`.
#[derive(Debug, Clone)]
pub struct Client {
    client: reqwest::Client,
    url: String,
}

impl Client {
    const INFO_ROUTE: &'static str = "/info";

    pub fn new(url: &str, timeout: Duration) -> Result<Self, Error> {
        Ok(Self::new_with_client(reqwest::Client::builder().timeout(timeout).build()?, url))
    }

    pub fn new_with_client(client: reqwest::Client, url: &str) -> Self {
        Self { client, url: url.trim_end_matches('/').to_owned() }
    }

    fn to_url(&self, group: &str, title: &str) -> Result<String, Error> {
        Ok(concat_string!(
            self.url,
            Self::INFO_ROUTE,
            "?",
            serde_html_form::to_string(Query { group, song: title })?
        ))
    }
}

#[async_trait]
impl Provider for Client {
    async fn lookup(&self, group: &str, title: &str) -> Result<SongDetails, Error> {
        let response = self.client.get(self.to_url(group, title)?).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            tracing::debug!(group, title, %status, "song details lookup failed");
            Err(Error::Status(status))
        }
    }
}
