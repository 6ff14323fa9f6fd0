use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::http::StatusCode;

use crate::details::{Error, Provider, SongDetails, Stub};

/// Provider answering with the stub details, or failing every lookup.
#[derive(Debug, Default)]
pub struct Fake {
    fail: bool,
    calls: AtomicUsize,
}

impl Fake {
    pub fn failing() -> Self {
        Self { fail: true, ..Default::default() }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Provider for Fake {
    async fn lookup(&self, group: &str, title: &str) -> Result<SongDetails, Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            Err(Error::Status(StatusCode::SERVICE_UNAVAILABLE))
        } else {
            Stub.lookup(group, title).await
        }
    }
}
