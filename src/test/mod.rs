pub mod details;

use std::sync::Arc;

use axum::body::{Body, Bytes};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use rstest::fixture;
use songbook_api::song::Song;
use tower::ServiceExt;

use crate::app::{self, App};
use crate::service::Service;
use crate::store::Count;

/// Application wired to an in-memory store and a fake details provider.
pub struct Mock {
    pub store: Arc<store::Memory>,
    pub details: Arc<details::Fake>,
    service: Service,
}

#[fixture]
pub fn mock(#[default(details::Fake::default())] provider: details::Fake) -> Mock {
    Mock::new(Arc::default(), Arc::new(provider), Count::default())
}

impl Mock {
    fn new(store: Arc<store::Memory>, details: Arc<details::Fake>, count: Count) -> Self {
        let service = Service::new(store.clone(), details.clone(), count);
        Self { store, details, service }
    }

    pub fn with_count(self, count: Count) -> Self {
        Self::new(self.store, self.details, count)
    }

    pub fn service(&self) -> &Service {
        &self.service
    }

    pub fn router(&self) -> Router {
        app::build(App { service: self.service.clone() })
    }

    pub async fn add_song(&self, group: &str, title: &str) -> Song {
        self.service.add(group, title).await.unwrap()
    }

    pub async fn add_songs(&self, n: usize) -> Vec<Song> {
        let mut songs = Vec::with_capacity(n);
        for i in 0..n {
            songs.push(self.add_song(&format!("group {i}"), &format!("title {i}")).await);
        }
        songs
    }
}

/// Sends one request through `router`, with `body` encoded as JSON when given.
pub async fn send(
    router: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, Bytes) {
    let request = Request::builder().method(method).uri(uri);
    let request = if let Some(body) = body {
        request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
    } else {
        request.body(Body::empty())
    }
    .unwrap();

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    (status, response.into_body().collect().await.unwrap().to_bytes())
}
