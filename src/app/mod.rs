use axum::body::Body;
use axum::http::{Method, Request};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

mod extract;
mod song;
pub mod state;

pub use state::App;

pub fn build(app: App) -> Router {
    Router::new()
        .nest("/api/v1", song::router())
        .with_state(app)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PATCH,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "request", method = %request.method(), uri = %request.uri()
            )
        }))
}

#[cfg(test)]
mod tests {
    use axum::http::{header, StatusCode};
    use rstest::rstest;
    use tower::ServiceExt;

    use super::*;
    use crate::test::{mock, Mock};

    #[rstest]
    #[tokio::test]
    async fn test_cors_preflight(mock: Mock) {
        let response = mock
            .router()
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/api/v1/songs")
                    .header(header::ORIGIN, "http://localhost:5173")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PATCH")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_METHODS]
                .to_str()
                .unwrap()
                .contains("PATCH")
        );
    }

    #[rstest]
    #[tokio::test]
    async fn test_unknown_route(mock: Mock) {
        let (status, _) =
            crate::test::send(mock.router(), Method::GET, "/api/v1/artists", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
