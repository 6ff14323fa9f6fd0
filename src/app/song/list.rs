use axum::extract::State;
pub use songbook_api::song::list::{Request, Response};

use crate::app::extract::Query;
use crate::app::App;
use crate::Error;

pub async fn handler(
    State(app): State<App>,
    Query(request): Query<Request>,
) -> Result<axum::Json<Response>, Error> {
    Ok(axum::Json(
        app.service
            .list(
                &request.search_query,
                request.page.unwrap_or_default(),
                request.limit.unwrap_or_default(),
            )
            .await?,
    ))
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use rstest::rstest;

    use super::*;
    use crate::test::{mock, send, Mock};

    #[rstest]
    #[case("/api/v1/songs", 1, 0..10)]
    #[case("/api/v1/songs?page=2&limit=10", 2, 10..20)]
    #[case("/api/v1/songs?page=3", 3, 20..25)]
    #[case("/api/v1/songs?page=0&limit=0&search_query=", 1, 0..10)]
    #[case("/api/v1/songs?page=&limit=", 1, 0..10)]
    #[case("/api/v1/songs?search_query=&page=", 1, 0..10)]
    #[case("/api/v1/songs?page=2&limit=", 2, 10..20)]
    #[tokio::test]
    async fn test_list(
        mock: Mock,
        #[case] uri: &str,
        #[case] current_page: u32,
        #[case] range: std::ops::Range<usize>,
    ) {
        let songs = mock.add_songs(25).await;
        let (status, body) = send(mock.router(), Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::OK);

        let paged: Response = serde_json::from_slice(&body).unwrap();
        assert_eq!(paged.items, songs[range]);
        assert_eq!(paged.current_page, current_page);
        assert_eq!(paged.total_pages, 3);
    }

    #[rstest]
    #[tokio::test]
    async fn test_list_search(mock: Mock) {
        mock.add_songs(3).await;
        let hysteria = mock.add_song("Muse", "Hysteria").await;

        let (status, body) =
            send(mock.router(), Method::GET, "/api/v1/songs?search_query=Hysteria", None).await;
        assert_eq!(status, StatusCode::OK);

        let paged: Response = serde_json::from_slice(&body).unwrap();
        assert_eq!(paged.items, [hysteria]);
        assert_eq!(paged.total_pages, 1);
    }

    #[rstest]
    #[case("/api/v1/songs?page=first")]
    #[case("/api/v1/songs?limit=-1")]
    #[tokio::test]
    async fn test_list_invalid_query(mock: Mock, #[case] uri: &str) {
        let (status, _) = send(mock.router(), Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
