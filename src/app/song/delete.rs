use axum::extract::State;
use axum::http::StatusCode;

use crate::app::extract::Path;
use crate::app::App;
use crate::Error;

pub async fn handler(State(app): State<App>, Path(id): Path<i64>) -> Result<StatusCode, Error> {
    app.service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use rstest::rstest;

    use crate::test::{mock, send, Mock};

    #[rstest]
    #[tokio::test]
    async fn test_delete(mock: Mock) {
        let song = mock.add_song("Muse", "Hysteria").await;
        let uri = format!("/api/v1/songs/{}", song.id);

        let (status, body) = send(mock.router(), Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(body.is_empty());
        assert!(mock.store.songs().is_empty());

        let (status, _) = send(mock.router(), Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
