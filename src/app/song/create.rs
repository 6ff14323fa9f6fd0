use axum::extract::State;
use axum::http::StatusCode;
pub use songbook_api::song::create::{Request, Response};

use crate::app::extract::Json;
use crate::app::App;
use crate::Error;

pub async fn handler(
    State(app): State<App>,
    Json(request): Json<Request>,
) -> Result<(StatusCode, axum::Json<Response>), Error> {
    let song = app.service.add(&request.group, &request.title).await?;
    Ok((StatusCode::CREATED, axum::Json(song)))
}
