use axum::extract::State;
pub use songbook_api::song::get::{Request, Response};

use crate::app::extract::{Path, Query};
use crate::app::App;
use crate::Error;

pub async fn handler(
    State(app): State<App>,
    Path(id): Path<i64>,
    Query(request): Query<Request>,
) -> Result<axum::Json<Response>, Error> {
    Ok(axum::Json(app.service.get_verse_page(id, request.page.unwrap_or_default()).await?))
}
