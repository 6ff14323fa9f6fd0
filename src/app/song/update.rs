use axum::extract::State;
pub use songbook_api::song::update::{Request, Response};

use crate::app::extract::{Json, Path};
use crate::app::App;
use crate::Error;

pub async fn handler(
    State(app): State<App>,
    Path(id): Path<i64>,
    Json(request): Json<Request>,
) -> Result<axum::Json<Response>, Error> {
    Ok(axum::Json(app.service.update(id, request).await?))
}
