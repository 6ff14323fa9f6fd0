mod create;
mod delete;
mod get;
mod list;
mod update;

use axum::routing::{get, post};
use axum::Router;

use super::App;

pub fn router() -> Router<App> {
    Router::new()
        .route("/songs", post(create::handler).get(list::handler))
        .route("/songs/{id}", get(get::handler).patch(update::handler).delete(delete::handler))
}
