pub mod projects;

use axum::routing::get;
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .route("/project/", get(projects::list).post(projects::create))
        .route(
            "/project/{id}",
            get(projects::get)
                .put(projects::update)
                .delete(projects::delete),
        )
}
