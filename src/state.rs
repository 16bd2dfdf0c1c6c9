use std::sync::Arc;

use sqlx::PgPool;

pub type SharedState = Arc<AppState>;

/// Per-process state handed to every handler.
pub struct AppState {
    pub pool: PgPool,
}
