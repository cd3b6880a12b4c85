//! API server state

use sqlx::MySqlPool;

/// Shared state handed to every handler.
///
/// The pool is the only cross-request resource; it is cheap to clone and
/// safe to share across however many worker tasks axum spawns.
#[derive(Clone)]
pub struct AppState {
    pub pool: MySqlPool,
}

impl AppState {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}
