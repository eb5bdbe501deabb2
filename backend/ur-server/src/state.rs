use sqlx::SqlitePool;

/// Shared application state for HTTP handlers.
///
/// Holds only the process-wide pool; handlers keep no other shared state.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}
