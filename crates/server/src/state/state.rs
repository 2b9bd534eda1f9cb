use axum::extract::FromRef;
use deadpool_sqlite::Pool;

/// Everything the routes share. Built once at startup and dropped after the
/// listener has stopped
#[derive(Debug, Clone)]
pub struct AppState {
    pub pool: Pool,
}

impl AppState {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    /// Stops handing out connections and drops the idle ones
    pub fn close(&self) {
        self.pool.close();
    }
}

impl FromRef<AppState> for Pool {
    fn from_ref(state: &AppState) -> Self {
        // Pool is an Arc inside
        state.pool.clone()
    }
}
