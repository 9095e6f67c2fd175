pub mod health;
pub mod locale;
pub mod market;
pub mod signal;

use crate::AppState;
use axum::Router;

/// Create the API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(market::router())
        .nest("/api/signal", signal::router())
        .nest("/api/locale", locale::router())
}
