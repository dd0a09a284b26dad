pub mod health;

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::{websocket, AppState};

pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/ws", get(websocket::handle_websocket))
}
