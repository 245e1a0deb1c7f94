mod handler;
mod service;
mod types;

use crate::types::Context;
use axum::routing::{any, Router};
use std::sync::Arc;

// Every method and path lands on the one handler; there is no other route.
pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/", any(handler::handler))
        .fallback(handler::handler)
}
