use super::{service::service, types::request};
use crate::{modules::auth::middleware::Credential, types::Context};
use axum::{extract::State, response::IntoResponse};
use std::sync::Arc;

pub async fn handler(State(ctx): State<Arc<Context>>, credential: Credential) -> impl IntoResponse {
    service(ctx, request::Payload { credential }).await
}
