use super::types::{request, response};
use crate::{modules::store, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let client = store::Client::new(&ctx.store, payload.credential.header);

    // An unresolved identity is not an error: the query is still issued,
    // filtered on the empty id, and the store decides what that returns.
    let user_id = client
        .get_current_user()
        .await
        .map_err(|_| response::Error::FailedToReachStore)?
        .map(|user| user.id)
        .unwrap_or_default();

    let notes = client
        .from("notes")
        .select("*")
        .eq("user_id", user_id.as_str())
        .order("created_at", store::Order::Descending)
        .fetch()
        .await
        .map_err(|err| match err {
            store::Error::QueryFailed(detail) => response::Error::QueryFailed(detail),
            store::Error::UnexpectedError => response::Error::FailedToReachStore,
        })?;

    Ok(response::Success::Notes(notes))
}
