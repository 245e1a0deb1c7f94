pub mod request {
    use crate::modules::auth::middleware::Credential;

    pub struct Payload {
        pub credential: Credential,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Notes(Vec<serde_json::Value>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Notes(notes) => (StatusCode::OK, Json(json!(notes))).into_response(),
            }
        }
    }

    pub enum Error {
        QueryFailed(serde_json::Value),
        FailedToReachStore,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::QueryFailed(detail) => {
                    (StatusCode::BAD_REQUEST, Json(json!({ "error": detail }))).into_response()
                }
                Self::FailedToReachStore => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to reach note store" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
