use axum::{async_trait, extract::FromRequestParts, http, http::request::Parts};
use std::convert::Infallible;

/// The caller's raw `Authorization` header, forwarded to the note store as-is.
///
/// Extraction never rejects: an absent (or non-UTF-8) header flows onward as
/// `None` and identity resolution is still attempted with it, leaving the
/// store to decide what an anonymous query is allowed to see.
#[derive(Clone)]
pub struct Credential {
    pub header: Option<String>,
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for Credential {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(http::header::AUTHORIZATION)
            .and_then(|header| header.to_str().ok())
            .map(|header| header.to_string());

        Ok(Self { header })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use axum::http::Request;

    #[tokio::test]
    async fn captures_the_raw_authorization_header() {
        let (mut parts, _) = Request::builder()
            .header("Authorization", "Bearer token-1")
            .body(())
            .unwrap()
            .into_parts();

        let credential = Credential::from_request_parts(&mut parts, &())
            .await
            .unwrap();

        assert_eq!(credential.header.as_deref(), Some("Bearer token-1"));
    }

    #[tokio::test]
    async fn tolerates_a_missing_authorization_header() {
        let (mut parts, _) = Request::builder().body(()).unwrap().into_parts();

        let credential = Credential::from_request_parts(&mut parts, &())
            .await
            .unwrap();

        assert!(credential.header.is_none());
    }
}
