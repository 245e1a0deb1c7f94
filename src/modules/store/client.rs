use super::query::QueryBuilder;
use crate::types::StoreContext;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::Deserialize;

pub enum Error {
    /// The store rejected the query; carries the store's own error object,
    /// which is echoed to the caller untouched.
    QueryFailed(serde_json::Value),
    UnexpectedError,
}

#[derive(Deserialize)]
pub struct AuthUser {
    pub id: String,
}

/// One client per invocation, scoped to that invocation's credential.
pub struct Client {
    api_endpoint: String,
    anon_key: String,
    authorization: Option<String>,
}

impl Client {
    pub fn new(store: &StoreContext, authorization: Option<String>) -> Self {
        Self {
            api_endpoint: store.api_endpoint.clone(),
            anon_key: store.anon_key.clone(),
            authorization,
        }
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            "apikey",
            self.anon_key
                .clone()
                .try_into()
                .expect("Invalid api key header value"),
        );

        if let Some(authorization) = self.authorization.clone() {
            headers.insert(
                "Authorization",
                authorization
                    .try_into()
                    .expect("Invalid auth header value"),
            );
        }

        headers
    }

    /// Resolves the caller's identity from the forwarded credential.
    ///
    /// Any rejection by the identity endpoint yields `Ok(None)` rather than an
    /// error: the retrieval pipeline proceeds with an absent identity and the
    /// store's own policy decides what that query returns.
    pub async fn get_current_user(&self) -> Result<Option<AuthUser>, Error> {
        let res = reqwest::Client::new()
            .get(format!("{}/auth/v1/user", self.api_endpoint))
            .headers(self.headers())
            .send()
            .await
            .map_err(|err| {
                tracing::error!("Failed to reach identity endpoint: {}", err);
                Error::UnexpectedError
            })?;

        if res.status() != StatusCode::OK {
            tracing::debug!(
                "Identity resolution yielded no user, status {}",
                res.status()
            );
            return Ok(None);
        }

        let data = res.text().await.map_err(|err| {
            tracing::error!("Failed to read identity response: {:?}", err);
            Error::UnexpectedError
        })?;

        match serde_json::de::from_str::<AuthUser>(data.as_str()) {
            Ok(user) => Ok(Some(user)),
            Err(_) => {
                tracing::debug!("Identity response carried no user: {}", data);
                Ok(None)
            }
        }
    }

    pub fn from(&self, table: &str) -> QueryBuilder {
        QueryBuilder::new(self, table)
    }

    pub(super) async fn fetch_rows(
        &self,
        table: &str,
        query: String,
    ) -> Result<Vec<serde_json::Value>, Error> {
        let url = format!("{}/rest/v1/{}?{}", self.api_endpoint, table, query);

        let res = reqwest::Client::new()
            .get(url.clone())
            .headers(self.headers())
            .send()
            .await
            .map_err(|err| {
                tracing::error!("Failed to reach store for {}: {}", url, err);
                Error::UnexpectedError
            })?;

        let status = res.status();
        let data = res.text().await.map_err(|err| {
            tracing::error!("Failed to read store response for {}: {:?}", url, err);
            Error::UnexpectedError
        })?;

        if !status.is_success() {
            let detail =
                serde_json::de::from_str::<serde_json::Value>(data.as_str()).map_err(|_| {
                    tracing::error!("Store rejected {} with undecodable body: {}", url, data);
                    Error::UnexpectedError
                })?;

            tracing::debug!("Store rejected {}: {}", url, detail);
            return Err(Error::QueryFailed(detail));
        }

        serde_json::de::from_str::<Vec<serde_json::Value>>(data.as_str()).map_err(|err| {
            tracing::error!("Failed to decode store rows for {}: {:?}", url, err);
            Error::UnexpectedError
        })
    }
}
