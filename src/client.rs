use crate::errors::ApiError;
use crate::storage::SessionStore;
use reqwest::{header, Client, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

/// HTTP client for the wallet backend.
///
/// Every call issues exactly one request and resolves to the decoded payload or
/// an [`ApiError`]; nothing is retried.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    session: SessionStore,
}

impl ApiClient {
    pub fn new(http: Client, base_url: impl Into<String>, session: SessionStore) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            session,
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// `GET <endpoint>`, bearer attached when a token is stored.
    pub async fn call<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let request = self.authorize(self.http.get(self.url(endpoint))).await;
        let response = send(request, endpoint).await?;
        decode_json(response).await
    }

    /// `GET <endpoint>` returning the body as text.
    pub async fn call_text(&self, endpoint: &str) -> Result<String, ApiError> {
        let request = self.authorize(self.http.get(self.url(endpoint))).await;
        let response = send(request, endpoint).await?;
        Ok(response.text().await?)
    }

    /// Unauthenticated JSON `POST`, used by the login form.
    pub async fn post_json<B, T>(&self, endpoint: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self
            .http
            .post(self.url(endpoint))
            .header(header::CACHE_CONTROL, "no-cache")
            .json(body);
        let response = send(request, endpoint).await?;
        decode_json(response).await
    }

    /// Authenticated JSON `POST` whose answer is plain text.
    pub async fn post_authenticated<B>(&self, endpoint: &str, body: &B) -> Result<String, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let request = self
            .authorize(self.http.post(self.url(endpoint)).json(body))
            .await;
        let response = send(request, endpoint).await?;
        Ok(response.text().await?)
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    async fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.get_token().await {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

pub(crate) async fn send(request: RequestBuilder, endpoint: &str) -> Result<Response, ApiError> {
    debug!("requesting {endpoint}");
    let response = request.send().await.map_err(|err| {
        warn!("request to {endpoint} failed: {err}");
        ApiError::from(err)
    })?;
    let status = response.status();
    if !status.is_success() {
        warn!("request to {endpoint} returned {status}");
        return Err(ApiError::from_status(status));
    }
    Ok(response)
}

pub(crate) async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|err| ApiError::Decode(err.to_string()))
}
