use crate::{requests, responses, signup::SignupOutcome};
use reqwest::StatusCode;
use serde::Serialize;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for interfacing with the backend.
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}/api/{path}", &self.address)
    }

    async fn post(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        let request = self.inner_client.post(self.format_url(path)).json(body);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn empty_get(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.get(self.format_url(path));

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }
}

/// Methods on the backend API
impl APIClient {
    /// The service banner served at the root, outside of `/api`.
    pub async fn service_info(
        &self,
    ) -> Result<responses::ServiceInfo, ClientError> {
        let request = self.inner_client.get(format!("{}/", &self.address));

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        ok_body(request.send().await?).await
    }

    pub async fn health_check(
        &self,
    ) -> Result<responses::HealthStatus, ClientError> {
        let response = self.empty_get("health").await?;
        ok_body(response).await
    }

    /// Register a new account.
    ///
    /// The response body is parsed as JSON whatever the status, so a body
    /// that is not JSON surfaces as [`ClientError::InvalidBody`]. Refusals by
    /// the server are not errors here; they are classified into
    /// [`SignupOutcome`].
    pub async fn signup(
        &self,
        details: &requests::AuthCredentials,
    ) -> Result<SignupOutcome, ClientError> {
        let response = self.post("auth/signup", details).await?;
        let status = response.status();
        let body: serde_json::Value =
            serde_json::from_str(&response.text().await?)?;
        Ok(SignupOutcome::from_response(status, &body))
    }

    pub async fn login(
        &self,
        details: &requests::AuthCredentials,
    ) -> Result<responses::ServiceInfo, ClientError> {
        let response = self.post("auth/login", details).await?;
        ok_body(response).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing the server's detail
    /// message or the raw response text.
    #[error("{1}")]
    APIError(StatusCode, String),
    /// The request never completed; shows the transport's own message.
    #[error("{0}")]
    Network(#[from] reqwest::Error),
    #[error("Unexpected response from server: {0}")]
    InvalidBody(#[from] serde_json::Error),
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(api_error(response).await);
    }
    Ok(serde_json::from_str(&response.text().await?)?)
}

/// Build an [`ClientError::APIError`] from a failed response, preferring the
/// `detail` field of a JSON error body over the raw text.
async fn api_error(response: reqwest::Response) -> ClientError {
    let status = response.status();
    let text = match response.text().await {
        Ok(text) => text,
        Err(e) => return e.into(),
    };
    let message = serde_json::from_str::<responses::ErrorDetail>(&text)
        .ok()
        .and_then(|body| body.message().map(str::to_string))
        .unwrap_or(text);
    ClientError::APIError(status, message)
}
