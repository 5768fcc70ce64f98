//! Thin JSON-over-HTTP client shared by the service wrappers. Attaches the
//! session's bearer credential when one is supplied.

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum ApiError {
  #[error("{0}")]
  RemoteError(String),
  #[error("Service unreachable! {0}")]
  TransportError(#[from] reqwest::Error),
}

#[derive(Clone)]
pub(crate) struct RestClient {
  base_url: String,
  client: reqwest::Client,
  token: Option<String>,
}

impl RestClient {
  /// Constructs a client for the given base URL. Calls carry the bearer
  /// header when `token` is present and no credential header otherwise.
  pub(crate) fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
    RestClient {
      base_url: base_url.into(),
      client: reqwest::Client::new(),
      token,
    }
  }

  fn endpoint(&self, path: &str) -> String {
    format!("{}{}", self.base_url.trim_end_matches('/'), path)
  }

  fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
    match &self.token {
      Some(token) => request.bearer_auth(token),
      None => request,
    }
  }

  pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
    let request = self.authorize(self.client.get(self.endpoint(path)));
    Self::decode(request.send().await?).await
  }

  pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
    &self,
    path: &str,
    body: &B,
  ) -> Result<T, ApiError> {
    let request = self.authorize(self.client.post(self.endpoint(path)).json(body));
    Self::decode(request.send().await?).await
  }

  pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
    let request = self.authorize(self.client.delete(self.endpoint(path)));
    let response = request.send().await?;
    if !response.status().is_success() {
      return Err(Self::remote_error(response).await);
    }
    Ok(())
  }

  async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    if !response.status().is_success() {
      return Err(Self::remote_error(response).await);
    }
    Ok(response.json().await?)
  }

  /// Extracts the remote message from an error body when there is one.
  async fn remote_error(response: reqwest::Response) -> ApiError {
    let status = response.status();
    let body: serde_json::Value = response.json().await.unwrap_or_default();
    let message = body
      .get("error")
      .or_else(|| body.get("message"))
      .and_then(|m| m.as_str())
      .map(|m| m.to_string())
      .unwrap_or_else(|| format!("Request failed with status {status}"));
    ApiError::RemoteError(message)
  }
}
