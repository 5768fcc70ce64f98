//! The identity service client backed by reqwest.

use async_trait::async_trait;
use serde_json::json;

use crate::auth::auth_error::AuthError;
use crate::auth::forms::{LoginForm, RegisterForm};
use crate::auth::identity_api::{IdentityApi, LoginPayload, ProfilePayload};
use crate::session::role::Role;

#[derive(Clone)]
pub(crate) struct HttpIdentityApi {
  base_url: String,
  client: reqwest::Client,
}

impl HttpIdentityApi {
  pub(crate) fn new(base_url: impl Into<String>) -> Self {
    HttpIdentityApi {
      base_url: base_url.into(),
      client: reqwest::Client::new(),
    }
  }

  fn endpoint(&self, path: &str) -> String {
    format!("{}{}", self.base_url.trim_end_matches('/'), path)
  }

  /// Decodes a login/register reply. A non-success status is a credential
  /// rejection; the remote error message is used when the body carries one.
  async fn decode_credential_reply(
    response: reqwest::Response,
    fallback: &str,
  ) -> Result<LoginPayload, AuthError> {
    let status = response.status();
    let payload: LoginPayload = response.json().await.unwrap_or_default();
    if !status.is_success() {
      let message = payload.error.unwrap_or_else(|| fallback.to_string());
      return Err(AuthError::CredentialsRejected(message));
    }
    Ok(payload)
  }
}

#[async_trait]
impl IdentityApi for HttpIdentityApi {
  async fn login(&self, form: &LoginForm) -> Result<LoginPayload, AuthError> {
    let response = self
      .client
      .post(self.endpoint("/login"))
      .json(&json!({"email": form.email, "password": form.password}))
      .send()
      .await?;
    Self::decode_credential_reply(response, "Login failed. Please try again.").await
  }

  async fn register(&self, form: &RegisterForm) -> Result<LoginPayload, AuthError> {
    let response = self
      .client
      .post(self.endpoint("/register"))
      .json(&json!({
        "username": form.username,
        "email": form.email,
        "password": form.password,
      }))
      .send()
      .await?;
    Self::decode_credential_reply(response, "Registration failed. Please try again.").await
  }

  async fn profile(&self, token: &str) -> Result<ProfilePayload, AuthError> {
    let response = self
      .client
      .get(self.endpoint("/profile"))
      .bearer_auth(token)
      .send()
      .await?;
    let status = response.status();
    if !status.is_success() {
      return Err(AuthError::BackendError(format!("/profile returned {status}")));
    }
    Ok(response.json().await?)
  }

  async fn update_role(&self, token: &str, role: Role) -> Result<(), AuthError> {
    let response = self
      .client
      .post(self.endpoint("/update-role"))
      .bearer_auth(token)
      .json(&json!({"role": role.to_string()}))
      .send()
      .await?;
    let status = response.status();
    if !status.is_success() {
      return Err(AuthError::BackendError(format!("/update-role returned {status}")));
    }
    Ok(())
  }
}
