//! Contract of the remote identity service.

use async_trait::async_trait;
use dyn_clone::DynClone;
use serde::Deserialize;

use crate::auth::auth_error::AuthError;
use crate::auth::forms::{LoginForm, RegisterForm};
use crate::session::role::Role;
use crate::session::session::UserIdentity;

/// Body of a login or registration reply. Every field is optional on the
/// wire; a missing token means the credentials were rejected and `error`
/// carries the reason, while the identity fields are an opportunistic
/// preview of what `/profile` will return.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LoginPayload {
  pub(crate) token: Option<String>,
  pub(crate) id: Option<String>,
  pub(crate) role: Option<String>,
  pub(crate) username: Option<String>,
  pub(crate) profile_picture: Option<String>,
  pub(crate) error: Option<String>,
}

impl LoginPayload {
  /// Identity preview carried by the payload, if it carries one at all.
  pub(crate) fn identity(&self) -> Option<UserIdentity> {
    if self.id.is_none() && self.username.is_none() {
      return None;
    }
    Some(UserIdentity {
      id: self.id.clone().unwrap_or_default(),
      username: self.username.clone().unwrap_or_default(),
      role: self.role.as_deref().map(Role::from_wire),
      profile_picture: self.profile_picture.clone(),
    })
  }
}

/// Body of a `/profile` reply, the authoritative identity record.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProfilePayload {
  pub(crate) id: String,
  pub(crate) username: String,
  pub(crate) role: Option<String>,
  pub(crate) profile_picture: Option<String>,
}

impl ProfilePayload {
  pub(crate) fn into_identity(self) -> UserIdentity {
    UserIdentity {
      id: self.id,
      username: self.username,
      role: self.role.as_deref().map(Role::from_wire),
      profile_picture: self.profile_picture,
    }
  }
}

#[async_trait]
pub(crate) trait IdentityApi: DynClone + Send + Sync {
  async fn login(&self, form: &LoginForm) -> Result<LoginPayload, AuthError>;

  async fn register(&self, form: &RegisterForm) -> Result<LoginPayload, AuthError>;

  async fn profile(&self, token: &str) -> Result<ProfilePayload, AuthError>;

  async fn update_role(&self, token: &str, role: Role) -> Result<(), AuthError>;
}

dyn_clone::clone_trait_object!(IdentityApi);
