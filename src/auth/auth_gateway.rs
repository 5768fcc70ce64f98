//! Mediates login, registration and identity refresh, translating remote
//! outcomes into session mutations and a caller-visible result.

use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

use crate::auth::auth_error::AuthError;
use crate::auth::forms::{LoginForm, RegisterForm};
use crate::auth::identity_api::IdentityApi;
use crate::routing::navigation::{Navigation, Route};
use crate::session::role::Role;
use crate::session::session::UserIdentity;
use crate::session::session_store::SessionStore;

/// Routing hint returned by [`AuthGateway::login`]. The gateway never
/// navigates on its own; the caller decides where to go next.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct LoginOutcome {
  pub(crate) role_selection_needed: bool,
}

/// The only writer of the [`SessionStore`]. Mutating operations hold an
/// in-flight lock, so a double-submitted form fails fast instead of racing
/// two profile refreshes.
pub(crate) struct AuthGateway {
  api: Box<dyn IdentityApi>,
  session: Arc<RwLock<SessionStore>>,
  in_flight: Mutex<()>,
}

impl AuthGateway {
  pub(crate) fn new(api: Box<dyn IdentityApi>, session: Arc<RwLock<SessionStore>>) -> Self {
    AuthGateway {
      api,
      session,
      in_flight: Mutex::new(()),
    }
  }

  /// Attempts to log the user in.
  ///
  /// On a token-bearing reply the credential is adopted first, then any
  /// identity fields present in the reply itself are cached, and finally the
  /// full profile is fetched so the role is authoritative. The token must be
  /// in place before the profile fetch is issued, otherwise that fetch goes
  /// out unauthenticated.
  ///
  /// # Errors
  ///
  /// - [`AuthError::CredentialsRejected`]: the reply carried no token; the
  ///   session is left untouched.
  /// - [`AuthError::OperationInFlight`]: another mutating call is running.
  /// - Profile refresh failures surface as-is; the adopted token is kept and
  ///   the next call may retry.
  ///
  #[tracing::instrument(skip_all)]
  pub(crate) async fn login(&self, form: &LoginForm) -> Result<LoginOutcome, AuthError> {
    let _guard = self.in_flight.try_lock().map_err(|_| AuthError::OperationInFlight)?;

    let payload = self.api.login(form).await?;
    let Some(token) = payload.token.clone() else {
      let message =
        payload.error.clone().unwrap_or_else(|| "Login failed. Please try again.".to_string());
      info!("Login rejected for '{}'.", form.email);
      return Err(AuthError::CredentialsRejected(message));
    };

    debug!("Login accepted, adopting credential.");
    self.session.write().await.set_token(Some(token)).await?;
    if let Some(preview) = payload.identity() {
      self.session.write().await.set_user(preview).await?;
    }

    let identity = self.refresh_profile_unlocked().await?;
    info!("User '{}' logged in.", identity.username);
    Ok(LoginOutcome {
      role_selection_needed: !matches!(identity.role, Some(Role::Student) | Some(Role::Teacher)),
    })
  }

  /// Registers a new account.
  ///
  /// Performs the same token adoption and profile refresh as [`login`], and
  /// ends with a hard navigation to role selection: fresh accounts are
  /// always role-less, so callers do not branch on the outcome.
  ///
  /// [`login`]: AuthGateway::login
  ///
  #[tracing::instrument(skip_all)]
  pub(crate) async fn register(&self, form: &RegisterForm) -> Result<Navigation, AuthError> {
    let _guard = self.in_flight.try_lock().map_err(|_| AuthError::OperationInFlight)?;

    let payload = self.api.register(form).await?;
    let Some(token) = payload.token.clone() else {
      let message = payload
        .error
        .clone()
        .unwrap_or_else(|| "Registration failed. Please try again.".to_string());
      warn!("Registration rejected for '{}'.", form.username);
      return Err(AuthError::CredentialsRejected(message));
    };

    self.session.write().await.set_token(Some(token)).await?;
    let identity = self.refresh_profile_unlocked().await?;
    info!("User '{}' registered.", identity.username);
    Ok(Navigation::Hard(Route::RoleSelection))
  }

  /// Fetches the authoritative identity record with the active credential
  /// and overwrites the cached copy. This is the single point where role is
  /// established after any credential change.
  pub(crate) async fn refresh_profile(&self) -> Result<UserIdentity, AuthError> {
    let _guard = self.in_flight.try_lock().map_err(|_| AuthError::OperationInFlight)?;
    self.refresh_profile_unlocked().await
  }

  /// Assigns a role, then refreshes the profile so the router sees the new
  /// role on its next evaluation.
  #[tracing::instrument(skip(self))]
  pub(crate) async fn select_role(&self, role: Role) -> Result<UserIdentity, AuthError> {
    let _guard = self.in_flight.try_lock().map_err(|_| AuthError::OperationInFlight)?;

    let token = self.active_token().await?;
    self.api.update_role(&token, role).await?;
    info!("Role updated to {role}.");
    self.refresh_profile_unlocked().await
  }

  /// Logout. Unconditional; hands back the hard navigation from the store.
  #[tracing::instrument(skip(self))]
  pub(crate) async fn logout(&self) -> Result<Navigation, AuthError> {
    let _guard = self.in_flight.try_lock().map_err(|_| AuthError::OperationInFlight)?;
    info!("Logging out.");
    Ok(self.session.write().await.clear().await?)
  }

  async fn active_token(&self) -> Result<String, AuthError> {
    self.session.read().await.session().token.clone().ok_or(AuthError::NotLoggedIn)
  }

  // Callers must hold the in-flight lock. A failure here does not roll the
  // token back; the caller keeps the credential and may retry.
  async fn refresh_profile_unlocked(&self) -> Result<UserIdentity, AuthError> {
    let token = self.active_token().await?;
    let identity = self.api.profile(&token).await?.into_identity();
    self.session.write().await.set_user(identity.clone()).await?;
    Ok(identity)
  }
}
