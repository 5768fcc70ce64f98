use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;
use tokio::sync::mpsc::Sender;

use crate::shell::reply_sender::ReplySend;

use crate::auth::auth_error::AuthError;
use crate::auth::forms::{LoginForm, RegisterForm};
use crate::auth::identity_api::{IdentityApi, LoginPayload, ProfilePayload};
use crate::session::role::Role;

/// Rendezvous used to park a stubbed login mid-call, so tests can observe
/// the in-flight guard.
pub(crate) struct LoginGate {
  pub(crate) entered: Notify,
  pub(crate) release: Notify,
}

/// A canned identity service. Replies are fixed payloads; a [`None`]
/// profile payload simulates a profile endpoint failure.
#[derive(Clone, Default)]
pub(crate) struct StubIdentityApi {
  pub(crate) login_payload: LoginPayload,
  pub(crate) register_payload: LoginPayload,
  pub(crate) profile_payload: Option<ProfilePayload>,
  /// Bearer tokens observed by the profile endpoint, in call order.
  pub(crate) profile_tokens: Arc<Mutex<Vec<String>>>,
  /// `(token, role)` pairs observed by the update-role endpoint.
  pub(crate) role_updates: Arc<Mutex<Vec<(String, Role)>>>,
  login_gate: Option<Arc<LoginGate>>,
}

impl StubIdentityApi {
  /// Makes `login` park until the returned gate's `release` is notified,
  /// signalling `entered` on arrival.
  pub(crate) fn block_login(&mut self) -> Arc<LoginGate> {
    let gate = Arc::new(LoginGate {
      entered: Notify::new(),
      release: Notify::new(),
    });
    self.login_gate = Some(gate.clone());
    gate
  }
}

pub(crate) struct TestReplySender {
  tx: Sender<String>,
}

impl TestReplySender {
  pub(crate) fn new(tx: Sender<String>) -> Self {
    TestReplySender { tx }
  }
}

#[async_trait]
impl ReplySend for TestReplySender {
  async fn send_line(&self, line: String) {
    println!("TestReplySender: received line: {line}");
    self.tx.send(line).await.unwrap();
  }
}

#[async_trait]
impl IdentityApi for StubIdentityApi {
  async fn login(&self, _form: &LoginForm) -> Result<LoginPayload, AuthError> {
    if let Some(gate) = &self.login_gate {
      gate.entered.notify_one();
      gate.release.notified().await;
    }
    Ok(self.login_payload.clone())
  }

  async fn register(&self, _form: &RegisterForm) -> Result<LoginPayload, AuthError> {
    Ok(self.register_payload.clone())
  }

  async fn profile(&self, token: &str) -> Result<ProfilePayload, AuthError> {
    self.profile_tokens.lock().unwrap().push(token.to_string());
    self
      .profile_payload
      .clone()
      .ok_or_else(|| AuthError::BackendError("profile unavailable".to_string()))
  }

  async fn update_role(&self, token: &str, role: Role) -> Result<(), AuthError> {
    self.role_updates.lock().unwrap().push((token.to_string(), role));
    Ok(())
  }
}
