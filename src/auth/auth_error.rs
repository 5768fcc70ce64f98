//! Various errors that can result during user authentication.

use thiserror::Error;

use crate::store::durable_store::StoreError;

#[derive(Debug, Error)]
pub(crate) enum AuthError {
  /// The identity service rejected the credentials; carries the remote
  /// message when one was supplied.
  #[error("{0}")]
  CredentialsRejected(String),
  #[error("No active credential!")]
  NotLoggedIn,
  #[error("Another authentication call is already in flight!")]
  OperationInFlight,
  #[error("Identity service unreachable! {0}")]
  TransportError(#[from] reqwest::Error),
  #[error("Unexpected identity service reply! {0}")]
  BackendError(String),
  #[error("Session could not be persisted! {0}")]
  StoreError(#[from] StoreError),
}
