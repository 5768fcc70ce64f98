//! A flat string key/value store that survives client restarts.

use async_trait::async_trait;
use dyn_clone::DynClone;
use thiserror::Error;

/// Keys this client owns in the durable store. A reload reconstructs the
/// session solely from these.
pub(crate) mod keys {
  pub(crate) const TOKEN: &str = "token";
  pub(crate) const ID: &str = "id";
  pub(crate) const USERNAME: &str = "username";
  pub(crate) const ROLE: &str = "role";
  pub(crate) const PROFILE_PICTURE: &str = "profilePicture";

  pub(crate) const ALL: [&str; 5] = [TOKEN, ID, USERNAME, ROLE, PROFILE_PICTURE];
}

#[derive(Debug, Error)]
pub(crate) enum StoreError {
  #[error("Store backend error occurred! {0}")]
  BackendError(#[from] sqlx::Error),
}

#[async_trait]
pub(crate) trait DurableStore: DynClone + Send + Sync {
  async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

  async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

  async fn delete(&self, key: &str) -> Result<(), StoreError>;
}

dyn_clone::clone_trait_object!(DurableStore);
