//! Single source of truth for the current user, mirrored into durable storage.

use tracing::{debug, warn};

use crate::routing::navigation::{Navigation, Route};
use crate::session::role::Role;
use crate::session::session::{Session, UserIdentity};
use crate::store::durable_store::{DurableStore, StoreError, keys};

/// Owns the in-memory [`Session`] and keeps the durable store in step with
/// it. Memory and durable writes happen inside one method per operation, so
/// a partial dual-write cannot be expressed by callers.
pub(crate) struct SessionStore {
  session: Session,
  store: Box<dyn DurableStore>,
}

impl SessionStore {
  pub(crate) fn new(store: Box<dyn DurableStore>) -> Self {
    SessionStore {
      session: Session::default(),
      store,
    }
  }

  pub(crate) fn session(&self) -> &Session {
    &self.session
  }

  /// Reads the durable store once at startup and hydrates the session.
  ///
  /// A present token is adopted together with whatever identity fields were
  /// persisted alongside it; a missing role parses to [`None`]. Without a
  /// token the session stays empty even if other keys linger. Empty or
  /// partial data degrades to "not authenticated" rather than failing, and a
  /// broken store backend is treated the same way. Always concludes by
  /// marking the session ready; repeated calls are no-ops.
  #[tracing::instrument(skip(self))]
  pub(crate) async fn restore(&mut self) {
    if self.session.ready {
      return;
    }
    match self.read_stored_session().await {
      Ok(Some((token, identity))) => {
        debug!("Restored session for '{}'.", identity.username);
        self.session.token = Some(token);
        self.session.identity = Some(identity);
      }
      Ok(None) => debug!("No persisted session found."),
      Err(e) => warn!("Failed to read persisted session, starting empty! {e}"),
    }
    self.session.ready = true;
  }

  async fn read_stored_session(&self) -> Result<Option<(String, UserIdentity)>, StoreError> {
    let Some(token) = self.store.get(keys::TOKEN).await? else {
      return Ok(None);
    };
    let identity = UserIdentity {
      id: self.store.get(keys::ID).await?.unwrap_or_default(),
      username: self.store.get(keys::USERNAME).await?.unwrap_or_default(),
      role: self.store.get(keys::ROLE).await?.map(|r| Role::from_wire(&r)),
      profile_picture: self.store.get(keys::PROFILE_PICTURE).await?,
    };
    Ok(Some((token, identity)))
  }

  /// Sets or clears the active credential, in memory and in the durable
  /// store. Clearing removes the durable copy as well.
  pub(crate) async fn set_token(&mut self, token: Option<String>) -> Result<(), StoreError> {
    match token {
      Some(token) => {
        self.store.set(keys::TOKEN, &token).await?;
        self.session.token = Some(token);
      }
      None => {
        self.store.delete(keys::TOKEN).await?;
        self.session.token = None;
      }
    }
    Ok(())
  }

  /// Replaces the cached identity and mirrors every present field.
  pub(crate) async fn set_user(&mut self, identity: UserIdentity) -> Result<(), StoreError> {
    self.store.set(keys::ID, &identity.id).await?;
    self.store.set(keys::USERNAME, &identity.username).await?;
    if let Some(role) = identity.role {
      self.store.set(keys::ROLE, &role.to_string()).await?;
    }
    if let Some(picture) = &identity.profile_picture {
      self.store.set(keys::PROFILE_PICTURE, picture).await?;
    }
    self.session.identity = Some(identity);
    Ok(())
  }

  /// Logout. Empties every in-memory field, deletes every owned durable key
  /// and hands back the hard navigation to the public entry point. The hard
  /// navigation guarantees no in-flight state from the cleared session can
  /// be observed afterwards; `ready` stays true.
  #[tracing::instrument(skip(self))]
  pub(crate) async fn clear(&mut self) -> Result<Navigation, StoreError> {
    for key in keys::ALL {
      self.store.delete(key).await?;
    }
    self.session.token = None;
    self.session.identity = None;
    Ok(Navigation::Hard(Route::Landing))
  }
}
