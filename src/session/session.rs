//! The client-held record of who is using this client right now.

use crate::session::role::Role;

/// Cached denormalized copy of the identity record the backend holds.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct UserIdentity {
  pub(crate) id: String,
  pub(crate) username: String,
  pub(crate) role: Option<Role>,
  pub(crate) profile_picture: Option<String>,
}

/// A token alone is not enough to count as authenticated. Right after an
/// OAuth redirect the client holds a credential but does not yet know the
/// role, so `authenticated` keys off the identity instead.
#[derive(Clone, Debug, Default)]
pub(crate) struct Session {
  pub(crate) token: Option<String>,
  pub(crate) identity: Option<UserIdentity>,
  pub(crate) ready: bool,
}

impl Session {
  pub(crate) fn is_authenticated(&self) -> bool {
    self.identity.is_some()
  }

  pub(crate) fn role(&self) -> Option<Role> {
    self.identity.as_ref().and_then(|i| i.role)
  }
}

#[cfg(test)]
mod tests {
  use crate::session::role::Role;
  use crate::session::session::{Session, UserIdentity};

  #[test]
  fn token_alone_is_not_authenticated_test() {
    let session = Session {
      token: Some("t1".to_string()),
      ..Session::default()
    };
    assert!(!session.is_authenticated());
  }

  #[test]
  fn identity_is_authenticated_test() {
    let session = Session {
      token: Some("t1".to_string()),
      identity: Some(UserIdentity {
        id: "42".to_string(),
        username: "bob".to_string(),
        role: Some(Role::Teacher),
        profile_picture: None,
      }),
      ready: true,
    };
    assert!(session.is_authenticated());
    assert_eq!(Some(Role::Teacher), session.role());
  }
}
