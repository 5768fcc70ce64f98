//! Picks the top-level dashboard matching the session's role.
//!
//! This is the single place role-based dispatch lives; the login flow and the
//! OAuth redirect handler both go through it instead of carrying their own
//! copies of the condition.

use crate::routing::navigation::{Navigation, Route};
use crate::session::role::Role;
use crate::session::session::Session;

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum DashboardView {
  Teacher,
  Student,
  /// Anything other than an assigned role, including the unassigned
  /// placeholder, goes to role selection with history replaced.
  Redirect(Navigation),
}

/// Re-evaluated on every render; role can change mid-session through the
/// role-selection flow without a reload.
pub(crate) fn dispatch(session: &Session) -> DashboardView {
  match session.role() {
    Some(Role::Teacher) => DashboardView::Teacher,
    Some(Role::Student) => DashboardView::Student,
    Some(Role::Unassigned) | None => {
      DashboardView::Redirect(Navigation::replace_with(Route::RoleSelection))
    }
  }
}

#[cfg(test)]
mod tests {
  use crate::routing::navigation::{Navigation, Route};
  use crate::routing::role_router::{DashboardView, dispatch};
  use crate::session::role::Role;
  use crate::session::session::{Session, UserIdentity};

  fn session_with_role(role: Option<Role>) -> Session {
    Session {
      token: Some("t1".to_string()),
      identity: Some(UserIdentity {
        id: "42".to_string(),
        username: "bob".to_string(),
        role,
        profile_picture: None,
      }),
      ready: true,
    }
  }

  #[test]
  fn teacher_dashboard_test() {
    assert_eq!(DashboardView::Teacher, dispatch(&session_with_role(Some(Role::Teacher))));
  }

  #[test]
  fn student_dashboard_test() {
    assert_eq!(DashboardView::Student, dispatch(&session_with_role(Some(Role::Student))));
  }

  #[test]
  fn placeholder_role_redirects_test() {
    let expected = DashboardView::Redirect(Navigation::InApp {
      route: Route::RoleSelection,
      replace: true,
    });
    assert_eq!(expected, dispatch(&session_with_role(Some(Role::Unassigned))));
    assert_eq!(expected, dispatch(&session_with_role(None)));
  }

  #[test]
  fn redispatch_after_role_change_test() {
    let mut session = session_with_role(None);
    assert!(matches!(dispatch(&session), DashboardView::Redirect(_)));

    // in-place mutation, no restore in between
    session.identity.as_mut().unwrap().role = Some(Role::Student);
    assert_eq!(DashboardView::Student, dispatch(&session));
  }
}
