//! Navigation primitives the guard and router hand back to the shell.

use strum_macros::Display;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Display)]
pub(crate) enum Route {
  /// Public entry point; sign-in happens here.
  #[strum(serialize = "/")]
  Landing,
  #[strum(serialize = "/dashboard")]
  Dashboard,
  #[strum(serialize = "/role-selection")]
  RoleSelection,
}

/// How to get to a [`Route`]. The variants matter to the caller: an in-app
/// change keeps process state alive, a hard navigation must not let any
/// state from before the transition survive.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Navigation {
  /// In-app route change. `replace` drops the current entry from history so
  /// back-navigation cannot return to it.
  InApp { route: Route, replace: bool },
  /// Full reload to the route.
  Hard(Route),
}

impl Navigation {
  pub(crate) fn replace_with(route: Route) -> Self {
    Navigation::InApp { route, replace: true }
  }
}
