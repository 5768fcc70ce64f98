//! Gates rendering of any view that requires an authenticated session.

use crate::routing::navigation::{Navigation, Route};
use crate::session::session::Session;

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum GuardDecision {
  /// Initial restore has not completed; show a loading indicator, never
  /// redirect yet.
  Loading,
  /// Render the requested view.
  Render,
  /// Ready but unauthenticated; send the visitor back to the public entry
  /// point and replace history.
  Redirect(Navigation),
}

/// Pure function of the session; callers re-evaluate on every render.
pub(crate) fn evaluate(session: &Session) -> GuardDecision {
  if !session.ready {
    return GuardDecision::Loading;
  }
  if session.is_authenticated() {
    GuardDecision::Render
  } else {
    GuardDecision::Redirect(Navigation::replace_with(Route::Landing))
  }
}
