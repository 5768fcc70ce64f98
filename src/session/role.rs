//! Roles a LearnSphere account can hold.

use std::str::FromStr;

use strum_macros::{Display, EnumIter, EnumString};

/// `Unassigned` is the placeholder the backend hands out before the user has
/// picked student or teacher.
#[derive(Copy, Clone, Debug, Hash, Ord, PartialOrd, Eq, PartialEq, Display, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub(crate) enum Role {
  #[strum(serialize = "USER")]
  Unassigned,
  #[strum(serialize = "STUDENT")]
  Student,
  #[strum(serialize = "TEACHER")]
  Teacher,
}

impl Role {
  /// Parses a wire value, degrading unknown values to [`Role::Unassigned`].
  pub(crate) fn from_wire(value: &str) -> Role {
    Role::from_str(value).unwrap_or(Role::Unassigned)
  }
}
