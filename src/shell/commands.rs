//! Commands the shell accepts.

use strum_macros::{Display, EnumIter, EnumMessage, EnumString};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Display, EnumIter, EnumMessage, EnumString)]
#[strum(ascii_case_insensitive)]
pub(crate) enum Commands {
  #[strum(message = "login <email> <password>")]
  LOGIN,
  #[strum(message = "register <username> <email> <password>")]
  REGISTER,
  #[strum(message = "role <student|teacher>")]
  ROLE,
  #[strum(message = "whoami")]
  WHOAMI,
  #[strum(message = "classes")]
  CLASSES,
  #[strum(message = "class <class id>")]
  CLASS,
  #[strum(message = "create <name> [section]")]
  CREATE,
  #[strum(message = "join <class code>")]
  JOIN,
  #[strum(message = "assignments <class id>")]
  ASSIGNMENTS,
  #[strum(message = "assignment <assignment id>")]
  ASSIGNMENT,
  #[strum(message = "submit <assignment id> <text>")]
  SUBMIT,
  #[strum(message = "submissions <assignment id>")]
  SUBMISSIONS,
  #[strum(message = "remove <class|assignment> <id>")]
  REMOVE,
  #[strum(message = "overview")]
  OVERVIEW,
  #[strum(message = "logout")]
  LOGOUT,
  #[strum(message = "help")]
  HELP,
  #[strum(message = "quit")]
  QUIT,
}

#[cfg(test)]
mod tests {
  use strum::{EnumMessage, IntoEnumIterator};

  use crate::shell::commands::Commands;

  #[test]
  fn ensure_all_commands_have_usage_test() {
    Commands::iter().for_each(|c| assert!(c.get_message().is_some()));
  }

  #[test]
  fn parse_case_insensitive_test() {
    assert_eq!(Commands::LOGIN, "login".parse().unwrap());
    assert_eq!(Commands::LOGIN, "LOGIN".parse().unwrap());
    assert_eq!(Commands::WHOAMI, "WhoAmI".parse().unwrap());
  }
}
