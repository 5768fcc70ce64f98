//! The command and its argument.

use std::str::FromStr;

use tracing::trace;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::shell::commands::Commands;

/// The argument is zeroized on drop; login lines carry passwords.
#[derive(Clone, Debug, PartialEq, Zeroize, ZeroizeOnDrop)]
pub(crate) struct Command {
  #[zeroize(skip)]
  pub(crate) command: Commands,
  pub(crate) argument: String,
}

impl Command {
  pub(crate) fn new(command: Commands, argument: impl Into<String>) -> Self {
    Command {
      command,
      argument: argument.into(),
    }
  }
}

impl FromStr for Command {
  type Err = anyhow::Error;

  #[tracing::instrument(skip(message))]
  fn from_str(message: &str) -> Result<Self, Self::Err> {
    trace!("Parsing message to command.");
    let message_trimmed = message.trim_end_matches(|c| c == '\n' || c == '\r');
    let split = message_trimmed
      .split_once(" ")
      .unwrap_or((message_trimmed, ""));
    let command = Command::new(split.0.parse()?, split.1);
    Ok(command)
  }
}
