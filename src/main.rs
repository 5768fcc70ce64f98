use std::str::FromStr;

use tracing::Level;

use crate::global_context::CONFIG;

mod api;
mod auth;
mod global_context;
mod routing;
mod runner;
mod session;
mod shell;
mod store;
mod utils;

/// Entrypoint. Reads the log level from configuration (falling back to
/// [`INFO`]), installs the stdout tracing subscriber and hands control to the
/// [`runner`].
///
/// [`INFO`]: Level::INFO
/// [`runner`]: runner
///
#[tokio::main]
async fn main() {
  let log_level = Level::from_str(&CONFIG.get_string("log_level").unwrap_or(String::new()))
    .unwrap_or(Level::INFO);
  let subscriber = tracing_subscriber::fmt()
    .with_file(false)
    .with_line_number(false)
    .with_target(false)
    .with_max_level(log_level)
    .finish();
  tracing::subscriber::set_global_default(subscriber).unwrap();

  runner::run().await;
}
