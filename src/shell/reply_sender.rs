//! Where the shell's replies go.

use async_trait::async_trait;

#[async_trait]
pub(crate) trait ReplySend: Send + Sync {
  async fn send_line(&self, line: String);
}

pub(crate) struct StdoutReplySender;

#[async_trait]
impl ReplySend for StdoutReplySender {
  async fn send_line(&self, line: String) {
    println!("{line}");
  }
}
