//! Boot sequence for the interactive client.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::RwLock;
use tracing::{error, info};

use crate::auth::auth_gateway::AuthGateway;
use crate::auth::http_identity_api::HttpIdentityApi;
use crate::global_context::{CONFIG, DB_LAZY};
use crate::routing::role_router::{self, DashboardView};
use crate::routing::route_guard::{self, GuardDecision};
use crate::session::session_store::SessionStore;
use crate::shell::command_processor::{CommandProcessor, Flow};
use crate::shell::reply_sender::StdoutReplySender;
use crate::store::sqlite_store::SqliteStore;

/// Starts the client shell.
///
/// # Session setup
/// Opens the durable store, restores the persisted session exactly once and
/// wires the [`AuthGateway`] as the only writer of the session. The gateway
/// and shell share the session behind an `Arc<RwLock>`.
///
/// # Shell loop
/// Reads stdin line by line and feeds each line to the
/// [`CommandProcessor`]. The loop ends on quit/logout, end of input or
/// SIGINT.
///
pub(crate) async fn run() {
  let api_base_url = match CONFIG.get_string("api_base_url") {
    Ok(url) => url,
    Err(_) => {
      error!("api_base_url must be set in config!");
      return;
    }
  };

  let store = match SqliteStore::new(DB_LAZY.clone()).await {
    Ok(store) => store,
    Err(e) => {
      error!("Failed to open the session store! Error: {}", e);
      return;
    }
  };
  let mut sessions = SessionStore::new(Box::new(store));
  sessions.restore().await;
  let session = Arc::new(RwLock::new(sessions));

  let identity_api = HttpIdentityApi::new(api_base_url.clone());
  let gateway = Arc::new(AuthGateway::new(Box::new(identity_api), session.clone()));
  let processor = CommandProcessor::new(session.clone(), gateway, api_base_url);

  announce_entry_view(&session).await;

  let reply_sender = StdoutReplySender;
  let mut lines = BufReader::new(tokio::io::stdin()).lines();
  loop {
    tokio::select! {
      signal = tokio::signal::ctrl_c() => {
        match signal {
          Ok(()) => info!("Ctrl-c received!"),
          Err(e) => error!("Ctrl-c signal error! {e}"),
        }
        break;
      }
      line = lines.next_line() => {
        match line {
          Ok(Some(line)) => {
            if processor.evaluate(line, &reply_sender).await == Flow::Exit {
              break;
            }
          }
          Ok(None) => break,
          Err(e) => {
            error!("Failed to read input! {e}");
            break;
          }
        }
      }
    }
  }
}

/// Logs the view a restored session lands on, the same decision a page load
/// makes: guard first, then role dispatch.
async fn announce_entry_view(session: &Arc<RwLock<SessionStore>>) {
  let session = session.read().await;
  match route_guard::evaluate(session.session()) {
    GuardDecision::Render => match role_router::dispatch(session.session()) {
      DashboardView::Teacher => info!("Restored session: teacher dashboard."),
      DashboardView::Student => info!("Restored session: student dashboard."),
      DashboardView::Redirect(_) => info!("Restored session: role selection needed."),
    },
    GuardDecision::Redirect(_) => info!("No session; use 'login' or 'register'."),
    GuardDecision::Loading => {}
  }
}
