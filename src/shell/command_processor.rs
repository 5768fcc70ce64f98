//! Parses shell input and executes it against the session and the remote
//! services. This is the leaf consumer layer: it only reads the session and
//! goes through the gateway for every mutation.

use std::str::FromStr;
use std::sync::Arc;

use futures::future::try_join_all;
use strum::{EnumMessage, IntoEnumIterator};
use tokio::sync::RwLock;
use zeroize::Zeroize;

use crate::api::assignments::AssignmentApi;
use crate::api::classes::{ClassApi, ClassRecord};
use crate::api::rest_client::RestClient;
use crate::api::submissions::{NewSubmission, SubmissionApi};
use crate::auth::auth_gateway::AuthGateway;
use crate::auth::forms::{LoginForm, RegisterFormBuilder};
use crate::routing::navigation::Navigation;
use crate::routing::role_router::{self, DashboardView};
use crate::routing::route_guard::{self, GuardDecision};
use crate::session::role::Role;
use crate::session::session_store::SessionStore;
use crate::shell::command::Command;
use crate::shell::commands::Commands;
use crate::shell::reply_sender::ReplySend;

/// Whether the shell keeps running after a command.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Flow {
  Continue,
  /// A hard navigation or quit; the process ends so no in-memory state
  /// survives.
  Exit,
}

pub(crate) struct CommandProcessor {
  session: Arc<RwLock<SessionStore>>,
  gateway: Arc<AuthGateway>,
  api_base_url: String,
}

impl CommandProcessor {
  pub(crate) fn new(
    session: Arc<RwLock<SessionStore>>,
    gateway: Arc<AuthGateway>,
    api_base_url: impl Into<String>,
  ) -> Self {
    CommandProcessor {
      session,
      gateway,
      api_base_url: api_base_url.into(),
    }
  }

  /// Parses one input line and executes it. Unparseable non-empty input gets
  /// a usage reply; the raw line is zeroized once parsed.
  #[tracing::instrument(skip_all)]
  pub(crate) async fn evaluate<T: ReplySend>(&self, mut message: String, reply_sender: &T) -> Flow {
    let command = message.trim().parse::<Command>();
    let not_empty = !message.trim().is_empty();
    message.zeroize();
    match command {
      Ok(command) => self.execute(command, reply_sender).await,
      Err(_) => {
        if not_empty {
          reply_sender.send_line("Command not recognized; try 'help'.".to_string()).await;
        }
        Flow::Continue
      }
    }
  }

  async fn execute<T: ReplySend>(&self, command: Command, reply_sender: &T) -> Flow {
    match command.command {
      Commands::HELP => {
        for c in Commands::iter() {
          reply_sender.send_line(format!("  {}", c.get_message().unwrap_or_default())).await;
        }
        Flow::Continue
      }
      Commands::QUIT => Flow::Exit,
      Commands::LOGIN => self.login(&command.argument, reply_sender).await,
      Commands::REGISTER => self.register(&command.argument, reply_sender).await,
      Commands::ROLE => self.select_role(&command.argument, reply_sender).await,
      Commands::WHOAMI => self.whoami(reply_sender).await,
      Commands::CLASSES => self.classes(reply_sender).await,
      Commands::CLASS => self.class_details(&command.argument, reply_sender).await,
      Commands::CREATE => self.create_class(&command.argument, reply_sender).await,
      Commands::JOIN => self.join(&command.argument, reply_sender).await,
      Commands::ASSIGNMENTS => self.assignments(&command.argument, reply_sender).await,
      Commands::ASSIGNMENT => self.assignment_details(&command.argument, reply_sender).await,
      Commands::SUBMIT => self.submit(&command.argument, reply_sender).await,
      Commands::SUBMISSIONS => self.submissions(&command.argument, reply_sender).await,
      Commands::REMOVE => self.remove(&command.argument, reply_sender).await,
      Commands::OVERVIEW => self.overview(reply_sender).await,
      Commands::LOGOUT => self.logout(reply_sender).await,
    }
  }

  /// Gate shared by every protected command; mirrors what the route guard
  /// does for a protected view.
  async fn gate<T: ReplySend>(&self, reply_sender: &T) -> bool {
    let decision = route_guard::evaluate(self.session.read().await.session());
    match decision {
      GuardDecision::Render => true,
      GuardDecision::Loading => {
        reply_sender.send_line("Session is still restoring, try again.".to_string()).await;
        false
      }
      GuardDecision::Redirect(navigation) => {
        reply_sender.send_line(format!("You are not signed in. {}", describe(&navigation))).await;
        false
      }
    }
  }

  async fn announce_dashboard<T: ReplySend>(&self, reply_sender: &T) {
    let view = role_router::dispatch(self.session.read().await.session());
    let line = match view {
      DashboardView::Teacher => "Teacher dashboard.".to_string(),
      DashboardView::Student => "Student dashboard.".to_string(),
      DashboardView::Redirect(navigation) => describe(&navigation),
    };
    reply_sender.send_line(line).await;
  }

  async fn login<T: ReplySend>(&self, argument: &str, reply_sender: &T) -> Flow {
    let mut parts = argument.split_whitespace();
    let (Some(email), Some(password)) = (parts.next(), parts.next()) else {
      reply_sender.send_line("Usage: login <email> <password>".to_string()).await;
      return Flow::Continue;
    };
    match self.gateway.login(&LoginForm::new(email, password)).await {
      Ok(outcome) => {
        if outcome.role_selection_needed {
          reply_sender
            .send_line("Signed in. Pick a role with 'role <student|teacher>'.".to_string())
            .await;
        } else {
          reply_sender.send_line("Signed in.".to_string()).await;
          self.announce_dashboard(reply_sender).await;
        }
      }
      Err(e) => reply_sender.send_line(format!("Login failed: {e}")).await,
    }
    Flow::Continue
  }

  async fn register<T: ReplySend>(&self, argument: &str, reply_sender: &T) -> Flow {
    let mut parts = argument.split_whitespace();
    let (Some(username), Some(email), Some(password)) =
      (parts.next(), parts.next(), parts.next())
    else {
      reply_sender.send_line("Usage: register <username> <email> <password>".to_string()).await;
      return Flow::Continue;
    };
    let form = RegisterFormBuilder::default()
      .username(username)
      .email(email)
      .password(password)
      .build();
    let form = match form {
      Ok(form) => form,
      Err(e) => {
        reply_sender.send_line(format!("Registration failed: {e}")).await;
        return Flow::Continue;
      }
    };
    match self.gateway.register(&form).await {
      Ok(navigation) => {
        reply_sender.send_line(format!("Registered. {}", describe(&navigation))).await;
        reply_sender.send_line("Pick a role with 'role <student|teacher>'.".to_string()).await;
      }
      Err(e) => reply_sender.send_line(format!("Registration failed: {e}")).await,
    }
    Flow::Continue
  }

  async fn select_role<T: ReplySend>(&self, argument: &str, reply_sender: &T) -> Flow {
    let role = Role::from_str(argument.trim());
    let Ok(role @ (Role::Student | Role::Teacher)) = role else {
      reply_sender.send_line("Usage: role <student|teacher>".to_string()).await;
      return Flow::Continue;
    };
    match self.gateway.select_role(role).await {
      Ok(_) => self.announce_dashboard(reply_sender).await,
      Err(e) => reply_sender.send_line(format!("Failed to update role: {e}")).await,
    }
    Flow::Continue
  }

  async fn whoami<T: ReplySend>(&self, reply_sender: &T) -> Flow {
    if !self.gate(reply_sender).await {
      return Flow::Continue;
    }
    let session = self.session.read().await;
    // gate() established the identity is populated
    let identity = session.session().identity.as_ref().unwrap();
    let role = identity.role.map(|r| r.to_string()).unwrap_or_else(|| "no role".to_string());
    reply_sender
      .send_line(format!("{} (id {}, {role})", identity.username, identity.id))
      .await;
    Flow::Continue
  }

  async fn classes<T: ReplySend>(&self, reply_sender: &T) -> Flow {
    if !self.gate(reply_sender).await {
      return Flow::Continue;
    }
    let result = match self.class_listing().await {
      Ok(Some(classes)) => classes,
      Ok(None) => {
        reply_sender.send_line("Pick a role first: 'role <student|teacher>'.".to_string()).await;
        return Flow::Continue;
      }
      Err(e) => {
        reply_sender.send_line(format!("Failed to list classes: {e}")).await;
        return Flow::Continue;
      }
    };
    if result.is_empty() {
      reply_sender.send_line("No classes yet.".to_string()).await;
    }
    for class in result {
      let section = class.section.as_deref().unwrap_or("-");
      let live = if class.is_live { " [live]" } else { "" };
      reply_sender
        .send_line(format!("{}  {} (section {section}){live}", class.id, class.name))
        .await;
    }
    Flow::Continue
  }

  async fn class_listing(&self) -> Result<Option<Vec<ClassRecord>>, anyhow::Error> {
    let (id, role) = {
      let session = self.session.read().await;
      let identity = session.session().identity.clone().unwrap_or_default();
      (identity.id, identity.role)
    };
    let api = ClassApi::new(self.rest_client().await);
    match role {
      Some(Role::Teacher) => Ok(Some(api.list_for_teacher(&id).await?)),
      Some(Role::Student) => Ok(Some(api.list_for_student(&id).await?)),
      _ => Ok(None),
    }
  }

  async fn class_details<T: ReplySend>(&self, argument: &str, reply_sender: &T) -> Flow {
    if !self.gate(reply_sender).await {
      return Flow::Continue;
    }
    let class_id = argument.trim();
    if class_id.is_empty() {
      reply_sender.send_line("Usage: class <class id>".to_string()).await;
      return Flow::Continue;
    }
    let api = ClassApi::new(self.rest_client().await);
    match api.details(class_id).await {
      Ok(class) => {
        let section = class.section.as_deref().unwrap_or("-");
        let code = class.code.as_deref().unwrap_or("-");
        reply_sender
          .send_line(format!(
            "{} (section {section}, code {code}, {} student(s))",
            class.name,
            class.student_ids.len()
          ))
          .await;
        if class.is_live {
          let room = class.meeting_room_id.as_deref().unwrap_or("unknown room");
          reply_sender.send_line(format!("Live now in {room}.")).await;
        }
      }
      Err(e) => reply_sender.send_line(format!("Failed to fetch class: {e}")).await,
    }
    Flow::Continue
  }

  async fn create_class<T: ReplySend>(&self, argument: &str, reply_sender: &T) -> Flow {
    if !self.gate(reply_sender).await {
      return Flow::Continue;
    }
    let mut parts = argument.split_whitespace();
    let Some(name) = parts.next() else {
      reply_sender.send_line("Usage: create <name> [section]".to_string()).await;
      return Flow::Continue;
    };
    let api = ClassApi::new(self.rest_client().await);
    match api.create(name, parts.next()).await {
      Ok(class) => {
        let code = class.code.as_deref().unwrap_or("-");
        reply_sender.send_line(format!("Created '{}' (join code {code}).", class.name)).await;
      }
      Err(e) => reply_sender.send_line(format!("Failed to create class: {e}")).await,
    }
    Flow::Continue
  }

  async fn join<T: ReplySend>(&self, argument: &str, reply_sender: &T) -> Flow {
    if !self.gate(reply_sender).await {
      return Flow::Continue;
    }
    let code = argument.trim();
    if code.is_empty() {
      reply_sender.send_line("Usage: join <class code>".to_string()).await;
      return Flow::Continue;
    }
    let api = ClassApi::new(self.rest_client().await);
    match api.join(code).await {
      Ok(class) => reply_sender.send_line(format!("Joined '{}'.", class.name)).await,
      Err(e) => reply_sender.send_line(format!("Failed to join: {e}")).await,
    }
    Flow::Continue
  }

  async fn assignments<T: ReplySend>(&self, argument: &str, reply_sender: &T) -> Flow {
    if !self.gate(reply_sender).await {
      return Flow::Continue;
    }
    let class_id = argument.trim();
    if class_id.is_empty() {
      reply_sender.send_line("Usage: assignments <class id>".to_string()).await;
      return Flow::Continue;
    }
    let api = AssignmentApi::new(self.rest_client().await);
    match api.list_for_class(class_id).await {
      Ok(assignments) => {
        if assignments.is_empty() {
          reply_sender.send_line("No assignments.".to_string()).await;
        }
        for assignment in assignments {
          let due = assignment
            .due_date
            .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "no due date".to_string());
          reply_sender
            .send_line(format!(
              "{}  {} ({} pts, due {due})",
              assignment.id, assignment.title, assignment.points
            ))
            .await;
        }
      }
      Err(e) => reply_sender.send_line(format!("Failed to list assignments: {e}")).await,
    }
    Flow::Continue
  }

  async fn assignment_details<T: ReplySend>(&self, argument: &str, reply_sender: &T) -> Flow {
    if !self.gate(reply_sender).await {
      return Flow::Continue;
    }
    let assignment_id = argument.trim();
    if assignment_id.is_empty() {
      reply_sender.send_line("Usage: assignment <assignment id>".to_string()).await;
      return Flow::Continue;
    }
    let api = AssignmentApi::new(self.rest_client().await);
    match api.details(assignment_id).await {
      Ok(assignment) => {
        let kind = assignment.kind.as_deref().unwrap_or("ASSIGNMENT");
        let due = assignment
          .due_date
          .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
          .unwrap_or_else(|| "no due date".to_string());
        reply_sender
          .send_line(format!("{} [{kind}] {} pts, due {due}", assignment.title, assignment.points))
          .await;
        if let Some(description) = assignment.description {
          reply_sender.send_line(description).await;
        }
        if assignment.allow_late_submissions {
          reply_sender
            .send_line(format!("Late submissions allowed ({}% penalty).", assignment.late_penalty))
            .await;
        }
      }
      Err(e) => reply_sender.send_line(format!("Failed to fetch assignment: {e}")).await,
    }
    Flow::Continue
  }

  async fn submit<T: ReplySend>(&self, argument: &str, reply_sender: &T) -> Flow {
    if !self.gate(reply_sender).await {
      return Flow::Continue;
    }
    let (Some(assignment_id), content) = split_argument(argument) else {
      reply_sender.send_line("Usage: submit <assignment id> <text>".to_string()).await;
      return Flow::Continue;
    };
    let student_id = {
      let session = self.session.read().await;
      session.session().identity.clone().unwrap_or_default().id
    };
    let submission = NewSubmission {
      assignment_id: assignment_id.to_string(),
      student_id,
      content,
      question_answers: Default::default(),
    };
    let api = SubmissionApi::new(self.rest_client().await);
    match api.submit(&submission).await {
      Ok(record) => reply_sender.send_line(format!("Submitted as {}.", record.id)).await,
      Err(e) => reply_sender.send_line(format!("Failed to submit: {e}")).await,
    }
    Flow::Continue
  }

  async fn submissions<T: ReplySend>(&self, argument: &str, reply_sender: &T) -> Flow {
    if !self.gate(reply_sender).await {
      return Flow::Continue;
    }
    let assignment_id = argument.trim();
    if assignment_id.is_empty() {
      reply_sender.send_line("Usage: submissions <assignment id>".to_string()).await;
      return Flow::Continue;
    }
    let api = SubmissionApi::new(self.rest_client().await);
    match api.list_for_assignment(assignment_id).await {
      Ok(submissions) => {
        if submissions.is_empty() {
          reply_sender.send_line("No submissions yet.".to_string()).await;
        }
        for submission in submissions {
          let when = submission
            .submission_date
            .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "unknown time".to_string());
          reply_sender
            .send_line(format!(
              "{}  student {} at {when}, score {}",
              submission.id, submission.student_id, submission.score
            ))
            .await;
        }
      }
      Err(e) => reply_sender.send_line(format!("Failed to list submissions: {e}")).await,
    }
    Flow::Continue
  }

  async fn remove<T: ReplySend>(&self, argument: &str, reply_sender: &T) -> Flow {
    if !self.gate(reply_sender).await {
      return Flow::Continue;
    }
    let mut parts = argument.split_whitespace();
    let (Some(target), Some(id)) = (parts.next(), parts.next()) else {
      reply_sender.send_line("Usage: remove <class|assignment> <id>".to_string()).await;
      return Flow::Continue;
    };
    let result = match target {
      "class" => ClassApi::new(self.rest_client().await).remove(id).await,
      "assignment" => AssignmentApi::new(self.rest_client().await).remove(id).await,
      _ => {
        reply_sender.send_line("Usage: remove <class|assignment> <id>".to_string()).await;
        return Flow::Continue;
      }
    };
    match result {
      Ok(_) => reply_sender.send_line(format!("Removed {target} {id}.")).await,
      Err(e) => reply_sender.send_line(format!("Failed to remove {target}: {e}")).await,
    }
    Flow::Continue
  }

  /// Class list plus the assignment count of every class, fetched
  /// concurrently.
  async fn overview<T: ReplySend>(&self, reply_sender: &T) -> Flow {
    if !self.gate(reply_sender).await {
      return Flow::Continue;
    }
    let classes = match self.class_listing().await {
      Ok(Some(classes)) => classes,
      Ok(None) => {
        reply_sender.send_line("Pick a role first: 'role <student|teacher>'.".to_string()).await;
        return Flow::Continue;
      }
      Err(e) => {
        reply_sender.send_line(format!("Failed to build overview: {e}")).await;
        return Flow::Continue;
      }
    };
    let api = AssignmentApi::new(self.rest_client().await);
    let fetches = classes.iter().map(|c| api.list_for_class(&c.id));
    match try_join_all(fetches).await {
      Ok(per_class) => {
        for (class, assignments) in classes.iter().zip(per_class) {
          reply_sender
            .send_line(format!("{}: {} assignment(s)", class.name, assignments.len()))
            .await;
        }
      }
      Err(e) => reply_sender.send_line(format!("Failed to build overview: {e}")).await,
    }
    Flow::Continue
  }

  async fn logout<T: ReplySend>(&self, reply_sender: &T) -> Flow {
    match self.gateway.logout().await {
      Ok(navigation) => {
        reply_sender.send_line(format!("Signed out. {}", describe(&navigation))).await;
        Flow::Exit
      }
      Err(e) => {
        reply_sender.send_line(format!("Logout failed: {e}")).await;
        Flow::Continue
      }
    }
  }

  async fn rest_client(&self) -> RestClient {
    let token = self.session.read().await.session().token.clone();
    RestClient::new(self.api_base_url.clone(), token)
  }
}

/// Splits "id rest of the text" into the id and the optional remainder.
fn split_argument(argument: &str) -> (Option<&str>, Option<String>) {
  let argument = argument.trim();
  match argument.split_once(char::is_whitespace) {
    Some((id, rest)) => (Some(id), Some(rest.trim().to_string())),
    None if argument.is_empty() => (None, None),
    None => (Some(argument), None),
  }
}

fn describe(navigation: &Navigation) -> String {
  match navigation {
    Navigation::InApp { route, replace: true } => format!("Redirecting to {route}."),
    Navigation::InApp { route, replace: false } => format!("Navigating to {route}."),
    Navigation::Hard(route) => format!("Reloading into {route}."),
  }
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;
  use std::time::Duration;

  use tokio::sync::RwLock;
  use tokio::sync::mpsc::channel;
  use tokio::time::timeout;

  use crate::auth::auth_gateway::AuthGateway;
  use crate::auth::identity_api::{LoginPayload, ProfilePayload};
  use crate::session::session_store::SessionStore;
  use crate::shell::command_processor::{CommandProcessor, Flow};
  use crate::store::memory_store::MemoryStore;
  use crate::utils::test_utils::{StubIdentityApi, TestReplySender};

  async fn processor_with(api: StubIdentityApi, restore: bool) -> CommandProcessor {
    let session = Arc::new(RwLock::new(SessionStore::new(Box::new(MemoryStore::new()))));
    if restore {
      session.write().await.restore().await;
    }
    let gateway = Arc::new(AuthGateway::new(Box::new(api), session.clone()));
    CommandProcessor::new(session, gateway, "http://localhost:8080")
  }

  #[tokio::test]
  async fn unknown_command_test() {
    let processor = processor_with(StubIdentityApi::default(), true).await;
    let (tx, mut rx) = channel(16);
    let sender = TestReplySender::new(tx);

    let flow = processor.evaluate("frobnicate".to_string(), &sender).await;

    assert_eq!(Flow::Continue, flow);
    let line = rx.recv().await.unwrap();
    assert!(line.contains("not recognized"));
  }

  #[tokio::test]
  async fn empty_line_is_silent_test() {
    let processor = processor_with(StubIdentityApi::default(), true).await;
    let (tx, mut rx) = channel(16);
    let sender = TestReplySender::new(tx);

    processor.evaluate("   ".to_string(), &sender).await;

    drop(processor);
    assert!(rx.try_recv().is_err());
  }

  #[tokio::test]
  async fn whoami_before_restore_shows_loading_test() {
    let processor = processor_with(StubIdentityApi::default(), false).await;
    let (tx, mut rx) = channel(16);
    let sender = TestReplySender::new(tx);

    processor.evaluate("whoami".to_string(), &sender).await;

    let line = rx.recv().await.unwrap();
    assert!(line.contains("restoring"));
  }

  #[tokio::test]
  async fn whoami_signed_out_redirects_test() {
    let processor = processor_with(StubIdentityApi::default(), true).await;
    let (tx, mut rx) = channel(16);
    let sender = TestReplySender::new(tx);

    processor.evaluate("whoami".to_string(), &sender).await;

    let line = rx.recv().await.unwrap();
    assert!(line.contains("not signed in"));
  }

  #[tokio::test]
  async fn login_and_whoami_test() {
    let mut api = StubIdentityApi::default();
    api.login_payload = LoginPayload {
      token: Some("t1".to_string()),
      ..LoginPayload::default()
    };
    api.profile_payload = Some(ProfilePayload {
      id: "42".to_string(),
      username: "bob".to_string(),
      role: Some("TEACHER".to_string()),
      profile_picture: None,
    });
    let processor = processor_with(api, true).await;
    let (tx, mut rx) = channel(16);
    let sender = TestReplySender::new(tx);

    let flow = timeout(
      Duration::from_secs(5),
      processor.evaluate("login bob@example.com hunter2".to_string(), &sender),
    )
    .await
    .expect("Command timed out!");
    assert_eq!(Flow::Continue, flow);
    assert!(rx.recv().await.unwrap().contains("Signed in"));
    assert!(rx.recv().await.unwrap().contains("Teacher dashboard"));

    processor.evaluate("whoami".to_string(), &sender).await;
    let line = rx.recv().await.unwrap();
    assert!(line.contains("bob"));
    assert!(line.contains("TEACHER"));
  }

  #[tokio::test]
  async fn login_placeholder_role_prompts_selection_test() {
    let mut api = StubIdentityApi::default();
    api.login_payload = LoginPayload {
      token: Some("t1".to_string()),
      ..LoginPayload::default()
    };
    api.profile_payload = Some(ProfilePayload {
      id: "42".to_string(),
      username: "bob".to_string(),
      role: Some("USER".to_string()),
      profile_picture: None,
    });
    let processor = processor_with(api, true).await;
    let (tx, mut rx) = channel(16);
    let sender = TestReplySender::new(tx);

    processor.evaluate("login bob@example.com hunter2".to_string(), &sender).await;

    let line = rx.recv().await.unwrap();
    assert!(line.contains("Pick a role"));
  }

  #[tokio::test]
  async fn logout_exits_test() {
    let processor = processor_with(StubIdentityApi::default(), true).await;
    let (tx, mut rx) = channel(16);
    let sender = TestReplySender::new(tx);

    let flow = processor.evaluate("logout".to_string(), &sender).await;

    assert_eq!(Flow::Exit, flow);
    assert!(rx.recv().await.unwrap().contains("Signed out"));
  }

  #[tokio::test]
  async fn quit_exits_test() {
    let processor = processor_with(StubIdentityApi::default(), true).await;
    let (tx, _rx) = channel(16);
    let sender = TestReplySender::new(tx);

    assert_eq!(Flow::Exit, processor.evaluate("quit".to_string(), &sender).await);
  }

  #[test]
  fn split_argument_test() {
    use crate::shell::command_processor::split_argument;

    assert_eq!((None, None), split_argument("  "));
    assert_eq!((Some("a1"), None), split_argument("a1"));
    assert_eq!((Some("a1"), Some("my essay text".to_string())), split_argument("a1 my essay text"));
  }

  #[tokio::test]
  async fn help_lists_every_command_test() {
    let processor = processor_with(StubIdentityApi::default(), true).await;
    let (tx, mut rx) = channel(32);
    let sender = TestReplySender::new(tx);

    processor.evaluate("help".to_string(), &sender).await;

    let mut lines = Vec::new();
    while let Ok(line) = rx.try_recv() {
      lines.push(line);
    }
    assert!(lines.iter().any(|l| l.contains("login <email> <password>")));
    assert!(lines.iter().any(|l| l.contains("logout")));
  }
}
