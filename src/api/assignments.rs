//! Assignment calls against the assignment service.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::api::rest_client::{ApiError, RestClient};

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AssignmentRecord {
  pub(crate) id: String,
  pub(crate) class_id: String,
  pub(crate) title: String,
  #[serde(default, rename = "type")]
  pub(crate) kind: Option<String>,
  #[serde(default)]
  pub(crate) points: i32,
  #[serde(default)]
  pub(crate) due_date: Option<DateTime<Utc>>,
  #[serde(default)]
  pub(crate) description: Option<String>,
  #[serde(default)]
  pub(crate) instructions: Option<String>,
  #[serde(default)]
  pub(crate) allow_late_submissions: bool,
  #[serde(default)]
  pub(crate) late_penalty: i32,
}

#[derive(Clone)]
pub(crate) struct AssignmentApi {
  client: RestClient,
}

impl AssignmentApi {
  pub(crate) fn new(client: RestClient) -> Self {
    AssignmentApi { client }
  }

  pub(crate) async fn list_for_class(&self, class_id: &str) -> Result<Vec<AssignmentRecord>, ApiError> {
    self.client.get_json(&format!("/api/assignments/{class_id}")).await
  }

  pub(crate) async fn details(&self, assignment_id: &str) -> Result<AssignmentRecord, ApiError> {
    self.client.get_json(&format!("/api/assignments/details/{assignment_id}")).await
  }

  pub(crate) async fn remove(&self, assignment_id: &str) -> Result<(), ApiError> {
    self.client.delete(&format!("/api/assignments/{assignment_id}")).await
  }
}

#[cfg(test)]
mod tests {
  use crate::api::assignments::AssignmentRecord;

  #[test]
  fn assignment_record_wire_names_test() {
    let record: AssignmentRecord = serde_json::from_str(
      r#"{
        "id": "a1",
        "classId": "c1",
        "title": "Homework 3",
        "type": "QUIZ",
        "points": 20,
        "dueDate": "2025-11-01T12:00:00Z",
        "allowLateSubmissions": true,
        "latePenalty": 10
      }"#,
    )
    .unwrap();

    assert_eq!("a1", record.id);
    assert_eq!("c1", record.class_id);
    assert_eq!(Some("QUIZ".to_string()), record.kind);
    assert_eq!(20, record.points);
    assert!(record.due_date.is_some());
    assert!(record.allow_late_submissions);
  }

  #[test]
  fn assignment_record_minimal_test() {
    let record: AssignmentRecord =
      serde_json::from_str(r#"{"id": "a1", "classId": "c1", "title": "Essay"}"#).unwrap();
    assert_eq!(None, record.due_date);
    assert_eq!(0, record.points);
  }
}
