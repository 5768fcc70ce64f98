//! Submission calls against the submission service.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::rest_client::{ApiError, RestClient};

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SubmissionRecord {
  pub(crate) id: String,
  pub(crate) assignment_id: String,
  pub(crate) student_id: String,
  #[serde(default)]
  pub(crate) submission_date: Option<DateTime<Utc>>,
  #[serde(default)]
  pub(crate) content: Option<String>,
  #[serde(default)]
  pub(crate) score: i32,
  #[serde(default)]
  pub(crate) question_answers: BTreeMap<String, String>,
}

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NewSubmission {
  pub(crate) assignment_id: String,
  pub(crate) student_id: String,
  pub(crate) content: Option<String>,
  pub(crate) question_answers: BTreeMap<String, String>,
}

#[derive(Clone)]
pub(crate) struct SubmissionApi {
  client: RestClient,
}

impl SubmissionApi {
  pub(crate) fn new(client: RestClient) -> Self {
    SubmissionApi { client }
  }

  pub(crate) async fn submit(&self, submission: &NewSubmission) -> Result<SubmissionRecord, ApiError> {
    self.client.post_json("/api/submissions", submission).await
  }

  pub(crate) async fn list_for_assignment(
    &self,
    assignment_id: &str,
  ) -> Result<Vec<SubmissionRecord>, ApiError> {
    self.client.get_json(&format!("/api/submissions/assignment/{assignment_id}")).await
  }
}

#[cfg(test)]
mod tests {
  use crate::api::submissions::{NewSubmission, SubmissionRecord};

  #[test]
  fn submission_record_wire_names_test() {
    let record: SubmissionRecord = serde_json::from_str(
      r#"{
        "id": "s1",
        "assignmentId": "a1",
        "studentId": "42",
        "submissionDate": "2025-11-01T09:30:00Z",
        "content": "my essay",
        "score": 85,
        "questionAnswers": {"q1": "B"}
      }"#,
    )
    .unwrap();

    assert_eq!("s1", record.id);
    assert_eq!("a1", record.assignment_id);
    assert_eq!(85, record.score);
    assert_eq!(Some("B".to_string()), record.question_answers.get("q1").cloned());
  }

  #[test]
  fn new_submission_serializes_camel_case_test() {
    let submission = NewSubmission {
      assignment_id: "a1".to_string(),
      student_id: "42".to_string(),
      content: Some("answer".to_string()),
      question_answers: Default::default(),
    };
    let value = serde_json::to_value(&submission).unwrap();
    assert!(value.get("assignmentId").is_some());
    assert!(value.get("studentId").is_some());
  }
}
