//! Class directory calls against the class service.

use serde::Deserialize;
use serde_json::json;

use crate::api::rest_client::{ApiError, RestClient};

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ClassRecord {
  pub(crate) id: String,
  pub(crate) name: String,
  #[serde(default)]
  pub(crate) teacher_id: Option<String>,
  #[serde(default)]
  pub(crate) student_ids: Vec<String>,
  #[serde(default)]
  pub(crate) section: Option<String>,
  /// Join code students enroll with.
  #[serde(default)]
  pub(crate) code: Option<String>,
  #[serde(default)]
  pub(crate) is_live: bool,
  #[serde(default)]
  pub(crate) meeting_room_id: Option<String>,
}

#[derive(Clone)]
pub(crate) struct ClassApi {
  client: RestClient,
}

impl ClassApi {
  pub(crate) fn new(client: RestClient) -> Self {
    ClassApi { client }
  }

  pub(crate) async fn list_for_teacher(&self, teacher_id: &str) -> Result<Vec<ClassRecord>, ApiError> {
    self.client.get_json(&format!("/api/classes/teacher/{teacher_id}")).await
  }

  pub(crate) async fn list_for_student(&self, student_id: &str) -> Result<Vec<ClassRecord>, ApiError> {
    self.client.get_json(&format!("/api/classes/student/{student_id}")).await
  }

  pub(crate) async fn details(&self, class_id: &str) -> Result<ClassRecord, ApiError> {
    self.client.get_json(&format!("/api/classes/{class_id}")).await
  }

  pub(crate) async fn create(&self, name: &str, section: Option<&str>) -> Result<ClassRecord, ApiError> {
    self
      .client
      .post_json("/api/classes/teacher/create-class", &json!({"name": name, "section": section}))
      .await
  }

  pub(crate) async fn join(&self, code: &str) -> Result<ClassRecord, ApiError> {
    self.client.post_json("/api/classes/student/join-class", &json!({"code": code})).await
  }

  pub(crate) async fn remove(&self, class_id: &str) -> Result<(), ApiError> {
    self.client.delete(&format!("/api/classes/{class_id}")).await
  }
}

#[cfg(test)]
mod tests {
  use crate::api::classes::ClassRecord;

  #[test]
  fn class_record_wire_names_test() {
    let record: ClassRecord = serde_json::from_str(
      r#"{
        "id": "c1",
        "name": "Algebra",
        "teacherId": "42",
        "studentIds": ["s1", "s2"],
        "section": "A",
        "code": "XK42",
        "isLive": true,
        "meetingRoomId": "room-1"
      }"#,
    )
    .unwrap();

    assert_eq!("c1", record.id);
    assert_eq!(Some("42".to_string()), record.teacher_id);
    assert_eq!(2, record.student_ids.len());
    assert!(record.is_live);
  }

  #[test]
  fn class_record_minimal_test() {
    let record: ClassRecord = serde_json::from_str(r#"{"id": "c1", "name": "Algebra"}"#).unwrap();
    assert!(record.student_ids.is_empty());
    assert!(!record.is_live);
  }
}
