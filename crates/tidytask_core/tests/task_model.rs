use tidytask_core::{Task, TaskSnapshot, ViewMode};
use uuid::Uuid;

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let task = Task::new("ship release notes");

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], task.id.to_string());
    assert_eq!(json["title"], "ship release notes");
    assert_eq!(json["done"], false);

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn task_deserializes_from_external_json() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let value = serde_json::json!({
        "id": id.to_string(),
        "title": "imported",
        "done": true
    });

    let task: Task = serde_json::from_value(value).unwrap();
    assert_eq!(task.id, id);
    assert_eq!(task.title, "imported");
    assert!(task.done);
}

#[test]
fn snapshot_records_exclude_task_identity() {
    let tasks = vec![Task::new("no id on the wire")];
    let snapshot = TaskSnapshot::capture(&tasks);

    let json = serde_json::to_value(&snapshot).unwrap();
    let record = &json["records"][0];
    assert_eq!(record["title"], "no id on the wire");
    assert_eq!(record["done"], false);
    assert!(record.get("id").is_none());
}

#[test]
fn view_mode_uses_snake_case_wire_names() {
    assert_eq!(
        serde_json::to_value(ViewMode::CompletedLast).unwrap(),
        serde_json::json!("completed_last")
    );
    let decoded: ViewMode = serde_json::from_value(serde_json::json!("normal")).unwrap();
    assert_eq!(decoded, ViewMode::Normal);
}
