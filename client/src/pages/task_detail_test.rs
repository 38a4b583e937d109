use super::*;
use serde_json::json;

#[test]
fn build_status_payload_parses_status_and_trims_comment() {
    assert_eq!(
        build_status_payload(12, "DONE", "  replaced the belt ", Some(3)),
        Ok(TaskStatusPayload {
            status: TaskStatusKind::Done,
            comment: Some("replaced the belt".to_owned()),
            task: 12,
            user: Some(3),
        })
    );
}

#[test]
fn build_status_payload_blank_comment_is_none() {
    let payload = build_status_payload(12, "ONGOING", "   ", None).unwrap();
    assert_eq!(payload.comment, None);
    assert_eq!(payload.user, None);
}

#[test]
fn build_status_payload_rejects_unknown_status() {
    assert_eq!(build_status_payload(12, "PAUSED", "", None), Err("Choose a status."));
}

#[test]
fn status_payload_serializes_server_field_names() {
    let payload = build_status_payload(12, "WAITING_RESPONSIBLE", "", Some(3)).unwrap();
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        json!({"status": "WAITING_RESPONSIBLE", "comment": null, "task_FK": 12, "user_FK": 3})
    );
}

#[test]
fn image_url_keeps_absolute_urls() {
    assert_eq!(
        image_url("http://localhost:8000/api", "https://cdn.example.com/a.png"),
        "https://cdn.example.com/a.png"
    );
}

#[test]
fn image_url_resolves_against_api_origin() {
    assert_eq!(
        image_url("http://localhost:8000/api", "/media/status/a.png"),
        "http://localhost:8000/media/status/a.png"
    );
    assert_eq!(
        image_url("https://maint.example.com/api/v1", "media/b.jpg"),
        "https://maint.example.com/media/b.jpg"
    );
}

#[test]
fn image_url_base_without_path() {
    assert_eq!(image_url("http://localhost:8000", "/media/a.png"), "http://localhost:8000/media/a.png");
}

#[test]
fn status_author_prefers_user_detail() {
    let entry: TaskStatus = serde_json::from_value(json!({
        "id": 1,
        "status": "OPEN",
        "status_date": "2026-10-01T09:00:00Z",
        "comment": null,
        "task_FK": 12,
        "user_FK": 3,
        "user_detail": {"id": 3, "name": "Rui", "email": "rui@example.com"}
    }))
    .unwrap();
    assert_eq!(status_author(&entry), "Rui");

    let anonymous = TaskStatus { user_detail: None, ..entry.clone() };
    assert_eq!(status_author(&anonymous), "User #3");

    let unknown = TaskStatus { user_detail: None, user: None, ..entry };
    assert_eq!(status_author(&unknown), "Unknown");
}

#[test]
fn detail_id_rejects_non_numeric_segment() {
    assert_eq!(detail_id(Some("17")), Ok(17));
    assert_eq!(detail_id(Some("abc")), Err("abc".to_owned()));
    assert_eq!(detail_id(None), Err(String::new()));
}
