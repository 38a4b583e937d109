use super::*;
use serde_json::json;

fn filled() -> TaskForm {
    TaskForm {
        name: "  Replace filter ".to_owned(),
        description: " Air handler in lab 2 ".to_owned(),
        suggested_date: "2026-11-03".to_owned(),
        urgency_level: "HIGH".to_owned(),
        creator: None,
        equipments: vec![4, 9],
        responsibles: vec![2],
    }
}

// =============================================================
// Validation
// =============================================================

#[test]
fn validate_task_form_builds_trimmed_payload() {
    assert_eq!(
        validate_task_form(&filled(), Some(7)),
        Ok(TaskPayload {
            name: "Replace filter".to_owned(),
            description: "Air handler in lab 2".to_owned(),
            suggested_date: Some("2026-11-03".to_owned()),
            urgency_level: "HIGH".to_owned(),
            creator: Some(7),
            equipments: vec![4, 9],
            responsibles: vec![2],
        })
    );
}

#[test]
fn validate_task_form_requires_name() {
    let mut form = filled();
    form.name = "   ".to_owned();
    assert_eq!(validate_task_form(&form, None), Err("Task name is required."));
}

#[test]
fn validate_task_form_requires_urgency() {
    let mut form = filled();
    form.urgency_level = String::new();
    assert_eq!(validate_task_form(&form, None), Err("Choose an urgency level."));
}

#[test]
fn validate_task_form_blank_date_is_none() {
    let mut form = filled();
    form.suggested_date = " ".to_owned();
    let payload = validate_task_form(&form, None).unwrap();
    assert_eq!(payload.suggested_date, None);
}

#[test]
fn validate_task_form_rejects_malformed_date() {
    let mut form = filled();
    form.suggested_date = "03/11/2026".to_owned();
    assert_eq!(validate_task_form(&form, None), Err("Suggested date must be YYYY-MM-DD."));
}

#[test]
fn validate_task_form_keeps_existing_creator() {
    let mut form = filled();
    form.creator = Some(3);
    let payload = validate_task_form(&form, Some(7)).unwrap();
    assert_eq!(payload.creator, Some(3));
}

#[test]
fn iso_date_shape() {
    assert!(is_iso_date("2026-01-31"));
    assert!(!is_iso_date("2026-1-31"));
    assert!(!is_iso_date("2026x01-31"));
    assert!(!is_iso_date("2026-01-31T00:00"));
}

// =============================================================
// Form state
// =============================================================

#[test]
fn default_form_uses_low_urgency() {
    assert_eq!(TaskForm::default().urgency_level, "LOW");
}

#[test]
fn from_payload_prefills_every_field() {
    let payload = TaskPayload {
        name: "Fix door".to_owned(),
        description: String::new(),
        suggested_date: None,
        urgency_level: "MEDIUM".to_owned(),
        creator: Some(1),
        equipments: vec![5],
        responsibles: vec![1, 2],
    };
    let form = TaskForm::from_payload(payload);
    assert_eq!(form.suggested_date, "");
    assert_eq!(form.creator, Some(1));
    assert_eq!(form.equipments, vec![5]);
    assert_eq!(form.responsibles, vec![1, 2]);
}

#[test]
fn toggle_id_adds_then_removes() {
    let mut ids = vec![1, 2];
    toggle_id(&mut ids, 3);
    assert_eq!(ids, vec![1, 2, 3]);
    toggle_id(&mut ids, 1);
    assert_eq!(ids, vec![2, 3]);
}

// =============================================================
// Route mode
// =============================================================

#[test]
fn form_mode_without_segment_creates() {
    assert_eq!(form_mode(None), Ok(None));
}

#[test]
fn form_mode_with_valid_segment_edits() {
    assert_eq!(form_mode(Some("8")), Ok(Some(8)));
}

#[test]
fn form_mode_rejects_bad_segment_instead_of_creating() {
    assert_eq!(form_mode(Some("abc")), Err("abc".to_owned()));
}

// =============================================================
// Save navigation
// =============================================================

#[test]
fn created_task_id_reads_write_response() {
    assert_eq!(created_task_id(&json!({"id": 42, "name": "x", "equipments_FK": [1]})), Some(42));
    assert_eq!(created_task_id(&json!({"name": "x"})), None);
}

#[test]
fn saved_target_prefers_edit_then_created_then_dashboard() {
    assert_eq!(saved_target(Some(5), Some(9)), "/task/5");
    assert_eq!(saved_target(None, Some(9)), "/task/9");
    assert_eq!(saved_target(None, None), "/");
}
