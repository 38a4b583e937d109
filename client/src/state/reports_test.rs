use super::*;
use crate::net::types::CustomUser;

// =============================================================
// Helpers
// =============================================================

fn user(id: Id, name: &str) -> CustomUser {
    CustomUser { id, name: name.to_owned(), email: format!("{name}@example.com"), nif: None, groups: None }
}

fn task(id: Id, status: Option<TaskStatusKind>, urgency: &str) -> Task {
    Task {
        id,
        name: format!("task {id}"),
        description: String::new(),
        suggested_date: None,
        urgency_level: urgency.to_owned(),
        creation_date: "2026-10-01T09:00:00Z".to_owned(),
        current_status: status,
        creator: None,
        equipments: Vec::new(),
        responsibles: Vec::new(),
        status_history: Vec::new(),
    }
}

const TODAY: &str = "2026-10-15";

// =============================================================
// Counts
// =============================================================

#[test]
fn empty_list_yields_empty_report() {
    let report = TaskReport::from_tasks(&[], TODAY);
    assert_eq!(report, TaskReport::default());
}

#[test]
fn status_counts_follow_lifecycle_order() {
    let tasks = vec![
        task(1, Some(TaskStatusKind::Done), "LOW"),
        task(2, Some(TaskStatusKind::Open), "LOW"),
        task(3, Some(TaskStatusKind::Open), "LOW"),
        task(4, None, "LOW"),
    ];
    let report = TaskReport::from_tasks(&tasks, TODAY);
    assert_eq!(report.total, 4);
    assert_eq!(report.by_status, vec![(TaskStatusKind::Open, 2), (TaskStatusKind::Done, 1)]);
    assert_eq!(report.no_status, 1);
}

#[test]
fn urgency_counts_put_known_levels_first_by_severity() {
    let tasks = vec![
        task(1, None, "LOW"),
        task(2, None, "zeta"),
        task(3, None, "CRITICAL"),
        task(4, None, "LOW"),
        task(5, None, "alpha"),
    ];
    let report = TaskReport::from_tasks(&tasks, TODAY);
    assert_eq!(
        report.by_urgency,
        vec![
            ("CRITICAL".to_owned(), 1),
            ("LOW".to_owned(), 2),
            ("alpha".to_owned(), 1),
            ("zeta".to_owned(), 1),
        ]
    );
}

// =============================================================
// Overdue + workload
// =============================================================

#[test]
fn overdue_counts_only_active_tasks_before_today() {
    let mut late = task(1, Some(TaskStatusKind::Ongoing), "HIGH");
    late.suggested_date = Some("2026-10-14".to_owned());
    let mut late_but_finished = task(2, Some(TaskStatusKind::Finished), "HIGH");
    late_but_finished.suggested_date = Some("2026-10-01".to_owned());
    let mut due_today = task(3, Some(TaskStatusKind::Open), "HIGH");
    due_today.suggested_date = Some("2026-10-15".to_owned());
    let undated = task(4, Some(TaskStatusKind::Open), "HIGH");

    let report = TaskReport::from_tasks(&[late, late_but_finished, due_today, undated], TODAY);
    assert_eq!(report.overdue, 1);
}

#[test]
fn overdue_compares_date_part_of_timestamps() {
    let mut late = task(1, None, "HIGH");
    late.suggested_date = Some("2026-10-14T23:59:59Z".to_owned());
    let report = TaskReport::from_tasks(&[late], "2026-10-15T00:00:00Z");
    assert_eq!(report.overdue, 1);
}

#[test]
fn workload_counts_active_tasks_per_responsible() {
    let mut a = task(1, Some(TaskStatusKind::Ongoing), "LOW");
    a.responsibles = vec![user(1, "Rui"), user(2, "Eva")];
    let mut b = task(2, Some(TaskStatusKind::Open), "LOW");
    b.responsibles = vec![user(2, "Eva")];
    let mut c = task(3, Some(TaskStatusKind::Cancelled), "LOW");
    c.responsibles = vec![user(1, "Rui")];
    let d = task(4, Some(TaskStatusKind::WaitingResponsible), "LOW");

    let report = TaskReport::from_tasks(&[a, b, c, d], TODAY);
    assert_eq!(
        report.workload,
        vec![
            ResponsibleLoad { user_id: 2, name: "Eva".to_owned(), open_tasks: 2 },
            ResponsibleLoad { user_id: 1, name: "Rui".to_owned(), open_tasks: 1 },
        ]
    );
    assert_eq!(report.unassigned, 1);
}

#[test]
fn date_part_handles_short_values() {
    assert_eq!(date_part("2026-10"), "2026-10");
    assert_eq!(date_part("2026-10-15T08:00:00Z"), "2026-10-15");
}
