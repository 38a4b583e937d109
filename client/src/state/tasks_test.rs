use super::*;
use crate::net::types::Equipment;

// =============================================================
// Helpers
// =============================================================

fn task(id: Id, name: &str, status: Option<TaskStatusKind>) -> Task {
    Task {
        id,
        name: name.to_owned(),
        description: String::new(),
        suggested_date: None,
        urgency_level: "LOW".to_owned(),
        creation_date: "2026-10-01T09:00:00Z".to_owned(),
        current_status: status,
        creator: None,
        equipments: Vec::new(),
        responsibles: Vec::new(),
        status_history: Vec::new(),
    }
}

fn state() -> TasksState {
    let mut printer = task(3, "Paper jam", Some(TaskStatusKind::Finished));
    printer.equipments = vec![Equipment {
        id: 1,
        name: "Printer".to_owned(),
        code: "PRN-7".to_owned(),
        description: String::new(),
        environment: None,
        category: None,
        qr_code_image: None,
    }];
    TasksState {
        items: vec![
            task(1, "Broken chair", Some(TaskStatusKind::Open)),
            task(2, "Leaking sink", Some(TaskStatusKind::Ongoing)),
            printer,
            task(4, "Dead bulb", None),
        ],
        ..TasksState::default()
    }
}

fn visible_ids(state: &TasksState) -> Vec<Id> {
    state.visible().iter().map(|t| t.id).collect()
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn tasks_state_default_is_empty() {
    let state = TasksState::default();
    assert!(state.items.is_empty());
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert_eq!(state.filter.status, StatusFilter::All);
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn all_filter_shows_everything() {
    assert_eq!(visible_ids(&state()), vec![1, 2, 3, 4]);
}

#[test]
fn active_filter_hides_terminal_tasks() {
    let mut s = state();
    s.filter.status = StatusFilter::Active;
    assert_eq!(visible_ids(&s), vec![1, 2, 4]);
}

#[test]
fn status_filter_matches_exact_status() {
    let mut s = state();
    s.filter.status = StatusFilter::Only(TaskStatusKind::Ongoing);
    assert_eq!(visible_ids(&s), vec![2]);
}

#[test]
fn search_matches_name_case_insensitively() {
    let mut s = state();
    s.filter.search = "  SINK ".to_owned();
    assert_eq!(visible_ids(&s), vec![2]);
}

#[test]
fn search_matches_equipment_code() {
    let mut s = state();
    s.filter.search = "prn-7".to_owned();
    assert_eq!(visible_ids(&s), vec![3]);
}

#[test]
fn status_and_search_combine() {
    let mut s = state();
    s.filter.status = StatusFilter::Active;
    s.filter.search = "printer".to_owned();
    assert!(visible_ids(&s).is_empty());
}

#[test]
fn status_filter_select_values_round_trip() {
    for filter in [StatusFilter::All, StatusFilter::Active, StatusFilter::Only(TaskStatusKind::Done)] {
        assert_eq!(StatusFilter::from_value(filter.as_value()), filter);
    }
    assert_eq!(StatusFilter::from_value("garbage"), StatusFilter::All);
}

// =============================================================
// Mutation
// =============================================================

#[test]
fn remove_drops_matching_task() {
    let mut s = state();
    s.remove(2);
    assert_eq!(visible_ids(&s), vec![1, 3, 4]);
    s.remove(99);
    assert_eq!(s.items.len(), 3);
}
