use super::*;
use crate::net::types::{CustomUser, Equipment};

fn make_task() -> Task {
    Task {
        id: 1,
        name: "Fix door".to_owned(),
        description: String::new(),
        suggested_date: None,
        urgency_level: "LOW".to_owned(),
        creation_date: "2026-10-01T09:00:00Z".to_owned(),
        current_status: None,
        creator: None,
        equipments: Vec::new(),
        responsibles: Vec::new(),
        status_history: Vec::new(),
    }
}

#[test]
fn summaries_for_empty_relations() {
    let task = make_task();
    assert_eq!(equipment_summary(&task), "—");
    assert_eq!(responsible_summary(&task), "Unassigned");
}

#[test]
fn summaries_join_names() {
    let mut task = make_task();
    task.equipments = vec![Equipment {
        id: 1,
        name: "Door".to_owned(),
        code: "D-1".to_owned(),
        description: String::new(),
        environment: None,
        category: None,
        qr_code_image: None,
    }];
    task.responsibles = vec![
        CustomUser { id: 1, name: "Eva".to_owned(), email: "e@x".to_owned(), nif: None, groups: None },
        CustomUser { id: 2, name: "Rui".to_owned(), email: "r@x".to_owned(), nif: None, groups: None },
    ];
    assert_eq!(equipment_summary(&task), "Door (D-1)");
    assert_eq!(responsible_summary(&task), "Eva, Rui");
}
