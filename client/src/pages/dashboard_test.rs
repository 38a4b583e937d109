use super::*;

#[test]
fn count_label_unfiltered() {
    assert_eq!(count_label(0, 0), "0 tasks");
    assert_eq!(count_label(1, 1), "1 task");
    assert_eq!(count_label(4, 4), "4 tasks");
}

#[test]
fn count_label_filtered() {
    assert_eq!(count_label(2, 5), "Showing 2 of 5 tasks");
    assert_eq!(count_label(0, 1), "Showing 0 of 1 task");
}
