use super::*;

#[test]
fn percent_rounds_to_nearest_whole() {
    assert_eq!(percent(1, 3), 33);
    assert_eq!(percent(2, 3), 67);
    assert_eq!(percent(4, 4), 100);
}

#[test]
fn percent_of_empty_total_is_zero() {
    assert_eq!(percent(0, 0), 0);
}
