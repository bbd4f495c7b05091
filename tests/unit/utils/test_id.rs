use eduzz_client::utils::id::get_id;
use std::collections::HashSet;

#[test]
fn test_get_id_shape() {
    let id = get_id();
    assert_eq!(id.len(), 12);
    assert!(
        id.chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
    );
}

#[test]
fn test_get_id_uniqueness() {
    let ids: HashSet<String> = (0..1000).map(|_| get_id()).collect();
    assert_eq!(ids.len(), 1000);
}
