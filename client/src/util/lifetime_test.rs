use super::*;

#[test]
fn new_lifetime_is_alive() {
    assert!(ViewLifetime::new().is_alive());
    assert!(ViewLifetime::default().is_alive());
}

#[test]
fn end_is_visible_through_clones() {
    let lifetime = ViewLifetime::new();
    let task_copy = lifetime.clone();
    lifetime.end();
    assert!(!task_copy.is_alive());
}

#[test]
fn end_twice_is_harmless() {
    let lifetime = ViewLifetime::new();
    lifetime.end();
    lifetime.end();
    assert!(!lifetime.is_alive());
}

#[test]
fn separate_lifetimes_are_independent() {
    let first = ViewLifetime::new();
    let second = ViewLifetime::new();
    first.end();
    assert!(second.is_alive());
}
