use std::collections::HashSet;

use browser_desk::store::{Position, WindowId, WindowStore};

#[test]
fn created_windows_have_unique_ids() {
    let mut store = WindowStore::new();
    for _ in 0..25 {
        store.create_window();
    }
    let ids: HashSet<_> = store.windows().iter().map(|w| w.id.clone()).collect();
    assert_eq!(store.windows().len(), 25);
    assert_eq!(ids.len(), 25);
}

#[test]
fn new_windows_cascade_by_twenty() {
    let mut store = WindowStore::new();
    for _ in 0..3 {
        store.create_window();
    }
    let positions: Vec<_> = store.windows().iter().map(|w| w.position).collect();
    assert_eq!(
        positions,
        vec![
            Position::new(0, 0),
            Position::new(20, 20),
            Position::new(40, 40)
        ]
    );
    for w in store.windows() {
        assert_eq!(w.url, "about:blank");
        assert_eq!(w.title, "New Window");
    }
}

#[test]
fn destroy_is_idempotent() {
    let mut store = WindowStore::new();
    let id = store.create_window();
    store.create_window();
    store.destroy_window(&id);
    let after_first = store.state().clone();
    store.destroy_window(&id);
    assert_eq!(store.state(), &after_first);
    assert_eq!(store.windows().len(), 1);
}

#[test]
fn set_url_touches_only_target() {
    let mut store = WindowStore::new();
    let a = store.create_window();
    let b = store.create_window();
    let b_before = store.window(&b).cloned();
    store.set_window_url(&a, "https://example.com");
    assert_eq!(
        store.window(&a).map(|w| w.url.as_str()),
        Some("https://example.com")
    );
    assert_eq!(store.window(&b).cloned(), b_before);
}

#[test]
fn set_url_is_verbatim() {
    let mut store = WindowStore::new();
    let id = store.create_window();
    store.set_window_url(&id, "  not a url \t");
    assert_eq!(
        store.window(&id).map(|w| w.url.as_str()),
        Some("  not a url \t")
    );
}

#[test]
fn pointer_move_couples_pointer_and_window_position() {
    let mut store = WindowStore::new();
    let id = store.create_window();
    store.record_pointer_move(50, 75, &id);
    assert_eq!(store.input().mouse_position, Position::new(50, 75));
    assert_eq!(
        store.window(&id).map(|w| w.position),
        Some(Position::new(50, 75))
    );
}

#[test]
fn focus_accepts_unknown_ids_verbatim() {
    let mut store = WindowStore::new();
    store.create_window();
    store.focus_window("nonexistent-id");
    assert_eq!(
        store.input().active_window_id,
        Some(WindowId::from("nonexistent-id"))
    );
    assert_eq!(store.windows().len(), 1);
}

#[test]
fn focus_does_not_reorder() {
    let mut store = WindowStore::new();
    let a = store.create_window();
    let b = store.create_window();
    store.focus_window(a.clone());
    let order: Vec<_> = store.windows().iter().map(|w| w.id.clone()).collect();
    assert_eq!(order, vec![a, b]);
}

#[test]
fn destroying_one_of_two_leaves_the_other_untouched() {
    let mut store = WindowStore::new();
    let a = store.create_window();
    let b = store.create_window();
    let b_record = store.window(&b).cloned();

    store.destroy_window(&a);
    let ids: Vec<_> = store.windows().iter().map(|w| w.id.clone()).collect();
    assert_eq!(ids, vec![b.clone()]);
    assert_eq!(store.window(&b).cloned(), b_record);

    store.destroy_window(&a);
    assert_eq!(store.windows().len(), 1);
    assert_eq!(store.window(&b).cloned(), b_record);
}

#[test]
fn key_press_ignores_window_scope() {
    let mut store = WindowStore::new();
    store.record_key_press("a", &WindowId::from("anything"));
    assert_eq!(store.input().keyboard_input, "a");
}
