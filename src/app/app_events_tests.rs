//! Tests for key handling

use crate::test_utils::test_helpers::test_app;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent::new(code, modifiers)
}

#[test]
fn test_q_quits() {
    let (mut app, _tx) = test_app();
    app.handle_key_event(key(KeyCode::Char('q')));
    assert!(app.should_quit());
}

#[test]
fn test_esc_quits() {
    let (mut app, _tx) = test_app();
    app.handle_key_event(key(KeyCode::Esc));
    assert!(app.should_quit());
}

#[test]
fn test_ctrl_c_quits_even_with_help_open() {
    let (mut app, _tx) = test_app();
    app.help.visible = true;
    app.handle_key_event(key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit());
}

#[test]
fn test_help_toggle_and_close() {
    let (mut app, _tx) = test_app();

    app.handle_key_event(key(KeyCode::Char('?')));
    assert!(app.help.visible);

    // q closes help instead of quitting
    app.handle_key_event(key(KeyCode::Char('q')));
    assert!(!app.help.visible);
    assert!(!app.should_quit());

    app.handle_key_event(key(KeyCode::F(1)));
    assert!(app.help.visible);
    app.handle_key_event(key(KeyCode::Esc));
    assert!(!app.help.visible);
}

#[test]
fn test_help_swallows_feed_keys() {
    let (mut app, _tx) = test_app();
    app.feed_scroll.update_bounds(50, 10);
    app.help.visible = true;

    app.handle_key_event(key(KeyCode::Char('g')));

    assert_eq!(app.feed_scroll.offset, 40);
}

#[test]
fn test_scroll_keys() {
    let (mut app, _tx) = test_app();
    app.feed_scroll.update_bounds(50, 10);

    app.handle_key_event(key(KeyCode::Char('k')));
    assert_eq!(app.feed_scroll.offset, 39);
    assert!(!app.feed_scroll.follow);

    app.handle_key_event(key(KeyCode::Char('g')));
    assert_eq!(app.feed_scroll.offset, 0);

    app.handle_key_event(key(KeyCode::Down));
    assert_eq!(app.feed_scroll.offset, 1);

    app.handle_key_event(key_with_mods(KeyCode::Char('d'), KeyModifiers::CONTROL));
    assert_eq!(app.feed_scroll.offset, 6);

    app.handle_key_event(key(KeyCode::Char('G')));
    assert_eq!(app.feed_scroll.offset, 40);
    assert!(app.feed_scroll.follow);
}

#[test]
fn test_key_release_is_ignored() {
    let (mut app, _tx) = test_app();
    let release = KeyEvent {
        code: KeyCode::Char('q'),
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Release,
        state: KeyEventState::empty(),
    };

    app.handle_event(Event::Key(release));
    assert!(!app.should_quit());

    app.handle_event(Event::Key(key(KeyCode::Char('q'))));
    assert!(app.should_quit());
}
