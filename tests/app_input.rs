//! Key handling against a real `App`.

mod common;

use common::make_app;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use resume_bandit::profile::FormField;
use resume_bandit::ui::app::App;
use resume_bandit::ui::events::AppEvent;
use resume_bandit::ui::input::handle_key;
use resume_bandit::ui::runtime::apply_event;
use resume_bandit::ui::workflow::{WorkflowEffect, WorkflowIntent};
use std::time::Instant;

fn press(app: &mut App, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

fn press_ctrl(app: &mut App, ch: char) {
    handle_key(app, KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL));
}

fn type_str(app: &mut App, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}

fn submitted(effects: &[WorkflowEffect]) -> bool {
    effects.first() == Some(&WorkflowEffect::ShowLoading)
}

#[test]
fn typing_edits_focused_field() {
    let mut app = make_app();
    type_str(&mut app, "Alicf");
    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Char('e'));

    assert_eq!(app.workflow().values.get(FormField::Name), "Alice");
}

#[test]
fn tab_moves_focus_and_validates_left_field() {
    let mut app = make_app();
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focused_field(), FormField::Education);

    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.focused_field(), FormField::Name);
    assert!(matches!(
        app.workflow().mark(FormField::Education),
        resume_bandit::ui::workflow::FieldMark::Invalid { .. }
    ));
}

#[test]
fn enter_submits_with_any_modifier() {
    for modifiers in [KeyModifiers::NONE, KeyModifiers::CONTROL, KeyModifiers::ALT] {
        let mut app = make_app();
        handle_key(&mut app, KeyEvent::new(KeyCode::Enter, modifiers));
        assert!(submitted(&app.take_effects()), "{:?}", modifiers);
    }
}

#[test]
fn ctrl_n_submits() {
    let mut app = make_app();
    press_ctrl(&mut app, 'n');
    assert!(submitted(&app.take_effects()));
}

#[test]
fn escape_resets_form() {
    let mut app = make_app();
    type_str(&mut app, "Alice");
    app.take_effects();

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.workflow().values.get(FormField::Name), "");
    assert_eq!(app.take_effects(), vec![WorkflowEffect::ClearSnapshot]);
    assert!(!app.should_quit());
}

#[test]
fn ctrl_y_requests_copy() {
    let mut app = make_app();
    press_ctrl(&mut app, 'y');
    assert_eq!(app.take_effects(), vec![WorkflowEffect::CopyText(String::new())]);
}

#[test]
fn ctrl_u_clears_only_the_focused_field() {
    let mut app = make_app();
    app.dispatch(WorkflowIntent::FieldChanged {
        field: FormField::Domain,
        value: "Backend".into(),
    });
    type_str(&mut app, "Alice");

    press_ctrl(&mut app, 'u');
    assert_eq!(app.workflow().values.get(FormField::Name), "");
    assert_eq!(app.workflow().values.get(FormField::Domain), "Backend");
}

#[test]
fn arrows_cycle_choice_fields() {
    let mut app = make_app();
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Left);
    assert_eq!(app.workflow().values.get(FormField::Education), "PhD");
}

#[test]
fn control_chars_are_not_typed() {
    let mut app = make_app();
    handle_key(
        &mut app,
        KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL),
    );
    assert_eq!(app.workflow().values.get(FormField::Name), "");
}

#[test]
fn release_events_are_ignored() {
    let mut app = make_app();
    let mut key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
    key.kind = KeyEventKind::Release;
    handle_key(&mut app, key);
    assert_eq!(app.workflow().values.get(FormField::Name), "");
}

#[test]
fn ctrl_q_quits() {
    let mut app = make_app();
    press_ctrl(&mut app, 'q');
    assert!(app.should_quit());
}

#[test]
fn shutdown_event_quits() {
    let mut app = make_app();
    let key = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::NONE);
    apply_event(&mut app, AppEvent::Key(key), Instant::now());
    assert!(!app.should_quit());

    apply_event(&mut app, AppEvent::Shutdown, Instant::now());
    assert!(app.should_quit());
    assert_eq!(app.workflow().values.get(FormField::Name), "A");
}
