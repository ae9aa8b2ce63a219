use crate::ui::app::App;
use crate::ui::workflow::WorkflowIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    // Enter submits like a form; Ctrl/Alt+Enter are accepted where the
    // terminal reports them.
    if matches!(key.code, KeyCode::Enter) {
        app.submit();
        return;
    }

    // Generate a new question from the current values.
    if is_ctrl_char(key, 'n') {
        app.submit();
        return;
    }

    if is_ctrl_char(key, 'y') {
        app.dispatch(WorkflowIntent::CopyRequested);
        return;
    }

    if is_ctrl_char(key, 'u') {
        app.clear_field();
        return;
    }

    match key.code {
        KeyCode::Esc => app.dispatch(WorkflowIntent::ResetRequested),
        KeyCode::Tab | KeyCode::Down => app.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.focus_prev(),
        KeyCode::Left => app.cycle_choice(false),
        KeyCode::Right => app.cycle_choice(true),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.type_char(ch)
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
