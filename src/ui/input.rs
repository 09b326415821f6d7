use crate::ui::app::App;
use crate::ui::users::{RenderAction, RenderMode};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press means on the current screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    None,
    Quit,
    Refresh,
    SimulateError,
    DismissSimulatedError,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
}

/// Map a key to an action, honoring what `mode` offers.
pub fn classify_key(mode: &RenderMode, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        return InputAction::Quit;
    }

    let wanted = match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => return InputAction::Quit,
        KeyCode::Char('r') | KeyCode::Char('R') => RenderAction::Refresh,
        KeyCode::Char('e') | KeyCode::Char('E') => RenderAction::SimulateError,
        KeyCode::Esc | KeyCode::Char('d') | KeyCode::Char('D') => {
            RenderAction::DismissSimulatedError
        }
        KeyCode::Up | KeyCode::Char('k') => return InputAction::ScrollUp,
        KeyCode::Down | KeyCode::Char('j') => return InputAction::ScrollDown,
        KeyCode::PageUp => return InputAction::PageUp,
        KeyCode::PageDown => return InputAction::PageDown,
        _ => return InputAction::None,
    };

    if !mode.allows(wanted) {
        return InputAction::None;
    }
    match wanted {
        RenderAction::Refresh => InputAction::Refresh,
        RenderAction::SimulateError => InputAction::SimulateError,
        RenderAction::DismissSimulatedError => InputAction::DismissSimulatedError,
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> InputAction {
    let action = classify_key(app.mode(), key);
    match action {
        InputAction::None => {}
        InputAction::Quit => app.request_quit(),
        InputAction::Refresh => app.request_refresh(),
        InputAction::SimulateError => app.simulate_error(),
        InputAction::DismissSimulatedError => app.dismiss_simulated_error(),
        InputAction::ScrollUp => app.scroll_by(-1),
        InputAction::ScrollDown => app.scroll_by(1),
        InputAction::PageUp => app.scroll_by(-i32::from(app.page_size())),
        InputAction::PageDown => app.scroll_by(i32::from(app.page_size())),
    }
    action
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&ch))
}
