mod goto;
mod mouse;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};

use super::app::{App, Mode};

use goto::handle_goto;
use navigate::handle_navigate;

pub use mouse::hit_test;
pub use mouse::Hit;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Goto => handle_goto(app, key),
    }
}

/// Handle a mouse event (clicks and wheel)
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if app.mode != Mode::Navigate {
        return;
    }
    mouse::handle_mouse(app, mouse);
}
