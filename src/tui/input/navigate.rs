use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::router::{PickerEvent, PickerKey};
use crate::tui::app::{App, Mode};

/// Keys while the goto prompt is closed.
pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    let Some(picker) = app.picker.as_mut() else {
        if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
            app.should_quit = true;
        }
        return;
    };

    if picker.is_open() {
        let picker_key = match key.code {
            KeyCode::Up | KeyCode::Char('k') => PickerKey::Up,
            KeyCode::Down | KeyCode::Char('j') => PickerKey::Down,
            KeyCode::PageUp => PickerKey::PageUp,
            KeyCode::PageDown => PickerKey::PageDown,
            KeyCode::Home | KeyCode::Char('g') => PickerKey::Home,
            KeyCode::End | KeyCode::Char('G') => PickerKey::End,
            KeyCode::Enter => PickerKey::Enter,
            KeyCode::Esc => PickerKey::Escape,
            _ => return,
        };
        picker.dispatch(PickerEvent::Key(picker_key));
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        // Keyboard stand-in for clicking the trigger
        KeyCode::Enter | KeyCode::Char(' ') => picker.dispatch(PickerEvent::TriggerClick),
        KeyCode::Char('/') => {
            app.goto_input.clear();
            app.mode = Mode::Goto;
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FileConfig;
    use crate::ops::query::SearchQuery;
    use crate::ops::router::PickerState;
    use crate::tui::input::handle_key;
    use crossterm::event::KeyModifiers;

    fn app() -> App {
        let mut config = FileConfig::default();
        config.picker.start = 2025;
        App::new(&config, SearchQuery::new())
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn state(app: &App) -> PickerState {
        app.picker.as_ref().unwrap().state()
    }

    #[test]
    fn enter_opens_and_closes() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        assert_eq!(state(&app), PickerState::Open);
        press(&mut app, KeyCode::Enter);
        assert_eq!(state(&app), PickerState::Closed);
        assert!(!app.should_quit);
    }

    #[test]
    fn arrows_step_only_while_open() {
        let mut app = app();
        press(&mut app, KeyCode::Up);
        assert_eq!(app.year.get(), 2025);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.year.get(), 2027);
        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.year.get(), 2017);
    }

    #[test]
    fn esc_closes_before_quitting() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Esc);
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_c_quits_from_anywhere() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }
}
