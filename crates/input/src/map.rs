//! Key mapping from terminal events to spin actions.

use crate::types::SpinAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to spin actions.
pub fn handle_key_event(key: KeyEvent) -> Option<SpinAction> {
    // Ctrl/Alt/Super chords are not bindings.
    if !(key.modifiers - KeyModifiers::SHIFT).is_empty() {
        return None;
    }

    match key.code {
        // Rotation about the viewing axis
        KeyCode::Up | KeyCode::Char('w') => Some(SpinAction::IncreaseB),
        KeyCode::Down | KeyCode::Char('s') => Some(SpinAction::DecreaseB),

        // Rotation about the x axis
        KeyCode::Left | KeyCode::Char('a') => Some(SpinAction::DecreaseA),
        KeyCode::Right | KeyCode::Char('d') => Some(SpinAction::IncreaseA),

        _ => None,
    }
}

/// Check if key should quit.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_letter_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('w'))),
            Some(SpinAction::IncreaseB)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('s'))),
            Some(SpinAction::DecreaseB)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('a'))),
            Some(SpinAction::DecreaseA)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('d'))),
            Some(SpinAction::IncreaseA)
        );
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Up)),
            Some(SpinAction::IncreaseB)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(SpinAction::DecreaseA)
        );
    }

    #[test]
    fn test_unbound_keys() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('W'))), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Enter)), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('q'))), None);
    }

    #[test]
    fn test_modified_keys_do_not_rotate() {
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL)),
            None
        );
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::ALT)),
            None
        );
        assert_eq!(
            handle_key_event(KeyEvent::new(
                KeyCode::Left,
                KeyModifiers::CONTROL | KeyModifiers::SHIFT
            )),
            None
        );
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Up, KeyModifiers::SHIFT)),
            Some(SpinAction::IncreaseB)
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Char('Q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('w'))));
    }
}
