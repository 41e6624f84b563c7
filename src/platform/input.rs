//! Keyboard mapping shared by every front-end

use crate::sim::Nudge;

/// What a key press asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Nudge(Nudge),
    ToggleAutopilot,
    Restart,
}

/// Map a `KeyboardEvent.key` value to an action
pub fn key_action(key: &str) -> Option<KeyAction> {
    match key {
        "ArrowLeft" | "Left" => Some(KeyAction::Nudge(Nudge::Left)),
        "ArrowRight" | "Right" => Some(KeyAction::Nudge(Nudge::Right)),
        "a" | "A" => Some(KeyAction::ToggleAutopilot),
        "Enter" => Some(KeyAction::Restart),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys_nudge() {
        assert_eq!(key_action("ArrowLeft"), Some(KeyAction::Nudge(Nudge::Left)));
        assert_eq!(key_action("ArrowRight"), Some(KeyAction::Nudge(Nudge::Right)));
        assert_eq!(key_action("Left"), Some(KeyAction::Nudge(Nudge::Left)));
    }

    #[test]
    fn test_other_keys() {
        assert_eq!(key_action("a"), Some(KeyAction::ToggleAutopilot));
        assert_eq!(key_action("Enter"), Some(KeyAction::Restart));
        assert_eq!(key_action("ArrowUp"), None);
        assert_eq!(key_action(" "), None);
    }
}
