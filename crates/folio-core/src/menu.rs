//! Mobile menu state

use serde::{Deserialize, Serialize};

/// Visibility of the mobile navigation panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    pub fn close(&mut self) {
        *self = MenuState::Closed;
    }

    /// Value for the toggle button's `aria-expanded` attribute.
    pub fn aria_expanded(self) -> &'static str {
        if self.is_open() {
            "true"
        } else {
            "false"
        }
    }
}

impl From<bool> for MenuState {
    fn from(open: bool) -> Self {
        if open {
            MenuState::Open
        } else {
            MenuState::Closed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOTH: [MenuState; 2] = [MenuState::Closed, MenuState::Open];

    #[test]
    fn test_starts_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn test_toggle_always_flips() {
        for state in BOTH {
            let mut s = state;
            s.toggle();
            assert_ne!(s, state);
        }
    }

    #[test]
    fn test_double_toggle_restores() {
        for state in BOTH {
            assert_eq!(state.toggled().toggled(), state);
        }
    }

    #[test]
    fn test_close_is_idempotent() {
        for state in BOTH {
            let mut s = state;
            s.close();
            s.close();
            assert_eq!(s, MenuState::Closed);
        }
    }

    #[test]
    fn test_aria_expanded() {
        assert_eq!(MenuState::Open.aria_expanded(), "true");
        assert_eq!(MenuState::from(false).aria_expanded(), "false");
    }
}
