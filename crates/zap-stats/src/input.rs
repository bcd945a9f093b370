//! Terminal-agnostic keyboard input.

/// Keyboard input abstraction.
///
/// Decouples the dashboard from terminal libraries so the quit logic can be
/// driven by a scripted driver in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// Printable character without modifiers.
    Char(char),
    /// Character pressed together with Control (`Ctrl('c')`).
    Ctrl(char),
    /// Escape key.
    Esc,
}

impl KeyInput {
    /// True for the keys that end the session: Escape, Ctrl-Q, Ctrl-C, `q`
    /// and `Q`.
    pub fn is_quit(self) -> bool {
        match self {
            Self::Esc | Self::Char('q' | 'Q') => true,
            Self::Ctrl(c) => matches!(c.to_ascii_lowercase(), 'q' | 'c'),
            Self::Char(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_keys() {
        for key in [
            KeyInput::Esc,
            KeyInput::Char('q'),
            KeyInput::Char('Q'),
            KeyInput::Ctrl('q'),
            KeyInput::Ctrl('c'),
            KeyInput::Ctrl('C'),
        ] {
            assert!(key.is_quit(), "{key:?}");
        }
    }

    #[test]
    fn other_keys_are_ignored() {
        for key in [KeyInput::Char('x'), KeyInput::Char('c'), KeyInput::Ctrl('x')] {
            assert!(!key.is_quit(), "{key:?}");
        }
    }
}
