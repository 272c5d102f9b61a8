use std::fmt;

/// A raw key code decoded into what the keyboard should do with it.
///
/// Negative codes are function keys on the layout pages:
///   -1 == shift
///   -2 / -67 == symbols page
///   -68 == letters page
///   -69 == math page
///   -10 == settings panel
///   -5 == delete
///   -4 == enter
/// Everything else is handed to the character mapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCommand {
    Shift,
    Symbols,
    Letters,
    Math,
    Settings,
    Delete,
    Enter,
    Space,
    Character(i64),
}

impl KeyCommand {
    /// Decode a key code. Total: unknown codes become `Character`.
    pub fn from_code(code: i64) -> Self {
        match code {
            -1 => KeyCommand::Shift,
            -2 | -67 => KeyCommand::Symbols,
            -68 => KeyCommand::Letters,
            -69 => KeyCommand::Math,
            -10 => KeyCommand::Settings,
            -5 => KeyCommand::Delete,
            -4 => KeyCommand::Enter,
            32 => KeyCommand::Space,
            other => KeyCommand::Character(other),
        }
    }

    /// Canonical key code for this command
    pub fn to_code(self) -> i64 {
        match self {
            KeyCommand::Shift => -1,
            KeyCommand::Symbols => -2,
            KeyCommand::Letters => -68,
            KeyCommand::Math => -69,
            KeyCommand::Settings => -10,
            KeyCommand::Delete => -5,
            KeyCommand::Enter => -4,
            KeyCommand::Space => 32,
            KeyCommand::Character(code) => code,
        }
    }
}

impl fmt::Display for KeyCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyCommand::Shift => write!(f, "shift"),
            KeyCommand::Symbols => write!(f, "symbols"),
            KeyCommand::Letters => write!(f, "letters"),
            KeyCommand::Math => write!(f, "math"),
            KeyCommand::Settings => write!(f, "settings"),
            KeyCommand::Delete => write!(f, "delete"),
            KeyCommand::Enter => write!(f, "enter"),
            KeyCommand::Space => write!(f, "space"),
            KeyCommand::Character(code) => write!(f, "char({})", code),
        }
    }
}
