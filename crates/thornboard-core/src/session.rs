// Thornboard Keyboard Session
// Feeds raw key codes through the shift latch and character mapper

#![cfg(feature = "settings")]

use std::fmt;
use std::time::Instant;

use crate::keycode::KeyCommand;
use crate::layout::{Layout, ThornStyle};
use crate::mapper::CharacterMapper;
use crate::settings::Settings;
use crate::shift::{ShiftLatch, ShiftMode};
use crate::special::THORN_CODE;

/// What the host should do after a key was processed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutput {
    /// Insert text at the cursor (may be empty for unmapped codes)
    Commit(String),
    /// Delete one character before the cursor
    DeleteBackward,
    /// Send an enter key event
    Enter,
    /// Shift state changed, key labels need refreshing
    ShiftChanged(ShiftMode),
    /// Switch to another page
    LayoutChanged(Layout),
    /// Settings panel opened (true) or closed (false)
    SettingsToggled(bool),
}

impl fmt::Display for KeyOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyOutput::Commit(text) => write!(f, "commit {:?}", text),
            KeyOutput::DeleteBackward => write!(f, "delete"),
            KeyOutput::Enter => write!(f, "enter"),
            KeyOutput::ShiftChanged(mode) => write!(f, "shift {}", mode),
            KeyOutput::LayoutChanged(layout) => write!(f, "layout {}", layout),
            KeyOutput::SettingsToggled(open) => {
                write!(f, "settings {}", if *open { "open" } else { "closed" })
            }
        }
    }
}

/// Keyboard state between key presses.
///
/// The mapper itself stays stateless; everything that changes from one
/// press to the next (shift, page, settings panel) lives here.
#[derive(Debug, Clone)]
pub struct KeyboardSession {
    settings: Settings,
    mapper: CharacterMapper,
    shift: ShiftLatch,
    layout: Layout,
    settings_open: bool,
}

impl Default for KeyboardSession {
    fn default() -> Self {
        Self::new(Settings::new())
    }
}

impl KeyboardSession {
    pub fn new(settings: Settings) -> Self {
        Self::with_mapper(settings, CharacterMapper::new())
    }

    pub fn with_mapper(settings: Settings, mapper: CharacterMapper) -> Self {
        Self {
            settings,
            mapper,
            shift: ShiftLatch::new(),
            layout: Layout::Letters,
            settings_open: false,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Replace settings; labels and layout resource follow immediately.
    ///
    /// Moving the thorn key reloads the pages, which puts the letters
    /// page back on screen.
    pub fn apply_settings(&mut self, settings: Settings) {
        log::debug!(
            "Applying settings: thorn_side={} thorn_style={}",
            settings.thorn_side(),
            settings.thorn_style()
        );
        if settings.thorn_side() != self.settings.thorn_side() {
            self.layout = Layout::Letters;
        }
        self.settings = settings;
    }

    pub fn shift_mode(&self) -> ShiftMode {
        self.shift.mode()
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn settings_open(&self) -> bool {
        self.settings_open
    }

    /// Whether a key press should trigger haptic feedback
    pub fn haptic_on_press(&self) -> bool {
        self.settings.vibrate_on_keypress()
    }

    /// Resource name of the page currently shown
    pub fn layout_resource(&self) -> &'static str {
        self.layout.resource_name(self.settings.thorn_side())
    }

    pub fn process_key(&mut self, code: i64) -> KeyOutput {
        self.process_key_at(code, Instant::now())
    }

    /// Process one key code pressed at `now`
    pub fn process_key_at(&mut self, code: i64, now: Instant) -> KeyOutput {
        let command = KeyCommand::from_code(code);
        let output = match command {
            KeyCommand::Shift => KeyOutput::ShiftChanged(self.shift.press_at(now)),
            KeyCommand::Symbols => self.switch_layout(Layout::Symbols),
            KeyCommand::Letters => self.switch_layout(Layout::Letters),
            KeyCommand::Math => self.switch_layout(Layout::Math),
            KeyCommand::Settings => {
                self.settings_open = !self.settings_open;
                KeyOutput::SettingsToggled(self.settings_open)
            }
            KeyCommand::Delete => KeyOutput::DeleteBackward,
            KeyCommand::Enter => KeyOutput::Enter,
            // Space never consumes a one-shot shift
            KeyCommand::Space => KeyOutput::Commit(" ".to_string()),
            KeyCommand::Character(code) => {
                let text = self.character_text(code);
                if self.shift.consume() {
                    log::debug!("One-shot shift released");
                }
                KeyOutput::Commit(text)
            }
        };

        log::debug!("Key {} ({}) -> {}", code, command, output);
        output
    }

    /// Label drawn on a key whose text depends on state.
    ///
    /// Returns `None` for keys with a fixed label.
    pub fn key_label(&self, code: i64) -> Option<String> {
        match KeyCommand::from_code(code) {
            KeyCommand::Shift => Some(self.shift.mode().icon().to_string()),
            KeyCommand::Character(THORN_CODE) => Some(
                self.settings
                    .thorn_style()
                    .glyph(self.shift.is_active())
                    .to_string(),
            ),
            _ => None,
        }
    }

    fn character_text(&self, code: i64) -> String {
        let shifted = self.shift.is_active();
        if code == THORN_CODE && self.settings.thorn_style() == ThornStyle::Eth {
            return ThornStyle::Eth.glyph(shifted).to_string();
        }
        self.mapper.map(code, shifted)
    }

    fn switch_layout(&mut self, layout: Layout) -> KeyOutput {
        self.layout = layout;
        KeyOutput::LayoutChanged(layout)
    }
}
