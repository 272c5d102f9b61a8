use std::time::{Duration, Instant};

use strum_macros::{Display, EnumString};

/// Two shift presses closer together than this lock caps
pub const DEFAULT_DOUBLE_TAP: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum ShiftMode {
    #[default]
    Off,
    /// Applies to the next committed character only
    OneShot,
    CapsLock,
}

impl ShiftMode {
    pub fn is_active(self) -> bool {
        !matches!(self, ShiftMode::Off)
    }

    /// Icon drawn on the shift key for this mode
    pub fn icon(self) -> &'static str {
        match self {
            ShiftMode::Off => "shift",
            ShiftMode::OneShot => "shift_active",
            ShiftMode::CapsLock => "shift_caps",
        }
    }
}

/// Shift key state machine: off -> one-shot -> off, with a double tap
/// locking caps.
#[derive(Debug, Clone)]
pub struct ShiftLatch {
    mode: ShiftMode,
    last_press: Option<Instant>,
    double_tap: Duration,
}

impl Default for ShiftLatch {
    fn default() -> Self {
        Self::with_double_tap(DEFAULT_DOUBLE_TAP)
    }
}

impl ShiftLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_double_tap(double_tap: Duration) -> Self {
        Self {
            mode: ShiftMode::Off,
            last_press: None,
            double_tap,
        }
    }

    pub fn mode(&self) -> ShiftMode {
        self.mode
    }

    pub fn is_active(&self) -> bool {
        self.mode.is_active()
    }

    pub fn press(&mut self) -> ShiftMode {
        self.press_at(Instant::now())
    }

    /// Register a shift press at `now` and return the new mode
    pub fn press_at(&mut self, now: Instant) -> ShiftMode {
        let double_tapped = self
            .last_press
            .is_some_and(|last| now.saturating_duration_since(last) < self.double_tap);

        self.mode = if double_tapped {
            ShiftMode::CapsLock
        } else if self.mode == ShiftMode::Off {
            ShiftMode::OneShot
        } else {
            ShiftMode::Off
        };
        self.last_press = Some(now);
        self.mode
    }

    /// Release a one-shot shift after a character was committed.
    /// Returns true if the mode changed.
    pub fn consume(&mut self) -> bool {
        if self.mode == ShiftMode::OneShot {
            self.mode = ShiftMode::Off;
            true
        } else {
            false
        }
    }
}
