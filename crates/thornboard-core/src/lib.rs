// Thornboard Core Library
// Key code to text mapping for a thorn-aware soft keyboard

pub mod keycode;
pub mod layout;
pub mod mapper;
pub mod shift;
pub mod special;

#[cfg(feature = "settings")]
pub mod settings;

#[cfg(feature = "settings")]
pub mod session;

pub use keycode::KeyCommand;
pub use layout::{Layout, ThornSide, ThornStyle};
pub use mapper::{map, CharacterMapper};
pub use shift::{ShiftLatch, ShiftMode};
pub use special::{SpecialCase, SpecialTable, THORN_CODE};

#[cfg(feature = "settings")]
pub use session::{KeyOutput, KeyboardSession};
#[cfg(feature = "settings")]
pub use settings::{default_settings_content, Settings, SettingsError};
