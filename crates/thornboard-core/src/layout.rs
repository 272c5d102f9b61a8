// Thornboard Layout Pages
// Active page plus the thorn key's placement and glyph

use strum_macros::{Display, EnumIter, EnumString};

/// Keyboard page currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Layout {
    #[default]
    Letters,
    Symbols,
    Math,
}

impl Layout {
    /// Layout resource to load for this page
    pub fn resource_name(self, side: ThornSide) -> &'static str {
        match (self, side) {
            (Layout::Letters, ThornSide::Left) => "qwerty_left",
            (Layout::Letters, ThornSide::Right) => "qwerty_right",
            (Layout::Symbols, _) => "symbols",
            (Layout::Math, _) => "mathsymbols",
        }
    }
}

/// Which side of the letters page carries the thorn key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum ThornSide {
    #[default]
    Left,
    Right,
}

impl ThornSide {
    pub fn from_right(on_right: bool) -> Self {
        if on_right {
            ThornSide::Right
        } else {
            ThornSide::Left
        }
    }
}

/// Glyph produced by the thorn key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum ThornStyle {
    #[default]
    Thorn,
    Eth,
}

impl ThornStyle {
    pub fn from_eth(use_eth: bool) -> Self {
        if use_eth {
            ThornStyle::Eth
        } else {
            ThornStyle::Thorn
        }
    }

    pub fn glyph(self, shifted: bool) -> &'static str {
        match (self, shifted) {
            (ThornStyle::Thorn, false) => "þ",
            (ThornStyle::Thorn, true) => "Þ",
            (ThornStyle::Eth, false) => "ð",
            (ThornStyle::Eth, true) => "Ð",
        }
    }
}
