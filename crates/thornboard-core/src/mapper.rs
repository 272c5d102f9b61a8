// Thornboard Character Mapper
// Maps a key code and shift state to the text the keyboard emits

use std::sync::LazyLock;

use crate::special::SpecialTable;

/// Shared mapper with the built-in special-case table
static DEFAULT_MAPPER: LazyLock<CharacterMapper> = LazyLock::new(CharacterMapper::new);

/// Map a key code to text using the built-in table.
///
/// Never fails: codes that are zero, negative or outside the Unicode
/// scalar range produce an empty string.
pub fn map(code: i64, shifted: bool) -> String {
    DEFAULT_MAPPER.map(code, shifted)
}

/// Pure code-to-text mapper.
///
/// Resolution order:
///   1. special-case table (checked before any range validation)
///   2. the code as a Unicode scalar, uppercased when shifted
///   3. empty text
#[derive(Debug, Clone, Default)]
pub struct CharacterMapper {
    table: SpecialTable,
}

impl CharacterMapper {
    /// Create a mapper with the built-in special-case table
    pub fn new() -> Self {
        Self::with_table(SpecialTable::with_defaults())
    }

    /// Create a mapper with a custom special-case table
    pub fn with_table(table: SpecialTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &SpecialTable {
        &self.table
    }

    pub fn map(&self, code: i64, shifted: bool) -> String {
        if let Some(special) = self.table.get(code) {
            return special.resolve(shifted).to_string();
        }

        if code <= 0 {
            return String::new();
        }

        match code_to_char(code) {
            Some(ch) if shifted => shift_char(ch).to_string(),
            Some(ch) => ch.to_string(),
            None => String::new(),
        }
    }
}

/// Convert a positive code to a char, rejecting surrogates and anything
/// past U+10FFFF.
fn code_to_char(code: i64) -> Option<char> {
    u32::try_from(code).ok().and_then(char::from_u32)
}

/// Uppercase a single char using the simple (one-to-one) mapping.
///
/// When the full uppercase form expands to several chars, fall back to
/// the simple mapping; chars without one (e.g. 'ß') are left as is.
fn shift_char(ch: char) -> char {
    let mut upper = ch.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => simple_upper_fallback(ch).unwrap_or(ch),
    }
}

/// Simple uppercase for chars whose full uppercase expands.
///
/// Only the Greek letters with ypogegrammeni have one: they map to their
/// prosgegrammeni forms (U+1F80 -> U+1F88, U+1FB3 -> U+1FBC).
fn simple_upper_fallback(ch: char) -> Option<char> {
    let offset = match ch as u32 {
        0x1F80..=0x1F87 | 0x1F90..=0x1F97 | 0x1FA0..=0x1FA7 => 8,
        0x1FB3 | 0x1FC3 | 0x1FF3 => 9,
        _ => return None,
    };
    char::from_u32(ch as u32 + offset)
}
