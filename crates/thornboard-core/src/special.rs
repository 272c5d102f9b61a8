// Thornboard Special-Case Table
// Codes whose shifted form is not a mechanical uppercase transform

use indexmap::IndexMap;

/// Code for the thorn key (U+00FE, LATIN SMALL LETTER THORN).
pub const THORN_CODE: i64 = 254;

/// Unshifted and shifted text for one irregular code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialCase {
    pub unshifted: String,
    pub shifted: String,
}

impl SpecialCase {
    pub fn new(unshifted: impl Into<String>, shifted: impl Into<String>) -> Self {
        Self {
            unshifted: unshifted.into(),
            shifted: shifted.into(),
        }
    }

    /// Text for the given shift state
    pub fn resolve(&self, shifted: bool) -> &str {
        if shifted {
            &self.shifted
        } else {
            &self.unshifted
        }
    }
}

/// Ordered lookup table consulted before the generic case-folding rule.
///
/// Entries keep their insertion order so the whole table can be listed
/// and audited in one place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialTable {
    entries: IndexMap<i64, SpecialCase>,
}

impl Default for SpecialTable {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl SpecialTable {
    /// Create a table with no entries
    pub fn empty() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Create the built-in table
    pub fn with_defaults() -> Self {
        let mut table = Self::empty();
        table.insert(THORN_CODE, "þ", "Þ");
        table
    }

    /// Add or replace an entry, returning the previous one if any
    pub fn insert(
        &mut self,
        code: i64,
        unshifted: impl Into<String>,
        shifted: impl Into<String>,
    ) -> Option<SpecialCase> {
        self.entries
            .insert(code, SpecialCase::new(unshifted, shifted))
    }

    pub fn get(&self, code: i64) -> Option<&SpecialCase> {
        self.entries.get(&code)
    }

    pub fn contains(&self, code: i64) -> bool {
        self.entries.contains_key(&code)
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (i64, &SpecialCase)> {
        self.entries.iter().map(|(code, case)| (*code, case))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
