use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Uppercase letter pool (26 characters).
pub const UPPERCASE_SET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Lowercase letter pool (26 characters).
pub const LOWERCASE_SET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Digit pool (10 characters).
pub const DIGIT_SET: &[u8] = b"0123456789";

/// Symbol pool (22 characters).
pub const SYMBOL_SET: &[u8] = b"!@#$%^&*()_+[]{}<>?/|~";

/// Characters that are easy to misread in print (capital I, lowercase l,
/// one, capital O, zero). Removed from the drawing pools when the
/// `exclude_ambiguous` switch is on.
pub const AMBIGUOUS_SET: &[u8] = b"Il1O0";

/// The four character classes a password can draw from.
///
/// Declaration order is the canonical order: alphabet assembly, the
/// guarantee step, coverage audits and reports all walk classes in this
/// sequence.
#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum CharClass {
    Uppercase,
    Lowercase,
    Digit,
    Symbol,
}

impl CharClass {
    /// Full (unfiltered) alphabet for this class.
    pub fn alphabet(&self) -> &'static [u8] {
        match self {
            Self::Uppercase => UPPERCASE_SET,
            Self::Lowercase => LOWERCASE_SET,
            Self::Digit => DIGIT_SET,
            Self::Symbol => SYMBOL_SET,
        }
    }

    pub fn contains(&self, byte: u8) -> bool {
        self.alphabet().contains(&byte)
    }

    /// Drawing pool for this class, filtered when ambiguous characters
    /// are excluded. Never empty: every class keeps at least 8 characters
    /// after filtering.
    pub fn pool(&self, exclude_ambiguous: bool) -> Vec<u8> {
        if exclude_ambiguous {
            self.alphabet()
                .iter()
                .copied()
                .filter(|b| !is_ambiguous(*b))
                .collect()
        } else {
            self.alphabet().to_vec()
        }
    }

    /// Short human name used in prompts and reports.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Uppercase => "Uppercase (A-Z)",
            Self::Lowercase => "Lowercase (a-z)",
            Self::Digit => "Digits (0-9)",
            Self::Symbol => "Symbols (!@#$...)",
        }
    }
}

pub fn is_ambiguous(byte: u8) -> bool {
    AMBIGUOUS_SET.contains(&byte)
}

/// The class a byte belongs to, if any. The four alphabets are disjoint,
/// so at most one class matches.
pub fn classify(byte: u8) -> Option<CharClass> {
    CharClass::iter().find(|c| c.contains(byte))
}

/// Concatenation of the drawing pools of `classes`, in the order given.
/// The fill step of generation draws uniformly from this buffer, so each
/// class's weight is proportional to its pool size.
pub fn working_alphabet(classes: &[CharClass], exclude_ambiguous: bool) -> Vec<u8> {
    let mut pool = Vec::new();
    for class in classes {
        pool.extend_from_slice(&class.pool(exclude_ambiguous));
    }
    pool
}
