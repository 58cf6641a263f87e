// ===== passforge/src/verifier.rs =====
use crate::charset::{self, CharClass};
use crate::config::GeneratorConfig;

/// Outcome of auditing an emitted password against the configuration that
/// produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageReport {
    /// Enabled classes with at least one character present.
    pub covered: Vec<CharClass>,
    /// Enabled classes with no character present.
    pub missing: Vec<CharClass>,
    /// Characters that should have been filtered out by the ambiguous
    /// switch. Empty unless the filter was on.
    pub ambiguous: Vec<char>,
    /// Characters outside every enabled pool.
    pub foreign: Vec<char>,
}

impl CoverageReport {
    pub fn is_full(&self) -> bool {
        self.missing.is_empty() && self.ambiguous.is_empty() && self.foreign.is_empty()
    }
}

/// Checks a password against its configuration.
///
/// For output of `generate`, `ambiguous` and `foreign` are always empty
/// and `missing` is non-empty only on the under-length truncate path.
/// Classes are reported in canonical order.
pub fn audit_coverage(password: &str, config: &GeneratorConfig) -> CoverageReport {
    let mut covered = Vec::new();
    let mut missing = Vec::new();

    for class in config.enabled_classes() {
        if password.bytes().any(|b| class.contains(b)) {
            covered.push(class);
        } else {
            missing.push(class);
        }
    }

    let mut ambiguous = Vec::new();
    let mut foreign = Vec::new();
    for byte in password.bytes() {
        if config.exclude_ambiguous && charset::is_ambiguous(byte) {
            ambiguous.push(byte as char);
        }
        match charset::classify(byte) {
            Some(class) if config.includes(class) => {}
            _ => foreign.push(byte as char),
        }
    }

    CoverageReport {
        covered,
        missing,
        ambiguous,
        foreign,
    }
}
