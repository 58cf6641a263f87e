use clap::{parser::ValueSource, ArgAction, ArgMatches, Args, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumString};

use crate::charset::CharClass;
use crate::error::{PassForgeError, PfResult};

/// What `generate` does when the requested length is smaller than the
/// number of enabled classes (so one-per-class coverage cannot fit).
#[derive(
    ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, Default,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum UnderLengthPolicy {
    /// Shuffle first, then trim to the requested length. Always succeeds;
    /// class coverage may be incomplete.
    #[default]
    Truncate,
    /// Fail with `LengthTooShort`.
    Reject,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Password length in characters
    #[arg(short, long, default_value_t = 12)]
    pub length: usize,

    /// Disable uppercase letters (A-Z)
    #[arg(long = "no-uppercase", action = ArgAction::SetFalse, default_value_t = true)]
    pub uppercase: bool,

    /// Disable lowercase letters (a-z)
    #[arg(long = "no-lowercase", action = ArgAction::SetFalse, default_value_t = true)]
    pub lowercase: bool,

    /// Disable digits (0-9)
    #[arg(long = "no-digits", action = ArgAction::SetFalse, default_value_t = true)]
    pub digits: bool,

    /// Disable symbols (!@#$...)
    #[arg(long = "no-symbols", action = ArgAction::SetFalse, default_value_t = true)]
    pub symbols: bool,

    /// Drop easily-confused characters (Il1O0) from the drawing pools
    #[arg(long, default_value_t = false)]
    pub exclude_ambiguous: bool,

    /// Behavior when length < number of enabled classes
    #[arg(long, value_enum, default_value_t = UnderLengthPolicy::Truncate)]
    pub underlength: UnderLengthPolicy,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            length: 12,
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
            exclude_ambiguous: false,
            underlength: UnderLengthPolicy::Truncate,
        }
    }
}

impl GeneratorConfig {
    pub fn includes(&self, class: CharClass) -> bool {
        match class {
            CharClass::Uppercase => self.uppercase,
            CharClass::Lowercase => self.lowercase,
            CharClass::Digit => self.digits,
            CharClass::Symbol => self.symbols,
        }
    }

    /// Enabled classes in canonical order (uppercase, lowercase, digit,
    /// symbol).
    pub fn enabled_classes(&self) -> Vec<CharClass> {
        CharClass::iter().filter(|c| self.includes(*c)).collect()
    }

    /// Rejects configurations generation cannot serve. The class check
    /// runs before the length check; an all-disabled config reports
    /// `NoClassSelected` even when the length is also invalid.
    pub fn validate(&self) -> PfResult<()> {
        if self.enabled_classes().is_empty() {
            return Err(PassForgeError::NoClassSelected);
        }
        if self.length == 0 {
            return Err(PassForgeError::InvalidLength(self.length));
        }
        Ok(())
    }

    /// Reads a JSON profile. Missing fields fall back to the defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> PfResult<Self> {
        let content = fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Overlays only the fields the user explicitly passed on the command
    /// line. Keeps profile values for everything else.
    pub fn merge_from_cli(&mut self, cli: &GeneratorConfig, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli.$field.clone();
                }
            };
        }

        update_if_present!(length, "length");
        update_if_present!(uppercase, "uppercase");
        update_if_present!(lowercase, "lowercase");
        update_if_present!(digits, "digits");
        update_if_present!(symbols, "symbols");
        update_if_present!(exclude_ambiguous, "exclude_ambiguous");
        update_if_present!(underlength, "underlength");
    }
}
