// ===== passforge/src/api.rs =====
use fastrand::Rng;
use serde::{Deserialize, Serialize};

use crate::charset::CharClass;
use crate::config::{GeneratorConfig, UnderLengthPolicy};
use crate::error::PfResult;
use crate::generator;
use crate::strength::{self, StrengthScore};

/// State machine behind any password-forge front end: current config,
/// PRNG, last generated password and last validation error.
///
/// Generation stores exactly one of password or error message; config
/// edits leave the previous password in place until the next generate,
/// and the strength meter always reflects the current config.
pub struct ForgeSession {
    config: GeneratorConfig,
    rng: Rng,
    password: Option<String>,
    error: Option<String>,
}

impl ForgeSession {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            rng: generator::make_rng(None),
            password: None,
            error: None,
        }
    }

    pub fn with_seed(config: GeneratorConfig, seed: u64) -> Self {
        Self {
            rng: generator::make_rng(Some(seed)),
            ..Self::new(config)
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Live score of the current configuration.
    pub fn strength(&self) -> StrengthScore {
        strength::score(&self.config)
    }

    pub fn set_length(&mut self, length: usize) {
        self.config.length = length;
    }

    pub fn set_class(&mut self, class: CharClass, enabled: bool) {
        match class {
            CharClass::Uppercase => self.config.uppercase = enabled,
            CharClass::Lowercase => self.config.lowercase = enabled,
            CharClass::Digit => self.config.digits = enabled,
            CharClass::Symbol => self.config.symbols = enabled,
        }
    }

    pub fn set_exclude_ambiguous(&mut self, on: bool) {
        self.config.exclude_ambiguous = on;
    }

    pub fn set_underlength(&mut self, policy: UnderLengthPolicy) {
        self.config.underlength = policy;
    }

    /// On success stores the password and clears the error; on failure
    /// clears the password and stores the error's display string.
    pub fn generate(&mut self) -> PfResult<&str> {
        match generator::generate(&self.config, &mut self.rng) {
            Ok(pw) => {
                self.error = None;
                Ok(self.password.insert(pw).as_str())
            }
            Err(e) => {
                self.password = None;
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Copy gate: a password is present and no error is stored.
    pub fn can_copy(&self) -> bool {
        self.password.is_some() && self.error.is_none()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct StrengthSummary {
    pub strength: StrengthScore,
    pub pool_size: usize,
    pub entropy_bits: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GenerationReport {
    pub passwords: Vec<String>,
    pub strength: StrengthScore,
    pub pool_size: usize,
    pub entropy_bits: f64,
}

pub fn strength_summary(config: &GeneratorConfig) -> StrengthSummary {
    StrengthSummary {
        strength: strength::score(config),
        pool_size: strength::pool_size(config),
        entropy_bits: strength::entropy_bits(config),
    }
}

pub fn build_report(config: &GeneratorConfig, passwords: Vec<String>) -> GenerationReport {
    GenerationReport {
        passwords,
        strength: strength::score(config),
        pool_size: strength::pool_size(config),
        entropy_bits: strength::entropy_bits(config),
    }
}
