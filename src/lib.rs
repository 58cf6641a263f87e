//! Configurable random password generation with a live strength meter.
//!
//! The core is pure: [`generator::generate`] builds a password from a
//! [`config::GeneratorConfig`] (guarantee one character per enabled class,
//! fill uniformly from the union of enabled pools, uniform shuffle) and
//! [`strength::score`] maps the configuration to a bounded heuristic
//! score with a label and a meter color. [`api::ForgeSession`] wraps both
//! into the state machine a front end drives.
//!
//! Randomness comes from `fastrand`, a fast general-purpose PRNG that is
//! NOT cryptographically secure. Seeded runs reproduce exactly, which is
//! the point; do not treat the output as high-assurance key material.
pub mod api;
pub mod charset;
pub mod config;
pub mod error;
pub mod generator;
pub mod strength;
pub mod verifier;
// cmd, reports and ui are binary modules (declared in main.rs).
