//! Recover Shamir secrets from shares written in arbitrary bases
//!
//! The core is two pure pieces: [`codec`] turns digit strings into exact big
//! integers, and [`interpolate`] evaluates the Lagrange polynomial through a
//! [`domain::PointSet`] at `x = 0`. [`document`] and [`commands`] wrap them
//! for JSON share documents.

#[cfg(feature = "cli")]
pub mod cli;
pub mod codec;
pub mod commands;
pub mod document;
pub mod domain;
pub mod error;
pub mod interpolate;
#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use error::RecoveryError;
