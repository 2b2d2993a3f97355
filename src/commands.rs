use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::codec;
use crate::document;
use crate::domain::{PointSet, Radix, ReconstructConfig};
use crate::interpolate;

/// Outcome of reconstructing one share document
#[derive(Debug, Clone)]
pub struct Reconstruction {
    source: String,
    set: PointSet,
    used: Vec<i64>,
    secret: BigInt,
}

impl Reconstruction {
    /// Where the document came from (a path, or `<stdin>`)
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Every decoded point, sorted by index
    #[must_use]
    pub fn points(&self) -> &PointSet {
        &self.set
    }

    /// Indices of the points that took part in interpolation
    #[must_use]
    pub fn used(&self) -> &[i64] {
        &self.used
    }

    #[must_use]
    pub fn secret(&self) -> &BigInt {
        &self.secret
    }

    /// Serializable form, with big integers rendered in decimal
    #[must_use]
    pub fn summary(&self) -> ReconstructionSummary {
        ReconstructionSummary {
            source: self.source.clone(),
            n: self.set.share_count().map(|n| *n),
            k: self.set.threshold().map(|k| *k),
            m: self.set.degree(),
            points_used: self.used.clone(),
            secret: self.secret.to_string(),
        }
    }
}

fn optional(value: Option<usize>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

impl fmt::Display for Reconstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Test Case from: {}", self.source)?;
        writeln!(
            f,
            "n = {}, k = {}, m = {}",
            optional(self.set.share_count().map(|n| *n)),
            optional(self.set.threshold().map(|k| *k)),
            optional(self.set.degree())
        )?;
        writeln!(f, "Polynomial roots:")?;
        for point in self.set.points() {
            writeln!(f, "  {point}")?;
        }
        let used: Vec<String> = self.used.iter().map(ToString::to_string).collect();
        writeln!(f, "Points used: {}", used.join(", "))?;
        write!(f, "Secret (constant term): {}", self.secret)
    }
}

/// JSON form of a [`Reconstruction`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconstructionSummary {
    pub source: String,
    pub n: Option<usize>,
    pub k: Option<usize>,
    pub m: Option<usize>,
    pub points_used: Vec<i64>,
    /// Decimal rendering of the secret
    pub secret: String,
}

/// Reconstruct the secret of a share document held in memory
///
/// `source` only labels the report.
///
/// # Errors
/// Returns an error if the document cannot be parsed or has too few points
pub fn reconstruct_str(
    json: &str,
    source: &str,
    config: &ReconstructConfig,
) -> Result<Reconstruction> {
    let set = document::parse_document(json)
        .with_context(|| format!("Failed to parse share document from {source}"))?;

    let chosen = interpolate::select_points(&set, config.selection())
        .with_context(|| format!("Cannot reconstruct secret from {source}"))?;
    let used = chosen.iter().map(|point| point.x()).collect();

    let secret = interpolate::constant_term(&chosen, config.division())
        .with_context(|| format!("Failed to interpolate secret from {source}"))?;

    Ok(Reconstruction {
        source: source.to_string(),
        set,
        used,
        secret,
    })
}

/// Reconstruct the secret of a share document on disk
///
/// # Errors
/// Returns an error if the file cannot be read, or for any failure of
/// [`reconstruct_str`]
pub fn reconstruct_file(path: &Path, config: &ReconstructConfig) -> Result<Reconstruction> {
    let contents = Zeroizing::new(
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?,
    );
    reconstruct_str(&contents, &path.display().to_string(), config)
}

/// Decode a single encoded value, returning it in decimal
///
/// # Errors
/// Returns an error if a digit is invalid for `radix`
pub fn decode_value(digits: &str, radix: &Radix) -> Result<String> {
    let value = codec::decode_in(digits, radix)
        .with_context(|| format!("Failed to decode '{digits}' in base {radix}"))?;
    Ok(value.to_string())
}

/// Encode a non-negative decimal value in another radix
///
/// # Errors
/// Returns an error if the value is not a decimal number or the radix is
/// above 36
pub fn encode_value(decimal: &str, radix: &Radix) -> Result<String> {
    let value = codec::decode_in(decimal, &Radix::decimal())
        .with_context(|| format!("'{decimal}' is not a non-negative decimal number"))?;
    codec::encode(value.magnitude(), radix)
        .with_context(|| format!("Cannot encode in base {radix}"))
}
