//! JSON share documents
//!
//! A document lists the declared share count `n`, the threshold `k`, and one
//! record per share keyed by its index:
//!
//! ```json
//! {
//!     "keys": { "n": 4, "k": 3 },
//!     "1": { "base": "10", "value": "4" },
//!     "2": { "base": "2", "value": "111" },
//!     "3": { "base": "10", "value": "12" },
//!     "6": { "base": "4", "value": "213" }
//! }
//! ```
//!
//! `keys` and each of its fields are optional. Every other top-level key must
//! be a decimal integer.

use std::borrow::Cow;
use std::collections::BTreeMap;

use log::{debug, warn};
use serde::Deserialize;
use thiserror::Error;

use crate::domain::{Point, PointSet, ShareCount, Threshold};
use crate::error::RecoveryError;

/// Failure to turn a document into a [`PointSet`]
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("malformed share document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("share key '{0}' is not an integer index")]
    InvalidIndex(String),

    #[error("invalid keys: {0}")]
    Keys(String),

    #[error("failed to decode share {index}")]
    Share {
        index: i64,
        #[source]
        source: RecoveryError,
    },
}

#[derive(Debug, Deserialize)]
struct RawDocument {
    #[serde(default)]
    keys: Option<RawKeys>,
    #[serde(flatten)]
    shares: BTreeMap<String, RawShare>,
}

#[derive(Debug, Default, Deserialize)]
struct RawKeys {
    n: Option<u64>,
    k: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct RawShare {
    #[serde(default)]
    base: Option<RadixToken>,
    value: String,
}

/// Radices are normally strings but plain JSON numbers are accepted too
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RadixToken {
    Text(String),
    Number(u64),
}

impl RadixToken {
    fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Text(text) => Cow::Borrowed(text),
            Self::Number(number) => Cow::Owned(number.to_string()),
        }
    }
}

/// A share without a `base` is an invalid radix, like an empty one
fn decode_share(index: i64, share: &RawShare) -> Result<Point, DocumentError> {
    let radix = share
        .base
        .as_ref()
        .map(RadixToken::as_text)
        .unwrap_or_default();
    Point::decode(index, &share.value, &radix)
        .map_err(|source| DocumentError::Share { index, source })
}

/// Parses a share document into a point set sorted by ascending index
///
/// Each share is decoded exactly once here.
///
/// # Errors
/// Returns a [`DocumentError`] if the JSON is malformed, an index is not an
/// integer, `n` or `k` is out of range, or a share value fails to decode
///
/// # Examples
///
/// ```rust
/// use shamir_recover::document::parse_document;
///
/// let set = parse_document(r#"{
///     "keys": { "n": 2, "k": 2 },
///     "1": { "base": "16", "value": "ff" },
///     "2": { "base": "10", "value": "300" }
/// }"#).unwrap();
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.points()[0].y().to_string(), "255");
/// assert_eq!(set.degree(), Some(1));
/// ```
pub fn parse_document(json: &str) -> Result<PointSet, DocumentError> {
    let raw: RawDocument = serde_json::from_str(json)?;
    let keys = raw.keys.unwrap_or_default();

    let mut points = Vec::with_capacity(raw.shares.len());
    for (key, share) in &raw.shares {
        let index: i64 = key
            .trim()
            .parse()
            .map_err(|_| DocumentError::InvalidIndex(key.clone()))?;
        let point = decode_share(index, share)?;
        debug!("Decoded share {point}");
        points.push(point);
    }
    points.sort_by_key(Point::x);

    let mut set: PointSet = points.into_iter().collect();

    if let Some(n) = keys.n {
        let share_count = usize::try_from(n)
            .map_err(|e| DocumentError::Keys(e.to_string()))
            .and_then(|n| ShareCount::new(n).map_err(|e| DocumentError::Keys(e.to_string())))?;
        if *share_count != set.len() {
            warn!(
                "Document declares n = {} but contains {} shares",
                *share_count,
                set.len()
            );
        }
        set = set.with_share_count(share_count);
    }

    if let Some(k) = keys.k {
        let threshold = usize::try_from(k)
            .map_err(|e| DocumentError::Keys(e.to_string()))
            .and_then(|k| Threshold::new(k).map_err(|e| DocumentError::Keys(e.to_string())))?;
        set = set.with_threshold(threshold);
    }

    Ok(set)
}
