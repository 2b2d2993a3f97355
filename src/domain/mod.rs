//! Domain types for secret reconstruction
//!
//! This module contains validated newtypes and configuration:
//! - [`Radix`] - Numeral base of an encoded value (>= 2)
//! - [`Threshold`] - Points required for reconstruction (>= 2)
//! - [`ShareCount`] - Declared total number of shares (>= 1)
//! - [`Point`] - A decoded share with its provenance
//! - [`PointSet`] - The points of one reconstruction request
//! - [`ReconstructConfig`] - Division mode and point selection policy

mod config;
mod point;
mod point_set;
mod radix;
mod share_count;
mod threshold;

pub use config::{DivisionMode, ReconstructConfig, Selection};
pub use point::Point;
pub use point_set::PointSet;
pub use radix::Radix;
pub use share_count::ShareCount;
pub use threshold::Threshold;
