//! Domain records and value types.

pub mod entities;
pub mod factor;
pub mod rating;

pub use entities::{
    Asset, FailureMode, MatrixPlacement, PartStatus, RatedEntity, Snapshot, SparePart,
};
pub use factor::{Factor, FACTOR_MAX, FACTOR_MIN};
pub use rating::{RiskRating, UnknownRating};
