#![deny(missing_docs)]
#![doc = "Core data types, errors and the embedded specimen catalog for fuel correlation analysis."]

pub mod catalog;
pub mod errors;
/// Canonical hashing helpers.
pub mod hash;
pub mod provenance;
pub mod serde;
mod types;

pub use catalog::{catalog, target_conditions, target_label, targets, Range, TargetConditions};
pub use errors::{ErrorInfo, FuelError};
pub use hash::{catalog_hash, stable_hash_string};
pub use provenance::{RunProvenance, SchemaVersion};
pub use types::{InputVar, OperatingPoint, Specimen};
