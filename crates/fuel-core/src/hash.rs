use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::errors::FuelError;
use crate::serde::to_canonical_json_bytes;
use crate::types::Specimen;

/// Computes a stable SHA256 hash for the provided serializable value.
pub fn stable_hash_string<T: Serialize>(value: &T) -> Result<String, FuelError> {
    let bytes = to_canonical_json_bytes(value)?;
    let digest = Sha256::digest(&bytes);
    Ok(format!("{:x}", digest))
}

/// Canonical hash of an ordered specimen list.
pub fn catalog_hash(specimens: &[Specimen]) -> Result<String, FuelError> {
    stable_hash_string(&specimens)
}
