//! Canonical JSON and YAML helpers.
//!
//! Values pass through [`serde_json::Value`], whose map is ordered by key, so
//! struct fields come out sorted regardless of declaration order.

use serde::{de::DeserializeOwned, Serialize};

use crate::errors::{ErrorInfo, FuelError};

fn serde_error(code: &str, err: impl ToString) -> FuelError {
    FuelError::Serde(ErrorInfo::new(code, err.to_string()))
}

/// Serializes a value into compact JSON bytes with sorted keys.
pub fn to_canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, FuelError> {
    let value = serde_json::to_value(value).map_err(|err| serde_error("json_serialize", err))?;
    serde_json::to_vec(&value).map_err(|err| serde_error("json_write", err))
}

/// Deserializes a value from JSON bytes.
pub fn from_json_slice<T: DeserializeOwned>(data: &[u8]) -> Result<T, FuelError> {
    serde_json::from_slice(data).map_err(|err| serde_error("json_deserialize", err))
}

/// Serializes a value into YAML.
pub fn to_yaml_string<T: Serialize>(value: &T) -> Result<String, FuelError> {
    serde_yaml::to_string(value).map_err(|err| serde_error("yaml_serialize", err))
}

/// Deserializes a YAML payload into the requested type.
pub fn from_yaml_slice<T: DeserializeOwned>(data: &[u8]) -> Result<T, FuelError> {
    serde_yaml::from_slice(data).map_err(|err| serde_error("yaml_deserialize", err))
}
