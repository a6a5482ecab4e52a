//! JSON serialization for values and configuration

use thiserror::Error;

use crate::config::Config;
use crate::value::Value;

/// Serialization error
#[derive(Error, Debug)]
pub enum SerError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SerError>;

/// Serialize a value to JSON string
pub fn to_json(value: &Value) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Serialize a value to compact JSON (no whitespace)
pub fn to_json_compact(value: &Value) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Deserialize a value from JSON string
pub fn from_json(json: &str) -> Result<Value> {
    Ok(serde_json::from_str(json)?)
}

/// Serialize a configuration to JSON string
pub fn config_to_json(config: &Config) -> Result<String> {
    Ok(serde_json::to_string(config)?)
}

/// Deserialize a configuration from JSON string
pub fn config_from_json(json: &str) -> Result<Config> {
    Ok(serde_json::from_str(json)?)
}
