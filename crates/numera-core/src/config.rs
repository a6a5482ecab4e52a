//! Runtime configuration

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MathError;

/// Default numeric representation, used when coercing non-numeric input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberMode {
    #[default]
    Number,
    BigNumber,
}

impl FromStr for NumberMode {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, MathError> {
        match s {
            "number" => Ok(NumberMode::Number),
            "bignumber" => Ok(NumberMode::BigNumber),
            other => Err(MathError::InvalidConfig(other.to_string())),
        }
    }
}

/// Configuration snapshot handed to operation factories at construction
/// time. Read-only afterwards; operations capture what they need from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub number: NumberMode,
}

impl Config {
    pub fn with_number(mode: NumberMode) -> Self {
        Config { number: mode }
    }
}
