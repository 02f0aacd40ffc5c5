//! Per-request errors
//!
//! Every failure is recoverable at the request level: the caller renders the
//! error's `Display` text and moves on to the next line. The `Display` of each
//! variant is the exact user-facing message.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Category;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const PARSE_ERROR: &str = "PARSE_ERROR";
    pub const UNIT_NOT_FOUND: &str = "UNIT_NOT_FOUND";
    pub const INCOMPATIBLE_CATEGORIES: &str = "INCOMPATIBLE_CATEGORIES";
    pub const NEGATIVE_MAGNITUDE: &str = "NEGATIVE_MAGNITUDE";
}

/// Marker shown in place of a unit name that could not be resolved
pub const PLACEHOLDER: &str = "???";

/// Registry lookup failure
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("unknown unit: {0}")]
pub struct UnknownUnit(pub String);

/// Which side of a request failed to resolve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    From,
    To,
    Both,
}

/// Error type for a single conversion request
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConvertError {
    /// The line did not have the `<amount> <unit> <connector> <unit>` shape
    #[error("Parse error")]
    Parse { input: String },

    /// One or both unit names are unknown. Each side holds the plural display
    /// name when it did resolve.
    #[error("Conversion from {} to {} is impossible", or_placeholder(.from), or_placeholder(.to))]
    UnitNotFound {
        from: Option<String>,
        to: Option<String>,
    },

    /// Both units resolved but measure different things
    #[error("Conversion from {from} to {to} is impossible")]
    IncompatibleCategories {
        from: String,
        to: String,
        from_category: Category,
        to_category: Category,
    },

    /// Length or weight amount below zero
    #[error("{category} shouldn't be negative")]
    NegativeMagnitude { category: Category },
}

fn or_placeholder(name: &Option<String>) -> &str {
    name.as_deref().unwrap_or(PLACEHOLDER)
}

impl ConvertError {
    pub fn parse_error(input: impl Into<String>) -> Self {
        ConvertError::Parse { input: input.into() }
    }

    /// Machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            ConvertError::Parse { .. } => codes::PARSE_ERROR,
            ConvertError::UnitNotFound { .. } => codes::UNIT_NOT_FOUND,
            ConvertError::IncompatibleCategories { .. } => codes::INCOMPATIBLE_CATEGORIES,
            ConvertError::NegativeMagnitude { .. } => codes::NEGATIVE_MAGNITUDE,
        }
    }

    /// For `UnitNotFound`, the side(s) that failed to resolve
    pub fn missing(&self) -> Option<Side> {
        match self {
            ConvertError::UnitNotFound { from, to } => match (from, to) {
                (None, None) => Some(Side::Both),
                (None, Some(_)) => Some(Side::From),
                (Some(_), None) => Some(Side::To),
                (Some(_), Some(_)) => None,
            },
            _ => None,
        }
    }
}
