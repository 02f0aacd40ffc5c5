//! Measurement categories

use std::fmt;
use serde::{Deserialize, Serialize};

/// A measurement family. Units only convert within the same category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Base unit: meter
    Length,
    /// Base unit: gram
    Weight,
    /// Reference scale: Celsius
    Temperature,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Length, Category::Weight, Category::Temperature];

    /// Capitalized name, as used in user-facing messages
    pub fn name(&self) -> &'static str {
        match self {
            Category::Length => "Length",
            Category::Weight => "Weight",
            Category::Temperature => "Temperature",
        }
    }

    /// Whether amounts in this category must be non-negative.
    /// Temperatures are accepted at any value, even below absolute zero.
    pub fn requires_non_negative(&self) -> bool {
        !matches!(self, Category::Temperature)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
