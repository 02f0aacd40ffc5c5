//! Unit representation with conversion rules

use std::fmt;
use serde::{Deserialize, Serialize};
use unitconv_core::Category;

/// How a unit maps onto its category's base unit (meter, gram) or
/// reference scale (Celsius).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Scale {
    /// `base = value * factor`
    Linear { factor: f64 },
    /// `reference = (value - zero) * num / den`
    /// and back: `value = reference * (den / num) + zero`
    Affine { zero: f64, num: f64, den: f64 },
}

impl Scale {
    /// Convert a value in this unit to the base/reference scale
    pub fn to_base(&self, value: f64) -> f64 {
        match *self {
            Scale::Linear { factor } => value * factor,
            Scale::Affine { zero, num, den } => (value - zero) * num / den,
        }
    }

    /// Convert a value on the base/reference scale to this unit
    pub fn from_base(&self, base: f64) -> f64 {
        match *self {
            Scale::Linear { factor } => base / factor,
            Scale::Affine { zero, num, den } => base * (den / num) + zero,
        }
    }
}

/// A unit of measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    /// Short symbol (e.g., "km", "lb", "c")
    pub symbol: String,
    /// Display name for exactly one (e.g., "kilometer", "degree Celsius")
    pub singular: String,
    /// Display name for any other amount (e.g., "kilometers", "degrees Celsius")
    pub plural: String,
    /// Every recognized spelling, lowercase, symbol first
    pub names: Vec<String>,
    pub category: Category,
    pub scale: Scale,
}

impl Unit {
    /// Create a proportional unit. Symbol and both display names are
    /// registered as aliases.
    pub fn linear(symbol: &str, singular: &str, plural: &str, factor: f64, category: Category) -> Self {
        Unit {
            symbol: symbol.to_string(),
            singular: singular.to_string(),
            plural: plural.to_string(),
            names: [symbol, singular, plural].iter().map(|n| n.to_lowercase()).collect(),
            category,
            scale: Scale::Linear { factor },
        }
    }

    /// Create a temperature unit with an affine mapping onto Celsius
    pub fn temperature(symbol: &str, singular: &str, plural: &str, zero: f64, num: f64, den: f64) -> Self {
        Unit {
            symbol: symbol.to_string(),
            singular: singular.to_string(),
            plural: plural.to_string(),
            names: [symbol, singular, plural].iter().map(|n| n.to_lowercase()).collect(),
            category: Category::Temperature,
            scale: Scale::Affine { zero, num, den },
        }
    }

    /// Builder: add extra aliases
    pub fn with_aliases(mut self, aliases: &[&str]) -> Self {
        self.names.extend(aliases.iter().map(|a| a.to_lowercase()));
        self
    }

    /// Singular name when the amount is exactly one, plural otherwise
    pub fn display_name(&self, amount: f64) -> &str {
        if amount == 1.0 {
            &self.singular
        } else {
            &self.plural
        }
    }

    /// Check if two units can be converted into each other
    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.category == other.category
    }

    /// Convert a value in this unit into `target`. Categories are not checked.
    pub fn convert_to(&self, value: f64, target: &Unit) -> f64 {
        target.scale.from_base(self.scale.to_base(value))
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}
