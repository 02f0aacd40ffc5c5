//! Conversion engine - resolve, validate, compute, pick display names

use std::fmt;
use serde::Serialize;
use tracing::debug;
use unitconv_core::{format_amount, Category, ConvertError};
use unitconv_units::{Scale, Unit, UnitRegistry, UNITS};

use crate::ConversionRequest;

/// A successful conversion. Both units are guaranteed to share a category.
#[derive(Debug, Clone, Serialize)]
pub struct Conversion<'r> {
    #[serde(skip)]
    pub from: &'r Unit,
    #[serde(skip)]
    pub to: &'r Unit,
    pub category: Category,
    pub input_amount: f64,
    pub output_amount: f64,
    /// Singular or plural name of the source unit, chosen by `input_amount`
    pub from_name: &'r str,
    /// Singular or plural name of the target unit, chosen by `output_amount`
    pub to_name: &'r str,
}

impl fmt::Display for Conversion<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} is {} {}",
            format_amount(self.input_amount),
            self.from_name,
            format_amount(self.output_amount),
            self.to_name
        )
    }
}

/// Converts requests against a unit registry
#[derive(Clone, Copy)]
pub struct Converter<'r> {
    registry: &'r UnitRegistry,
}

impl Converter<'static> {
    /// Converter backed by the process-wide registry
    pub fn global() -> Self {
        Converter { registry: &UNITS }
    }
}

impl Default for Converter<'static> {
    fn default() -> Self {
        Self::global()
    }
}

impl<'r> Converter<'r> {
    pub fn new(registry: &'r UnitRegistry) -> Self {
        Converter { registry }
    }

    /// Convert a parsed request.
    ///
    /// Checks run in order: both names resolve, categories match, length and
    /// weight amounts are non-negative.
    pub fn convert(&self, request: &ConversionRequest) -> Result<Conversion<'r>, ConvertError> {
        let (from, to) = match (self.registry.get(&request.from), self.registry.get(&request.to)) {
            (Some(from), Some(to)) => (from, to),
            (from, to) => {
                let err = ConvertError::UnitNotFound {
                    from: from.map(|u| u.plural.clone()),
                    to: to.map(|u| u.plural.clone()),
                };
                debug!(from = %request.from, to = %request.to, missing = ?err.missing(), "unit not found");
                return Err(err);
            }
        };

        if !from.is_compatible(to) {
            debug!(from = %from, to = %to, "incompatible categories");
            return Err(ConvertError::IncompatibleCategories {
                from: from.plural.clone(),
                to: to.plural.clone(),
                from_category: from.category,
                to_category: to.category,
            });
        }

        let amount = request.amount;
        if from.category.requires_non_negative() && amount < 0.0 {
            debug!(amount, category = %from.category, "negative magnitude");
            return Err(ConvertError::NegativeMagnitude { category: from.category });
        }

        // Length/weight go through the base unit, temperature always takes
        // both hops through Celsius. A linear unit into itself is exact.
        let output = match from.scale {
            Scale::Linear { .. } if std::ptr::eq(from, to) => amount,
            _ => from.convert_to(amount, to),
        };
        debug!(amount, output, from = %from, to = %to, "converted");

        Ok(Conversion {
            from,
            to,
            category: from.category,
            input_amount: amount,
            output_amount: output,
            from_name: from.display_name(amount),
            to_name: to.display_name(output),
        })
    }
}

/// Convert using the process-wide registry
pub fn convert(request: &ConversionRequest) -> Result<Conversion<'static>, ConvertError> {
    Converter::global().convert(request)
}
