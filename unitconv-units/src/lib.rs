//! unitconv Units - unit catalog
//!
//! Categories:
//! - Length (m, km, cm, mm, mi, yd, ft, in), base unit meter
//! - Weight (g, kg, mg, lb, oz), base unit gram
//! - Temperature (Celsius, Fahrenheit, Kelvin), reference scale Celsius

mod unit;
mod units;

pub use unit::{Scale, Unit};
pub use units::{UnitRegistry, UNITS};
