//! unitconv Core - shared types for the conversion engine
//!
//! - `Category`: the closed set of measurement families
//! - `ConvertError` / `UnknownUnit`: per-request failures, never fatal
//! - `format_amount`: the fixed decimal rendering used for every amount

mod amount;
mod category;
pub mod error;

pub use amount::format_amount;
pub use category::Category;
pub use error::{codes, ConvertError, Side, UnknownUnit, PLACEHOLDER};
