//! unitconv - natural-language unit conversion
//!
//! ```text
//! "1 km to feet" -> parse -> ConversionRequest -> Converter -> Conversion -> render
//!                                                    |
//!                                                  UNITS
//! ```
//!
//! Every failure is a `ConvertError` value; none of them end a session.

mod convert;
mod format;
mod parse;
mod session;

pub use convert::{convert, Conversion, Converter};
pub use format::{render, render_json};
pub use parse::{parse, ConversionRequest};
pub use session::{OutputFormat, Session, SessionConfig, SessionSummary, EXIT_COMMAND, PROMPT};

pub use unitconv_core::{format_amount, Category, ConvertError, Side, UnknownUnit};
pub use unitconv_units::{Scale, Unit, UnitRegistry, UNITS};
