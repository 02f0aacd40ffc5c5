//! Request parsing - extract "<amount> <unit> <connector> <unit>" from free text

use std::sync::LazyLock;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;
use unitconv_core::ConvertError;

/// Amount, first unit phrase, connector word ending in "to"/"in", second unit phrase.
///
/// Unit phrases are greedy and may contain spaces, so "degree celsius" is a
/// single phrase. Because of the greediness the split happens at the LAST
/// connector that still leaves a non-empty second phrase: "1 km in to m"
/// reads as `km in` -> `m`.
static REQUEST_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(-?[0-9]+(?:\.[0-9]+)?) ([a-z0-9_ ]+) (?:[a-z0-9_]*to|[a-z0-9_]*in) ([a-z0-9_ ]+)")
        .expect("request pattern is valid")
});

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub amount: f64,
    /// Source unit phrase, lowercase and trimmed
    pub from: String,
    /// Target unit phrase, lowercase and trimmed
    pub to: String,
}

impl ConversionRequest {
    pub fn new(amount: f64, from: impl Into<String>, to: impl Into<String>) -> Self {
        ConversionRequest {
            amount,
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Parse a request line like "1 km to feet" or "15 degrees celsius in df"
pub fn parse(line: &str) -> Result<ConversionRequest, ConvertError> {
    let normalized = line.to_lowercase();

    let caps = REQUEST_PATTERN
        .captures(&normalized)
        .ok_or_else(|| ConvertError::parse_error(line))?;

    let amount: f64 = caps[1]
        .parse()
        .map_err(|_| ConvertError::parse_error(line))?;

    let request = ConversionRequest::new(amount, caps[2].trim(), caps[3].trim());
    debug!(amount = request.amount, from = %request.from, to = %request.to, "parsed request");
    Ok(request)
}
