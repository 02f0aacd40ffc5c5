//! Result rendering - one output line per request

use serde_json::json;
use unitconv_core::ConvertError;

use crate::Conversion;

/// Render an outcome as the user-facing sentence or error message
pub fn render(outcome: &Result<Conversion<'_>, ConvertError>) -> String {
    match outcome {
        Ok(conversion) => conversion.to_string(),
        Err(err) => err.to_string(),
    }
}

/// Render an outcome as a single-line JSON object
pub fn render_json(outcome: &Result<Conversion<'_>, ConvertError>) -> String {
    let value = match outcome {
        Ok(conversion) => json!({
            "ok": true,
            "result": conversion,
            "message": conversion.to_string(),
        }),
        Err(err) => json!({
            "ok": false,
            "code": err.code(),
            "error": err,
            "message": err.to_string(),
        }),
    };
    value.to_string()
}
