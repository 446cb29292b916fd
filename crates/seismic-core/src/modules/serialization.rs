use crate::domain::{SeismicError, SeismicResult};
use serde::Serialize;
use serde_json::{Value, json};

/// Recoverable request failures travel as `{"error": "<message>"}`.
pub fn error_payload(error: &SeismicError) -> Value {
    json!({ "error": error.message() })
}

/// Renders a request outcome, keeping the field order of the payload type.
pub fn render_outcome<T: Serialize>(
    outcome: &SeismicResult<T>,
    pretty: bool,
) -> serde_json::Result<String> {
    match outcome {
        Ok(output) => render(output, pretty),
        Err(error) => render(&error_payload(error), pretty),
    }
}

fn render<T: Serialize + ?Sized>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}
