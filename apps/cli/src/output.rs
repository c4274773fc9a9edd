use serde_json::{json, Value};
use sinorm_quantity::{Error, NormalizedQuantity};

use crate::args::OutputFormat;

/// Renders the stdout line for one successful input.
pub fn success_line(
    format: OutputFormat,
    input: &str,
    quantity: Option<&NormalizedQuantity>,
) -> String {
    let canonical = quantity.map(ToString::to_string).unwrap_or_default();
    match format {
        OutputFormat::Text => canonical,
        OutputFormat::Json => {
            let mut record = json!({
                "input": input,
                "canonical": canonical,
            });
            if let (Some(q), Value::Object(map)) = (quantity, &mut record) {
                map.insert("significand".into(), json!(q.significand()));
                map.insert("exponent".into(), json!(q.exponent()));
                map.insert("units".into(), json!(q.units()));
                map.insert("value".into(), json!(q.value()));
            }
            record.to_string()
        }
    }
}

/// Renders the line for one failed input, or `None` when text errors go to
/// stderr only.
pub fn failure_line(format: OutputFormat, input: &str, error: &Error) -> Option<String> {
    match format {
        OutputFormat::Text => None,
        OutputFormat::Json => Some(
            json!({
                "input": input,
                "error": error.to_string(),
            })
            .to_string(),
        ),
    }
}
