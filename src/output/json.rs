//! JSON output formatting for nimbus.

use serde_json::json;

use crate::command::CommandOutput;
use crate::error::NimbusError;

/// Format the result of a command as JSON.
///
/// # Errors
///
/// Returns `NimbusError::Json` if serialization fails.
pub fn format_output_json(output: &CommandOutput) -> Result<String, NimbusError> {
    Ok(serde_json::to_string(output)?)
}

/// Format an error as a JSON object.
pub fn format_error_json(error: &NimbusError) -> String {
    let kind = match error {
        NimbusError::InvalidCommand(_) => "invalid_command",
        NimbusError::InvalidArgument(_) => "invalid_argument",
        NimbusError::Storage { .. } => "storage",
        NimbusError::Config(_) => "config",
        NimbusError::Io(_) => "io",
        NimbusError::Json(_) => "json",
    };
    json!({ "error": kind, "message": error.to_string() }).to_string()
}

/// Format a notice such as the greeting.
pub fn format_notice_json(message: &str) -> String {
    json!({ "notice": message }).to_string()
}
