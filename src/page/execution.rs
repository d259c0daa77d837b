//! Run output, formatted like a shell session.

use super::PageError;
use crate::models::CompileResponse;

pub const COMMAND_LINE: &str = "$ go run main.go";

/// Shown while a run is in flight.
pub const COMPILING_TEXT: &str = "$ go run main.go\nCompiling...";

pub const RUN_FAILURE: &str = "Failed to reach the Go playground. Please try again.";

/// Result panel text for a playground response. Errors take precedence
/// over events; events are printed in order, one message per line.
pub fn render_compile_result(response: &CompileResponse) -> String {
    if !response.errors.is_empty() {
        return format!("{}\nError: {}", COMMAND_LINE, response.errors);
    }

    let output = response
        .events()
        .iter()
        .map(|event| event.message.as_str())
        .collect::<Vec<_>>()
        .join("\n");
    format!("{}\n{}", COMMAND_LINE, output)
}

/// Result panel text when the playground could not be reached at all.
pub fn render_run_failure(err: &PageError) -> String {
    tracing::warn!(error = %err, "run failed");
    format!("{}\nError: {}", COMMAND_LINE, RUN_FAILURE)
}
