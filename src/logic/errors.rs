use anyhow::Error;

/// Short, user-facing form of an error: the deepest cause in the chain.
///
/// Context layers are for the debug log; the toast shows what actually broke.
pub fn format_error_message(error: &Error) -> String {
    error
        .chain()
        .last()
        .map(|cause| cause.to_string())
        .unwrap_or_else(|| error.to_string())
}

/// Full error chain on one line, for the debug log
pub fn format_error_chain(error: &Error) -> String {
    format!("{:#}", error)
}
