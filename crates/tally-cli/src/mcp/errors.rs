//! Error handling utilities for the MCP server

use rmcp::ErrorData;
use tally_core::TrackerError;

/// Converts a tracker error into an MCP error.
///
/// Mistakes on the caller's side (unknown IDs, bad input, Inbox protection)
/// become `invalid_params`; everything else is an internal error.
pub fn to_mcp_error(message: &str, error: &TrackerError) -> ErrorData {
    let text = format!("{message}: {error}");
    if error.is_user_error() {
        ErrorData::invalid_params(text, None)
    } else {
        ErrorData::internal_error(text, None)
    }
}

/// Error for a lookup that found nothing.
pub fn not_found(kind: &str, id: u64) -> ErrorData {
    ErrorData::invalid_params(format!("{kind} with ID {id} not found"), None)
}

#[cfg(test)]
mod tests {
    use rmcp::model::ErrorCode;

    use super::*;

    #[test]
    fn test_user_errors_are_invalid_params() {
        let error = to_mcp_error(
            "Failed to delete project",
            &TrackerError::InboxProtected {
                operation: "deleted",
            },
        );
        assert_eq!(error.code, ErrorCode::INVALID_PARAMS);
        assert_eq!(
            error.message,
            "Failed to delete project: The Inbox project cannot be deleted"
        );
    }

    #[test]
    fn test_store_errors_are_internal() {
        let error = to_mcp_error(
            "Failed to list projects",
            &TrackerError::Configuration {
                message: "Task join error".to_string(),
            },
        );
        assert_eq!(error.code, ErrorCode::INTERNAL_ERROR);
    }

    #[test]
    fn test_not_found_message() {
        let error = not_found("Task", 12);
        assert_eq!(error.message, "Task with ID 12 not found");
    }
}
