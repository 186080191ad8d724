//! Errors from the text generation call

use std::fmt;

/// Errors that can occur while generating a reply
///
/// None of these reach the visitor directly; the assistant converts every
/// variant into a friendly transcript message.
#[derive(Debug)]
pub enum AssistantError {
    /// No API key configured
    NotConfigured,
    /// Transport failure (DNS, TLS, connection reset, ...)
    Network(String),
    /// Non-success status from the service
    Api { status: u16, message: String },
    /// Body did not have the expected shape
    InvalidResponse(String),
    /// Service answered without any text
    EmptyResponse,
}

impl fmt::Display for AssistantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotConfigured => write!(f, "Assistant not configured (API key missing)"),
            Self::Network(msg) => write!(f, "Network error: {}", msg),
            Self::Api { status, message } => write!(f, "API error ({}): {}", status, message),
            Self::InvalidResponse(msg) => write!(f, "Invalid response: {}", msg),
            Self::EmptyResponse => write!(f, "Response contained no text"),
        }
    }
}

impl std::error::Error for AssistantError {}
