use thiserror::Error;

/// Every way a single prediction attempt can end without a result.
///
/// `Display` is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictError {
    /// Local pre-flight check failed, nothing was sent
    #[error("{0}")]
    Validation(&'static str),

    /// Connection refused, DNS, timeout and the like
    #[error("{0}")]
    Transport(String),

    /// Body was not JSON
    #[error("Server returned non-JSON response: {body}")]
    Protocol { body: String },

    /// Non-success status; carries the server's `error` field when present
    #[error("{}", application_message(.status, .message))]
    Application { status: u16, message: Option<String> },

    /// Success status but the body was `null`, `[]` or `[null]`
    #[error("Server returned an empty result.")]
    EmptyResult,
}

fn application_message(status: &u16, message: &Option<String>) -> String {
    match message {
        Some(m) => m.clone(),
        None => format!("Server error {}", status),
    }
}
