//! Maps raw provider failures onto [`ErrorKind`]
//!
//! | Condition                          | Kind         | Retryable |
//! |------------------------------------|--------------|-----------|
//! | HTTP 401, missing credential       | AuthError    | no        |
//! | HTTP 429                           | RateLimited  | yes       |
//! | no response, transport failure     | NetworkError | yes       |
//! | any other status, malformed body   | Unknown      | yes       |

use crate::error::{ErrorInfo, ErrorKind, ProviderError};

pub fn classify(error: &ProviderError) -> ErrorKind {
    match error {
        ProviderError::Status { status: 401, .. } | ProviderError::MissingCredential(_) => {
            ErrorKind::AuthError
        }
        ProviderError::Status { status: 429, .. } => ErrorKind::RateLimited,
        ProviderError::Transport(_) => ErrorKind::NetworkError,
        ProviderError::Status { .. }
        | ProviderError::MalformedResponse(_)
        | ProviderError::Client(_) => ErrorKind::Unknown,
    }
}

/// Longest provider detail copied into a user-facing message
const MAX_DETAIL_CHARS: usize = 120;

/// Classify and attach a message fit for the user
///
/// Response bodies stay out of the message; the orchestrator logs the full
/// error.
pub fn describe(error: &ProviderError) -> ErrorInfo {
    let kind = classify(error);
    let detail = short_detail(error);
    let message = match kind {
        ErrorKind::AuthError => format!(
            "The translation service rejected the credentials. Check the API key configuration. ({})",
            detail
        ),
        ErrorKind::RateLimited => format!(
            "The translation service is throttling requests. Wait a moment and try again. ({})",
            detail
        ),
        ErrorKind::NetworkError => {
            format!("The translation service could not be reached. ({})", detail)
        }
        ErrorKind::Unknown => format!(
            "The translation service returned an unexpected response. ({})",
            detail
        ),
    };
    ErrorInfo::new(kind, message)
}

fn short_detail(error: &ProviderError) -> String {
    let text = match error {
        ProviderError::Status { status, .. } => return format!("HTTP {}", status),
        ProviderError::Transport(text)
        | ProviderError::MalformedResponse(text)
        | ProviderError::MissingCredential(text)
        | ProviderError::Client(text) => text,
    };
    match text.char_indices().nth(MAX_DETAIL_CHARS) {
        Some((cut, _)) => format!("{}…", &text[..cut]),
        None => text.clone(),
    }
}
