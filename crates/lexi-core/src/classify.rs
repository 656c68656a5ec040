use lexi_types::ErrorKind;

use crate::error::TransportFailure;

/// A failure reduced to what the user is shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified {
    pub kind: ErrorKind,
    pub message: String,
}

/// Map a failure to its `ErrorKind`.
///
/// `online` is the connectivity observed at classification time. When it is
/// false every failure that touched the network reports `Offline`.
pub fn classify(failure: &TransportFailure, online: bool) -> Classified {
    let kind = match failure {
        TransportFailure::Rejected(_) => ErrorKind::Validation,
        _ if !online => ErrorKind::Offline,
        TransportFailure::Status(status) => status_kind(*status),
        TransportFailure::Timeout | TransportFailure::Unreachable(_) => {
            ErrorKind::NetworkUnreachable
        }
        TransportFailure::Malformed(_) => ErrorKind::MalformedResponse,
    };

    Classified {
        kind,
        message: message(kind).to_string(),
    }
}

fn status_kind(status: u16) -> ErrorKind {
    match status {
        401 => ErrorKind::Unauthorized,
        404 => ErrorKind::NotFound,
        429 => ErrorKind::RateLimited,
        _ => ErrorKind::ServerError,
    }
}

/// The single user-facing message for each kind
pub fn message(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::Validation => {
            "Please enter a word of up to 50 letters. Spaces, hyphens and apostrophes are allowed."
        }
        ErrorKind::Offline => "You appear to be offline. Check your connection and try again.",
        ErrorKind::NotFound => "Sorry, we couldn't find a definition for that word.",
        ErrorKind::RateLimited => "Too many lookups right now. Please wait a moment and try again.",
        ErrorKind::Unauthorized => "The dictionary service did not accept the configured API key.",
        ErrorKind::ServerError => {
            "The dictionary service is having trouble right now. Please try again later."
        }
        ErrorKind::NetworkUnreachable => {
            "Could not reach the dictionary service. Please try again."
        }
        ErrorKind::MalformedResponse => {
            "The dictionary service sent a response we couldn't read."
        }
    }
}
