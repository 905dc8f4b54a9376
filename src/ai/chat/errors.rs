//! Classifies completion failures and maps them to the messages shown
//! to users.
use crate::openai::BackendError;

pub const AUTH_FAILED_MESSAGE: &str = "API key looks invalid. Double-check OPENAI_API_KEY (no quotes, no trailing characters) and restart the server.";
pub const QUOTA_EXHAUSTED_MESSAGE: &str =
    "Your OpenAI account is out of credit. Add billing or prepaid credits and try again.";
pub const GENERIC_FAILURE_MESSAGE: &str =
    "I'm having trouble right now. Please try again in a moment.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidCredential,
    QuotaExhausted,
    RateLimited,
    EmptyResponse,
    Other,
}

impl ErrorKind {
    /// Retryable failures count toward the attempt limit. Everything
    /// else ends the request on the spot.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorKind::RateLimited | ErrorKind::EmptyResponse)
    }
}

/// Map a raw backend error to its `ErrorKind`.
///
/// Order matters: OpenAI reports an exhausted quota with a 429 status,
/// so the quota code is checked before the rate limit status.
pub fn classify(err: &BackendError) -> ErrorKind {
    let (status, code) = match err {
        BackendError::Api { status, code, .. } => (Some(*status), code.as_deref()),
        BackendError::Transport(e) => (e.status().map(|s| s.as_u16()), None),
        BackendError::Decode(_) => (None, None),
    };

    if code == Some("invalid_api_key") || status == Some(401) {
        return ErrorKind::InvalidCredential;
    }
    if code == Some("insufficient_quota") {
        return ErrorKind::QuotaExhausted;
    }
    if status == Some(429) || code == Some("rate_limit_exceeded") {
        return ErrorKind::RateLimited;
    }
    ErrorKind::Other
}
