//! Mapping of non-success HTTP responses onto [`ProviderError`].
//!
//! Providers report context-window overflow as a plain 400 with a message in
//! the body, so the body text decides whether the fault is retryable by
//! truncation.

use skilleval_core::error::ProviderError;

/// Whether an error message describes a context-window overflow.
pub fn is_context_overflow_message(message: &str) -> bool {
    let lower = message.to_lowercase();
    lower.contains("context length")
        || lower.contains("context_length_exceeded")
        || lower.contains("context window")
        || lower.contains("maximum context")
        || (lower.contains("maximum") && lower.contains("token"))
        || lower.contains("prompt is too long")
}

/// Classify a non-200 response.
pub fn classify_status(status: u16, body: String) -> ProviderError {
    match status {
        429 => ProviderError::RateLimited {
            retry_after_secs: 5,
        },
        401 | 403 => ProviderError::AuthenticationFailed(
            "Invalid API key or insufficient permissions".into(),
        ),
        404 => ProviderError::ModelNotFound(body),
        400 | 413 if is_context_overflow_message(&body) => {
            ProviderError::ContextLengthExceeded(body)
        }
        _ => ProviderError::ApiError {
            status_code: status,
            message: body,
        },
    }
}
