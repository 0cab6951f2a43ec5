//! Message window trimming.
//!
//! Bounds the provider-side thread before every model call: the first
//! message is always kept, followed by the most recent three or four.

/// Trim a message window.
///
/// Windows of three or fewer messages are returned unchanged. Longer ones
/// become `[first] + last 3` when the length is even and `[first] + last 4`
/// when it is odd. Relative order is preserved.
pub fn trim_messages<T: Clone>(messages: &[T]) -> Vec<T> {
    let len = messages.len();
    if len <= 3 {
        return messages.to_vec();
    }

    let keep = if len % 2 == 0 { 3 } else { 4 };
    let mut trimmed = Vec::with_capacity(keep + 1);
    trimmed.push(messages[0].clone());
    trimmed.extend_from_slice(&messages[len - keep..]);
    trimmed
}
