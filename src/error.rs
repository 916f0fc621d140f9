/// A parse failure: what went wrong and where.
///
/// `position` is a 0-based byte offset into the input. Failures are ordinary
/// values — every parser in this crate returns `Result<_, ParseError>` and
/// no public entry point panics on malformed input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} at offset {position}")]
pub struct ParseError {
    /// Human-readable description of the failure.
    pub message: String,
    /// Byte offset into the input where the failure was detected.
    pub position: usize,
}

impl ParseError {
    pub(crate) fn new(message: impl Into<String>, position: usize) -> Self {
        Self {
            message: message.into(),
            position,
        }
    }

    /// Of two failed alternatives, keep the one that got further.
    ///
    /// Alternations report the deepest failure so the message points near
    /// the true problem rather than at the first branch that gave up. Ties
    /// keep `self` (earlier branches win on equal depth).
    pub(crate) fn furthest(self, other: ParseError) -> ParseError {
        if other.position > self.position {
            other
        } else {
            self
        }
    }
}
