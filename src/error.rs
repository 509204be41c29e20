//! Error type for the fallible half of the [`Deque`](crate::Deque) API.
//!
//! Every operation that can fail has two spellings: a `try_*` method that
//! returns [`DequeError`], and a plain method that panics with the same
//! message. Probing an empty deque or an out-of-range index through
//! `get`/`front`/`pop_*` is not an error; those return `None`.

use thiserror::Error;

/// Failures reported by the `try_*` methods of [`Deque`](crate::Deque).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DequeError {
    /// The requested capacity does not fit in the address space.
    #[error("capacity overflow: cannot reserve {additional} more slots for a deque of length {len}")]
    CapacityOverflow { len: usize, additional: usize },

    /// A logical index fell outside `[0, len)`.
    #[error("index out of bounds: the len is {len} but the index is {index}")]
    IndexOutOfBounds { index: usize, len: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_capacity_overflow() {
        let err = DequeError::CapacityOverflow {
            len: 3,
            additional: usize::MAX,
        };
        let msg = err.to_string();
        assert!(msg.starts_with("capacity overflow"));
        assert!(msg.contains("length 3"));
    }

    #[test]
    fn test_error_display_index_out_of_bounds() {
        let err = DequeError::IndexOutOfBounds { index: 4, len: 4 };
        assert_eq!(
            err.to_string(),
            "index out of bounds: the len is 4 but the index is 4"
        );
    }
}
