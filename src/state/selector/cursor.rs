//! Cursor movement over a visible item list

use thiserror::Error;

/// Navigation policy for a selector cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Navigation {
    /// Wraps at both ends (carousel)
    #[default]
    Circular,
    /// Stops at the first and last item (stepper)
    Clamped,
}

/// Returned by a circular jump to an index outside the visible items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("index {index} is out of range for {len} visible items")]
pub struct OutOfRangeError {
    pub index: isize,
    pub len: usize,
}

impl Navigation {
    /// Cursor after moving forward. Unchanged when `len` is zero.
    pub fn next(self, cursor: usize, len: usize) -> usize {
        if len == 0 {
            return cursor;
        }
        match self {
            Self::Circular => (cursor + 1) % len,
            Self::Clamped => (cursor + 1).min(len - 1),
        }
    }

    /// Cursor after moving backward. Unchanged when `len` is zero.
    pub fn prev(self, cursor: usize, len: usize) -> usize {
        if len == 0 {
            return cursor;
        }
        match self {
            Self::Circular => (cursor % len + len - 1) % len,
            Self::Clamped => cursor.saturating_sub(1).min(len - 1),
        }
    }

    /// Cursor after jumping to `index`.
    ///
    /// Circular navigation rejects indices outside `0..len`; clamped
    /// navigation pulls them into range. Both are no-ops when `len` is zero.
    pub fn jump_to(self, cursor: usize, index: isize, len: usize) -> Result<usize, OutOfRangeError> {
        if len == 0 {
            return Ok(cursor);
        }
        match self {
            Self::Circular => usize::try_from(index)
                .ok()
                .filter(|i| *i < len)
                .ok_or(OutOfRangeError { index, len }),
            Self::Clamped => Ok(usize::try_from(index).unwrap_or(0).min(len - 1)),
        }
    }
}
