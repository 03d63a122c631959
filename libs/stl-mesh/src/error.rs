//! # Error Types
//!
//! Errors raised while reading or writing STL data.
//!
//! ## Error Policy
//!
//! - Geometry and validation are total functions and never return errors
//! - Malformed input is reported, never silently skipped
//! - Errors carry the position (line or triangle count) needed to find the
//!   offending data

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur during STL I/O.
///
/// ## Example
///
/// ```rust
/// use stl_mesh::{io, StlError};
///
/// match io::read_solid(&b"not an stl file"[..]) {
///     Ok(solid) => println!("{} triangles", solid.triangle_count()),
///     Err(StlError::UnrecognizedFormat) => eprintln!("neither ASCII nor binary STL"),
///     Err(e) => eprintln!("other error: {e}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum StlError {
    /// Underlying reader or writer failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Data is neither a size-consistent binary STL nor ASCII text
    /// starting with `solid`.
    #[error("unrecognized STL data: neither binary nor ASCII format")]
    UnrecognizedFormat,

    /// Binary data ended before the announced number of triangles.
    #[error("truncated binary STL: header announces {expected} triangles, data holds {got}")]
    TruncatedBinary {
        /// Triangle count from the header.
        expected: u32,
        /// Complete triangles actually present.
        got: u32,
    },

    /// Binary STL stores the triangle count as `u32`.
    #[error("too many triangles for binary STL: {count}")]
    TooManyTriangles {
        /// Number of triangles in the solid.
        count: usize,
    },

    /// ASCII data ended in the middle of a solid.
    #[error("unexpected end of ASCII STL, expected {expected}")]
    UnexpectedEof {
        /// What the parser was looking for.
        expected: String,
    },

    /// ASCII keyword mismatch.
    #[error("line {line}: expected {expected}, found '{found}'")]
    UnexpectedToken {
        /// 1-based line number.
        line: usize,
        /// What the parser was looking for.
        expected: String,
        /// The token actually present.
        found: String,
    },

    /// ASCII coordinate that does not parse as a float.
    #[error("line {line}: invalid number '{token}'")]
    InvalidNumber {
        /// 1-based line number.
        line: usize,
        /// The offending token.
        token: String,
    },
}

impl StlError {
    /// Creates an unexpected-token error.
    pub fn unexpected(line: usize, expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::UnexpectedToken {
            line,
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Creates an unexpected end-of-input error.
    pub fn eof(expected: impl Into<String>) -> Self {
        Self::UnexpectedEof {
            expected: expected.into(),
        }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for STL I/O.
pub type StlResult<T> = Result<T, StlError>;

// =============================================================================
// TESTS
// =============================================================================
