//! # STL I/O
//!
//! Reads and writes [`Solid`]s in both STL encodings.
//!
//! ## Format Detection
//!
//! STL has no magic number, and binary headers are free text that often
//! begins with `solid` too. The reader therefore trusts the size first:
//!
//! 1. At least 84 bytes and `84 + 50 · count` equals the data length:
//!    binary.
//! 2. Otherwise, text starting with `solid` (any case, after whitespace):
//!    ASCII.
//! 3. Otherwise, at least 84 bytes but shorter than the header announces:
//!    [`StlError::TruncatedBinary`].
//! 4. Anything else is [`StlError::UnrecognizedFormat`].
//!
//! ## Example
//!
//! ```rust
//! use stl_mesh::{io, Solid, Triangle, Vec3};
//!
//! let solid = Solid::new("part", false, vec![
//!     Triangle::from_vertices([Vec3::ZERO, Vec3::X, Vec3::Y]),
//! ]);
//! let mut bytes = Vec::new();
//! io::write_solid(&solid, &mut bytes).unwrap();
//! assert_eq!(bytes.len(), 84 + 50);
//!
//! let back = io::read_solid(&bytes[..]).unwrap();
//! assert_eq!(back.name, "part");
//! assert!(!back.is_ascii);
//! ```

mod ascii;
mod binary;

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::error::{StlError, StlResult};
use crate::solid::Solid;

pub use ascii::{read_ascii, write_ascii};
pub use binary::{read_binary, write_binary};

/// Binary STL header size in bytes.
pub const HEADER_SIZE: usize = 80;

/// Size of one triangle in binary STL (normal, 3 vertices, attribute word).
pub const TRIANGLE_SIZE: usize = 50;

/// Header plus triangle count.
const PREAMBLE_SIZE: usize = HEADER_SIZE + 4;

/// Encoding of an STL stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Binary,
    Ascii,
}

// =============================================================================
// READING
// =============================================================================

/// Reads a complete solid from `reader`, detecting the encoding.
///
/// # Errors
///
/// Returns an error if reading fails or the data is not valid STL.
pub fn read_solid<R: Read>(mut reader: R) -> StlResult<Solid> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;

    let solid = match detect_format(&data)? {
        Format::Binary => read_binary(&data)?,
        Format::Ascii => read_ascii(&String::from_utf8_lossy(&data))?,
    };
    debug!(
        name = %solid.name,
        ascii = solid.is_ascii,
        triangles = solid.triangles.len(),
        "Read STL solid"
    );
    Ok(solid)
}

/// Reads the STL file at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or is not valid STL.
pub fn read_file<P: AsRef<Path>>(path: P) -> StlResult<Solid> {
    let path = path.as_ref();
    let solid = read_solid(BufReader::new(File::open(path)?))?;
    info!(path = %path.display(), triangles = solid.triangles.len(), "Loaded STL file");
    Ok(solid)
}

fn detect_format(data: &[u8]) -> StlResult<Format> {
    let announced = announced_len(data);
    if announced == Some(data.len() as u64) {
        return Ok(Format::Binary);
    }

    if starts_with_solid(data) {
        return Ok(Format::Ascii);
    }

    match (announced, binary::announced_count(data)) {
        (Some(len), Some(expected)) if len > data.len() as u64 => {
            let got = ((data.len() - PREAMBLE_SIZE) / TRIANGLE_SIZE) as u32;
            Err(StlError::TruncatedBinary { expected, got })
        }
        _ => Err(StlError::UnrecognizedFormat),
    }
}

/// Byte length a binary STL with the header's triangle count would have.
fn announced_len(data: &[u8]) -> Option<u64> {
    binary::announced_count(data)
        .map(|count| PREAMBLE_SIZE as u64 + TRIANGLE_SIZE as u64 * u64::from(count))
}

fn starts_with_solid(data: &[u8]) -> bool {
    let start = data
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(data.len());
    data[start..]
        .get(..5)
        .is_some_and(|word| word.eq_ignore_ascii_case(b"solid"))
}

// =============================================================================
// WRITING
// =============================================================================

/// Writes `solid` to `writer`, as ASCII if `solid.is_ascii` and binary
/// otherwise.
///
/// # Errors
///
/// Returns an error if writing fails or a binary solid has more than
/// `u32::MAX` triangles.
pub fn write_solid<W: Write>(solid: &Solid, writer: W) -> StlResult<()> {
    debug!(
        name = %solid.name,
        ascii = solid.is_ascii,
        triangles = solid.triangles.len(),
        "Writing STL solid"
    );
    if solid.is_ascii {
        write_ascii(solid, writer)
    } else {
        write_binary(solid, writer)
    }
}

/// Writes `solid` to a new file at `path`, replacing any existing file.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_file<P: AsRef<Path>>(solid: &Solid, path: P) -> StlResult<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_solid(solid, &mut writer)?;
    writer.flush()?;
    info!(path = %path.display(), triangles = solid.triangles.len(), "Saved STL file");
    Ok(())
}
