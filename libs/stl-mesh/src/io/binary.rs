//! Binary STL encoding.
//!
//! ```text
//! UINT8[80]    header (free text, the solid name up to the first NUL)
//! UINT32       number of triangles
//! foreach triangle
//!     REAL32[3]  normal
//!     REAL32[3]  vertex 1
//!     REAL32[3]  vertex 2
//!     REAL32[3]  vertex 3
//!     UINT16     attribute word
//! end
//! ```
//!
//! All values are little-endian.

use std::io::Write;

use crate::core::vec3::Vec3;
use crate::error::{StlError, StlResult};
use crate::solid::Solid;
use crate::triangle::Triangle;

use super::{HEADER_SIZE, PREAMBLE_SIZE, TRIANGLE_SIZE};

/// Triangle count stored after the header, if the data is long enough.
pub(super) fn announced_count(data: &[u8]) -> Option<u32> {
    let bytes = data.get(HEADER_SIZE..PREAMBLE_SIZE)?;
    Some(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

/// Decodes a binary STL held in memory.
///
/// Bytes after the announced triangles are ignored.
///
/// # Errors
///
/// [`StlError::UnrecognizedFormat`] if the data is shorter than the header,
/// [`StlError::TruncatedBinary`] if it holds fewer triangles than announced.
pub fn read_binary(data: &[u8]) -> StlResult<Solid> {
    let count = announced_count(data).ok_or(StlError::UnrecognizedFormat)?;
    let name = header_name(&data[..HEADER_SIZE]);

    let body = &data[PREAMBLE_SIZE..];
    let available = body.len() / TRIANGLE_SIZE;
    if available < count as usize {
        return Err(StlError::TruncatedBinary {
            expected: count,
            got: available as u32,
        });
    }

    let triangles = body
        .chunks_exact(TRIANGLE_SIZE)
        .take(count as usize)
        .map(decode_triangle)
        .collect();

    Ok(Solid::new(name, false, triangles))
}

fn header_name(header: &[u8]) -> String {
    let end = header.iter().position(|&b| b == 0).unwrap_or(header.len());
    String::from_utf8_lossy(&header[..end]).trim().to_string()
}

fn decode_triangle(record: &[u8]) -> Triangle {
    let vec = |offset: usize| {
        let f = |i: usize| {
            let at = offset + i * 4;
            f64::from(f32::from_le_bytes([
                record[at],
                record[at + 1],
                record[at + 2],
                record[at + 3],
            ]))
        };
        Vec3::new(f(0), f(1), f(2))
    };
    Triangle::new(
        vec(0),
        [vec(12), vec(24), vec(36)],
        u16::from_le_bytes([record[48], record[49]]),
    )
}

/// Encodes `solid` as binary STL.
///
/// The name is truncated to 80 bytes and NUL-padded. Coordinates are
/// narrowed to `f32`.
///
/// # Errors
///
/// [`StlError::TooManyTriangles`] if the count does not fit in `u32`, or an
/// I/O error from `writer`.
pub fn write_binary<W: Write>(solid: &Solid, mut writer: W) -> StlResult<()> {
    let count = u32::try_from(solid.triangles.len()).map_err(|_| StlError::TooManyTriangles {
        count: solid.triangles.len(),
    })?;

    let mut header = [0u8; HEADER_SIZE];
    let name = solid.name.as_bytes();
    let len = name.len().min(HEADER_SIZE);
    header[..len].copy_from_slice(&name[..len]);
    writer.write_all(&header)?;
    writer.write_all(&count.to_le_bytes())?;

    let mut record = [0u8; TRIANGLE_SIZE];
    for triangle in &solid.triangles {
        encode_triangle(triangle, &mut record);
        writer.write_all(&record)?;
    }
    Ok(())
}

#[allow(clippy::cast_possible_truncation)]
fn encode_triangle(triangle: &Triangle, record: &mut [u8; TRIANGLE_SIZE]) {
    let vectors = [
        triangle.normal,
        triangle.vertices[0],
        triangle.vertices[1],
        triangle.vertices[2],
    ];
    for (i, v) in vectors.iter().enumerate() {
        for (j, c) in v.to_array().into_iter().enumerate() {
            let at = i * 12 + j * 4;
            // STL stores single precision
            record[at..at + 4].copy_from_slice(&(c as f32).to_le_bytes());
        }
    }
    record[48..50].copy_from_slice(&triangle.attributes.to_le_bytes());
}
