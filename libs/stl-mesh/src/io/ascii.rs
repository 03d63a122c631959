//! ASCII STL encoding.
//!
//! ```text
//! solid name
//!   facet normal ni nj nk
//!     outer loop
//!       vertex v1x v1y v1z
//!       vertex v2x v2y v2z
//!       vertex v3x v3y v3z
//!     endloop
//!   endfacet
//!   ...
//! endsolid name
//! ```
//!
//! Keywords are matched case-insensitively; whitespace and line breaks
//! between tokens are free. The format has no attribute word, so facets
//! read from ASCII carry `0`.

use std::io::Write;

use crate::core::vec3::Vec3;
use crate::error::{StlError, StlResult};
use crate::solid::Solid;
use crate::triangle::Triangle;

// =============================================================================
// TOKEN CURSOR
// =============================================================================

/// Whitespace-separated word with its 1-based line number.
#[derive(Debug, Clone, Copy)]
struct Token<'a> {
    line: usize,
    text: &'a str,
}

/// Forward cursor over the tokens of an ASCII STL body.
struct TokenCursor<'a> {
    tokens: Vec<Token<'a>>,
    pos: usize,
}

impl<'a> TokenCursor<'a> {
    fn new<I: Iterator<Item = (usize, &'a str)>>(lines: I) -> Self {
        let tokens = lines
            .flat_map(|(line, text)| {
                text.split_ascii_whitespace()
                    .map(move |text| Token { line, text })
            })
            .collect();
        Self { tokens, pos: 0 }
    }

    fn peek(&self) -> Option<Token<'a>> {
        self.tokens.get(self.pos).copied()
    }

    fn advance(&mut self, expected: &str) -> StlResult<Token<'a>> {
        let token = self.peek().ok_or_else(|| StlError::eof(expected))?;
        self.pos += 1;
        Ok(token)
    }

    fn expect_keyword(&mut self, keyword: &str) -> StlResult<()> {
        let expected = format!("'{keyword}'");
        let token = self.advance(&expected)?;
        if token.text.eq_ignore_ascii_case(keyword) {
            Ok(())
        } else {
            Err(StlError::unexpected(token.line, expected, token.text))
        }
    }

    fn number(&mut self) -> StlResult<f64> {
        let token = self.advance("number")?;
        token.text.parse().map_err(|_| StlError::InvalidNumber {
            line: token.line,
            token: token.text.to_string(),
        })
    }

    fn vector(&mut self) -> StlResult<Vec3> {
        Ok(Vec3::new(self.number()?, self.number()?, self.number()?))
    }
}

// =============================================================================
// READING
// =============================================================================

/// Parses an ASCII STL document.
///
/// The name is the rest of the `solid` line. Anything after `endsolid` is
/// ignored.
///
/// # Errors
///
/// Returns the first syntax error with its line number.
///
/// # Example
///
/// ```rust
/// use stl_mesh::io::read_ascii;
///
/// let solid = read_ascii("solid tri
/// facet normal 0 0 1
///   outer loop
///     vertex 0 0 0
///     vertex 1 0 0
///     vertex 0 1 0
///   endloop
/// endfacet
/// endsolid tri
/// ").unwrap();
/// assert_eq!(solid.name, "tri");
/// assert_eq!(solid.triangles.len(), 1);
/// ```
pub fn read_ascii(text: &str) -> StlResult<Solid> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .skip_while(|(_, line)| line.trim().is_empty());

    let (line_no, header) = lines.next().ok_or_else(|| StlError::eof("'solid'"))?;
    let header = header.trim_start();
    if !header.get(..5).is_some_and(|w| w.eq_ignore_ascii_case("solid")) {
        let found = header.split_ascii_whitespace().next().unwrap_or_default();
        return Err(StlError::unexpected(line_no, "'solid'", found));
    }
    let name = header[5..].trim().to_string();

    let mut cursor = TokenCursor::new(lines);
    let mut triangles = Vec::new();
    loop {
        let token = cursor.advance("'facet' or 'endsolid'")?;
        if token.text.eq_ignore_ascii_case("endsolid") {
            break;
        }
        if !token.text.eq_ignore_ascii_case("facet") {
            return Err(StlError::unexpected(
                token.line,
                "'facet' or 'endsolid'",
                token.text,
            ));
        }
        triangles.push(read_facet(&mut cursor)?);
    }

    Ok(Solid::new(name, true, triangles))
}

/// Parses one facet after its `facet` keyword.
fn read_facet(cursor: &mut TokenCursor<'_>) -> StlResult<Triangle> {
    cursor.expect_keyword("normal")?;
    let normal = cursor.vector()?;
    cursor.expect_keyword("outer")?;
    cursor.expect_keyword("loop")?;
    let mut vertices = [Vec3::ZERO; 3];
    for v in &mut vertices {
        cursor.expect_keyword("vertex")?;
        *v = cursor.vector()?;
    }
    cursor.expect_keyword("endloop")?;
    cursor.expect_keyword("endfacet")?;
    Ok(Triangle::new(normal, vertices, 0))
}

// =============================================================================
// WRITING
// =============================================================================

/// Encodes `solid` as ASCII STL.
///
/// Numbers are written in the shortest exponent form that reads back to the
/// same `f64`. Attribute words are dropped.
///
/// # Errors
///
/// Returns an I/O error from `writer`.
pub fn write_ascii<W: Write>(solid: &Solid, mut writer: W) -> StlResult<()> {
    writeln!(writer, "solid {}", solid.name)?;
    for t in &solid.triangles {
        let n = t.normal;
        writeln!(writer, "  facet normal {:e} {:e} {:e}", n.x, n.y, n.z)?;
        writeln!(writer, "    outer loop")?;
        for v in &t.vertices {
            writeln!(writer, "      vertex {:e} {:e} {:e}", v.x, v.y, v.z)?;
        }
        writeln!(writer, "    endloop")?;
        writeln!(writer, "  endfacet")?;
    }
    writeln!(writer, "endsolid {}", solid.name)?;
    Ok(())
}
