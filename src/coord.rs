//! Vertex notation ("D4", "pass") used by GTP and the demo.
//!
//! Columns are letters A..Z skipping I, rows count up from 1 at the bottom
//! edge. Row 1 therefore maps to the last row of the grid.

use thiserror::Error;

use crate::board::Point;
use crate::constants::MAX_GTP_SIZE;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordError {
    #[error("invalid coordinate: {0}")]
    Invalid(String),
    #[error("coordinate {0} is off the board")]
    OffBoard(String),
}

/// Column letter for a zero-based column, skipping 'I'.
pub fn column_letter(col: usize) -> Option<char> {
    if col >= MAX_GTP_SIZE {
        return None;
    }
    let mut c = b'A' + col as u8;
    if c >= b'I' {
        c += 1;
    }
    Some(c as char)
}

fn column_index(letter: u8) -> Option<usize> {
    let c = letter.to_ascii_uppercase();
    match c {
        b'A'..=b'H' => Some((c - b'A') as usize),
        b'J'..=b'Z' => Some((c - b'A') as usize - 1),
        _ => None,
    }
}

/// Parse a vertex. `Ok(None)` is a pass.
pub fn parse_vertex(s: &str, size: usize) -> Result<Option<Point>, CoordError> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("pass") {
        return Ok(None);
    }

    let bytes = s.as_bytes();
    if bytes.len() < 2 || !bytes[1..].iter().all(u8::is_ascii_digit) {
        return Err(CoordError::Invalid(s.to_string()));
    }
    let col = column_index(bytes[0]).ok_or_else(|| CoordError::Invalid(s.to_string()))?;
    let row_number: usize = s[1..]
        .parse()
        .map_err(|_| CoordError::Invalid(s.to_string()))?;

    if row_number == 0 || row_number > size || col >= size {
        return Err(CoordError::OffBoard(s.to_string()));
    }
    Ok(Some((size - row_number) * size + col))
}

/// Format a point (or a pass) as a vertex.
pub fn vertex_string(pt: Option<Point>, size: usize) -> String {
    let Some(pt) = pt else {
        return "pass".into();
    };
    let row = pt / size;
    let col = pt % size;
    match column_letter(col) {
        Some(c) => format!("{c}{}", size - row),
        None => pt.to_string(),
    }
}
