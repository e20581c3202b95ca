//! Packs and unpacks single puzzle records
//!
//! Layout (32 bytes, big endian):
//! `[row_1(2) | row_2(2) | ... | row_15(2) | width(1) | height(1)]`
//!
//! Within a row, bit 15 is column 0 and bit 0 is column 15.

use crate::error::{Error, Result};
use crate::puzzle::{COLUMNS, Puzzle, ROWS};

/// Size of one record on disk
pub const RECORD_SIZE: usize = ROWS * 2 + 2;

/// Offset of the width byte inside a record
const WIDTH_OFFSET: usize = ROWS * 2;

/// Offset of the height byte inside a record
const HEIGHT_OFFSET: usize = WIDTH_OFFSET + 1;

/// Expands a row bitmask into cells, MSB first
pub fn row_to_cells(bits: u16) -> [bool; COLUMNS] {
    std::array::from_fn(|col| (bits >> (15 - col)) & 1 != 0)
}

/// Packs cells into a row bitmask, column 0 becomes the MSB
pub fn cells_to_row(cells: &[bool; COLUMNS]) -> u16 {
    cells
        .iter()
        .enumerate()
        .filter(|&(_, &filled)| filled)
        .fold(0u16, |bits, (col, _)| bits | (1 << (15 - col)))
}

/// Decode one record from the start of `bytes`
///
/// Anything past the first [`RECORD_SIZE`] bytes is ignored.
pub fn decode_record(bytes: &[u8]) -> Result<Puzzle> {
    if bytes.len() < RECORD_SIZE {
        return Err(Error::TruncatedRecord {
            expected: RECORD_SIZE,
            actual: bytes.len(),
        });
    }

    let grid = std::array::from_fn(|row| {
        let bits = u16::from_be_bytes([bytes[row * 2], bytes[row * 2 + 1]]);
        row_to_cells(bits)
    });

    Ok(Puzzle {
        width: bytes[WIDTH_OFFSET],
        height: bytes[HEIGHT_OFFSET],
        grid,
    })
}

/// Encode a puzzle into its 32 byte record
pub fn encode_record(puzzle: &Puzzle) -> [u8; RECORD_SIZE] {
    let mut record = [0u8; RECORD_SIZE];

    for (row, cells) in puzzle.grid.iter().enumerate() {
        record[row * 2..row * 2 + 2].copy_from_slice(&cells_to_row(cells).to_be_bytes());
    }
    record[WIDTH_OFFSET] = puzzle.width;
    record[HEIGHT_OFFSET] = puzzle.height;

    record
}
