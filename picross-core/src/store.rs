//! Reads and writes runs of consecutive puzzle records inside a larger image

use tracing::debug;

use crate::codec::{RECORD_SIZE, decode_record, encode_record};
use crate::error::{Error, Result};
use crate::puzzle::Puzzle;

/// Most puzzles a single bulk insert may write
pub const MAX_INSERT: usize = 256;

/// Decode every whole record in `data`, in byte order
///
/// A trailing partial record is dropped without error.
pub fn read_puzzles(data: &[u8]) -> Result<Vec<Puzzle>> {
    let chunks = data.chunks_exact(RECORD_SIZE);
    let leftover = chunks.remainder().len();
    if leftover > 0 {
        debug!("ignoring {} trailing bytes after last whole record", leftover);
    }

    chunks.map(decode_record).collect()
}

/// Decode the records found in `image[begin..end]`
pub fn read_window(image: &[u8], begin: usize, end: usize) -> Result<Vec<Puzzle>> {
    let window = image.get(begin..end).ok_or(Error::WindowOutOfBounds {
        begin,
        end,
        len: image.len(),
    })?;

    let puzzles = read_puzzles(window)?;
    debug!(
        "read {} puzzles from window {:#x}..{:#x}",
        puzzles.len(),
        begin,
        end
    );
    Ok(puzzles)
}

/// Encode puzzles back to back
pub fn write_puzzles(puzzles: &[Puzzle]) -> Vec<u8> {
    let mut data = Vec::with_capacity(puzzles.len() * RECORD_SIZE);
    for puzzle in puzzles {
        data.extend_from_slice(&encode_record(puzzle));
    }
    data
}

/// Overwrite records in `image` starting at `offset`
///
/// The image keeps its length. Nothing is written unless the whole run fits
/// and holds at most [`MAX_INSERT`] puzzles.
pub fn insert_puzzles(image: &mut [u8], offset: usize, puzzles: &[Puzzle]) -> Result<()> {
    if puzzles.len() > MAX_INSERT {
        return Err(Error::TooManyRecords {
            count: puzzles.len(),
            max: MAX_INSERT,
        });
    }

    let len = puzzles.len() * RECORD_SIZE;
    let image_len = image.len();
    let target = offset
        .checked_add(len)
        .and_then(|end| image.get_mut(offset..end))
        .ok_or(Error::InsertOutOfBounds {
            offset,
            len,
            image_len,
        })?;

    target.copy_from_slice(&write_puzzles(puzzles));
    debug!("inserted {} puzzles at {:#x}", puzzles.len(), offset);

    Ok(())
}
