//! core functionality for reading and writing the puzzles
//! of the Game Boy game "Mario's Picross"
//!
//! # Modules
//!
//! - `codec`: single 32 byte puzzle record encoding/decoding
//! - `store`: runs of records inside a larger image
//! - `rom`: ROM layout and identification
//! - `puzzle`: the decoded puzzle and its editing helpers

pub mod codec;
pub mod error;
pub mod puzzle;
pub mod rom;
pub mod store;

#[cfg(test)]
mod fixtures;

// Re-export commonly used items
pub use codec::{RECORD_SIZE, cells_to_row, decode_record, encode_record, row_to_cells};
pub use error::{Error, Result};
pub use puzzle::{COLUMNS, Grid, PLAYFIELD, Puzzle, ROWS};
pub use rom::{KNOWN_ROMS, MARIOS_PICROSS, RomIdentity, RomLayout, identify, md5_hex};
pub use store::{MAX_INSERT, insert_puzzles, read_puzzles, read_window, write_puzzles};
