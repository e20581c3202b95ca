//! Where the puzzles live in the Mario's Picross ROM, and how to recognize it

use md5::{Digest, Md5};
use tracing::debug;

use crate::codec::RECORD_SIZE;
use crate::error::{Error, Result};
use crate::puzzle::Puzzle;
use crate::store::{self, MAX_INSERT};

/// Offsets of the puzzle table inside a ROM image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RomLayout {
    /// First byte of the puzzle table
    pub puzzles_begin: usize,
    /// One past the last byte of the puzzle table
    pub puzzles_end: usize,
    /// Where bulk inserts start; skips the tutorial puzzle at record 0
    pub insert_offset: usize,
}

/// Mario's Picross (Game Boy)
///
/// Addresses from Killa B's level data notes.
pub const MARIOS_PICROSS: RomLayout = RomLayout {
    puzzles_begin: 0x92b0,
    puzzles_end: 0xb2d0,
    insert_offset: 0x92b0 + RECORD_SIZE,
};

impl RomLayout {
    /// Number of whole records in the puzzle table
    pub fn record_count(&self) -> usize {
        self.puzzles_end.saturating_sub(self.puzzles_begin) / RECORD_SIZE
    }

    /// All puzzles of the table, tutorial included
    pub fn read_puzzles(&self, rom: &[u8]) -> Result<Vec<Puzzle>> {
        store::read_window(rom, self.puzzles_begin, self.puzzles_end)
    }

    /// Writes puzzles over the table, starting after the tutorial puzzle
    ///
    /// Pass the puzzles without the tutorial, e.g. `&puzzles[1..]`.
    /// Nothing is written if they would run past the end of the table.
    pub fn insert_puzzles(&self, rom: &mut [u8], puzzles: &[Puzzle]) -> Result<()> {
        let max = self.max_insert();
        if puzzles.len() > max {
            return Err(Error::TooManyRecords {
                count: puzzles.len(),
                max,
            });
        }
        store::insert_puzzles(rom, self.insert_offset, puzzles)
    }

    /// Most puzzles [`RomLayout::insert_puzzles`] accepts
    pub fn max_insert(&self) -> usize {
        let room = self.puzzles_end.saturating_sub(self.insert_offset) / RECORD_SIZE;
        MAX_INSERT.min(room)
    }
}

/// A ROM dump this tool knows the layout of
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RomIdentity {
    pub file_name: &'static str,
    pub size: usize,
    /// Lowercase hex MD5 of the whole file
    pub md5: &'static str,
    pub region: &'static str,
    pub layout: RomLayout,
}

pub const KNOWN_ROMS: &[RomIdentity] = &[RomIdentity {
    file_name: "mariop.gb",
    size: 262144,
    md5: "ccaf9331318d4dfe3d1ee681928a74fd",
    region: "US",
    layout: MARIOS_PICROSS,
}];

/// Lowercase hex MD5 of `data`
pub fn md5_hex(data: &[u8]) -> String {
    hex::encode(Md5::digest(data))
}

impl RomIdentity {
    /// Checks file name, exact size and MD5, in that order
    pub fn verify(&self, file_name: &str, data: &[u8]) -> Result<()> {
        if file_name != self.file_name {
            return Err(Error::UnrecognizedRom(format!(
                "file name {:?} does not match {:?}",
                file_name, self.file_name
            )));
        }

        if data.len() != self.size {
            return Err(Error::UnrecognizedRom(format!(
                "size {} does not match {}",
                data.len(),
                self.size
            )));
        }

        let digest = md5_hex(data);
        if digest != self.md5 {
            return Err(Error::UnrecognizedRom(format!(
                "md5 {} does not match {}",
                digest, self.md5
            )));
        }

        Ok(())
    }
}

/// Finds the known ROM matching `file_name` and `data`
pub fn identify(file_name: &str, data: &[u8]) -> Result<&'static RomIdentity> {
    identify_in(KNOWN_ROMS, file_name, data)
}

fn identify_in(
    known: &'static [RomIdentity],
    file_name: &str,
    data: &[u8],
) -> Result<&'static RomIdentity> {
    let mut last_err = None;

    for rom in known {
        match rom.verify(file_name, data) {
            Ok(()) => {
                debug!("identified {} ({})", rom.file_name, rom.region);
                return Ok(rom);
            }
            Err(e) => last_err = Some(e),
        }
    }

    Err(last_err.unwrap_or_else(|| Error::UnrecognizedRom("no known ROMs".to_string())))
}
