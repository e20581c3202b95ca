use anyhow::{Context, Result};
use picross_core::{MARIOS_PICROSS, Puzzle, RomIdentity, RomLayout, identify};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// A ROM read from disk together with its decoded puzzle table
#[derive(Clone, Debug)]
pub struct LoadedRom {
    pub path: PathBuf,
    pub data: Vec<u8>,
    pub layout: RomLayout,
    /// `None` when the identity check was skipped and failed
    pub identity: Option<&'static RomIdentity>,
    pub puzzles: Vec<Puzzle>,
}

/// Service for loading ROMs and writing edited copies
pub struct RomService;

impl RomService {
    pub fn new() -> Self {
        Self
    }

    /// Read a ROM and decode its puzzle table
    ///
    /// Unknown ROMs are rejected unless `skip_check` is set, in which case
    /// the Mario's Picross layout is assumed.
    pub fn load(&self, path: &Path, skip_check: bool) -> Result<LoadedRom> {
        let data = std::fs::read(path)
            .with_context(|| format!("Failed to read ROM: {}", path.display()))?;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let (identity, layout) = match identify(&file_name, &data) {
            Ok(known) => (Some(known), known.layout),
            Err(e) if skip_check => {
                warn!("{}; assuming Mario's Picross layout", e);
                (None, MARIOS_PICROSS)
            }
            Err(e) => return Err(e.into()),
        };

        let puzzles = layout.read_puzzles(&data)?;
        info!("loaded {} puzzles from {}", puzzles.len(), path.display());

        Ok(LoadedRom {
            path: path.to_path_buf(),
            data,
            layout,
            identity,
            puzzles,
        })
    }

    /// Write a copy of the ROM with every puzzle but the tutorial replaced
    pub fn save(&self, rom: &LoadedRom, puzzles: &[Puzzle], path: &Path) -> Result<()> {
        let mut data = rom.data.clone();
        let edited = puzzles.get(1..).unwrap_or_default();
        rom.layout.insert_puzzles(&mut data, edited)?;

        std::fs::write(path, &data)
            .with_context(|| format!("Failed to write ROM: {}", path.display()))?;
        info!("saved {} puzzles to {}", edited.len(), path.display());
        Ok(())
    }
}

impl Default for RomService {
    fn default() -> Self {
        Self::new()
    }
}
