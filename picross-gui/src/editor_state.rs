use crate::services::rom_service::LoadedRom;
use picross_core::Puzzle;
use std::path::PathBuf;

#[derive(Default)]
pub enum EditorState {
    /// Initial welcome screen, no ROM loaded
    #[default]
    Welcome,

    /// A ROM is open
    Editing(EditSession),
}

/// Editing session over one loaded ROM
pub struct EditSession {
    pub rom: LoadedRom,
    /// Working copy, record 0 (the tutorial) included
    pub puzzles: Vec<Puzzle>,
    /// Index into `puzzles`; never 0 while there is anything else to show
    pub current: usize,
    pub is_modified: bool,
}

impl EditSession {
    pub fn new(rom: LoadedRom) -> Self {
        let puzzles = rom.puzzles.clone();
        let current = if puzzles.len() > 1 { 1 } else { 0 };
        Self {
            rom,
            puzzles,
            current,
            is_modified: false,
        }
    }

    /// Highest puzzle number shown to the user
    pub fn last_number(&self) -> usize {
        self.puzzles.len().saturating_sub(1)
    }

    pub fn puzzle(&self) -> Option<&Puzzle> {
        self.puzzles.get(self.current)
    }

    /// Moves to the next puzzle, wrapping from the last back to #1
    pub fn next(&mut self) {
        if self.last_number() == 0 {
            return;
        }
        self.current = if self.current >= self.last_number() {
            1
        } else {
            self.current + 1
        };
    }

    /// Moves to the previous puzzle, wrapping from #1 to the last
    pub fn prev(&mut self) {
        if self.last_number() == 0 {
            return;
        }
        self.current = if self.current <= 1 {
            self.last_number()
        } else {
            self.current - 1
        };
    }

    /// Toggles a cell and re-fits the puzzle size to what is filled
    pub fn toggle_cell(&mut self, row: usize, col: usize) {
        if let Some(puzzle) = self.puzzles.get_mut(self.current) {
            puzzle.toggle(row, col);
            puzzle.fit_to_contents();
            self.is_modified = true;
        }
    }

    /// Drops every edit
    pub fn revert(&mut self) {
        self.puzzles = self.rom.puzzles.clone();
        self.is_modified = false;
    }
}

pub enum EditorAction {
    // File actions
    OpenRom,
    RomSelected(PathBuf),
    SaveRomAs,
    CloseRom,

    // Editing actions
    PreviousPuzzle,
    NextPuzzle,
    ToggleCell { row: usize, col: usize },
    Revert,
}
