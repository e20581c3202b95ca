use std::fmt;

/// Number of rows stored per puzzle
pub const ROWS: usize = 15;

/// Number of columns stored per row (one per bit of the row bitmask)
pub const COLUMNS: usize = 16;

/// Rows and columns the game can actually display
pub const PLAYFIELD: usize = 15;

pub type Grid = [[bool; COLUMNS]; ROWS];

/// A single picross puzzle
///
/// `width` and `height` are the size the game shows (5, 10 or 15). The grid
/// always holds all 15x16 cells; anything outside the declared area is kept
/// untouched so records survive a round-trip byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub width: u8,
    pub height: u8,
    pub grid: Grid,
}

impl Puzzle {
    /// Empty square puzzle of the given size
    pub fn new(size: u8) -> Self {
        Self {
            width: size,
            height: size,
            grid: [[false; COLUMNS]; ROWS],
        }
    }

    pub fn cell(&self, row: usize, col: usize) -> bool {
        self.grid[row][col]
    }

    pub fn set_cell(&mut self, row: usize, col: usize, value: bool) {
        self.grid[row][col] = value;
    }

    /// Flips a cell and returns its new value
    pub fn toggle(&mut self, row: usize, col: usize) -> bool {
        let cell = &mut self.grid[row][col];
        *cell = !*cell;
        *cell
    }

    /// Number of filled cells in the whole grid
    pub fn filled_count(&self) -> usize {
        self.grid.iter().flatten().filter(|&&c| c).count()
    }

    /// Smallest puzzle size (5, 10 or 15) that covers every filled cell of
    /// the playfield. Column 15 lies outside the playfield and is ignored.
    pub fn fitted_size(&self) -> u8 {
        let extent = self
            .grid
            .iter()
            .enumerate()
            .flat_map(|(row, cells)| {
                cells[..PLAYFIELD]
                    .iter()
                    .enumerate()
                    .filter(|&(_, &filled)| filled)
                    .map(move |(col, _)| row.max(col))
            })
            .max();

        match extent {
            Some(e) if e >= 10 => 15,
            Some(e) if e >= 5 => 10,
            _ => 5,
        }
    }

    /// Sets width and height to [`Puzzle::fitted_size`]
    pub fn fit_to_contents(&mut self) {
        let size = self.fitted_size();
        self.width = size;
        self.height = size;
    }
}

impl Default for Puzzle {
    fn default() -> Self {
        Self::new(5)
    }
}

/// Renders the declared area, `#` for filled and `.` for empty cells
impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let height = (self.height as usize).min(ROWS);
        let width = (self.width as usize).min(COLUMNS);

        for row in &self.grid[..height] {
            let line: String = row[..width]
                .iter()
                .map(|&filled| if filled { '#' } else { '.' })
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let puzzle = Puzzle::new(10);
        assert_eq!(puzzle.width, 10);
        assert_eq!(puzzle.height, 10);
        assert_eq!(puzzle.filled_count(), 0);
    }

    #[test]
    fn test_toggle() {
        let mut puzzle = Puzzle::default();
        assert!(puzzle.toggle(2, 3));
        assert!(puzzle.cell(2, 3));
        assert!(!puzzle.toggle(2, 3));
        assert!(!puzzle.cell(2, 3));
    }

    #[test]
    fn test_fitted_size() {
        let mut puzzle = Puzzle::new(15);
        assert_eq!(puzzle.fitted_size(), 5);

        puzzle.set_cell(4, 4, true);
        assert_eq!(puzzle.fitted_size(), 5);

        puzzle.set_cell(0, 5, true);
        assert_eq!(puzzle.fitted_size(), 10);

        puzzle.set_cell(9, 0, true);
        assert_eq!(puzzle.fitted_size(), 10);

        puzzle.set_cell(10, 0, true);
        assert_eq!(puzzle.fitted_size(), 15);

        let mut puzzle = Puzzle::new(5);
        puzzle.set_cell(0, 14, true);
        assert_eq!(puzzle.fitted_size(), 15);
    }

    #[test]
    fn test_fitted_size_ignores_column_outside_playfield() {
        let mut puzzle = Puzzle::new(15);
        puzzle.set_cell(0, 15, true);
        assert_eq!(puzzle.fitted_size(), 5);
    }

    #[test]
    fn test_fit_to_contents() {
        let mut puzzle = Puzzle::new(15);
        puzzle.set_cell(7, 2, true);
        puzzle.fit_to_contents();
        assert_eq!((puzzle.width, puzzle.height), (10, 10));
    }

    #[test]
    fn test_display_declared_area() {
        let mut puzzle = Puzzle::new(5);
        for col in 0..5 {
            puzzle.set_cell(0, col, true);
        }
        for row in 1..5 {
            puzzle.set_cell(row, 2, true);
        }
        // outside the declared area, not rendered
        puzzle.set_cell(6, 6, true);

        assert_eq!(
            puzzle.to_string(),
            "#####\n..#..\n..#..\n..#..\n..#..\n"
        );
    }

    #[test]
    fn test_display_clamps_corrupt_dimensions() {
        let mut puzzle = Puzzle::new(0);
        puzzle.width = 200;
        puzzle.height = 200;
        assert_eq!(puzzle.to_string().lines().count(), ROWS);
        assert!(puzzle.to_string().lines().all(|l| l.len() == COLUMNS));
    }
}
