//! Shared test data: four records spelling "T", "E", "S", "T" in several sizes

use crate::puzzle::{Grid, Puzzle};

pub const TEST_RECORDS: [u8; 128] = [
    // "T", 5x5
    0xf8, 0x00, 0x20, 0x00, 0x20, 0x00, 0x20, 0x00, 0x20, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x05, 0x05,
    // "E", 10x10
    0xff, 0xc0, 0xc0, 0x00, 0xc0, 0x00, 0xc0, 0x00, 0xff, 0xc0, 0xc0, 0x00, 0xc0, 0x00, 0xc0, 0x00,
    0xc0, 0x00, 0xff, 0xc0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0a, 0x0a,
    // "S", 15x15
    0xff, 0xfe, 0xff, 0xfe, 0xe0, 0x00, 0xe0, 0x00, 0xe0, 0x00, 0xe0, 0x00, 0xff, 0xfe, 0xff, 0xfe,
    0x00, 0x0e, 0x00, 0x0e, 0x00, 0x0e, 0x00, 0x0e, 0xff, 0xfe, 0xff, 0xfe, 0x00, 0x00, 0x0f, 0x0f,
    // "T", 10x10
    0xff, 0xc0, 0xff, 0xc0, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00, 0x0c, 0x00,
    0x0c, 0x00, 0x0c, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0a, 0x0a,
];

/// Builds a grid from 15 lines of 16 characters, `X` filled and `.` empty
pub fn grid(art: [&str; 15]) -> Grid {
    std::array::from_fn(|row| {
        let line = art[row].as_bytes();
        assert_eq!(line.len(), 16, "row {} must be 16 cells wide", row);
        std::array::from_fn(|col| line[col] == b'X')
    })
}

pub fn t_puzzle() -> Puzzle {
    Puzzle {
        width: 5,
        height: 5,
        grid: grid([
            "XXXXX...........",
            "..X.............",
            "..X.............",
            "..X.............",
            "..X.............",
            "................",
            "................",
            "................",
            "................",
            "................",
            "................",
            "................",
            "................",
            "................",
            "................",
        ]),
    }
}

pub fn e_puzzle() -> Puzzle {
    Puzzle {
        width: 10,
        height: 10,
        grid: grid([
            "XXXXXXXXXX......",
            "XX..............",
            "XX..............",
            "XX..............",
            "XXXXXXXXXX......",
            "XX..............",
            "XX..............",
            "XX..............",
            "XX..............",
            "XXXXXXXXXX......",
            "................",
            "................",
            "................",
            "................",
            "................",
        ]),
    }
}

pub fn s_puzzle() -> Puzzle {
    Puzzle {
        width: 15,
        height: 15,
        grid: grid([
            "XXXXXXXXXXXXXXX.",
            "XXXXXXXXXXXXXXX.",
            "XXX.............",
            "XXX.............",
            "XXX.............",
            "XXX.............",
            "XXXXXXXXXXXXXXX.",
            "XXXXXXXXXXXXXXX.",
            "............XXX.",
            "............XXX.",
            "............XXX.",
            "............XXX.",
            "XXXXXXXXXXXXXXX.",
            "XXXXXXXXXXXXXXX.",
            "................",
        ]),
    }
}

pub fn big_t_puzzle() -> Puzzle {
    Puzzle {
        width: 10,
        height: 10,
        grid: grid([
            "XXXXXXXXXX......",
            "XXXXXXXXXX......",
            "....XX..........",
            "....XX..........",
            "....XX..........",
            "....XX..........",
            "....XX..........",
            "....XX..........",
            "....XX..........",
            "....XX..........",
            "................",
            "................",
            "................",
            "................",
            "................",
        ]),
    }
}

pub fn test_puzzles() -> Vec<Puzzle> {
    vec![t_puzzle(), e_puzzle(), s_puzzle(), big_t_puzzle()]
}
