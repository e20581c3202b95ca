use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Truncated record: expected {expected} bytes, got {actual}")]
    TruncatedRecord { expected: usize, actual: usize },

    #[error("Cannot insert {count} puzzles, at most {max} fit")]
    TooManyRecords { count: usize, max: usize },

    #[error("Read window {begin:#x}..{end:#x} is outside the image ({len} bytes)")]
    WindowOutOfBounds { begin: usize, end: usize, len: usize },

    #[error("Writing {len} bytes at offset {offset:#x} overruns the image ({image_len} bytes)")]
    InsertOutOfBounds {
        offset: usize,
        len: usize,
        image_len: usize,
    },

    #[error("Unrecognized ROM: {0}")]
    UnrecognizedRom(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_use_hex_offsets() {
        let err = Error::InsertOutOfBounds {
            offset: 0x92d0,
            len: 64,
            image_len: 0x9000,
        };
        assert_eq!(
            err.to_string(),
            "Writing 64 bytes at offset 0x92d0 overruns the image (36864 bytes)"
        );

        let err = Error::WindowOutOfBounds {
            begin: 0x92b0,
            end: 0xb2d0,
            len: 16,
        };
        assert!(err.to_string().contains("0x92b0..0xb2d0"));
    }
}
