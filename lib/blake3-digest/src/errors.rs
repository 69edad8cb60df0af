use thiserror::Error;

#[derive(Copy, Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseHashError {
    #[error("Invalid hex length: expected 64 characters, got {0}.")]
    InvalidLength(usize),
    #[error("Invalid hex character {byte:#04x} at position {index}.")]
    InvalidHexCharacter { index: usize, byte: u8 },
}
