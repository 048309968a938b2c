use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("index {index} is out of range for a sequence of length {len}")]
    OutOfRange { index: usize, len: usize },
    #[error("cursor is done, there is no current element")]
    Done,
}

impl Error {
    #[must_use]
    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::OutOfRange { index, len }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
