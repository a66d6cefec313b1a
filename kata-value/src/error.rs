use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A value was of a different kind than required.
    #[error("Type error")]
    Type,
    /// The same key was given twice while constructing a map.
    #[error("Duplicate key in map: {0}")]
    DuplicateKey(String),
}

pub type Result<T> = std::result::Result<T, Error>;
