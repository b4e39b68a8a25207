use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("Could not load specimen data: {0}")]
    DataLoad(String),
    #[error("No specimen data has been loaded")]
    NotLoaded,
    #[error("Unknown game mode `{0}` (expected category, easy or hard)")]
    UnknownMode(String),
}

pub type Result<T> = std::result::Result<T, Error>;
