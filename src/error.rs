//! Crate-wide error type.

use thiserror::Error;

use crate::blacklist::BlacklistError;
use crate::config::ConfigError;
use crate::scorer::ScoreError;
use crate::writer::WriteError;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Blacklist(#[from] BlacklistError),
    #[error("Password scoring failed")]
    Score(#[from] ScoreError),
    #[error(transparent)]
    Write(#[from] WriteError),
}

pub type Result<T> = std::result::Result<T, Error>;
