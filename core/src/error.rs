use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("mine count must leave at least one mine and one safe cell")]
    InvalidConfig,
    #[error("coordinates outside the board")]
    OutOfBounds,
    #[error("game already ended, no new moves are accepted")]
    AlreadyOver,
}

pub type Result<T> = core::result::Result<T, GameError>;
