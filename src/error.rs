use std::io;

use thiserror::Error;

/// Failures that indicate a bug or a broken environment. Running into a wall
/// or into the snake's own body is not an error, it is a game outcome.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("({x}, {y}) is outside the {width}x{height} board")]
    InvalidPosition {
        x: i16,
        y: i16,
        width: i16,
        height: i16,
    },

    #[error("no free cell left to place food on")]
    BoardFull,

    #[error("terminal failure: {0}")]
    Terminal(#[from] crossterm::ErrorKind),

    #[error(transparent)]
    Io(#[from] io::Error),
}
