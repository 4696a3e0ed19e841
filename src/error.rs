use derive_more::{Display, Error, From};

use crate::session::Outcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    #[display("field width must be at least 1")]
    ZeroWidth,
    #[display("field height must be at least 1")]
    ZeroHeight,
    #[display("hole percentage {percentage} is outside 0..=100")]
    HolePercentage { percentage: u8 },
    #[display("max attempts must be at least 1")]
    ZeroAttempts,
    #[display("field rows must be non-empty and of equal length")]
    Ragged,
    #[display("unknown field glyph {glyph:?}")]
    Glyph { glyph: char },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum GenerateError {
    #[display("invalid field configuration: {_0}")]
    Config(ConfigError),
    #[display("no solvable field after {attempts} attempts")]
    #[from(ignore)]
    Unsolvable { attempts: usize },
}

/// Returned when a move is applied to a session that already ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("round is over ({outcome:?}), no more moves accepted")]
pub struct SessionError {
    pub outcome: Outcome,
}

#[derive(Debug, Display, Error, From)]
pub enum GameError {
    #[display("terminal I/O failed: {_0}")]
    Io(std::io::Error),
    #[display("{_0}")]
    Config(ConfigError),
    #[display("{_0}")]
    Generate(GenerateError),
    #[display("{_0}")]
    Session(SessionError),
}
