//! Error taxonomy for setup-time and creation-time violations.
//!
//! Runtime refusals (insufficient funds, already-owned space, eliminated
//! player acting) are expected game outcomes and are reported through
//! `bool`/`Option` return values, never through `GameError`.

use thiserror::Error;

use crate::board::RENT_COUNT;

/// Errors raised while building a game: board setup and player creation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// A player with the same name (compared case-insensitively) already
    /// exists in this game.
    #[error("player name {0:?} is already taken")]
    DuplicateName(String),

    /// The rent list did not contain exactly one value per non-GO space.
    #[error("board setup requires exactly {RENT_COUNT} rent values, got {0}")]
    WrongRentCount(usize),

    /// `create_spaces` was called on a game whose board already exists.
    #[error("board has already been set up")]
    BoardAlreadySetUp,

    /// A rent value in the setup list was negative.
    #[error("rent at index {index} is negative ({rent})")]
    NegativeRent { index: usize, rent: i64 },

    /// A player was created with a balance below zero. A balance of exactly
    /// zero is allowed and produces an already-eliminated player.
    #[error("starting balance must be non-negative, got {0}")]
    NegativeStartingBalance(i64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GameError::DuplicateName("Ann".to_string());
        assert_eq!(err.to_string(), "player name \"Ann\" is already taken");

        let err = GameError::WrongRentCount(10);
        assert_eq!(
            err.to_string(),
            "board setup requires exactly 24 rent values, got 10"
        );

        let err = GameError::NegativeRent { index: 3, rent: -50 };
        assert_eq!(err.to_string(), "rent at index 3 is negative (-50)");
    }
}
