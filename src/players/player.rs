//! Player state.
//!
//! A `Player` starts on GO with a caller-supplied balance and walks the board
//! clockwise. A balance of exactly zero marks the player as out of the game
//! for good: the record survives for queries, but the engine refuses further
//! moves and purchases on their behalf.

use serde::{Deserialize, Serialize};

use crate::board::BOARD_SIZE;

/// One participant in a game.
///
/// ## Invariants
///
/// - `balance` never goes below zero; rent settlement caps the debit at the
///   remaining balance.
/// - `position` stays in `[0, BOARD_SIZE)`; movement wraps modulo the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    balance: i64,
    position: usize,
}

impl Player {
    /// Create a player on GO with the given starting balance.
    #[must_use]
    pub(crate) fn new(name: impl Into<String>, starting_balance: i64) -> Self {
        debug_assert!(starting_balance >= 0, "balance must be non-negative");
        Self {
            name: name.into(),
            balance: starting_balance,
            position: 0,
        }
    }

    /// The player's name, as given at creation.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current cash balance. Exactly zero means eliminated.
    #[must_use]
    pub fn balance(&self) -> i64 {
        self.balance
    }

    /// Current board position; GO is 0.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Whether the player is still in the game.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.balance > 0
    }

    pub(crate) fn credit(&mut self, amount: i64) {
        debug_assert!(amount >= 0);
        self.balance += amount;
    }

    /// Deduct `amount` from the balance. Callers cap the amount at the
    /// current balance, so this never goes negative.
    pub(crate) fn debit(&mut self, amount: i64) {
        debug_assert!(amount >= 0 && amount <= self.balance);
        self.balance -= amount;
    }

    /// Advance around the board, wrapping past the last space.
    ///
    /// Returns `true` when the move passes or lands on GO, i.e. the
    /// pre-wrap destination exceeds the last board index.
    pub(crate) fn advance(&mut self, moves: u32) -> bool {
        let raw = self.position + moves as usize;
        let passed_go = raw > BOARD_SIZE - 1;
        self.position = raw % BOARD_SIZE;
        passed_go
    }
}
