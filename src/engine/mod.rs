//! The game engine: board + roster ownership and every game action.
//!
//! ## Key Types
//!
//! - `Game`: owns the board and the player roster; all rules live here
//! - `MoveOutcome`: result of a completed move (continue, inactive, game over)

pub mod game;

pub use game::{Game, MoveOutcome};
