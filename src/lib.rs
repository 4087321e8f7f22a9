//! # estate-engine
//!
//! A simplified Monopoly-style board game engine: a fixed 25-space board,
//! players with cash balances, sequential movement, property purchase, and
//! rent collection.
//!
//! ## Design Principles
//!
//! 1. **Caller-Driven**: The engine never initiates action. An external
//!    driver (test harness, CLI, UI) supplies every move as an explicit
//!    integer; there is no dice rolling or randomness inside.
//!
//! 2. **One Aggregate**: A `Game` exclusively owns its board and roster.
//!    Nothing is shared between instances, so a session per `Game` needs
//!    no locking.
//!
//! 3. **Explicit Lookups**: Every lookup by name or index reports
//!    found/not-found through `Option`; nothing is silently swallowed.
//!    Setup mistakes (bad rent list, duplicate name) are `GameError`s,
//!    while in-play refusals are ordinary `bool`/`Option` outcomes.
//!
//! ## Modules
//!
//! - `board`: `Space` tiles, board geometry constants, the fixed name list
//! - `players`: `Player` records (name, balance, position)
//! - `engine`: the `Game` aggregate and all operations
//! - `error`: the `GameError` taxonomy

pub mod board;
pub mod engine;
pub mod error;
pub mod players;

// Re-export commonly used types
pub use crate::board::{Space, BOARD_SIZE, GO_INDEX, PRICE_MULTIPLIER, RENT_COUNT, SPACE_NAMES};
pub use crate::engine::{Game, MoveOutcome};
pub use crate::error::GameError;
pub use crate::players::Player;
