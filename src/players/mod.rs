//! Player records: identity, balance, and board position.

pub mod player;

pub use player::Player;
