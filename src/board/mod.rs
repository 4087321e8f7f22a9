//! Board layout: spaces, the GO index, and the fixed name list.
//!
//! ## Key Types
//!
//! - `Space`: one board tile (name, rent, purchase price, current owner)
//! - `BOARD_SIZE` / `GO_INDEX` / `RENT_COUNT`: board geometry constants
//! - `SPACE_NAMES`: the fixed 25-name board theme, GO first

pub mod space;

pub use space::{Space, BOARD_SIZE, GO_INDEX, PRICE_MULTIPLIER, RENT_COUNT, SPACE_NAMES};
