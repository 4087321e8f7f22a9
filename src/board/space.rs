//! Board spaces.
//!
//! A `Space` is one tile on the 25-space board. Its name, rent, and purchase
//! price are fixed at construction; only the owner changes during play.
//!
//! ## Pricing
//!
//! Every purchasable space costs `rent * 5`. The GO space has rent 0 and
//! price 0 but is excluded from purchase by the engine regardless.

use serde::{Deserialize, Serialize};

/// Total number of spaces on the board, including GO.
pub const BOARD_SIZE: usize = 25;

/// Board index of the GO space. Never ownable.
pub const GO_INDEX: usize = 0;

/// Number of rent values a board setup call must supply (one per non-GO space).
pub const RENT_COUNT: usize = BOARD_SIZE - 1;

/// Purchase price of a space as a multiple of its rent.
pub const PRICE_MULTIPLIER: i64 = 5;

/// The fixed board theme, GO first. The Nth non-GO name pairs with the Nth
/// rent value passed to board setup.
pub const SPACE_NAMES: [&str; BOARD_SIZE] = [
    "GO",
    "Falafel & Grill",
    "The Wormhole Coffee",
    "Revolution Brewing",
    "Pita Inn",
    "Ghareeb Nawaz",
    "Small Cheval",
    "St. Lou's Assembly",
    "Clark St",
    "Wrigley Field",
    "Wicker Park Ave",
    "United Center",
    "Northerly Island",
    "Lincoln Park",
    "River Shannon",
    "Lou Malnati's Pizzeria",
    "Portillo's",
    "Chicago Ave",
    "Half Acre Beer Company",
    "Garfield Park Conservatory",
    "Metropolis",
    "Division St",
    "The Loop",
    "Andy's Thai Kitchen",
    "Pompei Restaurant",
];

/// One tile on the game board.
///
/// Immutable except for the owner, which is set on purchase and cleared when
/// the owning player is eliminated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Space {
    name: String,
    rent: i64,
    purchase_price: i64,
    owner: Option<String>,
}

impl Space {
    /// Create a space with the fixed `rent * 5` purchase price and no owner.
    ///
    /// Rent must be non-negative; the engine validates rents before
    /// constructing spaces.
    #[must_use]
    pub(crate) fn new(name: impl Into<String>, rent: i64) -> Self {
        debug_assert!(rent >= 0, "rent must be non-negative");
        Self {
            name: name.into(),
            rent,
            purchase_price: rent * PRICE_MULTIPLIER,
            owner: None,
        }
    }

    /// Display name of the space.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rent owed by a non-owner who lands here.
    #[must_use]
    pub fn rent(&self) -> i64 {
        self.rent
    }

    /// Cost to purchase this space while unowned. Fixed at `rent * 5`.
    #[must_use]
    pub fn purchase_price(&self) -> i64 {
        self.purchase_price
    }

    /// Name of the current owner, or `None` while the space is up for sale.
    #[must_use]
    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    pub(crate) fn set_owner(&mut self, player_name: &str) {
        self.owner = Some(player_name.to_string());
    }

    /// Return the space to the unowned state. Used when the owner is
    /// eliminated.
    pub(crate) fn clear_owner(&mut self) {
        self.owner = None;
    }
}
