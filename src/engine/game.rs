//! The `Game` aggregate and its operations.
//!
//! A `Game` owns its board and roster outright; nothing outlives it and no
//! state is shared between instances. An external driver (test harness, CLI,
//! UI) sets the board up once, registers players, then alternates move and
//! buy calls and reads state back through the query methods.
//!
//! ## Error policy
//!
//! Setup and creation violations (bad rent list, duplicate name) return
//! `GameError`. In-play refusals (buying an owned space, moving while
//! eliminated) are ordinary outcomes reported as `bool`/`Option` values.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::{Space, GO_INDEX, RENT_COUNT, SPACE_NAMES};
use crate::error::GameError;
use crate::players::Player;

/// Result of a `move_player` call that found its player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was applied and the game continues.
    Continue,
    /// The player is out of the game; nothing happened.
    Inactive,
    /// The move was applied and exactly one player still has funds.
    GameOver(String),
}

/// A complete game: board, roster, and the GO bonus.
///
/// ## Lifecycle
///
/// 1. `Game::new()`
/// 2. `create_spaces(go_value, rents)` exactly once
/// 3. `create_player(..)` per participant
/// 4. `move_player` / `buy_space` driven by the caller, queries throughout
///
/// Players are never removed; elimination is the `balance == 0` state.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Game {
    go_value: i64,
    board: Vec<Space>,
    players: Vec<Player>,
    /// Lowercased names of every registered player, for duplicate checks.
    registered_names: FxHashSet<String>,
}

impl Game {
    /// Create a game with no board and no players.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // === Setup ===

    /// Build the 25-space board: GO at index 0, then one space per rent
    /// value, each priced at five times its rent.
    ///
    /// Errors when the rent list is not exactly [`RENT_COUNT`] values long,
    /// contains a negative rent, or the board has already been set up.
    pub fn create_spaces(&mut self, go_value: i64, rents: &[i64]) -> Result<(), GameError> {
        if !self.board.is_empty() {
            return Err(GameError::BoardAlreadySetUp);
        }
        if rents.len() != RENT_COUNT {
            return Err(GameError::WrongRentCount(rents.len()));
        }
        if let Some((index, &rent)) = rents.iter().enumerate().find(|(_, &rent)| rent < 0) {
            return Err(GameError::NegativeRent { index, rent });
        }

        self.go_value = go_value;
        self.board.push(Space::new(SPACE_NAMES[GO_INDEX], 0));
        for (name, &rent) in SPACE_NAMES[1..].iter().zip(rents) {
            self.board.push(Space::new(*name, rent));
        }

        debug!(go_value, spaces = self.board.len(), "board created");
        Ok(())
    }

    /// Register a new player on GO with the given balance.
    ///
    /// Names must be unique case-insensitively; a starting balance of zero is
    /// allowed and produces an already-eliminated player.
    pub fn create_player(&mut self, name: &str, starting_balance: i64) -> Result<(), GameError> {
        let key = name.to_lowercase();
        if self.registered_names.contains(&key) {
            return Err(GameError::DuplicateName(name.to_string()));
        }
        if starting_balance < 0 {
            return Err(GameError::NegativeStartingBalance(starting_balance));
        }

        self.players.push(Player::new(name, starting_balance));
        self.registered_names.insert(key);

        debug!(player = name, balance = starting_balance, "player created");
        Ok(())
    }

    // === Actions ===

    /// Advance a player `moves` spaces, crediting the GO bonus on a lap,
    /// settling rent on an owned destination, and handling any resulting
    /// elimination.
    ///
    /// Returns `None` for an unknown name, `Some(MoveOutcome::Inactive)` for
    /// an eliminated player, and otherwise the outcome of the move. The win
    /// check runs only after a rent settlement, since balances cannot change
    /// on an unowned destination.
    pub fn move_player(&mut self, name: &str, moves: u32) -> Option<MoveOutcome> {
        let mover = self.players.iter().position(|p| p.name() == name)?;
        if !self.players[mover].is_active() {
            return Some(MoveOutcome::Inactive);
        }

        if self.players[mover].advance(moves) {
            self.players[mover].credit(self.go_value);
            debug!(player = name, bonus = self.go_value, "passed GO");
        }

        let position = self.players[mover].position();
        debug!(player = name, moves, position, "moved");

        let landed_on_owned = self
            .board
            .get(position)
            .is_some_and(|space| space.owner().is_some());
        if landed_on_owned {
            self.settle_rent(mover);

            if !self.players[mover].is_active() {
                self.release_holdings(mover);
            }

            if let Some(winner) = self.check_game_over() {
                let winner = winner.to_string();
                debug!(winner = %winner, "game over");
                return Some(MoveOutcome::GameOver(winner));
            }
        }

        Some(MoveOutcome::Continue)
    }

    /// Transfer rent from the player at `mover` to the owner of the space
    /// they occupy. Caps the transfer at the mover's balance, so a short
    /// mover drops to exactly zero and the owner receives only what was left.
    fn settle_rent(&mut self, mover: usize) {
        let position = self.players[mover].position();
        let space = &self.board[position];
        let Some(owner_name) = space.owner() else {
            return;
        };
        if owner_name == self.players[mover].name() {
            return;
        }

        let amount = space.rent().min(self.players[mover].balance());
        let owner_name = owner_name.to_string();
        // Owners are always registered players; if the roster disagrees,
        // transfer nothing rather than debit without a matching credit.
        let Some(owner) = self.players.iter().position(|p| p.name() == owner_name) else {
            return;
        };

        self.players[mover].debit(amount);
        self.players[owner].credit(amount);
        debug!(
            payer = self.players[mover].name(),
            owner = %owner_name,
            amount,
            space = self.board[position].name(),
            "rent paid"
        );
    }

    /// Release every space owned by an eliminated player back to the market.
    fn release_holdings(&mut self, player: usize) {
        let name = self.players[player].name().to_string();
        for space in &mut self.board {
            if space.owner() == Some(name.as_str()) {
                space.clear_owner();
            }
        }
        debug!(player = %name, "eliminated, holdings released");
    }

    /// Buy the space the named player currently occupies.
    ///
    /// Refuses (returning `false`, never an error) when the player is
    /// unknown or eliminated, stands on GO, the space is already owned, or
    /// their balance does not strictly exceed the purchase price. An exactly
    /// sufficient balance refuses: buying must leave the player solvent.
    pub fn buy_space(&mut self, name: &str) -> bool {
        let Some(buyer) = self.players.iter().position(|p| p.name() == name) else {
            return false;
        };
        if !self.players[buyer].is_active() {
            return false;
        }
        let position = self.players[buyer].position();
        if position == GO_INDEX {
            return false;
        }
        let Some(space) = self.board.get(position) else {
            return false;
        };
        if space.owner().is_some() {
            return false;
        }
        let price = space.purchase_price();
        if self.players[buyer].balance() <= price {
            return false;
        }

        self.board[position].set_owner(name);
        self.players[buyer].debit(price);
        debug!(
            player = name,
            space = self.board[position].name(),
            price,
            "space purchased"
        );
        true
    }

    // === Win detection ===

    /// The winner's name once exactly one player has a positive balance.
    ///
    /// Returns `None` while two or more players are still funded, and also
    /// in the mutual-elimination case where nobody is: the engine cannot
    /// distinguish a draw from an unfinished game. Callers that care can
    /// count `players()` with positive balances themselves.
    #[must_use]
    pub fn check_game_over(&self) -> Option<&str> {
        let mut funded = self.players.iter().filter(|p| p.is_active());
        match (funded.next(), funded.next()) {
            (Some(winner), None) => Some(winner.name()),
            _ => None,
        }
    }

    // === Queries ===

    /// A player's balance, or `None` for an unknown name.
    #[must_use]
    pub fn player_balance(&self, name: &str) -> Option<i64> {
        self.find_player(name).map(Player::balance)
    }

    /// A player's board position, or `None` for an unknown name.
    #[must_use]
    pub fn player_position(&self, name: &str) -> Option<usize> {
        self.find_player(name).map(Player::position)
    }

    /// Names of every space the player owns, in board order. Empty for
    /// unknown players and for players who own nothing.
    #[must_use]
    pub fn player_properties(&self, name: &str) -> Vec<String> {
        self.board
            .iter()
            .filter(|space| space.owner() == Some(name))
            .map(|space| space.name().to_string())
            .collect()
    }

    /// All players in creation order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Names of all registered players, in creation order.
    pub fn player_names(&self) -> impl Iterator<Item = &str> {
        self.players.iter().map(Player::name)
    }

    /// The board, empty until `create_spaces` is called.
    #[must_use]
    pub fn board(&self) -> &[Space] {
        &self.board
    }

    /// A space by board index, or `None` when out of range.
    #[must_use]
    pub fn space(&self, index: usize) -> Option<&Space> {
        self.board.get(index)
    }

    /// A space's owner by board index. The outer `None` means no such
    /// space; the inner `None` means the space is unowned.
    #[must_use]
    pub fn space_owner(&self, index: usize) -> Option<Option<&str>> {
        self.board.get(index).map(Space::owner)
    }

    /// The bonus credited for passing or landing on GO.
    #[must_use]
    pub fn go_value(&self) -> i64 {
        self.go_value
    }

    fn find_player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name() == name)
    }
}
