//! Property tests over board construction, movement, and purchase rules.

use estate_engine::{Game, BOARD_SIZE, GO_INDEX, PRICE_MULTIPLIER, RENT_COUNT, SPACE_NAMES};
use proptest::prelude::*;

proptest! {
    /// Any valid 24-rent list yields a 25-space board: GO at index 0 with
    /// rent 0 and price 0, and every other space priced at five times its
    /// rent, unowned, carrying the fixed theme name.
    #[test]
    fn board_shape_holds_for_all_rent_lists(
        rents in prop::collection::vec(0i64..=1_000, RENT_COUNT),
        go_value in 0i64..=10_000,
    ) {
        let mut game = Game::new();
        game.create_spaces(go_value, &rents).unwrap();

        prop_assert_eq!(game.board().len(), BOARD_SIZE);
        prop_assert_eq!(game.go_value(), go_value);

        let go = &game.board()[GO_INDEX];
        prop_assert_eq!(go.name(), "GO");
        prop_assert_eq!(go.rent(), 0);
        prop_assert_eq!(go.purchase_price(), 0);

        for (i, &rent) in rents.iter().enumerate() {
            let space = &game.board()[i + 1];
            prop_assert_eq!(space.name(), SPACE_NAMES[i + 1]);
            prop_assert_eq!(space.rent(), rent);
            prop_assert_eq!(space.purchase_price(), rent * PRICE_MULTIPLIER);
            prop_assert_eq!(space.owner(), None);
        }
    }

    /// Movement wraps modulo the board size and credits the GO bonus
    /// exactly when the pre-wrap destination exceeds the last index.
    #[test]
    fn movement_wraps_and_credits_go(
        start in 0usize..BOARD_SIZE,
        moves in 0u32..=100,
    ) {
        let go_value = 200;
        let balance = 1_000;

        let mut game = Game::new();
        game.create_spaces(go_value, &vec![10; RENT_COUNT]).unwrap();
        game.create_player("Ann", balance).unwrap();

        // Walk to the starting position first; a single step of at most
        // 24 from GO never passes it.
        game.move_player("Ann", start as u32);
        prop_assert_eq!(game.player_position("Ann"), Some(start));
        prop_assert_eq!(game.player_balance("Ann"), Some(balance));

        game.move_player("Ann", moves);

        let expected_position = (start + moves as usize) % BOARD_SIZE;
        let expected_balance = if start + moves as usize > BOARD_SIZE - 1 {
            balance + go_value
        } else {
            balance
        };
        prop_assert_eq!(game.player_position("Ann"), Some(expected_position));
        prop_assert_eq!(game.player_balance("Ann"), Some(expected_balance));
    }

    /// A purchase succeeds exactly when the buyer's balance strictly
    /// exceeds the price, and debits exactly the price.
    #[test]
    fn purchase_requires_strictly_more_than_price(
        rent in 1i64..=1_000,
        balance in 0i64..=10_000,
    ) {
        let mut rents = vec![10; RENT_COUNT];
        rents[0] = rent;

        let mut game = Game::new();
        game.create_spaces(200, &rents).unwrap();
        game.create_player("Ann", balance).unwrap();
        game.move_player("Ann", 1);

        let price = rent * PRICE_MULTIPLIER;
        let bought = game.buy_space("Ann");
        prop_assert_eq!(bought, balance > price);
        if bought {
            prop_assert_eq!(game.player_balance("Ann"), Some(balance - price));
            prop_assert_eq!(game.space_owner(1), Some(Some("Ann")));
        } else {
            prop_assert_eq!(game.player_balance("Ann"), Some(balance));
            prop_assert_eq!(game.space_owner(1), Some(None));
        }
    }
}
