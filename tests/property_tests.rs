//! Property-based tests over random action sequences.

use proptest::prelude::*;

use yahtzee_engine::dice::stats;
use yahtzee_engine::rules::{evaluate, ScoreOutcome};
use yahtzee_engine::{Action, Category, DiceValues, Game, RulesConfig, ScoreEntry, DICE_COUNT};

/// Strategy: any category.
fn category_strategy() -> impl Strategy<Value = Category> {
    (0..Category::COUNT).prop_map(|i| Category::from_index(i).unwrap())
}

/// Strategy: any action, including out-of-range holds.
fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        3 => Just(Action::Roll),
        2 => (0..DICE_COUNT + 1).prop_map(Action::ToggleHold),
        2 => category_strategy().prop_map(Action::Score),
        1 => category_strategy().prop_map(Action::Scratch),
        2 => Just(Action::NextTurn),
    ]
}

fn dice_strategy() -> impl Strategy<Value = DiceValues> {
    prop::array::uniform5(1..=6u8)
}

fn cards(game: &Game) -> Vec<[ScoreEntry; Category::COUNT]> {
    game.players().iter().map(|p| *p.scores()).collect()
}

proptest! {
    // 1. Written categories never change, except through the forced scratch
    //    that follows a Yahtzee bonus.
    #[test]
    fn scored_categories_are_final(
        seed in any::<u64>(),
        players in 1..4usize,
        actions in prop::collection::vec(action_strategy(), 0..200),
    ) {
        let mut game = Game::new(players, seed).unwrap();
        for action in actions {
            let before = game.clone();
            let bonus_turn = before.current_player().yahtzee_bonus_this_turn();
            game.apply(action);

            for (seat, (old, new)) in before.players().iter().zip(game.players()).enumerate() {
                let forced = bonus_turn && seat == before.current_player_index();
                for category in Category::ALL {
                    if category == Category::YahtzeeBonus || !old.is_scored(category) {
                        continue;
                    }
                    if forced && new.score(category) == ScoreEntry::Scratched {
                        continue;
                    }
                    prop_assert_eq!(old.score(category), new.score(category));
                    prop_assert!(new.is_scored(category));
                }
            }
        }
    }

    // 2. A roll never changes a held die.
    #[test]
    fn held_dice_keep_faces(
        seed in any::<u64>(),
        actions in prop::collection::vec(action_strategy(), 0..200),
    ) {
        let mut game = Game::new(2, seed).unwrap();
        for action in actions {
            let before = *game.dice();
            game.apply(action);
            if action == Action::Roll {
                for (old, new) in before.iter().zip(game.dice()) {
                    if old.is_held() {
                        prop_assert_eq!(old.value(), new.value());
                        prop_assert_eq!(old.roll_count(), new.roll_count());
                    }
                }
            }
        }
    }

    // 3. Lower-section writes never move the top score or the upper bonus.
    #[test]
    fn lower_section_leaves_top_score(
        seed in any::<u64>(),
        actions in prop::collection::vec(action_strategy(), 0..200),
    ) {
        let mut game = Game::new(1, seed).unwrap();
        for action in actions {
            let top = game.current_player().top_score();
            let bonus = game.current_player().has_bonus();
            game.apply(action);
            if let Action::Score(c) | Action::Scratch(c) = action {
                if !c.is_upper() {
                    prop_assert_eq!(game.player(0).unwrap().top_score(), top);
                    prop_assert_eq!(game.player(0).unwrap().has_bonus(), bonus);
                }
            }
        }
    }

    // 4. Rejected actions leave the cards, dice and seat alone. The roll
    //    counter and the sticky Yahtzee flag are left unchecked: a rejected
    //    roll still counts, and a rejected Yahtzee score still sets the flag.
    #[test]
    fn rejected_actions_keep_cards(
        seed in any::<u64>(),
        actions in prop::collection::vec(action_strategy(), 0..200),
    ) {
        let mut game = Game::new(2, seed).unwrap();
        for action in actions {
            let cards_before = cards(&game);
            let dice_before = game.dice_values();
            let seat_before = game.current_player_index();
            if !game.apply(action) {
                prop_assert_eq!(cards(&game), cards_before);
                prop_assert_eq!(game.dice_values(), dice_before);
                prop_assert_eq!(game.current_player_index(), seat_before);
            }
        }
    }

    // 5. The roll counter and die faces stay in range.
    #[test]
    fn rolls_and_faces_in_range(
        seed in any::<u64>(),
        actions in prop::collection::vec(action_strategy(), 0..200),
    ) {
        let mut game = Game::new(1, seed).unwrap();
        for action in actions {
            game.apply(action);
            prop_assert!(game.rolls_remaining() <= 3);
            for die in game.dice() {
                prop_assert!(die.value() <= 6);
                prop_assert_eq!(die.value() == 0, die.roll_count() == 0);
            }
        }
    }

    // 6. Upper categories and Chance always score; others score or scratch.
    #[test]
    fn evaluate_matches_eligibility(dice in dice_strategy(), category in category_strategy()) {
        let outcome = evaluate(category, &dice, false, &RulesConfig::default());
        match category {
            Category::YahtzeeBonus => prop_assert_eq!(outcome, ScoreOutcome::Ignore),
            c if c.is_upper() || c == Category::Chance => {
                prop_assert!(matches!(outcome, ScoreOutcome::Points(_)));
            }
            _ => prop_assert!(matches!(outcome, ScoreOutcome::Points(_) | ScoreOutcome::Scratch)),
        }
    }

    // 7. A large straight always qualifies as a small straight.
    #[test]
    fn large_straight_implies_small(dice in dice_strategy()) {
        if stats::is_large_straight(&dice) {
            prop_assert!(stats::is_small_straight(&dice));
        }
        if stats::is_yahtzee(&dice) {
            prop_assert!(stats::is_four_of_a_kind(&dice));
            prop_assert!(!stats::is_full_house(&dice));
        }
    }
}
