//! Свойства суммы руки и доски (proptest).
//!
//! - hand_total ≤ 21, если хоть какой-то вариант понижения тузов это позволяет;
//!   иначе hand_total – минимально возможная сумма (все тузы по 1);
//! - lines_complete согласован с полным перебором линий.

use proptest::prelude::*;

use table_games::domain::*;

fn any_card() -> impl Strategy<Value = Card> {
    (0usize..13, 0usize..4).prop_map(|(r, s)| Card::new(Rank::ALL[r], Suit::ALL[s]))
}

proptest! {
    #[test]
    fn hand_total_is_best_total_not_over_twenty_one(hand in prop::collection::vec(any_card(), 0..12)) {
        let aces = hand.iter().filter(|c| c.is_ace()).count() as u32;
        let minimum: u32 = hand.iter().map(|c| if c.is_ace() { 1 } else { c.points() }).sum();
        let total = hand_total(&hand);

        // перебор: k тузов считаем за 11
        let best = (0..=aces)
            .map(|k| minimum + 10 * k)
            .filter(|&t| t <= 21)
            .max();

        match best {
            Some(b) => {
                prop_assert!(total <= 21);
                prop_assert_eq!(total, b);
            }
            None => prop_assert_eq!(total, minimum),
        }
    }

    #[test]
    fn lines_complete_agrees_with_brute_force(moves in prop::collection::vec((1u8..=9, any::<bool>()), 0..20)) {
        let mut board = Board::new();
        for (cell, is_x) in moves {
            let marker = if is_x { Marker::X } else { Marker::O };
            let _ = board.place(cell, marker);
        }

        let brute = WINNING_LINES.iter().find(|line| {
            let first = board.get(line[0]);
            first.is_some() && line.iter().all(|&c| board.get(c) == first)
        });

        match (board.lines_complete(), brute) {
            (Some(found), Some(line)) => {
                prop_assert_eq!(&found.cells, line);
                prop_assert!(found.cells.iter().all(|&c| board.get(c) == Some(found.marker)));
                prop_assert_eq!(board.winning_marker(), Some(found.marker));
            }
            (None, None) => prop_assert_eq!(board.winning_marker(), None),
            (found, line) => prop_assert!(false, "mismatch: {:?} vs {:?}", found, line),
        }
    }
}
