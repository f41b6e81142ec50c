//! Property tests for the rule predicates, positions and board moves.

use std::sync::Arc;

use proptest::prelude::*;

use memoarrr::board::{Board, CellState};
use memoarrr::cards::{Animal, Background, Card, CardPool};
use memoarrr::core::{GameRng, Player, PlayerId, Position, Side};
use memoarrr::rules::{Rules, ROUND_LIMIT};

fn any_card() -> impl Strategy<Value = Card> {
    (0..Animal::ALL.len(), 0..Background::ALL.len())
        .prop_map(|(a, b)| Card::new(Animal::ALL[a], Background::ALL[b]))
}

fn any_position() -> impl Strategy<Value = Position> {
    (0..5usize, 0..5usize).prop_map(|(r, c)| Position::from_indices(r, c).unwrap())
}

fn occupied_position() -> impl Strategy<Value = Position> {
    any_position().prop_filter("center holds no card", |p| !p.is_center())
}

fn seats(active: &[bool]) -> Vec<Player> {
    active
        .iter()
        .enumerate()
        .map(|(i, &on)| {
            let mut p = Player::new(PlayerId::new(i as u8), format!("P{i}"), Side::ALL[i]);
            p.set_active(on);
            p
        })
        .collect()
}

fn shuffled_board(seed: u64) -> Board {
    let pool = Arc::new(CardPool::standard());
    let mut supply = pool.supply();
    supply.shuffle(&mut GameRng::new(seed));
    Board::new(pool, &mut supply).unwrap()
}

fn snapshot(board: &Board) -> Vec<(Position, CellState)> {
    board.cells().collect()
}

proptest! {
    // =========================================================================
    // Rules
    // =========================================================================

    #[test]
    fn prop_is_valid_shares_a_trait(prev in any_card(), curr in any_card()) {
        let expected = prev.animal() == curr.animal() || prev.background() == curr.background();
        prop_assert_eq!(Rules::is_valid(Some(prev), Some(curr)), expected);
        prop_assert!(Rules::is_valid(None, Some(curr)));
        prop_assert!(!Rules::is_valid(Some(prev), None));
    }

    #[test]
    fn prop_game_over_at_round_limit(round in 0u32..20) {
        prop_assert_eq!(Rules::game_over(round), round >= ROUND_LIMIT);
    }

    #[test]
    fn prop_round_over_when_at_most_one_active(active in prop::collection::vec(any::<bool>(), 2..=4)) {
        let players = seats(&active);
        let count = active.iter().filter(|&&a| a).count();
        prop_assert_eq!(Rules::round_over(&players), count <= 1);
    }

    #[test]
    fn prop_next_player_is_active_or_from(
        active in prop::collection::vec(any::<bool>(), 2..=4),
        from in 0usize..4,
    ) {
        let players = seats(&active);
        let from = PlayerId::new((from % players.len()) as u8);
        let next = Rules::next_player(&players, from);

        if active.iter().any(|&a| a) {
            prop_assert!(players[next.index()].is_active());
            // No active seat lies strictly between `from` and `next`.
            let n = players.len();
            let gap = (next.index() + n - from.index()) % n;
            let gap = if gap == 0 { n } else { gap };
            for offset in 1..gap {
                prop_assert!(!players[(from.index() + offset) % n].is_active());
            }
        } else {
            prop_assert_eq!(next, from);
        }
    }

    // =========================================================================
    // Positions
    // =========================================================================

    #[test]
    fn prop_position_text_round_trips(pos in any_position()) {
        let text = pos.to_string();
        prop_assert_eq!(text.len(), 2);
        prop_assert_eq!(text.parse::<Position>().unwrap(), pos);
        prop_assert_eq!(text.to_lowercase().parse::<Position>().unwrap(), pos);
    }

    #[test]
    fn prop_adjacency_is_symmetric(a in any_position(), b in any_position()) {
        prop_assert_eq!(a.is_adjacent(b), b.is_adjacent(a));
        prop_assert_eq!(a.is_adjacent(b), a.orthogonal_neighbours().contains(&b));
        prop_assert!(!a.is_adjacent(a));
    }

    // =========================================================================
    // Board
    // =========================================================================

    #[test]
    fn prop_swap_twice_restores_board(
        seed in any::<u64>(),
        a in occupied_position(),
        b in occupied_position(),
        up in any::<bool>(),
    ) {
        let mut board = shuffled_board(seed);
        if up {
            board.turn_face_up(a).unwrap();
        }
        let before = snapshot(&board);

        board.swap_cells(a, b).unwrap();
        prop_assert_eq!(board.cell_state(a), before.iter().find(|(p, _)| *p == b).unwrap().1);
        board.swap_cells(a, b).unwrap();
        prop_assert_eq!(snapshot(&board), before);
    }

    #[test]
    fn prop_deal_fills_every_cell_once(seed in any::<u64>()) {
        let board = shuffled_board(seed);
        prop_assert_eq!(board.occupied_count(), 24);
        prop_assert_eq!(board.face_down_positions().len(), 24);

        let mut ids: Vec<_> = Position::all()
            .filter(|p| !p.is_center())
            .map(|p| board.card_id(p).unwrap().unwrap())
            .collect();
        ids.sort();
        ids.dedup();
        prop_assert_eq!(ids.len(), 24);
    }

    #[test]
    fn prop_selection_only_accepts_face_down(
        seed in any::<u64>(),
        flipped in prop::collection::vec(occupied_position(), 0..10),
        pick in any_position(),
    ) {
        let mut board = shuffled_board(seed);
        for pos in &flipped {
            board.turn_face_up(*pos).unwrap();
        }

        let accepted = board.check_selection(pick, false).is_ok();
        let face_down = !pick.is_center() && !board.is_face_up(pick).unwrap();
        prop_assert_eq!(accepted, face_down);
    }
}
