//! Whole-match tests: seeded setup, seven rounds, final tally,
//! determinism, configuration and the console front end.

use std::io::Cursor;
use std::sync::Arc;

use memoarrr::board::Board;
use memoarrr::cards::{CardId, CardPool, Supply};
use memoarrr::collab::{
    ChoicePrompt, ChoiceRequest, Console, MatchObserver, PeekPresenter, PositionSelector,
};
use memoarrr::core::{
    DisplayMode, GameError, GameRng, MatchConfig, PlayerId, PlayerRoster, Position, RulesMode,
    Side,
};
use memoarrr::engine::{Match, MatchEvent, Table};
use memoarrr::rules::ROUND_LIMIT;
use memoarrr::score::{MatchResult, ScoreLedger};

/// Always reveals the first selectable card, takes required choices and
/// passes on optional ones.
#[derive(Default)]
struct FirstChoice;

impl PositionSelector for FirstChoice {
    fn select_position(
        &mut self,
        table: &Table,
        _player: PlayerId,
        block_active: bool,
    ) -> Result<Position, GameError> {
        let board = table.board();
        board
            .face_down_positions()
            .into_iter()
            .find(|&p| board.check_selection(p, block_active).is_ok())
            .ok_or(GameError::InputClosed)
    }
}

impl ChoicePrompt for FirstChoice {
    fn choose(&mut self, _table: &Table, request: &ChoiceRequest) -> Result<Option<Position>, GameError> {
        if request.allow_skip {
            Ok(None)
        } else {
            Ok(request.candidates.first().copied())
        }
    }
}

impl PeekPresenter for FirstChoice {
    fn present_peek(&mut self, _: &Table, _: PlayerId, _: &[Position; 3]) -> Result<(), GameError> {
        Ok(())
    }
}

impl MatchObserver for FirstChoice {}

fn config(rules: RulesMode, seed: u64) -> MatchConfig {
    MatchConfig::new()
        .with_rules(rules)
        .with_seed(seed)
        .with_player("Anne", Side::Top)
        .with_player("Bonny", Side::Right)
        .with_player("Mary", Side::Bottom)
}

fn setup(config: &MatchConfig) -> Match {
    Match::setup(config, config.roster().unwrap(), Arc::new(CardPool::standard())).unwrap()
}

// =============================================================================
// Full Matches
// =============================================================================

#[test]
fn test_full_match_runs_seven_rounds() {
    for rules in [RulesMode::Base, RulesMode::Expert] {
        let mut game = setup(&config(rules, 42));
        let result = game.play(&mut FirstChoice).unwrap();

        assert!(game.is_over());
        assert_eq!(game.table().round(), ROUND_LIMIT);

        let log = game.table().log();
        let settlements = log
            .events()
            .filter(|e| matches!(e, MatchEvent::RoundWon { .. } | MatchEvent::NoRoundWinner))
            .count();
        assert_eq!(settlements, ROUND_LIMIT as usize);

        let awarded: u32 = log
            .events()
            .filter_map(|e| match e {
                MatchEvent::RoundWon { ruby: Some(r), .. } => Some(r.value()),
                _ => None,
            })
            .sum();
        let held: u32 = game.table().roster().iter().map(|p| p.rubies()).sum();
        assert_eq!(awarded, held);

        let winners = ScoreLedger::final_winners(game.table().roster().players());
        assert_eq!(result, MatchResult::from_winners(winners.clone()));
        assert_eq!(
            log.last().map(|r| &r.event),
            Some(&MatchEvent::MatchOver { winners })
        );
    }
}

#[test]
fn test_same_seed_same_match() {
    let mut first = setup(&config(RulesMode::Expert, 7));
    let mut second = setup(&config(RulesMode::Expert, 7));
    first.play(&mut FirstChoice).unwrap();
    second.play(&mut FirstChoice).unwrap();

    assert_eq!(first.seed(), 7);
    assert_eq!(first.table().log(), second.table().log());
    assert_eq!(first.table().roster(), second.table().roster());
}

#[test]
fn test_seed_changes_layout() {
    let a = setup(&config(RulesMode::Base, 1));
    let b = setup(&config(RulesMode::Base, 2));

    let layout = |game: &Match| -> Vec<Option<CardId>> {
        Position::all()
            .map(|p| game.table().board().card_id(p).unwrap_or(None))
            .collect()
    };
    assert_ne!(layout(&a), layout(&b));
    assert_eq!(a.table().board().occupied_count(), 24);
}

#[test]
fn test_setup_fails_with_small_pool() {
    let pool = CardPool::from_cards(CardPool::standard().iter().map(|(_, c)| *c).take(20));
    let config = config(RulesMode::Base, 3);

    let err = Match::setup(&config, config.roster().unwrap(), Arc::new(pool)).unwrap_err();
    assert!(matches!(
        err,
        GameError::SupplyExhausted {
            needed: 24,
            available: 20
        }
    ));
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_config_from_toml_seats_players() {
    let config = MatchConfig::from_toml(
        r#"
        rules = "expert"
        display = "expert"
        seed = 11

        [[players]]
        name = "Anne"
        side = "left"

        [[players]]
        name = "Bonny"
        side = "right"
        "#,
    )
    .unwrap();

    let game = setup(&config);
    assert_eq!(game.engine().mode(), RulesMode::Expert);
    assert_eq!(game.seed(), 11);
    assert_eq!(game.table().roster().len(), 2);
    assert_eq!(game.table().player(PlayerId::new(0)).side(), Side::Left);
}

#[test]
fn test_config_serialization() {
    let config = config(RulesMode::Expert, 5).with_display(DisplayMode::Expert);
    let json = serde_json::to_string(&config).unwrap();
    let back: MatchConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(config, back);
}

#[test]
fn test_event_log_serialization() {
    let mut game = setup(&config(RulesMode::Expert, 13));
    game.play_round(&mut FirstChoice).unwrap();

    let log = game.table().log();
    let json = serde_json::to_string(log).unwrap();
    let back: memoarrr::engine::EventLog = serde_json::from_str(&json).unwrap();
    assert_eq!(log, &back);
}

// =============================================================================
// Console
// =============================================================================

fn fixed_match() -> Match {
    let pool = Arc::new(CardPool::standard());
    let mut ids: Vec<CardId> = pool.ids().collect();
    ids.reverse();
    let board = Board::new(pool, &mut Supply::new(ids)).unwrap();
    let roster = PlayerRoster::new(vec![
        ("Anne".to_string(), Side::Top),
        ("Bonny".to_string(), Side::Bottom),
    ])
    .unwrap();
    Match::new(
        Table::new(board, roster),
        RulesMode::Base,
        ScoreLedger::new(GameRng::new(1)),
    )
}

#[test]
fn test_console_plays_a_round() {
    let mut game = fixed_match();
    // Two peeks, Anne picks a bad coordinate then A1, Bonny picks E3.
    let input = "\n\nZ9\nA1\nE3\n";
    let mut console = Console::new(Cursor::new(input), Vec::new(), DisplayMode::Expert);

    game.play_round(&mut console).unwrap();

    let text = String::from_utf8(console.into_output()).unwrap();
    assert!(text.contains("=== Round 1 ==="));
    assert!(text.contains("Anne, peek at the three cards in front of you."));
    assert!(text.contains("Invalid format. Use a letter A-E followed by a number 1-5."));
    assert!(text.contains("Anne, choose a card (e.g., B3): "));
    assert!(text.contains("rCr"));
    assert!(text.contains("Anne: top (active)"));
    assert!(text.contains("Bonny revealed a mismatch and is out of this round."));
    assert!(text.contains("Anne receives "));
    assert!(text.contains("Rubies standings (least to most):"));
    assert!(text.contains("  Bonny: 0 rubies"));
}

#[test]
fn test_console_input_closed_is_fatal() {
    let mut game = fixed_match();
    let mut console = Console::new(Cursor::new("\n\nA1\n"), Vec::new(), DisplayMode::Base);

    let err = game.play_round(&mut console).unwrap_err();
    assert!(matches!(err, GameError::InputClosed));
    assert_eq!(err.to_string(), "input stream closed unexpectedly");
}
