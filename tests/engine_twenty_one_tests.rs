// tests/engine_twenty_one_tests.rs
//
// Движок двадцати одного:
//  - раздача: по 2 карты, 48 в колоде, без повторов;
//  - ход игрока: hit / stay / перебор / 21;
//  - ход дилера по эвристике;
//  - итог: перебор, 21, большая сумма, push;
//  - ошибки: чужой ход, не та фаза, недопустимое действие;
//  - rematch: отказ ничего не меняет, согласие – новая раздача;
//  - полная сессия через консоль со сценарием.
//
// Порядок сдачи из Deck::stacked: игрок, дилер, игрок, дилер, затем добор.

use std::collections::HashSet;
use std::io::Cursor;

use table_games::config::TwentyOneConfig;
use table_games::domain::*;
use table_games::engine::*;
use table_games::infra::{Console, DeterministicRng, ParticipantRegistry};

// -----------------------------
// ВСПОМОГАТЕЛЬНЫЕ КОНСТРУКТОРЫ
// -----------------------------

fn deck(list: &[&str]) -> Deck {
    Deck::stacked(list.iter().map(|s| s.parse().expect("card literal")).collect())
}

fn new_table() -> TwentyOneTable {
    let registry = ParticipantRegistry::new();
    let player = Participant::new(
        registry.register("Alice", ParticipantKind::Human),
        ParticipantKind::Human,
        Hand::new(),
    );
    let dealer = Participant::new(
        registry.register("Hal", ParticipantKind::Automated),
        ParticipantKind::Automated,
        Hand::new(),
    );
    TwentyOneTable::new(TwentyOneConfig::default(), player, dealer)
}

/// Дилер ходит по своей эвристике, пока не кончится его ход.
fn play_dealer(table: &mut TwentyOneTable) {
    let stands_at = table.config().dealer_stands_at;
    while table.phase() == GamePhase::TurnLoop {
        let dealer = table.dealer();
        assert_eq!(table.current_turn(), Some(dealer.id()));
        let kind = table_games::players::dealer_decision(dealer.total(), stands_at);
        let id = dealer.id();
        table.apply_action(Action::new(id, kind)).unwrap();
    }
}

#[test]
fn dealing_gives_two_cards_each_and_keeps_cards_unique() {
    let mut table = new_table();
    table.start_round(&mut DeterministicRng::from_seed(42)).unwrap();

    assert_eq!(table.player().hand().len(), 2);
    assert_eq!(table.dealer().hand().len(), 2);
    assert_eq!(table.deck().len(), 48);
    assert_eq!(table.round(), 1);

    let mut all: HashSet<Card> = table.deck().cards().iter().copied().collect();
    for card in table.player().hand().cards.iter().chain(&table.dealer().hand().cards) {
        assert!(all.insert(*card), "duplicate card {card}");
    }
    assert_eq!(all.len(), 52);
    assert_eq!(table.history().dealt_cards().len(), 4);
}

#[test]
fn player_stays_dealer_hits_and_busts() {
    let mut table = new_table();
    // игрок 10+8=18, дилер 10+6=16 → добор 9 → 25
    table
        .start_round_with_deck(deck(&["10h", "10d", "8h", "6d", "9c"]))
        .unwrap();
    assert_eq!(table.phase(), GamePhase::TurnLoop);
    assert_eq!(table.current_turn(), Some(table.player().id()));

    let player = table.player().id();
    let phase = table.apply_action(Action::new(player, ActionKind::Stay)).unwrap();
    assert_eq!(phase, GamePhase::TurnLoop);
    assert_eq!(table.current_turn(), Some(table.dealer().id()));

    play_dealer(&mut table);
    assert_eq!(table.phase(), GamePhase::Resolution);
    assert_eq!(table.dealer().total(), 25);

    let result = table.finish_round().unwrap();
    assert_eq!(result.reason, RoundEnd::DealerBusted);
    assert_eq!(result.winner, Some(player));
    assert_eq!(table.phase(), GamePhase::Rematch);
}

#[test]
fn player_bust_ends_round_without_dealer_turn() {
    let mut table = new_table();
    table
        .start_round_with_deck(deck(&["10h", "10d", "6h", "7d", "Kc"]))
        .unwrap();

    let player = table.player().id();
    let phase = table.apply_action(Action::new(player, ActionKind::Hit)).unwrap();
    assert_eq!(phase, GamePhase::Resolution);
    assert!(table.player().is_busted());
    assert_eq!(table.dealer().hand().len(), 2);

    let result = table.finish_round().unwrap();
    assert_eq!(result.reason, RoundEnd::PlayerBusted);
    assert_eq!(result.winner, Some(table.dealer().id()));
}

#[test]
fn player_reaching_twenty_one_by_hitting_wins() {
    let mut table = new_table();
    table
        .start_round_with_deck(deck(&["5h", "10d", "6h", "9d", "Kc"]))
        .unwrap();

    let player = table.player().id();
    table.apply_action(Action::new(player, ActionKind::Hit)).unwrap();
    assert_eq!(table.phase(), GamePhase::Resolution);

    let result = table.finish_round().unwrap();
    assert_eq!(result.reason, RoundEnd::PlayerTwentyOne);
    assert_eq!(result.player_total, 21);
}

#[test]
fn natural_twenty_one_skips_the_turn_loop() {
    let mut table = new_table();
    table
        .start_round_with_deck(deck(&["Ah", "10d", "Kh", "9d"]))
        .unwrap();
    assert_eq!(table.phase(), GamePhase::Resolution);
    assert_eq!(table.current_turn(), None);

    let result = table.finish_round().unwrap();
    assert_eq!(result.winner, Some(table.player().id()));
    assert_eq!(result.reason, RoundEnd::PlayerTwentyOne);
}

#[test]
fn equal_totals_are_a_push() {
    let mut table = new_table();
    table
        .start_round_with_deck(deck(&["10h", "10d", "8h", "8d"]))
        .unwrap();

    let player = table.player().id();
    table.apply_action(Action::new(player, ActionKind::Stay)).unwrap();
    play_dealer(&mut table);

    let result = table.finish_round().unwrap();
    assert_eq!(result.reason, RoundEnd::Push);
    assert_eq!(result.winner, None);
    assert_eq!((result.player_total, result.dealer_total), (18, 18));
}

#[test]
fn higher_total_wins_either_way() {
    let mut table = new_table();
    table
        .start_round_with_deck(deck(&["10h", "10d", "9h", "7d"]))
        .unwrap();
    let player = table.player().id();
    table.apply_action(Action::new(player, ActionKind::Stay)).unwrap();
    play_dealer(&mut table);
    let result = table.finish_round().unwrap();
    assert_eq!(result.reason, RoundEnd::HigherTotal);
    assert_eq!(result.winner, Some(player));

    table.rematch(true).unwrap();
    table
        .start_round_with_deck(deck(&["10h", "10d", "7h", "9d"]))
        .unwrap();
    table.apply_action(Action::new(player, ActionKind::Stay)).unwrap();
    play_dealer(&mut table);
    let result = table.finish_round().unwrap();
    assert_eq!(result.reason, RoundEnd::HigherTotal);
    assert_eq!(result.winner, Some(table.dealer().id()));
}

#[test]
fn dealer_twenty_one_beats_lower_total() {
    let mut table = new_table();
    // дилер 10+6=16 → добор 5 → 21
    table
        .start_round_with_deck(deck(&["10h", "10d", "9h", "6d", "5c"]))
        .unwrap();
    let player = table.player().id();
    table.apply_action(Action::new(player, ActionKind::Stay)).unwrap();
    play_dealer(&mut table);

    let result = table.finish_round().unwrap();
    assert_eq!(result.reason, RoundEnd::DealerTwentyOne);
    assert_eq!(result.winner, Some(table.dealer().id()));
}

#[test]
fn illegal_actions_are_rejected() {
    let mut table = new_table();
    let player = table.player().id();
    let dealer = table.dealer().id();

    // до раздачи
    assert!(matches!(
        table.apply_action(Action::new(player, ActionKind::Hit)),
        Err(EngineError::WrongPhase)
    ));
    assert!(matches!(table.finish_round(), Err(EngineError::WrongPhase)));
    assert!(matches!(table.rematch(true), Err(EngineError::WrongPhase)));

    table
        .start_round_with_deck(deck(&["10h", "10d", "8h", "6d", "9c"]))
        .unwrap();
    assert!(matches!(
        table.start_round_with_deck(Deck::standard_52()),
        Err(EngineError::WrongPhase)
    ));
    assert!(matches!(
        table.apply_action(Action::new(dealer, ActionKind::Hit)),
        Err(EngineError::NotParticipantsTurn(id)) if id == dealer
    ));
    assert!(matches!(
        table.apply_action(Action::new(player, ActionKind::Mark(5))),
        Err(EngineError::IllegalAction)
    ));
    assert_eq!(table.player().hand().len(), 2);
}

#[test]
fn empty_deck_during_play_is_fatal() {
    let mut table = new_table();
    table
        .start_round_with_deck(deck(&["2h", "10d", "3h", "6d"]))
        .unwrap();
    let player = table.player().id();
    let events_before = table.history().len();
    assert!(matches!(
        table.apply_action(Action::new(player, ActionKind::Hit)),
        Err(EngineError::EmptyDeck)
    ));

    // несостоявшийся hit не попадает в историю, рука не меняется
    assert_eq!(table.history().len(), events_before);
    assert!(!table
        .history()
        .events
        .iter()
        .any(|e| matches!(e.kind, GameEventKind::ActionApplied { .. })));
    assert_eq!(table.player().hand().len(), 2);
}

#[test]
fn declining_rematch_changes_nothing_but_the_phase() {
    let mut table = new_table();
    table
        .start_round_with_deck(deck(&["Ah", "10d", "Kh", "9d"]))
        .unwrap();
    table.finish_round().unwrap();

    let player_hand = table.player().hand().clone();
    let dealer_hand = table.dealer().hand().clone();
    let deck_before = table.deck().clone();

    assert_eq!(table.rematch(false).unwrap(), GamePhase::End);
    assert_eq!(table.player().hand(), &player_hand);
    assert_eq!(table.dealer().hand(), &dealer_hand);
    assert_eq!(table.deck(), &deck_before);
}

#[test]
fn accepting_rematch_resets_to_dealing() {
    let mut table = new_table();
    table
        .start_round_with_deck(deck(&["Ah", "10d", "Kh", "9d"]))
        .unwrap();
    table.finish_round().unwrap();

    assert_eq!(table.rematch(true).unwrap(), GamePhase::Dealing);
    assert!(table.player().hand().is_empty());
    assert!(table.dealer().hand().is_empty());
    assert_eq!(table.current_turn(), None);

    table.start_round(&mut DeterministicRng::from_seed(9)).unwrap();
    assert_eq!(table.round(), 2);
    assert_eq!(table.deck().len(), 48);
}

// -----------------------------
// СЕССИЯ ЧЕРЕЗ КОНСОЛЬ
// -----------------------------

fn run_session(script: &str, seed: u64) -> (Result<SessionSummary, EngineError>, String, u64) {
    let registry = ParticipantRegistry::new();
    let mut console = Console::new(Cursor::new(script.to_string()), Vec::new());
    let mut rng = DeterministicRng::from_seed(seed);
    let result = run_twenty_one(&TwentyOneConfig::default(), &registry, &mut console, &mut rng);
    let out = String::from_utf8(console.into_output()).unwrap();
    (result, out, registry.total_created())
}

#[test]
fn session_plays_one_round_and_says_goodbye() {
    for seed in 0..10 {
        // если игроку сразу пришло 21, "s" уйдёт в вопрос о реванше и будет отклонено
        let (result, out, created) = run_session("Alice\ns\nn\n", seed);
        let summary = result.unwrap();
        assert_eq!(summary.rounds_played, 1);
        assert_eq!(summary.human_name, "Alice");
        assert_eq!(summary.human_wins + summary.automated_wins + summary.ties, 1);
        assert!(out.contains("Hi Alice!"));
        assert!(out.contains("---- Alice's Hand ----"));
        assert!(out.contains("Thanks for playing Twenty-One, Alice! Goodbye!"));
        assert_eq!(created, 2);
    }
}

/// Блок руки после заголовка `---- name's Hand ----`: строки карт до пустой/прочей строки.
fn hand_lines(block: &str) -> Vec<&str> {
    block
        .lines()
        .skip(1)
        .take_while(|l| l.starts_with("=> ") || l.starts_with("Total:"))
        .collect()
}

/// Пока игрок решает, вторая карта дилера скрыта; открывается в начале хода дилера.
#[test]
fn session_hides_dealer_card_until_dealer_turn() {
    let mut checked = 0;
    for seed in 0..10 {
        let (result, out, _) = run_session("Alice\ns\nn\n", seed);
        result.unwrap();

        // натуральные 21 – вопроса hit/stay не было
        let Some(prompt_at) = out.find("Hit (h) or stay (s)?") else {
            continue;
        };
        let before = &out[..prompt_at];
        let dealer_at = before.rfind("---- ").unwrap();
        let flop = hand_lines(&before[dealer_at..]);
        assert_eq!(flop.len(), 2, "seed {seed}: {flop:?}");
        assert_eq!(flop[1], "=> ??");
        assert!(!before[dealer_at..].contains("Total:"));

        let after = &out[prompt_at..];
        let turn_at = after.find("'s turn...").expect("dealer turn announced");
        let revealed_at = after[turn_at..]
            .match_indices("---- ")
            .nth(1)
            .map(|(i, _)| turn_at + i)
            .unwrap();
        let revealed = hand_lines(&after[revealed_at..]);
        assert_eq!(revealed[0], flop[0]);
        assert!(!before.contains(revealed[1]), "seed {seed}: hole card leaked");
        checked += 1;
    }
    assert!(checked > 0);
}

#[test]
fn session_rematch_plays_another_round() {
    for seed in 0..10 {
        let (result, out, _) = run_session("Bob\ns\ny\ns\nn\n", seed);
        let summary = result.unwrap();
        assert_eq!(summary.rounds_played, 2);
        assert!(out.contains("Let's play again."));
    }
}

#[test]
fn session_with_blank_name_reprompts() {
    let (result, out, _) = run_session("   \nCarol\ns\nn\n", 3);
    assert_eq!(result.unwrap().human_name, "Carol");
    assert!(out.contains("Invalid entry. Try again."));
}

#[test]
fn session_reports_closed_input() {
    let (result, _, _) = run_session("Alice\n", 1);
    assert!(matches!(result, Err(EngineError::InputClosed)));
}
