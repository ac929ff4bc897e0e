//! Игровые сессии поверх движка: консоль ↔ конечный автомат стола.
//!
//! Каждая сессия крутит `match table.phase()` до `GamePhase::End`:
//! Dealing → TurnLoop → Resolution → Rematch → (Dealing | End).

use std::io::{BufRead, Write};

use log::info;
use serde::{Deserialize, Serialize};

use crate::config::{FirstMove, TicTacToeConfig, TwentyOneConfig};
use crate::domain::{Hand, Participant, ParticipantId, ParticipantKind};
use crate::engine::actions::{Action, ActionKind};
use crate::engine::errors::EngineError;
use crate::engine::tic_tac_toe::{GameResult, TicTacToeTable};
use crate::engine::twenty_one::{RoundEnd, RoundResult, TwentyOneTable};
use crate::engine::{GamePhase, RandomSource};
use crate::infra::{Console, ParticipantRegistry};
use crate::players::{human, pick_name};
use crate::view::{render_board, render_flop, render_hand, render_scoreboard};

/// Итог сессии для вызывающего кода.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionSummary {
    pub human_name: String,
    pub rounds_played: u32,
    pub human_wins: u32,
    pub automated_wins: u32,
    pub ties: u32,
}

impl SessionSummary {
    fn new(human_name: &str) -> Self {
        Self {
            human_name: human_name.to_string(),
            ..Self::default()
        }
    }

    fn record(&mut self, winner: Option<ParticipantId>, human: ParticipantId) {
        self.rounds_played += 1;
        match winner {
            Some(id) if id == human => self.human_wins += 1,
            Some(_) => self.automated_wins += 1,
            None => self.ties += 1,
        }
    }
}

// -----------------------------
// ДВАДЦАТЬ ОДНО
// -----------------------------

/// Сессия двадцати одного: человек против дилера, пока человек не откажется.
pub fn run_twenty_one<R: BufRead, W: Write, G: RandomSource>(
    config: &TwentyOneConfig,
    registry: &ParticipantRegistry,
    console: &mut Console<R, W>,
    rng: &mut G,
) -> Result<SessionSummary, EngineError> {
    console.say("Welcome to Twenty-One!")?;
    let name = human::ask_name(console)?;
    console.say(format!("Hi {name}!"))?;

    let player = Participant::new(
        registry.register(name.clone(), ParticipantKind::Human),
        ParticipantKind::Human,
        Hand::new(),
    );
    let dealer = Participant::new(
        registry.register(pick_name(&config.dealer_names, rng), ParticipantKind::Automated),
        ParticipantKind::Automated,
        Hand::new(),
    );
    let mut table = TwentyOneTable::new(config.clone(), player, dealer);
    let mut summary = SessionSummary::new(&name);

    loop {
        match table.phase() {
            GamePhase::Dealing => {
                table.start_round(rng)?;
                show_flop(console, &table)?;
            }
            GamePhase::TurnLoop => {
                let actor = table.current_participant().ok_or(EngineError::WrongPhase)?;
                let kind = actor.decide_twenty_one(table.config(), console)?;
                let (id, actor_name) = (actor.id(), actor.name().to_string());
                let was_player = id == table.player().id();

                table.apply_action(Action::new(id, kind))?;
                match kind {
                    ActionKind::Hit => console.say(format!("{actor_name} hits."))?,
                    _ => console.say(format!("{actor_name} stays."))?,
                }

                let dealer_id = table.dealer().id();
                if was_player && table.current_turn() == Some(dealer_id) {
                    // карта дилера открывается только с началом его хода
                    console.say(format!("{}'s turn...", table.dealer().name()))?;
                    show_hands(console, &table)?;
                } else if was_player && table.current_turn() == Some(id) {
                    show_flop(console, &table)?;
                } else if !was_player && kind == ActionKind::Hit {
                    console.say(render_hand(table.dealer()))?;
                }
            }
            GamePhase::Resolution => {
                let result = table.finish_round()?;
                show_hands(console, &table)?;
                console.say(describe_round(&table, &result))?;
                summary.record(result.winner, table.player().id());
            }
            GamePhase::Rematch => {
                let again = console.confirm("Play again? (y/n)")?;
                table.rematch(again)?;
                if again {
                    console.say("Let's play again.")?;
                }
            }
            GamePhase::End => break,
        }
    }

    info!(
        "twenty-one: сессия окончена, раундов {}, участников создано {}",
        summary.rounds_played,
        registry.total_created()
    );
    console.say(format!("Thanks for playing Twenty-One, {name}! Goodbye!"))?;
    Ok(summary)
}

fn show_hands<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    table: &TwentyOneTable,
) -> Result<(), EngineError> {
    console.say(render_hand(table.player()))?;
    console.say(render_hand(table.dealer()))
}

/// Пока ходит игрок, у дилера видна только первая карта.
fn show_flop<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    table: &TwentyOneTable,
) -> Result<(), EngineError> {
    console.say(render_hand(table.player()))?;
    console.say(render_flop(table.dealer()))
}

/// Текст итога раунда.
pub fn describe_round(table: &TwentyOneTable, result: &RoundResult) -> String {
    let player = table.player().name();
    let dealer = table.dealer().name();
    match result.reason {
        RoundEnd::PlayerBusted => format!("{player} busted! {dealer} wins!"),
        RoundEnd::PlayerTwentyOne => format!("Twenty-one! {player} wins!"),
        RoundEnd::DealerBusted => format!("{dealer} busted! {player} wins!"),
        RoundEnd::DealerTwentyOne => format!("Twenty-one! {dealer} wins!"),
        RoundEnd::HigherTotal if result.player_total > result.dealer_total => format!(
            "{player} wins, {} to {}!",
            result.player_total, result.dealer_total
        ),
        RoundEnd::HigherTotal => format!(
            "{dealer} wins, {} to {}!",
            result.dealer_total, result.player_total
        ),
        RoundEnd::Push => format!(
            "It's a push, {} to {}.",
            result.player_total, result.dealer_total
        ),
    }
}

// -----------------------------
// КРЕСТИКИ-НОЛИКИ
// -----------------------------

/// Сессия крестиков-ноликов с подсчётом партий, сетов и матча.
pub fn run_tic_tac_toe<R: BufRead, W: Write, G: RandomSource>(
    config: &TicTacToeConfig,
    registry: &ParticipantRegistry,
    console: &mut Console<R, W>,
    rng: &mut G,
) -> Result<SessionSummary, EngineError> {
    console.say("Welcome to Tic Tac Toe!")?;
    let name = human::ask_name(console)?;
    console.say(format!("Hi {name}!"))?;
    let marker = human::ask_marker(console, config.computer_marker)?;

    let human_player = Participant::new(
        registry.register(name.clone(), ParticipantKind::Human),
        ParticipantKind::Human,
        marker,
    );
    let computer = Participant::new(
        registry.register(pick_name(&config.computer_names, rng), ParticipantKind::Automated),
        ParticipantKind::Automated,
        config.computer_marker,
    );
    console.say(format!(
        "It's {} games to win a set and {} sets to win a match.",
        config.games_in_set, config.sets_in_match
    ))?;

    let mut table = TicTacToeTable::new(config.clone(), human_player, computer);
    let mut summary = SessionSummary::new(&name);

    loop {
        match table.phase() {
            GamePhase::Dealing => {
                let human_id = table.human().id();
                let first = match table.config().first_move {
                    FirstMove::Choose if human::ask_go_first(console)? => human_id,
                    FirstMove::Choose | FirstMove::Computer => table.computer().id(),
                    FirstMove::Human => human_id,
                };
                table.start_game(first)?;
                if first == human_id {
                    show_table(console, &table)?;
                }
            }
            GamePhase::TurnLoop => {
                let actor = table.current_participant().ok_or(EngineError::WrongPhase)?;
                let opponent = table
                    .opponent_of(actor.id())
                    .ok_or(EngineError::UnknownParticipant(actor.id()))?
                    .marker();
                let cell = actor.decide_cell(table.board(), opponent, console, rng)?;
                let (id, actor_name, was_human) =
                    (actor.id(), actor.name().to_string(), actor.is_human());

                let phase = table.apply_action(Action::new(id, ActionKind::Mark(cell)))?;
                if !was_human {
                    console.say(format!("{actor_name} chooses square {cell}."))?;
                }
                if phase == GamePhase::TurnLoop && !was_human {
                    show_table(console, &table)?;
                }
            }
            GamePhase::Resolution => {
                let result = table.finish_game()?;
                show_table(console, &table)?;
                announce_game(console, &table, &result)?;
                summary.record(result.winner, table.human().id());
            }
            GamePhase::Rematch => {
                let prompt = if table.scoreboard().is_match_won() {
                    "Play a fresh match? (y/n)"
                } else {
                    "Ready for the next game? (y/n)"
                };
                let again = console.confirm(prompt)?;
                table.rematch(again)?;
            }
            GamePhase::End => break,
        }
    }

    info!(
        "tic-tac-toe: сессия окончена, партий {}, участников создано {}",
        summary.rounds_played,
        registry.total_created()
    );
    console.say(format!("Thanks for playing Tic Tac Toe, {name}! Goodbye!"))?;
    Ok(summary)
}

fn show_table<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    table: &TicTacToeTable,
) -> Result<(), EngineError> {
    console.say(render_scoreboard(table.scoreboard(), table.human(), table.computer()))?;
    console.say(format!(
        "You are {}'s. {} is {}'s.",
        table.human().marker(),
        table.computer().name(),
        table.computer().marker()
    ))?;
    console.say(render_board(table.board()))
}

fn announce_game<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    table: &TicTacToeTable,
    result: &GameResult,
) -> Result<(), EngineError> {
    let name_of = |id: ParticipantId| {
        table
            .participant(id)
            .map_or_else(|| format!("#{id}"), |p| p.name().to_string())
    };

    match result.winner {
        Some(id) if id == table.human().id() => console.say("You won!")?,
        Some(id) => console.say(format!("{} won!", name_of(id)))?,
        None => console.say("It's a tie!")?,
    }
    if let Some(id) = result.score.set_winner {
        console.say(format!("{} won the set!", name_of(id)))?;
    }
    if let Some(id) = result.score.match_winner {
        console.say(format!("{} won the match!", name_of(id)))?;
    }
    Ok(())
}
