//! Принятие решений участниками.
//!
//! `Participant` – размеченный вариант {Human, Automated}: человек отвечает
//! через консоль, автоматический участник – через эвристику.

pub mod computer;
pub mod dealer;
pub mod human;

use std::io::{BufRead, Write};

use crate::config::TwentyOneConfig;
use crate::domain::{Board, Cell, Hand, HandHolder, Marker, Participant, ParticipantKind};
use crate::engine::{ActionKind, EngineError, RandomSource};
use crate::infra::Console;

pub use computer::{blocking_cell, choose_cell, winning_cell};
pub use dealer::dealer_decision;

impl Participant<Hand> {
    /// Решение в двадцать одно: hit или stay.
    pub fn decide_twenty_one<R: BufRead, W: Write>(
        &self,
        config: &TwentyOneConfig,
        console: &mut Console<R, W>,
    ) -> Result<ActionKind, EngineError> {
        match self.kind {
            ParticipantKind::Human => human::ask_hit_or_stay(console),
            ParticipantKind::Automated => Ok(dealer_decision(self.total(), config.dealer_stands_at)),
        }
    }
}

impl Participant<Marker> {
    /// Решение в крестиках-ноликах: клетка для своего маркера.
    pub fn decide_cell<R: BufRead, W: Write, G: RandomSource>(
        &self,
        board: &Board,
        opponent: Marker,
        console: &mut Console<R, W>,
        rng: &mut G,
    ) -> Result<Cell, EngineError> {
        match self.kind {
            ParticipantKind::Human => human::ask_cell(console, &board.unmarked_cells()),
            ParticipantKind::Automated => {
                choose_cell(board, self.marker(), opponent, rng).ok_or(EngineError::IllegalAction)
            }
        }
    }
}

/// Случайное имя для автоматического участника.
pub fn pick_name<R: RandomSource>(names: &[String], rng: &mut R) -> String {
    rng.pick_index(names.len())
        .map(|i| names[i].clone())
        .unwrap_or_else(|| "Computer".to_string())
}
