use log::info;
use serde::{Deserialize, Serialize};

use crate::config::TicTacToeConfig;
use crate::domain::{Board, Line, Marker, Participant, ParticipantId, ScoreUpdate, Scoreboard};
use crate::engine::actions::Action;
use crate::engine::errors::EngineError;
use crate::engine::history::{GameEventKind, GameHistory};
use crate::engine::validation::validate_board_action;
use crate::engine::GamePhase;

/// Итог одной партии.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameResult {
    /// None – ничья (доска заполнена без линии).
    pub winner: Option<ParticipantId>,
    pub line: Option<Line>,
    pub score: ScoreUpdate,
}

/// Состояние крестиков-ноликов: доска, двое участников, счёт сессии.
pub struct TicTacToeTable {
    config: TicTacToeConfig,
    board: Board,
    human: Participant<Marker>,
    computer: Participant<Marker>,
    scoreboard: Scoreboard,
    phase: GamePhase,
    turn: Option<ParticipantId>,
    game_no: u32,
    history: GameHistory,
}

impl TicTacToeTable {
    pub fn new(
        config: TicTacToeConfig,
        human: Participant<Marker>,
        computer: Participant<Marker>,
    ) -> Self {
        let scoreboard = Scoreboard::new(
            human.id(),
            computer.id(),
            config.games_in_set,
            config.sets_in_match,
        );
        Self {
            config,
            board: Board::new(),
            human,
            computer,
            scoreboard,
            phase: GamePhase::Dealing,
            turn: None,
            game_no: 0,
            history: GameHistory::new(),
        }
    }

    pub fn config(&self) -> &TicTacToeConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn human(&self) -> &Participant<Marker> {
        &self.human
    }

    pub fn computer(&self) -> &Participant<Marker> {
        &self.computer
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn current_turn(&self) -> Option<ParticipantId> {
        self.turn
    }

    pub fn games_played(&self) -> u32 {
        self.game_no
    }

    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    pub fn participant(&self, id: ParticipantId) -> Option<&Participant<Marker>> {
        if id == self.human.id() {
            Some(&self.human)
        } else if id == self.computer.id() {
            Some(&self.computer)
        } else {
            None
        }
    }

    /// Соперник участника `id`.
    pub fn opponent_of(&self, id: ParticipantId) -> Option<&Participant<Marker>> {
        if id == self.human.id() {
            Some(&self.computer)
        } else if id == self.computer.id() {
            Some(&self.human)
        } else {
            None
        }
    }

    pub fn current_participant(&self) -> Option<&Participant<Marker>> {
        self.turn.and_then(|id| self.participant(id))
    }

    fn owner_of(&self, marker: Marker) -> Option<ParticipantId> {
        if marker == self.human.marker() {
            Some(self.human.id())
        } else if marker == self.computer.marker() {
            Some(self.computer.id())
        } else {
            None
        }
    }

    /// Новая партия: пустая доска, первым ходит `first`.
    pub fn start_game(&mut self, first: ParticipantId) -> Result<(), EngineError> {
        if self.phase != GamePhase::Dealing {
            return Err(EngineError::WrongPhase);
        }
        if self.participant(first).is_none() {
            return Err(EngineError::UnknownParticipant(first));
        }

        self.board.reset();
        self.history.clear();
        self.game_no += 1;
        self.history.push(GameEventKind::RoundStarted {
            round: self.game_no,
        });
        info!(
            "tic-tac-toe: партия {} – первым ходит участник {}",
            self.game_no, first
        );

        self.turn = Some(first);
        self.phase = GamePhase::TurnLoop;
        Ok(())
    }

    /// Поставить маркер. Возвращает фазу после хода.
    pub fn apply_action(&mut self, action: Action) -> Result<GamePhase, EngineError> {
        let cell = validate_board_action(self.phase, self.turn, &self.board, &action)?;
        let unknown = EngineError::UnknownParticipant(action.participant);
        let (marker, next) = match (
            self.participant(action.participant),
            self.opponent_of(action.participant),
        ) {
            (Some(me), Some(opponent)) => (me.marker(), opponent.id()),
            _ => return Err(unknown),
        };

        self.board.place(cell, marker)?;
        self.history.push(GameEventKind::MarkerPlaced {
            participant: action.participant,
            cell,
            marker,
        });

        if self.board.is_terminal() {
            self.turn = None;
            self.phase = GamePhase::Resolution;
        } else {
            self.turn = Some(next);
        }
        Ok(self.phase)
    }

    /// Подвести итог партии и записать счёт: Resolution → Rematch.
    pub fn finish_game(&mut self) -> Result<GameResult, EngineError> {
        if self.phase != GamePhase::Resolution {
            return Err(EngineError::WrongPhase);
        }
        let line = self.board.lines_complete();
        let winner = line.and_then(|l| self.owner_of(l.marker));
        let score = self.scoreboard.record_game(winner)?;

        self.history.push(GameEventKind::RoundFinished {
            round: self.game_no,
            winner,
        });
        self.history.push(GameEventKind::ScoreUpdated { update: score });
        info!(
            "tic-tac-toe: партия {} завершена, победитель {:?}",
            self.game_no, winner
        );

        self.phase = GamePhase::Rematch;
        Ok(GameResult {
            winner,
            line,
            score,
        })
    }

    /// Решение о следующей партии. Если матч уже выигран,
    /// согласие начинает новый матч с нулевым счётом.
    pub fn rematch(&mut self, again: bool) -> Result<GamePhase, EngineError> {
        if self.phase != GamePhase::Rematch {
            return Err(EngineError::WrongPhase);
        }
        if again {
            if self.scoreboard.is_match_won() {
                self.scoreboard.reset();
            }
            self.board.reset();
            self.phase = GamePhase::Dealing;
        } else {
            self.phase = GamePhase::End;
        }
        Ok(self.phase)
    }
}
