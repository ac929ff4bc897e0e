use serde::{Deserialize, Serialize};

use crate::domain::ParticipantId;
use crate::engine::errors::EngineError;

/// Что изменилось в счёте после одной партии.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreUpdate {
    pub game_winner: Option<ParticipantId>,
    /// Кто выиграл сет этой партией (счётчики партий после этого сброшены).
    pub set_winner: Option<ParticipantId>,
    /// Кто выиграл матч этой партией.
    pub match_winner: Option<ParticipantId>,
}

/// Счёт одного участника.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionScore {
    pub games: u32,
    pub sets: u32,
}

/// Счёт сессии для двух участников: партии → сеты → матч.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Scoreboard {
    participants: [ParticipantId; 2],
    scores: [SessionScore; 2],
    games_in_set: u32,
    sets_in_match: u32,
}

impl Scoreboard {
    pub fn new(
        first: ParticipantId,
        second: ParticipantId,
        games_in_set: u32,
        sets_in_match: u32,
    ) -> Self {
        Self {
            participants: [first, second],
            scores: [SessionScore::default(); 2],
            games_in_set,
            sets_in_match,
        }
    }

    fn slot(&self, id: ParticipantId) -> Result<usize, EngineError> {
        self.participants
            .iter()
            .position(|&p| p == id)
            .ok_or(EngineError::UnknownParticipant(id))
    }

    pub fn score_of(&self, id: ParticipantId) -> Option<SessionScore> {
        self.slot(id).ok().map(|i| self.scores[i])
    }

    pub fn games_of(&self, id: ParticipantId) -> u32 {
        self.score_of(id).map_or(0, |s| s.games)
    }

    pub fn sets_of(&self, id: ParticipantId) -> u32 {
        self.score_of(id).map_or(0, |s| s.sets)
    }

    pub fn games_in_set(&self) -> u32 {
        self.games_in_set
    }

    pub fn sets_in_match(&self) -> u32 {
        self.sets_in_match
    }

    /// Записать результат партии. `None` – ничья, счёт не меняется.
    pub fn record_game(&mut self, winner: Option<ParticipantId>) -> Result<ScoreUpdate, EngineError> {
        let mut update = ScoreUpdate {
            game_winner: winner,
            ..ScoreUpdate::default()
        };
        let Some(id) = winner else {
            return Ok(update);
        };

        let i = self.slot(id)?;
        self.scores[i].games += 1;

        if self.scores[i].games >= self.games_in_set {
            self.scores[i].sets += 1;
            self.reset_games();
            update.set_winner = Some(id);

            if self.scores[i].sets >= self.sets_in_match {
                update.match_winner = Some(id);
            }
        }
        Ok(update)
    }

    pub fn match_winner(&self) -> Option<ParticipantId> {
        self.participants
            .iter()
            .zip(self.scores.iter())
            .find(|(_, s)| s.sets >= self.sets_in_match)
            .map(|(&id, _)| id)
    }

    pub fn is_match_won(&self) -> bool {
        self.match_winner().is_some()
    }

    pub fn reset_games(&mut self) {
        for s in self.scores.iter_mut() {
            s.games = 0;
        }
    }

    /// Новый матч: обнуляем и партии, и сеты.
    pub fn reset(&mut self) {
        self.scores = [SessionScore::default(); 2];
    }
}
