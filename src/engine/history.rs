use log::debug;
use serde::{Deserialize, Serialize};

use crate::domain::{Card, Cell, Marker, ParticipantId, ScoreUpdate};
use crate::engine::actions::ActionKind;

/// Тип события в партии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum GameEventKind {
    /// Новая раздача / партия началась.
    RoundStarted {
        round: u32,
    },

    /// Участник получил карту.
    CardDealt {
        participant: ParticipantId,
        card: Card,
    },

    /// Действие участника принято движком.
    ActionApplied {
        participant: ParticipantId,
        action: ActionKind,
    },

    /// Маркер поставлен на доску.
    MarkerPlaced {
        participant: ParticipantId,
        cell: Cell,
        marker: Marker,
    },

    /// Партия завершена. None – ничья / push.
    RoundFinished {
        round: u32,
        winner: Option<ParticipantId>,
    },

    /// Счёт сессии обновлён.
    ScoreUpdated {
        update: ScoreUpdate,
    },
}

/// Событие с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GameEvent {
    pub index: u32,
    pub kind: GameEventKind,
}

/// История текущей партии.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct GameHistory {
    pub events: Vec<GameEvent>,
}

impl GameHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: GameEventKind) {
        let idx = self.events.len() as u32;
        let event = GameEvent { index: idx, kind };
        match serde_json::to_string(&event) {
            Ok(json) => debug!("event {json}"),
            Err(e) => debug!("event #{idx} (не сериализуется: {e})"),
        }
        self.events.push(event);
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Все карты, сданные в этой партии, в порядке раздачи.
    pub fn dealt_cards(&self) -> Vec<Card> {
        self.events
            .iter()
            .filter_map(|e| match e.kind {
                GameEventKind::CardDealt { card, .. } => Some(card),
                _ => None,
            })
            .collect()
    }
}
