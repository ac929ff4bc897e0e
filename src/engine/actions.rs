use serde::{Deserialize, Serialize};

use crate::domain::{Cell, ParticipantId};

/// Тип действия участника.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActionKind {
    /// Взять ещё карту.
    Hit,
    /// Остановиться.
    Stay,
    /// Поставить свой маркер на клетку.
    Mark(Cell),
}

/// Конкретное действие участника.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Action {
    /// Какой участник действует.
    pub participant: ParticipantId,
    /// Само действие.
    pub kind: ActionKind,
}

impl Action {
    pub fn new(participant: ParticipantId, kind: ActionKind) -> Self {
        Self { participant, kind }
    }
}
