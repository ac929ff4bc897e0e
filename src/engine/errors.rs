use crate::domain::{Cell, ParticipantId};

use thiserror::Error;

/// Ошибки игрового движка.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Нарушение инварианта: при двух участниках колода не кончается.
    #[error("Колода пуста – нечего сдавать")]
    EmptyDeck,

    #[error("Клетки {0} нет на доске (допустимо 1–9)")]
    CellOutOfRange(Cell),

    #[error("Клетка {0} уже занята")]
    CellOccupied(Cell),

    #[error("Участник {0} не найден в этой игре")]
    UnknownParticipant(ParticipantId),

    #[error("Сейчас не ход участника с id={0}")]
    NotParticipantsTurn(ParticipantId),

    #[error("Недопустимое действие для этой игры")]
    IllegalAction,

    #[error("Действие невозможно в текущей фазе игры")]
    WrongPhase,

    #[error("Ввод закрыт (EOF)")]
    InputClosed,

    #[error("Ошибка ввода-вывода: {0}")]
    Io(#[from] std::io::Error),
}
