use crate::domain::{Board, Cell, ParticipantId};
use crate::engine::actions::{Action, ActionKind};
use crate::engine::errors::EngineError;
use crate::engine::GamePhase;

/// Общая часть: фаза хода и очередь участника.
fn validate_turn(
    phase: GamePhase,
    turn: Option<ParticipantId>,
    action: &Action,
) -> Result<(), EngineError> {
    if phase != GamePhase::TurnLoop {
        return Err(EngineError::WrongPhase);
    }
    match turn {
        Some(id) if id == action.participant => Ok(()),
        _ => Err(EngineError::NotParticipantsTurn(action.participant)),
    }
}

/// Проверка действия в двадцать одно: только hit / stay.
pub fn validate_card_action(
    phase: GamePhase,
    turn: Option<ParticipantId>,
    action: &Action,
) -> Result<(), EngineError> {
    validate_turn(phase, turn, action)?;
    match action.kind {
        ActionKind::Hit | ActionKind::Stay => Ok(()),
        ActionKind::Mark(_) => Err(EngineError::IllegalAction),
    }
}

/// Проверка хода в крестики-нолики. Возвращает клетку, куда можно ставить.
pub fn validate_board_action(
    phase: GamePhase,
    turn: Option<ParticipantId>,
    board: &Board,
    action: &Action,
) -> Result<Cell, EngineError> {
    validate_turn(phase, turn, action)?;
    let ActionKind::Mark(cell) = action.kind else {
        return Err(EngineError::IllegalAction);
    };
    if !(1..=9).contains(&cell) {
        return Err(EngineError::CellOutOfRange(cell));
    }
    if board.get(cell).is_some() {
        return Err(EngineError::CellOccupied(cell));
    }
    Ok(cell)
}
