//! Пошаговый игровой движок: двадцать одно и крестики-нолики.
//!
//! Высокоуровневые объекты: `TwentyOneTable`, `TicTacToeTable`.
//! Каждая игра – конечный автомат по `GamePhase`:
//!   Dealing → TurnLoop → Resolution → (Rematch | End)
//!
//! Сессии с консолью (`run_twenty_one`, `run_tic_tac_toe`) живут в `game_loop`.

pub mod actions;
pub mod errors;
pub mod game_loop;
pub mod history;
pub mod tic_tac_toe;
pub mod twenty_one;
pub mod validation;

use serde::{Deserialize, Serialize};

pub use actions::{Action, ActionKind};
pub use errors::EngineError;
pub use game_loop::{run_tic_tac_toe, run_twenty_one, SessionSummary};
pub use history::{GameEvent, GameEventKind, GameHistory};
pub use tic_tac_toe::{GameResult, TicTacToeTable};
pub use twenty_one::{RoundEnd, RoundResult, TwentyOneTable};

/// Фаза игры.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GamePhase {
    /// Новая колода / пустая доска, раздача стартовых рук.
    Dealing,
    /// Участники ходят по очереди.
    TurnLoop,
    /// Терминальное условие наступило, нужно подвести итог.
    Resolution,
    /// Итог подведён, ждём решения о следующей партии.
    Rematch,
    /// Сессия окончена.
    End,
}

/// RNG интерфейс для engine.
/// Реализации – в infra (обёртки над `rand`).
pub trait RandomSource {
    /// Равномерная перестановка.
    fn shuffle<T>(&mut self, slice: &mut [T]);

    /// Случайный индекс в 0..len. Для пустого диапазона – None.
    fn pick_index(&mut self, len: usize) -> Option<usize>;
}
