//! Пошаговые консольные игры: двадцать одно и крестики-нолики.
//!
//! Слои (от листьев к корню):
//!   - `domain` – карты, колода, рука, маркеры, доска, участники, счёт;
//!   - `players` – решения участников (консоль / эвристики);
//!   - `engine` – конечные автоматы столов и игровые сессии;
//!   - `infra` – RNG, реестр участников, консоль;
//!   - `view` – текстовое представление;
//!   - `config` – настройки игр.

pub mod config;
pub mod domain;
pub mod engine;
pub mod infra;
pub mod players;
pub mod view;

pub use config::{ConfigError, FirstMove, GameConfig, TicTacToeConfig, TwentyOneConfig};
pub use engine::{run_tic_tac_toe, run_twenty_one, EngineError, SessionSummary};
