//! Доменная модель: карты, колода, рука, маркеры, доска, участники, счёт сессии.

pub mod board;
pub mod card;
pub mod deck;
pub mod hand;
pub mod marker;
pub mod participant;
pub mod scoreboard;

pub type ParticipantId = u64;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use board::*;
pub use card::*;
pub use deck::*;
pub use hand::*;
pub use marker::*;
pub use participant::*;
pub use scoreboard::*;
