//! Инфраструктурный слой вокруг движка:
//! - реестр участников (ID и счётчики);
//! - RNG-реализации для движка;
//! - консоль с комбинатором «проверь или переспроси».

pub mod console;
pub mod ids;
pub mod rng;

pub use console::*;
pub use ids::*;
pub use rng::*;
