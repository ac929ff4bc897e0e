use std::io::{BufRead, Write};

use crate::domain::{Cell, Marker};
use crate::engine::{ActionKind, EngineError};
use crate::infra::Console;
use crate::view::join_or;

/// Имя игрока: непустая строка без пробелов по краям.
pub fn ask_name<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<String, EngineError> {
    console.ask("What's your name?", |line| {
        let name = line.trim();
        if name.is_empty() {
            Err("Invalid entry. Try again.".to_string())
        } else {
            Ok(name.to_string())
        }
    })
}

/// Маркер игрока: ровно один символ и не маркер компьютера.
pub fn ask_marker<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    taken: Marker,
) -> Result<Marker, EngineError> {
    console.ask("Which marker would you like to play with?", |line| {
        match line.parse::<Marker>() {
            Ok(m) if m.clashes_with(taken) => {
                Err("Sorry, that's the computer's marker. Try again.".to_string())
            }
            Ok(m) => Ok(m),
            Err(_) => Err("Entries must be exactly 1 character in length. Try again.".to_string()),
        }
    })
}

pub fn ask_hit_or_stay<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<ActionKind, EngineError> {
    console.ask("Hit (h) or stay (s)?", |line| {
        match line.trim().to_ascii_lowercase().as_str() {
            "h" => Ok(ActionKind::Hit),
            "s" => Ok(ActionKind::Stay),
            _ => Err("Invalid entry. Try again.".to_string()),
        }
    })
}

/// Номер клетки из списка допустимых.
pub fn ask_cell<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    legal: &[Cell],
) -> Result<Cell, EngineError> {
    let prompt = format!("Choose a square ({}): ", join_or(legal, ", ", "or"));
    console.ask(&prompt, |line| match line.trim().parse::<Cell>() {
        Ok(cell) if legal.contains(&cell) => Ok(cell),
        _ => Err("Sorry, that's not a valid choice.".to_string()),
    })
}

pub fn ask_go_first<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<bool, EngineError> {
    console.confirm("Would you like to go first? (y/n)")
}
