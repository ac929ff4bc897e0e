//! Текстовое представление состояния для консоли.
//! Только форматирование – никакой логики игры.

use std::fmt::{Display, Write as _};

use crate::domain::{Board, Hand, HandHolder, Marker, Participant, Scoreboard};

/// "1", "1 or 2", "1, 2, or 3".
pub fn join_or<T: Display>(items: &[T], delim: &str, conj: &str) -> String {
    match items {
        [] => String::new(),
        [one] => one.to_string(),
        [a, b] => format!("{a} {conj} {b}"),
        [init @ .., last] => {
            let head: Vec<String> = init.iter().map(ToString::to_string).collect();
            format!("{}{delim}{conj} {last}", head.join(delim))
        }
    }
}

/// Рука участника с суммой.
pub fn render_hand(participant: &Participant<Hand>) -> String {
    let mut out = format!("---- {}'s Hand ----\n", participant.name());
    for card in &participant.hand().cards {
        let _ = writeln!(out, "=> {card}");
    }
    let _ = write!(out, "Total: {}", participant.total());
    out
}

/// Рука дилера во время хода игрока: первая карта открыта,
/// остальные скрыты, без суммы.
pub fn render_flop(participant: &Participant<Hand>) -> String {
    let mut out = format!("---- {}'s Hand ----", participant.name());
    let mut cards = participant.hand().cards.iter();
    if let Some(first) = cards.next() {
        let _ = write!(out, "\n=> {first}");
    }
    if cards.next().is_some() {
        out.push_str("\n=> ??");
    }
    out
}

/// Доска 3x3 с маркерами.
pub fn render_board(board: &Board) -> String {
    let cell = |c: u8| board.get(c).map_or(' ', |m| m.symbol());
    let mut out = String::new();
    for (row, start) in [1u8, 4, 7].into_iter().enumerate() {
        if row > 0 {
            out.push_str("-----+-----+-----\n");
        }
        out.push_str("     |     |     \n");
        let _ = writeln!(
            out,
            "  {}  |  {}  |  {}  ",
            cell(start),
            cell(start + 1),
            cell(start + 2)
        );
        out.push_str("     |     |     \n");
    }
    out
}

/// Счёт сессии: сеты и партии.
pub fn render_scoreboard(
    scoreboard: &Scoreboard,
    first: &Participant<Marker>,
    second: &Participant<Marker>,
) -> String {
    let header = format!("== {} vs {} ==", first.name(), second.name());
    let width = header.chars().count();
    let sets = format!("{} - {}", scoreboard.sets_of(first.id()), scoreboard.sets_of(second.id()));
    let games = format!("{} - {}", scoreboard.games_of(first.id()), scoreboard.games_of(second.id()));

    let mut out = String::new();
    let _ = writeln!(out, "{header}");
    let _ = writeln!(out, "{:^width$}", "Sets:");
    let _ = writeln!(out, "{sets:^width$}");
    let _ = writeln!(out, "{:^width$}", "Games:");
    let _ = writeln!(out, "{games:^width$}");
    out.push_str(&"=".repeat(width));
    out
}
