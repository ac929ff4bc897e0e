use crate::domain::{Board, Cell, Marker, CENTER_CELL, WINNING_LINES};
use crate::engine::RandomSource;

/// Первая линия, где у `mine` ровно `own` маркеров, у `theirs` – `foreign`,
/// и ровно одна пустая клетка. Возвращает эту пустую клетку.
fn find_line_gap(board: &Board, mine: Marker, theirs: Marker, own: usize, foreign: usize) -> Option<Cell> {
    WINNING_LINES.iter().find_map(|line| {
        let count = |m: Marker| line.iter().filter(|&&c| board.get(c) == Some(m)).count();
        let empty: Vec<Cell> = line.iter().copied().filter(|&c| board.get(c).is_none()).collect();

        (count(mine) == own && count(theirs) == foreign && empty.len() == 1).then(|| empty[0])
    })
}

/// Клетка, которая сразу выигрывает партию.
pub fn winning_cell(board: &Board, mine: Marker, theirs: Marker) -> Option<Cell> {
    find_line_gap(board, mine, theirs, 2, 0)
}

/// Клетка, которая блокирует немедленную победу соперника.
pub fn blocking_cell(board: &Board, mine: Marker, theirs: Marker) -> Option<Cell> {
    find_line_gap(board, mine, theirs, 0, 2)
}

/// Жадная эвристика компьютера:
/// победа > блок > центр > случайная пустая клетка.
/// None – только если доска заполнена.
pub fn choose_cell<R: RandomSource>(
    board: &Board,
    mine: Marker,
    theirs: Marker,
    rng: &mut R,
) -> Option<Cell> {
    if let Some(cell) = winning_cell(board, mine, theirs) {
        return Some(cell);
    }
    if let Some(cell) = blocking_cell(board, mine, theirs) {
        return Some(cell);
    }
    if board.is_center_empty() {
        return Some(CENTER_CELL);
    }
    let free = board.unmarked_cells();
    rng.pick_index(free.len()).map(|i| free[i])
}
