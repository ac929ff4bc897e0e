use serde::{Deserialize, Serialize};

use crate::domain::marker::Marker;
use crate::engine::errors::EngineError;

/// Номер клетки доски (1..=9, слева направо, сверху вниз).
pub type Cell = u8;

pub const CENTER_CELL: Cell = 5;

/// 8 выигрышных линий: 3 строки, 3 столбца, 2 диагонали.
pub const WINNING_LINES: [[Cell; 3]; 8] = [
    [1, 2, 3],
    [4, 5, 6],
    [7, 8, 9],
    [1, 4, 7],
    [2, 5, 8],
    [3, 6, 9],
    [1, 5, 9],
    [3, 5, 7],
];

/// Заполненная линия и чей на ней маркер.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Line {
    pub cells: [Cell; 3],
    pub marker: Marker,
}

/// Доска 3x3. Меняется только через `place` и `reset`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Marker>; 9],
}

impl Board {
    pub fn new() -> Self {
        Self { cells: [None; 9] }
    }

    pub fn reset(&mut self) {
        self.cells = [None; 9];
    }

    fn index(cell: Cell) -> Result<usize, EngineError> {
        if (1..=9).contains(&cell) {
            Ok(usize::from(cell - 1))
        } else {
            Err(EngineError::CellOutOfRange(cell))
        }
    }

    /// Маркер на клетке. Для клетки вне 1..=9 – None.
    pub fn get(&self, cell: Cell) -> Option<Marker> {
        Self::index(cell).ok().and_then(|i| self.cells[i])
    }

    /// Единственная точка изменения доски.
    pub fn place(&mut self, cell: Cell, marker: Marker) -> Result<(), EngineError> {
        let i = Self::index(cell)?;
        if self.cells[i].is_some() {
            return Err(EngineError::CellOccupied(cell));
        }
        self.cells[i] = Some(marker);
        Ok(())
    }

    pub fn unmarked_cells(&self) -> Vec<Cell> {
        (1..=9).filter(|&c| self.get(c).is_none()).collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn is_center_empty(&self) -> bool {
        self.get(CENTER_CELL).is_none()
    }

    pub fn marked_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Первая полностью совпадающая линия (в порядке `WINNING_LINES`).
    pub fn lines_complete(&self) -> Option<Line> {
        WINNING_LINES.iter().find_map(|line| {
            let first = self.get(line[0])?;
            let same = line[1..].iter().all(|&c| self.get(c) == Some(first));
            same.then_some(Line {
                cells: *line,
                marker: first,
            })
        })
    }

    pub fn winning_marker(&self) -> Option<Marker> {
        self.lines_complete().map(|l| l.marker)
    }

    /// Игра на доске окончена: есть линия или нет пустых клеток.
    pub fn is_terminal(&self) -> bool {
        self.lines_complete().is_some() || self.is_full()
    }
}
