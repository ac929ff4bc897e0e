use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Маркер на клетке доски: один видимый символ.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Marker(char);

impl Marker {
    pub const X: Marker = Marker('X');
    pub const O: Marker = Marker('O');

    /// Маркер из символа. Пробельные и управляющие символы не подходят.
    pub fn new(symbol: char) -> Option<Self> {
        if symbol.is_whitespace() || symbol.is_control() {
            None
        } else {
            Some(Marker(symbol))
        }
    }

    pub fn symbol(&self) -> char {
        self.0
    }

    /// Совпадают ли маркеры без учёта регистра ('o' и 'O' – один маркер).
    pub fn clashes_with(&self, other: Marker) -> bool {
        self.0.to_lowercase().eq(other.0.to_lowercase())
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ровно один непробельный символ.
impl FromStr for Marker {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => {
                Marker::new(ch).ok_or_else(|| "Marker must be a visible character".to_string())
            }
            _ => Err("Marker must be exactly 1 character".to_string()),
        }
    }
}
