//! Конфиг игр: пороги дилера, счёт сетов/матча, кто ходит первым.
//!
//! Все поля имеют значения по умолчанию (как в классических правилах),
//! JSON-файл может переопределить любое подмножество.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::hand::TWENTY_ONE;
use crate::domain::Marker;

/// Ошибки конфигурации.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("games_in_set должно быть ≥ 1")]
    InvalidGamesInSet,

    #[error("sets_in_match должно быть ≥ 1")]
    InvalidSetsInMatch,

    #[error("Порог дилера {0} вне диапазона 2–21")]
    InvalidDealerThreshold(u32),

    #[error("Маркер компьютера должен быть видимым символом")]
    InvalidMarker,

    #[error("Список имён для {0} пуст")]
    EmptyNames(&'static str),

    #[error("Не удалось прочитать конфиг {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Битый JSON конфига: {0}")]
    Json(#[from] serde_json::Error),
}

/// Кто ходит первым в крестиках-ноликах.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FirstMove {
    /// Спрашивать человека перед каждой партией.
    #[default]
    Choose,
    Human,
    Computer,
}

impl FromStr for FirstMove {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "choose" => Ok(FirstMove::Choose),
            "human" => Ok(FirstMove::Human),
            "computer" => Ok(FirstMove::Computer),
            other => Err(format!("unknown first-move mode: {other}")),
        }
    }
}

/// Настройки двадцати одного.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TwentyOneConfig {
    /// Дилер останавливается, набрав не меньше этого.
    pub dealer_stands_at: u32,
    /// Из этих имён случайно выбирается имя дилера.
    pub dealer_names: Vec<String>,
}

impl Default for TwentyOneConfig {
    fn default() -> Self {
        Self {
            dealer_stands_at: 17,
            dealer_names: ["R2D2", "Hal", "Chappie", "Sonny", "Number 5"]
                .map(String::from)
                .to_vec(),
        }
    }
}

impl TwentyOneConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(2..=TWENTY_ONE).contains(&self.dealer_stands_at) {
            return Err(ConfigError::InvalidDealerThreshold(self.dealer_stands_at));
        }
        if self.dealer_names.is_empty() {
            return Err(ConfigError::EmptyNames("dealer"));
        }
        Ok(())
    }
}

/// Настройки крестиков-ноликов с расширенным счётом.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TicTacToeConfig {
    pub games_in_set: u32,
    pub sets_in_match: u32,
    pub first_move: FirstMove,
    pub computer_marker: Marker,
    pub computer_names: Vec<String>,
}

impl Default for TicTacToeConfig {
    fn default() -> Self {
        Self {
            games_in_set: 3,
            sets_in_match: 2,
            first_move: FirstMove::Choose,
            computer_marker: Marker::O,
            computer_names: ["Hal", "R2D2", "Chappie"].map(String::from).to_vec(),
        }
    }
}

impl TicTacToeConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.games_in_set == 0 {
            return Err(ConfigError::InvalidGamesInSet);
        }
        if self.sets_in_match == 0 {
            return Err(ConfigError::InvalidSetsInMatch);
        }
        if Marker::new(self.computer_marker.symbol()).is_none() {
            return Err(ConfigError::InvalidMarker);
        }
        if self.computer_names.is_empty() {
            return Err(ConfigError::EmptyNames("computer"));
        }
        Ok(())
    }
}

/// Полный конфиг обеих игр.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GameConfig {
    pub twenty_one: TwentyOneConfig,
    pub tic_tac_toe: TicTacToeConfig,
}

impl GameConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.twenty_one.validate()?;
        self.tic_tac_toe.validate()
    }
}
