use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::tile::Wind;
use crate::time_ctrl::TimingRules;

/// Конфиг раунда. Один фиксированный набор правил подсчёта,
/// настраивается только то, что ниже.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RoundConfig {
    /// Ветер раунда. Если не задан — East.
    pub prevailing_wind: Wind,
    /// Добавлять ли в стену 4 тайла-животных (148 вместо 144).
    pub include_animals: bool,
    /// Окно перехвата сброса.
    pub timing: TimingRules,
}

/// Ошибка чтения конфига.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("не удалось разобрать конфиг раунда: {0}")]
    Json(#[from] serde_json::Error),
}

impl RoundConfig {
    /// Стандартные правила: ветер East, без животных, окно 2 секунды.
    pub const fn standard() -> Self {
        Self {
            prevailing_wind: Wind::East,
            include_animals: false,
            timing: TimingRules::standard(),
        }
    }

    /// Прочитать конфиг из JSON; отсутствующие поля берутся из `standard()`.
    pub fn from_json(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn with_prevailing_wind(mut self, wind: Wind) -> Self {
        self.prevailing_wind = wind;
        self
    }

    pub fn with_animals(mut self, include: bool) -> Self {
        self.include_animals = include;
        self
    }

    pub fn with_timing(mut self, timing: TimingRules) -> Self {
        self.timing = timing;
        self
    }
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self::standard()
    }
}
