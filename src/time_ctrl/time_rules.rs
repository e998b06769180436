// src/time_ctrl/time_rules.rs
//! Конфигурация тайминга для раунда.
//!
//! Здесь описываем только "правила", без состояния и без привязки к конкретной комнате.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Профиль тайминга (на будущее можно добавить Blitz и т.д.).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum TimeProfile {
    /// Стандартный: 2 секунды на перехват сброса.
    Standard,
    /// Без окна перехвата (тесты, боты).
    Instant,
}

/// Правила тайминга раунда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimingRules {
    /// Сколько миллисекунд после сброса зарезервировано под Pong/Gang.
    /// В это время обычный Draw и Chi отклоняются.
    pub reserved_window_ms: u64,
}

impl TimingRules {
    /// Строгий конструктор.
    pub const fn new(reserved_window_ms: u64) -> Self {
        Self { reserved_window_ms }
    }

    /// Стандартный профиль: 2 секунды.
    pub const fn standard() -> Self {
        Self {
            reserved_window_ms: 2_000,
        }
    }

    /// Получить правила по профилю.
    pub const fn from_profile(profile: TimeProfile) -> Self {
        match profile {
            TimeProfile::Standard => Self::standard(),
            TimeProfile::Instant => Self::new(0),
        }
    }

    pub fn reserved_window(&self) -> Duration {
        Duration::from_millis(self.reserved_window_ms)
    }
}

impl Default for TimingRules {
    fn default() -> Self {
        Self::standard()
    }
}
