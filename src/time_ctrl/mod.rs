// src/time_ctrl/mod.rs
//! Контроль времени раунда: окно перехвата сброса.
//!
//! Здесь собираем:
//! - метки времени (`Timestamp`);
//! - правила (`TimingRules`);
//! - фасад `ReservedWindow`, которым пользуется движок раунда.
//!
//! Окно не блокирует вызывающего: ранний Draw/Chi просто отклоняется,
//! повторить запрос — забота клиента.

pub mod clock;
pub mod time_rules;

pub use clock::Timestamp;
pub use time_rules::{TimeProfile, TimingRules};

/// Окно после сброса, в которое приоритет у Pong/Gang.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReservedWindow {
    pub opened_at: Timestamp,
    pub closes_at: Timestamp,
}

impl ReservedWindow {
    pub fn after_discard(discarded_at: Timestamp, rules: &TimingRules) -> Self {
        Self {
            opened_at: discarded_at,
            closes_at: discarded_at.plus(rules.reserved_window()),
        }
    }

    /// Открыто ли окно в момент `now`. Граница `closes_at` уже считается закрытой.
    pub fn is_active(&self, now: Timestamp) -> bool {
        now.is_before(self.closes_at)
    }

    /// Сколько ещё ждать (0, если окно закрыто).
    pub fn remaining_ms(&self, now: Timestamp) -> u64 {
        self.closes_at.0.saturating_sub(now.0)
    }
}
