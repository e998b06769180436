// src/time_ctrl/clock.rs
//! Метки времени, которые передаёт вызывающий код.
//!
//! Движок никогда не читает часы сам: каждое действие получает `Timestamp`
//! явно, поэтому окно перехвата сброса детерминировано в тестах.

use core::ops::Add;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Миллисекунды от произвольной эпохи (её выбирает вызывающий).
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub u64);

impl Timestamp {
    pub const ZERO: Timestamp = Timestamp(0);

    pub const fn from_millis(ms: u64) -> Self {
        Timestamp(ms)
    }

    pub const fn as_millis(self) -> u64 {
        self.0
    }

    /// Сдвиг вперёд, без переполнения.
    pub fn plus(self, d: Duration) -> Timestamp {
        let ms = u64::try_from(d.as_millis()).unwrap_or(u64::MAX);
        Timestamp(self.0.saturating_add(ms))
    }

    pub fn is_before(self, other: Timestamp) -> bool {
        self.0 < other.0
    }
}

impl Add<Duration> for Timestamp {
    type Output = Timestamp;

    fn add(self, rhs: Duration) -> Self::Output {
        self.plus(rhs)
    }
}
