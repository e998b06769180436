use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::{RoomId, RoundId};

/// Простая генерация ID на основе монотонных счётчиков.
/// Удобно для локальных тестов и оффчейн-сервисов.
///
/// В контракте ID комнаты обычно приходит снаружи (клиент сам передаёт),
/// а номер раунда берётся из счётчика в состоянии.
#[derive(Debug)]
pub struct IdGenerator {
    room_counter: AtomicU64,
    round_counter: AtomicU64,
}

impl IdGenerator {
    /// Создать генератор с начальным значением 1 для всех сущностей.
    pub fn new() -> Self {
        Self::starting_at(1, 1)
    }

    /// Продолжить нумерацию (после восстановления из хранилища).
    pub fn starting_at(next_room: RoomId, next_round: RoundId) -> Self {
        Self {
            room_counter: AtomicU64::new(next_room),
            round_counter: AtomicU64::new(next_round),
        }
    }

    #[inline]
    pub fn next_room_id(&self) -> RoomId {
        self.room_counter.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn next_round_id(&self) -> RoundId {
        self.round_counter.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
