use std::collections::HashMap;

use crate::domain::RoomId;
use crate::state::RoundSnapshot;

/// Абстракция хранилища раундов по комнатам.
///
/// Настоящее хранилище живёт у внешнего слоя; здесь только контракт,
/// удобный для тестов и оффчейн-сервисов.
pub trait RoundStorage {
    /// Загрузить снапшот раунда комнаты.
    fn load_round(&self, room_id: RoomId) -> Option<RoundSnapshot>;

    /// Сохранить снапшот (перезаписывает прежний).
    fn save_round(&mut self, snapshot: RoundSnapshot);

    /// Убрать раунд комнаты (раунд завершён).
    fn clear_round(&mut self, room_id: RoomId) -> Option<RoundSnapshot>;
}

/// Простая in-memory реализация для тестов и локального запуска.
#[derive(Debug, Default)]
pub struct InMemoryRoundStorage {
    rounds: HashMap<RoomId, RoundSnapshot>,
}

impl InMemoryRoundStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }
}

impl RoundStorage for InMemoryRoundStorage {
    fn load_round(&self, room_id: RoomId) -> Option<RoundSnapshot> {
        self.rounds.get(&room_id).cloned()
    }

    fn save_round(&mut self, snapshot: RoundSnapshot) {
        self.rounds.insert(snapshot.room_id, snapshot);
    }

    fn clear_round(&mut self, room_id: RoomId) -> Option<RoundSnapshot> {
        self.rounds.remove(&room_id)
    }
}
