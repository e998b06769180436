// src/engine/room_manager.rs

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, RwLock};

use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::{RoomId, RoundConfig, SeatIndex};
use crate::engine::actions::{ActionOutcome, RoundAction};
use crate::engine::errors::ActionError;
use crate::engine::round::Round;
use crate::engine::settlement::{evaluate_win, WinEvaluation};
use crate::engine::RandomSource;
use crate::time_ctrl::Timestamp;

/// Ошибки уровня менеджера комнат (над раундом одной комнаты).
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ManagerError {
    #[error("Комната {0} не найдена")]
    RoomNotFound(RoomId),

    /// Проброшенная ошибка из раунда.
    #[error(transparent)]
    Engine(#[from] ActionError),

    /// Поток, державший блокировку, упал посреди действия.
    #[error("Блокировка комнаты отравлена")]
    Poisoned,
}

type SharedRound = Arc<Mutex<Round>>;

/// Менеджер комнат:
/// - по RoomId хранит раунд под собственным мьютексом;
/// - каждое действие идёт целиком (проверка + изменение) под этим мьютексом;
/// - разные комнаты друг друга не блокируют.
#[derive(Default)]
pub struct RoomManager {
    rooms: RwLock<HashMap<RoomId, SharedRound>>,
}

impl RoomManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Раздать новый раунд в комнате (старый, если был, заменяется).
    pub fn create_round<R: RandomSource>(
        &self,
        room_id: RoomId,
        dealer: SeatIndex,
        config: RoundConfig,
        rng: &mut R,
    ) -> Result<(), ManagerError> {
        let round = Round::start(config, dealer, rng)?;
        self.insert_round(room_id, round)
    }

    /// Положить готовый раунд (восстановление из хранилища, тесты).
    pub fn insert_round(&self, room_id: RoomId, round: Round) -> Result<(), ManagerError> {
        let mut rooms = self.rooms.write().map_err(|_| ManagerError::Poisoned)?;
        rooms.insert(room_id, Arc::new(Mutex::new(round)));
        debug!(room_id, "раунд в комнате установлен");
        Ok(())
    }

    pub fn has_room(&self, room_id: RoomId) -> bool {
        self.rooms
            .read()
            .map(|rooms| rooms.contains_key(&room_id))
            .unwrap_or(false)
    }

    pub fn remove_room(&self, room_id: RoomId) -> Result<Option<Round>, ManagerError> {
        let removed = self
            .rooms
            .write()
            .map_err(|_| ManagerError::Poisoned)?
            .remove(&room_id);
        let Some(shared) = removed else {
            return Ok(None);
        };
        let round = lock(&shared)?.clone();
        Ok(Some(round))
    }

    /// Применить действие места в комнате.
    pub fn apply(
        &self,
        room_id: RoomId,
        seat: SeatIndex,
        now: Timestamp,
        action: RoundAction,
    ) -> Result<ActionOutcome, ManagerError> {
        let shared = self.room(room_id)?;
        let mut round = lock(&shared)?;
        Ok(round.apply(seat, now, action)?)
    }

    /// Согласованная копия раунда.
    pub fn snapshot(&self, room_id: RoomId) -> Result<Round, ManagerError> {
        self.with_round(room_id, Round::clone)
    }

    /// Прочитать раунд под блокировкой комнаты.
    pub fn with_round<T>(
        &self,
        room_id: RoomId,
        f: impl FnOnce(&Round) -> T,
    ) -> Result<T, ManagerError> {
        let shared = self.room(room_id)?;
        let round = lock(&shared)?;
        Ok(f(&round))
    }

    pub fn evaluate_win(
        &self,
        room_id: RoomId,
        seat: SeatIndex,
    ) -> Result<Option<WinEvaluation>, ManagerError> {
        self.with_round(room_id, |round| evaluate_win(round, seat))
    }

    fn room(&self, room_id: RoomId) -> Result<SharedRound, ManagerError> {
        let rooms = self.rooms.read().map_err(|_| ManagerError::Poisoned)?;
        rooms
            .get(&room_id)
            .cloned()
            .ok_or(ManagerError::RoomNotFound(room_id))
    }
}

fn lock(shared: &SharedRound) -> Result<MutexGuard<'_, Round>, ManagerError> {
    shared.lock().map_err(|_| {
        warn!("мьютекс раунда отравлен");
        ManagerError::Poisoned
    })
}
