use serde::{Deserialize, Serialize};

use crate::domain::{Meld, RoomId, SeatIndex, Tile, Wind};
use crate::engine::{ActionOutcome, Phase};

/// DTO места за столом.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatViewDto {
    pub seat: SeatIndex,
    pub seat_wind: Wind,
    pub concealed_count: usize,
    /// Закрытые тайлы — только для самого места.
    pub concealed: Option<Vec<Tile>>,
    pub revealed: Vec<Meld>,
    pub flowers: Vec<Tile>,
}

/// DTO раунда в комнате.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundViewDto {
    pub room_id: RoomId,
    pub dealer: SeatIndex,
    pub turn: SeatIndex,
    pub phase: Phase,
    pub prevailing_wind: Wind,
    pub discards: Vec<Tile>,
    pub last_discard_ms: u64,
    pub wall_remaining: usize,
    pub wall_exhausted: bool,
    pub seats: Vec<SeatViewDto>,
}

impl RoundViewDto {
    pub fn seat(&self, seat: SeatIndex) -> Option<&SeatViewDto> {
        self.seats.iter().find(|s| s.seat == seat)
    }
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    /// Раунд раздан. Вид — глазами дилера.
    RoundCreated(RoundViewDto),

    /// Действие принято. Вид — глазами действовавшего места.
    ActionApplied {
        outcome: ActionOutcome,
        round: RoundViewDto,
    },
}
