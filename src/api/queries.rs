use serde::{Deserialize, Serialize};

use crate::domain::{RoomId, SeatIndex};
use crate::engine::{RoomManager, WinEvaluation};
use crate::infra::map_round_to_dto;

use super::dto::RoundViewDto;
use super::errors::ApiError;

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Query {
    /// Состояние раунда глазами `viewer` (`None` — наблюдатель).
    GetRound {
        room_id: RoomId,
        viewer: Option<SeatIndex>,
    },

    /// Может ли место объявить выигрыш сейчас и сколько фаней.
    CheckWin { room_id: RoomId, seat: SeatIndex },
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum QueryResponse {
    Round(RoundViewDto),
    Win(Option<WinEvaluation>),
}

pub fn execute_query(manager: &RoomManager, query: Query) -> Result<QueryResponse, ApiError> {
    match query {
        Query::GetRound { room_id, viewer } => {
            let view = manager.with_round(room_id, |round| map_round_to_dto(room_id, round, viewer))?;
            Ok(QueryResponse::Round(view))
        }
        Query::CheckWin { room_id, seat } => {
            Ok(QueryResponse::Win(manager.evaluate_win(room_id, seat)?))
        }
    }
}
