//! Снапшот раунда для внешнего хранилища.

use serde::{Deserialize, Serialize};

use crate::domain::{RoomId, RoundId};
use crate::engine::round::Round;

/// «Замороженный» раунд: всё, что нужно, чтобы продолжить игру в комнате.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RoundSnapshot {
    pub room_id: RoomId,
    pub round_id: RoundId,
    pub round: Round,
}

impl RoundSnapshot {
    pub fn from_round(room_id: RoomId, round_id: RoundId, round: &Round) -> Self {
        Self {
            room_id,
            round_id,
            round: round.clone(),
        }
    }

    pub fn into_round(self) -> Round {
        self.round
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}
