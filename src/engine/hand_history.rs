use serde::{Deserialize, Serialize};

use crate::domain::{Meld, SeatIndex, Tile};
use crate::time_ctrl::Timestamp;

/// Вид конга в истории.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum KongSource {
    /// Четыре одинаковых из закрытой руки.
    Concealed,
    /// Открытый понг + четвёртый тайл из руки.
    Promoted,
    /// Три в руке + сброс.
    Discard,
}

/// Тип события в раунде.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum RoundEventKind {
    /// Раздача завершена, дилер с 14 тайлами ходит первым.
    Dealt { dealer: SeatIndex, wall_remaining: usize },

    /// Место собрало бонусные тайлы (при доборе или замене).
    BonusCollected { seat: SeatIndex, tiles: Vec<Tile> },

    /// Место добрало тайл (сам тайл в истории не раскрываем).
    Drew { seat: SeatIndex },

    Discarded { seat: SeatIndex, tile: Tile },

    Chowed { seat: SeatIndex, meld: Meld },

    Ponged { seat: SeatIndex, from: SeatIndex, tile: Tile },

    Konged { seat: SeatIndex, tile: Tile, source: KongSource },
}

/// Событие с порядковым номером и временем.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RoundEvent {
    pub index: u32,
    pub at: Timestamp,
    pub kind: RoundEventKind,
}

/// Полная история раунда.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct RoundHistory {
    pub events: Vec<RoundEvent>,
}

impl RoundHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, at: Timestamp, kind: RoundEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(RoundEvent {
            index: idx,
            at,
            kind,
        });
    }

    pub fn last(&self) -> Option<&RoundEvent> {
        self.events.last()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
