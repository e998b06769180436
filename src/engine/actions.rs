use serde::{Deserialize, Serialize};

use crate::domain::Tile;

/// Тип действия места в раунде.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundAction {
    /// Добор из стены.
    Draw,
    /// Сброс тайла из закрытой руки.
    Discard(Tile),
    /// Чи последнего сброса двумя своими тайлами.
    Chi(Tile, Tile),
    /// Понг последнего сброса.
    Pong,
    /// Конг последнего сброса.
    GangFromDiscard,
    /// Закрытый конг или добавленный конг к открытому понгу.
    GangFromHand(Tile),
}

/// Что получило место в результате действия.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Draw / замена после конга: добранный игровой тайл и собранные по пути бонусы.
    Drew { tile: Tile, bonus: Vec<Tile> },
    Discarded,
    Claimed,
}

impl ActionOutcome {
    pub fn drawn_tile(&self) -> Option<Tile> {
        match self {
            ActionOutcome::Drew { tile, .. } => Some(*tile),
            _ => None,
        }
    }
}
