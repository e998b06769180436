use serde::{Deserialize, Serialize};

use crate::domain::meld::{Meld, MeldKind};
use crate::domain::tile::Tile;
use crate::domain::tile_bag::TileBag;

/// Рука одного места.
///
/// - `concealed` — закрытые тайлы, ещё не выложенные в сеты;
/// - `revealed` — открытые сеты, только растёт;
/// - `flowers` — собранные бонусные тайлы, только растёт.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hand {
    pub concealed: TileBag,
    pub revealed: Vec<Meld>,
    pub flowers: Vec<Tile>,
}

impl Hand {
    /// Индекс открытого Pong из данного тайла (для добавленного конга).
    pub fn find_pong(&self, tile: Tile) -> Option<usize> {
        self.revealed
            .iter()
            .position(|m| m.kind == MeldKind::Pong && m.head() == Some(tile))
    }

    /// Закрытые тайлы плюс ещё один (проверка выигрыша на сбросе).
    pub fn concealed_with(&self, tile: Tile) -> TileBag {
        let mut bag = self.concealed.clone();
        bag.add(tile);
        bag
    }
}
