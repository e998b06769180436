use serde::{Deserialize, Serialize};

use crate::domain::tile::Tile;

/// Вид сета.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MeldKind {
    /// Последовательность из трёх тайлов одной масти.
    Chi,
    /// Три одинаковых.
    Pong,
    /// Четыре одинаковых (закрытый или открытый).
    Gang,
    /// Пара — ровно одна на собранную руку.
    Eyes,
}

/// Сет: вид + тайлы по возрастанию.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Meld {
    pub kind: MeldKind,
    pub tiles: Vec<Tile>,
}

impl Meld {
    pub fn chi(a: Tile, b: Tile, c: Tile) -> Self {
        let mut tiles = vec![a, b, c];
        tiles.sort();
        Self {
            kind: MeldKind::Chi,
            tiles,
        }
    }

    pub fn pong(tile: Tile) -> Self {
        Self {
            kind: MeldKind::Pong,
            tiles: vec![tile; 3],
        }
    }

    pub fn gang(tile: Tile) -> Self {
        Self {
            kind: MeldKind::Gang,
            tiles: vec![tile; 4],
        }
    }

    pub fn eyes(tile: Tile) -> Self {
        Self {
            kind: MeldKind::Eyes,
            tiles: vec![tile; 2],
        }
    }

    /// Первый (младший) тайл сета.
    pub fn head(&self) -> Option<Tile> {
        self.tiles.first().copied()
    }

    /// Pong или Gang.
    pub fn is_set_of_identical(&self) -> bool {
        matches!(self.kind, MeldKind::Pong | MeldKind::Gang)
    }

    /// Добавленный конг: Pong → Gang на месте. `false`, если это не Pong.
    pub fn upgrade_to_gang(&mut self) -> bool {
        if self.kind != MeldKind::Pong {
            return false;
        }
        if let Some(tile) = self.head() {
            self.tiles.push(tile);
        }
        self.kind = MeldKind::Gang;
        true
    }

    /// Проверка формы сета в зависимости от вида.
    pub fn validate(&self) -> bool {
        let Some(head) = self.head() else {
            return false;
        };
        if head.is_bonus() {
            return false;
        }
        let identical = |n: usize| self.tiles.len() == n && self.tiles.iter().all(|&t| t == head);

        match self.kind {
            MeldKind::Chi => {
                if self.tiles.len() != 3 {
                    return false;
                }
                let second = head.succ();
                let third = second.and_then(Tile::succ);
                second == Some(self.tiles[1]) && third == Some(self.tiles[2])
            }
            MeldKind::Pong => identical(3),
            MeldKind::Gang => identical(4),
            MeldKind::Eyes => identical(2),
        }
    }
}

/// Упорядоченный набор сетов (одно разложение руки).
pub type Melds = Vec<Meld>;
