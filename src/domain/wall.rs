use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::domain::tile::{Animal, Dragon, Suit, Tile, Wind};

/// Стена. В домене — просто упорядоченный список тайлов.
/// Перемешивание делает engine (через RNG из infra), НЕ здесь.
///
/// Тайлы уходят только с начала (обычный добор) или с конца
/// (замена бонусных тайлов при раздаче). Обратно не возвращаются.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Wall {
    pub tiles: VecDeque<Tile>,
}

impl Wall {
    /// Полный каталог в каноническом порядке:
    /// 136 игровых тайлов + 8 цветов/сезонов (+4 животных, если включены).
    pub fn catalogue(include_animals: bool) -> Self {
        let mut tiles = VecDeque::with_capacity(Self::catalogue_size(include_animals));

        if include_animals {
            for a in [Animal::Cat, Animal::Rat, Animal::Rooster, Animal::Centipede] {
                tiles.push_back(Tile::Animal(a));
            }
        }
        for n in 1..=4 {
            tiles.push_back(Tile::Flower(n));
        }
        for n in 1..=4 {
            tiles.push_back(Tile::Season(n));
        }

        let mut standard = Vec::with_capacity(34);
        for suit in Suit::ALL {
            for rank in 1..=9 {
                standard.push(Tile::suited(suit, rank));
            }
        }
        for w in Wind::ALL {
            standard.push(Tile::Wind(w));
        }
        for d in [Dragon::Red, Dragon::Green, Dragon::White] {
            standard.push(Tile::Dragon(d));
        }
        for tile in standard {
            for _ in 0..4 {
                tiles.push_back(tile);
            }
        }

        Wall { tiles }
    }

    pub const fn catalogue_size(include_animals: bool) -> usize {
        if include_animals {
            148
        } else {
            144
        }
    }

    pub fn from_tiles<I>(tiles: I) -> Self
    where
        I: IntoIterator<Item = Tile>,
    {
        Wall {
            tiles: tiles.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Обычный добор — с начала стены.
    pub fn draw_front(&mut self) -> Option<Tile> {
        self.tiles.pop_front()
    }

    /// Добор с конца — замена бонусных тайлов при раздаче.
    pub fn draw_back(&mut self) -> Option<Tile> {
        self.tiles.pop_back()
    }

    /// Есть ли с начала стены хотя бы один не-бонусный тайл
    /// (иначе добор с заменой бонусов невозможен).
    pub fn has_playable_from_front(&self) -> bool {
        self.tiles.iter().any(|t| !t.is_bonus())
    }

    pub fn as_vec(&self) -> Vec<Tile> {
        self.tiles.iter().copied().collect()
    }
}
