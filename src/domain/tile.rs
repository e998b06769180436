use core::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Масть числовых тайлов.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    Dots,       // 筒
    Bamboo,     // 索
    Characters, // 万
}

impl Suit {
    pub const ALL: [Suit; 3] = [Suit::Dots, Suit::Bamboo, Suit::Characters];

    fn offset(self) -> u8 {
        match self {
            Suit::Dots => 0,
            Suit::Bamboo => 9,
            Suit::Characters => 18,
        }
    }
}

/// Ветер (и тайл ветра, и ветер места/раунда).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Wind {
    East,
    South,
    West,
    North,
}

impl Wind {
    pub const ALL: [Wind; 4] = [Wind::East, Wind::South, Wind::West, Wind::North];

    /// 0 → East, 1 → South, 2 → West, 3 → North (по модулю 4).
    pub const fn from_index(idx: u8) -> Wind {
        match idx % 4 {
            0 => Wind::East,
            1 => Wind::South,
            2 => Wind::West,
            _ => Wind::North,
        }
    }
}

impl Default for Wind {
    fn default() -> Self {
        Wind::East
    }
}

/// Драконы.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dragon {
    Red,
    Green,
    White,
}

/// Животные (необязательный набор бонусных тайлов).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Animal {
    Cat,
    Rat,
    Rooster,
    Centipede,
}

/// Тайл маджонга. Идентичность — по значению из каталога.
///
/// Порядок (`Ord`) — канонический индекс каталога: животные, цветы, сезоны,
/// точки, бамбук, иероглифы, ветра, драконы.
///
/// При десериализации значения вне каталога (`rank: 10`, `Flower(0)`) отвергаются.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq, Hash)]
pub enum Tile {
    Animal(Animal),
    /// Цветок 1..=4 (слива, орхидея, хризантема, бамбук).
    Flower(u8),
    /// Сезон 1..=4 (весна, лето, осень, зима).
    Season(u8),
    Suited { suit: Suit, rank: u8 },
    Wind(Wind),
    Dragon(Dragon),
}

/// Тот же формат, что у `Tile`, но без проверки диапазонов.
#[derive(Deserialize)]
enum RawTile {
    Animal(Animal),
    Flower(u8),
    Season(u8),
    Suited { suit: Suit, rank: u8 },
    Wind(Wind),
    Dragon(Dragon),
}

/// Значение не существует в каталоге.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("тайла нет в каталоге: {0:?}")]
pub struct InvalidTile(pub Tile);

impl<'de> Deserialize<'de> for Tile {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tile = match RawTile::deserialize(deserializer)? {
            RawTile::Animal(a) => Tile::Animal(a),
            RawTile::Flower(n) => Tile::Flower(n),
            RawTile::Season(n) => Tile::Season(n),
            RawTile::Suited { suit, rank } => Tile::Suited { suit, rank },
            RawTile::Wind(w) => Tile::Wind(w),
            RawTile::Dragon(d) => Tile::Dragon(d),
        };
        if tile.is_valid() {
            Ok(tile)
        } else {
            Err(de::Error::custom(InvalidTile(tile)))
        }
    }
}

impl Tile {
    /// Сколько всего различных тайлов в каталоге.
    pub const KINDS: usize = 46;

    const SUITED_BASE: u8 = 12;
    const WIND_BASE: u8 = 39;
    const DRAGON_BASE: u8 = 43;

    pub const fn suited(suit: Suit, rank: u8) -> Tile {
        Tile::Suited { suit, rank }
    }

    pub const fn dots(rank: u8) -> Tile {
        Tile::suited(Suit::Dots, rank)
    }

    pub const fn bamboo(rank: u8) -> Tile {
        Tile::suited(Suit::Bamboo, rank)
    }

    pub const fn characters(rank: u8) -> Tile {
        Tile::suited(Suit::Characters, rank)
    }

    /// Есть ли такой тайл в каталоге: ранг 1..=9, цветы и сезоны 1..=4.
    pub fn is_valid(self) -> bool {
        match self {
            Tile::Flower(n) | Tile::Season(n) => (1..=4).contains(&n),
            Tile::Suited { rank, .. } => (1..=9).contains(&rank),
            _ => true,
        }
    }

    /// Канонический индекс 0..KINDS; `None` для значений вне каталога.
    pub fn checked_index(self) -> Option<usize> {
        if !self.is_valid() {
            return None;
        }
        let idx = match self {
            Tile::Animal(a) => a as u8,
            Tile::Flower(n) => 3 + n,
            Tile::Season(n) => 7 + n,
            Tile::Suited { suit, rank } => Self::SUITED_BASE + suit.offset() + rank - 1,
            Tile::Wind(w) => Self::WIND_BASE + w as u8,
            Tile::Dragon(d) => Self::DRAGON_BASE + d as u8,
        };
        Some(idx as usize)
    }

    /// Канонический индекс 0..KINDS. Значения вне каталога получают `KINDS`.
    pub fn index(self) -> usize {
        self.checked_index().unwrap_or(Self::KINDS)
    }

    /// Обратное к `index`.
    pub fn from_index(idx: usize) -> Option<Tile> {
        let i = u8::try_from(idx).ok()?;
        let tile = match i {
            0 => Tile::Animal(Animal::Cat),
            1 => Tile::Animal(Animal::Rat),
            2 => Tile::Animal(Animal::Rooster),
            3 => Tile::Animal(Animal::Centipede),
            4..=7 => Tile::Flower(i - 3),
            8..=11 => Tile::Season(i - 7),
            12..=38 => {
                let rel = i - Self::SUITED_BASE;
                Tile::Suited {
                    suit: Suit::ALL[(rel / 9) as usize],
                    rank: rel % 9 + 1,
                }
            }
            39..=42 => Tile::Wind(Wind::ALL[(i - Self::WIND_BASE) as usize]),
            43 => Tile::Dragon(Dragon::Red),
            44 => Tile::Dragon(Dragon::Green),
            45 => Tile::Dragon(Dragon::White),
            _ => return None,
        };
        Some(tile)
    }

    /// Бонусный тайл: не участвует в сборе руки.
    pub fn is_bonus(self) -> bool {
        matches!(self, Tile::Animal(_) | Tile::Flower(_) | Tile::Season(_))
    }

    pub fn is_honor(self) -> bool {
        matches!(self, Tile::Wind(_) | Tile::Dragon(_))
    }

    pub fn is_suited(self) -> bool {
        matches!(self, Tile::Suited { .. })
    }

    pub fn suit(self) -> Option<Suit> {
        match self {
            Tile::Suited { suit, .. } => Some(suit),
            _ => None,
        }
    }

    pub fn rank(self) -> Option<u8> {
        match self {
            Tile::Suited { rank, .. } => Some(rank),
            _ => None,
        }
    }

    /// Следующий тайл той же масти (для чи). None для 9 и для не-числовых.
    pub fn succ(self) -> Option<Tile> {
        match self {
            Tile::Suited { suit, rank } if rank < 9 => Some(Tile::suited(suit, rank + 1)),
            _ => None,
        }
    }
}

impl PartialOrd for Tile {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tile {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.index().cmp(&other.index())
    }
}

impl fmt::Display for Tile {
    /// Формат: `3d`, `7b`, `9c`, `E`, `P`, `f2`, `s4`, `a1`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tile::Suited { suit, rank } => {
                let s = match suit {
                    Suit::Dots => 'd',
                    Suit::Bamboo => 'b',
                    Suit::Characters => 'c',
                };
                write!(f, "{rank}{s}")
            }
            Tile::Wind(w) => {
                let ch = match w {
                    Wind::East => 'E',
                    Wind::South => 'S',
                    Wind::West => 'W',
                    Wind::North => 'N',
                };
                write!(f, "{ch}")
            }
            Tile::Dragon(d) => {
                let ch = match d {
                    Dragon::Red => 'C',
                    Dragon::Green => 'F',
                    Dragon::White => 'P',
                };
                write!(f, "{ch}")
            }
            Tile::Flower(n) => write!(f, "f{n}"),
            Tile::Season(n) => write!(f, "s{n}"),
            Tile::Animal(a) => write!(f, "a{}", *a as u8 + 1),
        }
    }
}

/// Ошибка разбора кода тайла.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("некорректный код тайла: {0:?}")]
pub struct TileParseError(pub String);

impl FromStr for Tile {
    type Err = TileParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || TileParseError(s.to_string());
        let mut chars = s.chars();
        let first = chars.next().ok_or_else(err)?;
        let rest: String = chars.collect();

        if rest.is_empty() {
            return match first {
                'E' => Ok(Tile::Wind(Wind::East)),
                'S' => Ok(Tile::Wind(Wind::South)),
                'W' => Ok(Tile::Wind(Wind::West)),
                'N' => Ok(Tile::Wind(Wind::North)),
                'C' => Ok(Tile::Dragon(Dragon::Red)),
                'F' => Ok(Tile::Dragon(Dragon::Green)),
                'P' => Ok(Tile::Dragon(Dragon::White)),
                _ => Err(err()),
            };
        }

        if let Some(rank) = first.to_digit(10) {
            let suit = match rest.as_str() {
                "d" => Suit::Dots,
                "b" => Suit::Bamboo,
                "c" => Suit::Characters,
                _ => return Err(err()),
            };
            if !(1..=9).contains(&rank) {
                return Err(err());
            }
            return Ok(Tile::suited(suit, rank as u8));
        }

        let n: u8 = rest.parse().map_err(|_| err())?;
        if !(1..=4).contains(&n) {
            return Err(err());
        }
        match first {
            'f' => Ok(Tile::Flower(n)),
            's' => Ok(Tile::Season(n)),
            'a' => Ok(Tile::Animal(
                [Animal::Cat, Animal::Rat, Animal::Rooster, Animal::Centipede][(n - 1) as usize],
            )),
            _ => Err(err()),
        }
    }
}

/// Разобрать список кодов через пробел: `"1d 2d 3d E E"`.
pub fn parse_tiles(s: &str) -> Result<Vec<Tile>, TileParseError> {
    s.split_whitespace().map(str::parse).collect()
}
