//! Доменная модель маджонга: тайлы, мультимножества, сеты, руки, стена, правила.

pub mod hand;
pub mod meld;
pub mod rules;
pub mod tile;
pub mod tile_bag;
pub mod wall;

// Базовые идентификаторы
pub type RoomId = u64;
pub type RoundId = u64;

/// Индекс места (0..4). Порядок хода фиксирован: 0 → 1 → 2 → 3 → 0.
pub type SeatIndex = u8;

/// Мест за столом всегда четыре.
pub const SEATS: usize = 4;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Tile и т.п.
pub use hand::*;
pub use meld::*;
pub use rules::*;
pub use tile::*;
pub use tile_bag::*;
pub use wall::*;
