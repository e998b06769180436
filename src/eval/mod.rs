//! Чистые функции над тайлами: поиск разложений и подсчёт фаней.
//!
//! Основные функции:
//!   `search(tiles) -> Vec<Melds>`
//!   `score(ctx, melds, bonus) -> u32`

pub mod lookup_tables;
pub mod scoring;
pub mod search;

pub use lookup_tables::chi_partners;
pub use scoring::{score, score_breakdown, FanBreakdown, FanCategory, FanItem, ScoreContext};
pub use search::{is_complete, search};
