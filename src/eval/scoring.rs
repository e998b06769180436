//! Подсчёт фаней собранной руки.
//!
//! Категории складываются, кроме двух групп:
//!   - форма руки: «все чи» (+4) и «все понги/конги» (+2) взаимоисключающие;
//!   - масть: флэш (чистый +4 / смешанный +2) перекрывает бонус за форму.
//!     Если рука — флэш, бонус за форму не добавляется.
//!
//! Бонусные тайлы считаются только у победителя.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{Dragon, Meld, MeldKind, SeatIndex, Suit, Tile, Wind};
use crate::engine::positions::seat_wind;

const SELF_DRAW: u32 = 1;
const ALL_RUNS: u32 = 4;
const ALL_TRIPLETS: u32 = 2;
const FULL_FLUSH: u32 = 4;
const HALF_FLUSH: u32 = 2;
const HONOR_SET: u32 = 1;
const BONUS_TILE: u32 = 1;

/// Контекст выигрыша.
///
/// `turn` — место, чей добор или сброс завершил руку:
/// совпадает с `seat` → выигрыш на своём доборе.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreContext {
    pub seat: SeatIndex,
    pub dealer: SeatIndex,
    pub turn: SeatIndex,
    #[serde(default)]
    pub prevailing_wind: Wind,
}

impl ScoreContext {
    pub fn new(seat: SeatIndex, dealer: SeatIndex, turn: SeatIndex) -> Self {
        Self {
            seat,
            dealer,
            turn,
            prevailing_wind: Wind::default(),
        }
    }

    pub fn with_prevailing_wind(mut self, wind: Wind) -> Self {
        self.prevailing_wind = wind;
        self
    }

    pub fn is_self_drawn(&self) -> bool {
        self.seat == self.turn
    }

    pub fn seat_wind(&self) -> Wind {
        seat_wind(self.seat, self.dealer)
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum FanCategory {
    SelfDraw,
    AllRuns,
    AllTriplets,
    DragonSet(Dragon),
    SeatWind(Wind),
    PrevailingWind(Wind),
    FullFlush(Suit),
    HalfFlush(Suit),
    BonusTile(Tile),
}

impl fmt::Display for FanCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FanCategory::SelfDraw => write!(f, "цзымо"),
            FanCategory::AllRuns => write!(f, "все чи"),
            FanCategory::AllTriplets => write!(f, "все понги"),
            FanCategory::DragonSet(d) => write!(f, "дракон {}", Tile::Dragon(*d)),
            FanCategory::SeatWind(w) => write!(f, "ветер места {}", Tile::Wind(*w)),
            FanCategory::PrevailingWind(w) => write!(f, "ветер раунда {}", Tile::Wind(*w)),
            FanCategory::FullFlush(_) => write!(f, "чистая масть"),
            FanCategory::HalfFlush(_) => write!(f, "смешанная масть"),
            FanCategory::BonusTile(t) => write!(f, "бонус {t}"),
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FanItem {
    pub category: FanCategory,
    pub fan: u32,
}

/// Разбивка по категориям + итог.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FanBreakdown {
    pub items: Vec<FanItem>,
    pub total: u32,
}

impl FanBreakdown {
    fn add(&mut self, category: FanCategory, fan: u32) {
        self.items.push(FanItem { category, fan });
        self.total += fan;
    }

    pub fn contains(&self, category: FanCategory) -> bool {
        self.items.iter().any(|i| i.category == category)
    }

    /// Человекочитаемая строка: «все чи +4, цзымо +1 = 5».
    pub fn describe(&self) -> String {
        if self.items.is_empty() {
            return format!("без фаней = {}", self.total);
        }
        let parts: Vec<String> = self
            .items
            .iter()
            .map(|i| format!("{} +{}", i.category, i.fan))
            .collect();
        format!("{} = {}", parts.join(", "), self.total)
    }
}

/// Итог в фанях. Ожидает уже проверенное выигрышное разложение.
pub fn score(ctx: &ScoreContext, melds: &[Meld], bonus: &[Tile]) -> u32 {
    score_breakdown(ctx, melds, bonus).total
}

pub fn score_breakdown(ctx: &ScoreContext, melds: &[Meld], bonus: &[Tile]) -> FanBreakdown {
    let mut out = FanBreakdown::default();

    if ctx.is_self_drawn() {
        out.add(FanCategory::SelfDraw, SELF_DRAW);
    }

    match flush_of(melds) {
        Some(Flush::Full(suit)) => out.add(FanCategory::FullFlush(suit), FULL_FLUSH),
        Some(Flush::Half(suit)) => out.add(FanCategory::HalfFlush(suit), HALF_FLUSH),
        None => match shape_of(melds) {
            Some(MeldKind::Chi) => out.add(FanCategory::AllRuns, ALL_RUNS),
            Some(_) => out.add(FanCategory::AllTriplets, ALL_TRIPLETS),
            None => {}
        },
    }

    let seat_wind = ctx.seat_wind();
    for meld in melds.iter().filter(|m| m.is_set_of_identical()) {
        match meld.head() {
            Some(Tile::Dragon(d)) => out.add(FanCategory::DragonSet(d), HONOR_SET),
            Some(Tile::Wind(w)) => {
                if w == seat_wind {
                    out.add(FanCategory::SeatWind(w), HONOR_SET);
                }
                if w == ctx.prevailing_wind {
                    out.add(FanCategory::PrevailingWind(w), HONOR_SET);
                }
            }
            _ => {}
        }
    }

    for &tile in bonus {
        if bonus_matches(tile, ctx.seat) {
            out.add(FanCategory::BonusTile(tile), BONUS_TILE);
        }
    }

    out
}

/// Животные — всегда; цветок/сезон — если номер совпадает с местом (место + 1).
fn bonus_matches(tile: Tile, seat: SeatIndex) -> bool {
    match tile {
        Tile::Animal(_) => true,
        Tile::Flower(n) | Tile::Season(n) => n == seat + 1,
        _ => false,
    }
}

enum Flush {
    Full(Suit),
    Half(Suit),
}

fn flush_of(melds: &[Meld]) -> Option<Flush> {
    let mut suit = None;
    let mut honors = false;
    for tile in melds.iter().flat_map(|m| m.tiles.iter().copied()) {
        match tile.suit() {
            Some(s) if suit.map_or(true, |cur| cur == s) => suit = Some(s),
            Some(_) => return None,
            None => honors = true,
        }
    }
    let suit = suit?;
    Some(if honors {
        Flush::Half(suit)
    } else {
        Flush::Full(suit)
    })
}

/// `Chi` — все не-пары чи; `Pong` — все понги/конги; иначе `None`.
fn shape_of(melds: &[Meld]) -> Option<MeldKind> {
    let mut sets = melds.iter().filter(|m| m.kind != MeldKind::Eyes).peekable();
    sets.peek()?;
    let mut runs = true;
    let mut triplets = true;
    for m in sets {
        runs &= m.kind == MeldKind::Chi;
        triplets &= m.is_set_of_identical();
    }
    if runs {
        Some(MeldKind::Chi)
    } else if triplets {
        Some(MeldKind::Pong)
    } else {
        None
    }
}
