//! Построение стены и стартовая раздача.
//!
//! Раздача повторяет классическую раздачу блоками:
//!   - 3 круга по 4 тайла каждому месту, начиная с дилера (East);
//!   - по 1 тайлу каждому;
//!   - ещё 1 тайл дилеру (у дилера 14, у остальных 13).
//!
//! Всё это берётся с начала стены. Бонусные тайлы, пришедшие при раздаче,
//! уходят во `flowers` и потом заменяются тайлами с КОНЦА стены —
//! проходами по кругу от дилера, пока ни у кого не останется незаменённых бонусов.

use tracing::debug;

use crate::domain::{Hand, RoundConfig, SeatIndex, Tile, Wall, SEATS};
use crate::engine::errors::ActionError;
use crate::engine::positions::seats_from;
use crate::engine::RandomSource;

const BLOCK: usize = 4;
const BLOCK_ROUNDS: usize = 3;

/// Перемешанная стена для раунда.
pub fn build_wall<R: RandomSource>(config: &RoundConfig, rng: &mut R) -> Wall {
    let mut wall = Wall::catalogue(config.include_animals);
    rng.shuffle(wall.tiles.make_contiguous());
    wall
}

/// Раздать стартовые руки. Возвращает 4 руки (индекс = место) и остаток стены.
///
/// Ошибка только если стена короче, чем нужно для раздачи.
pub fn distribute(mut wall: Wall, dealer: SeatIndex) -> Result<([Hand; SEATS], Wall), ActionError> {
    let order = seats_from(dealer);
    let mut hands: [Hand; SEATS] = Default::default();
    let mut pending = [0usize; SEATS];

    for _ in 0..BLOCK_ROUNDS {
        for &seat in &order {
            deal(&mut wall, &mut hands, &mut pending, seat, BLOCK)?;
        }
    }
    for &seat in &order {
        deal(&mut wall, &mut hands, &mut pending, seat, 1)?;
    }
    deal(&mut wall, &mut hands, &mut pending, dealer, 1)?;

    replace_bonus_from_back(&mut wall, &mut hands, &mut pending, &order)?;

    debug!(
        dealer,
        wall_remaining = wall.len(),
        flowers = ?hands.iter().map(|h| h.flowers.len()).collect::<Vec<_>>(),
        "раздача завершена"
    );

    Ok((hands, wall))
}

/// `n` тайлов с начала стены месту `seat`.
fn deal(
    wall: &mut Wall,
    hands: &mut [Hand; SEATS],
    pending: &mut [usize; SEATS],
    seat: SeatIndex,
    n: usize,
) -> Result<(), ActionError> {
    let idx = seat as usize;
    for _ in 0..n {
        let tile = wall.draw_front().ok_or(ActionError::WallExhausted)?;
        receive(&mut hands[idx], &mut pending[idx], tile);
    }
    Ok(())
}

/// Тайл в руку: бонус — во flowers и +1 к незаменённым.
fn receive(hand: &mut Hand, pending: &mut usize, tile: Tile) {
    if tile.is_bonus() {
        hand.flowers.push(tile);
        *pending += 1;
    } else {
        hand.concealed.add(tile);
    }
}

/// Проходы по кругу: каждое место добирает с конца столько тайлов,
/// сколько у него незаменённых бонусов. Новые бонусы — в следующий проход.
fn replace_bonus_from_back(
    wall: &mut Wall,
    hands: &mut [Hand; SEATS],
    pending: &mut [usize; SEATS],
    order: &[SeatIndex; SEATS],
) -> Result<(), ActionError> {
    while pending.iter().any(|&n| n > 0) {
        for &seat in order {
            let idx = seat as usize;
            let need = std::mem::take(&mut pending[idx]);
            for _ in 0..need {
                let tile = wall.draw_back().ok_or(ActionError::WallExhausted)?;
                receive(&mut hands[idx], &mut pending[idx], tile);
            }
        }
    }
    Ok(())
}
