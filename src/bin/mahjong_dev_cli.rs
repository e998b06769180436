// src/bin/mahjong_dev_cli.rs
//
// Dev-CLI: одна комната, четыре простых бота, раунд до выигрыша или пустой стены.
// Seed можно передать первым аргументом (u64), иначе берётся системная энтропия.

use mahjong_engine::api::{execute_command, execute_query, Command, CreateRoundCommand, Query, QueryResponse};
use mahjong_engine::domain::{RoomId, SeatIndex, Tile, SEATS};
use mahjong_engine::engine::{evaluate_win, next_seat, Phase, RoomManager, Round, RoundAction};
use mahjong_engine::infra::{IdGenerator, RngSeed};
use mahjong_engine::time_ctrl::Timestamp;
use tracing::{info, warn, Level};

const MAX_STEPS: usize = 1_000;

fn main() {
    tracing_subscriber::fmt().with_max_level(Level::DEBUG).init();

    let seed = match std::env::args().nth(1).and_then(|s| s.parse::<u64>().ok()) {
        Some(x) => RngSeed::from_u64(x),
        None => RngSeed::random(),
    };

    let ids = IdGenerator::new();
    let manager = RoomManager::new();
    let room_id = ids.next_room_id();

    let created = execute_command(
        &manager,
        Command::CreateRound(CreateRoundCommand {
            room_id,
            dealer: 0,
            seed: seed.bytes,
            round_index: ids.next_round_id(),
            config: None,
        }),
    );
    if let Err(e) = created {
        warn!(?e, "не удалось раздать раунд");
        return;
    }

    play(&manager, room_id);

    if let Ok(QueryResponse::Round(view)) =
        execute_query(&manager, Query::GetRound { room_id, viewer: None })
    {
        info!(
            turn = view.turn,
            wall = view.wall_remaining,
            discards = view.discards.len(),
            "итоговое состояние"
        );
    }
}

fn play(manager: &RoomManager, room_id: RoomId) {
    let mut now = Timestamp::ZERO;

    for _ in 0..MAX_STEPS {
        let Ok(round) = manager.snapshot(room_id) else {
            return;
        };
        now = now + round.config().timing.reserved_window();

        if let Some(win) = (0..SEATS as SeatIndex).find_map(|seat| evaluate_win(&round, seat)) {
            info!(
                seat = win.seat,
                self_drawn = win.self_drawn,
                fan = win.fan(),
                breakdown = %win.breakdown.describe(),
                "выигрыш"
            );
            return;
        }

        let (seat, action) = match round.phase() {
            Phase::Draw => {
                if round.is_wall_exhausted() {
                    info!("стена пуста, ничья");
                    return;
                }
                claim(&round).unwrap_or((round.turn(), RoundAction::Draw))
            }
            Phase::Discard => (round.turn(), RoundAction::Discard(pick_discard(&round))),
        };

        if let Err(e) = manager.apply(room_id, seat, now, action) {
            warn!(seat, ?e, "бот сделал недопустимый ход");
            return;
        }
    }
}

/// Первый по кругу после сбросившего, кто может забрать сброс конгом или понгом.
fn claim(round: &Round) -> Option<(SeatIndex, RoundAction)> {
    let discard = round.last_discard()?;
    let discarder = round.discarder()?;
    let mut seat = next_seat(discarder);
    while seat != discarder {
        match round.hand(seat)?.concealed.count(discard) {
            3 if !round.is_wall_exhausted() => return Some((seat, RoundAction::GangFromDiscard)),
            2 | 3 => return Some((seat, RoundAction::Pong)),
            _ => {}
        }
        seat = next_seat(seat);
    }
    None
}

/// Сбрасываем одиночку с наибольшим индексом, иначе — старший тайл.
fn pick_discard(round: &Round) -> Tile {
    let Some(hand) = round.hand(round.turn()) else {
        return Tile::dots(1);
    };
    let lonely = hand
        .concealed
        .iter()
        .filter(|&(_, n)| n == 1)
        .map(|(t, _)| t)
        .last();
    lonely
        .or_else(|| hand.concealed.to_sorted_vec().last().copied())
        .unwrap_or(Tile::dots(1))
}
