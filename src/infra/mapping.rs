use crate::api::dto::{RoundViewDto, SeatViewDto};
use crate::domain::{RoomId, SeatIndex};
use crate::engine::{seat_wind, Round};

/// Round -> RoundViewDto глазами `viewer`.
///
/// Закрытые тайлы показываем только самому `viewer`; остальным — количество.
/// `viewer = None` — наблюдатель, не видит ничьих закрытых тайлов.
pub fn map_round_to_dto(room_id: RoomId, round: &Round, viewer: Option<SeatIndex>) -> RoundViewDto {
    let seats = round
        .hands()
        .iter()
        .enumerate()
        .map(|(idx, hand)| {
            let seat = idx as SeatIndex;
            SeatViewDto {
                seat,
                seat_wind: seat_wind(seat, round.dealer()),
                concealed_count: hand.concealed.len(),
                concealed: (viewer == Some(seat)).then(|| hand.concealed.to_sorted_vec()),
                revealed: hand.revealed.clone(),
                flowers: hand.flowers.clone(),
            }
        })
        .collect();

    RoundViewDto {
        room_id,
        dealer: round.dealer(),
        turn: round.turn(),
        phase: round.phase(),
        prevailing_wind: round.config().prevailing_wind,
        discards: round.discards().to_vec(),
        last_discard_ms: round.last_discard_time().as_millis(),
        wall_remaining: round.wall_remaining(),
        wall_exhausted: round.is_wall_exhausted(),
        seats,
    }
}
