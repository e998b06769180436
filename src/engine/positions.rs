use crate::domain::{SeatIndex, Wind, SEATS};

const SEAT_COUNT: SeatIndex = SEATS as SeatIndex;

/// Следующее место по кругу.
pub fn next_seat(seat: SeatIndex) -> SeatIndex {
    (seat + 1) % SEAT_COUNT
}

/// Предыдущее место по кругу (тот, кто только что сбросил, когда фаза Draw).
pub fn previous_seat(seat: SeatIndex) -> SeatIndex {
    (seat + SEAT_COUNT - 1) % SEAT_COUNT
}

/// Все места по кругу начиная со `start` (включительно).
pub fn seats_from(start: SeatIndex) -> [SeatIndex; SEATS] {
    let mut out = [0; SEATS];
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = (start + i as SeatIndex) % SEAT_COUNT;
    }
    out
}

/// Ветер места относительно дилера: (seat − dealer + 4) mod 4.
pub fn seat_wind(seat: SeatIndex, dealer: SeatIndex) -> Wind {
    Wind::from_index((seat % SEAT_COUNT + SEAT_COUNT - dealer % SEAT_COUNT) % SEAT_COUNT)
}

pub fn is_valid_seat(seat: SeatIndex) -> bool {
    seat < SEAT_COUNT
}
