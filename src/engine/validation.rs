use crate::domain::{RoundConfig, SeatIndex, Tile};
use crate::engine::errors::ActionError;
use crate::engine::positions::is_valid_seat;
use crate::engine::round::Phase;
use crate::eval::lookup_tables::chi_partners;
use crate::time_ctrl::{ReservedWindow, Timestamp};

// Проверки идут в фиксированном порядке: место/ход, фаза, тайлы, окно.
// Ни одна из них ничего не меняет.

pub fn ensure_seat(seat: SeatIndex) -> Result<(), ActionError> {
    if is_valid_seat(seat) {
        Ok(())
    } else {
        Err(ActionError::InvalidSeat(seat))
    }
}

pub fn ensure_turn(turn: SeatIndex, seat: SeatIndex) -> Result<(), ActionError> {
    if turn == seat {
        Ok(())
    } else {
        Err(ActionError::WrongTurn)
    }
}

pub fn ensure_phase(actual: Phase, expected: Phase) -> Result<(), ActionError> {
    if actual == expected {
        Ok(())
    } else {
        Err(ActionError::WrongPhase)
    }
}

/// Окно перехвата: Draw и Chi ждут, пока оно закроется.
pub fn ensure_window_closed(
    last_discard_time: Timestamp,
    config: &RoundConfig,
    now: Timestamp,
) -> Result<(), ActionError> {
    if ReservedWindow::after_discard(last_discard_time, &config.timing).is_active(now) {
        Err(ActionError::ReservedWindowActive)
    } else {
        Ok(())
    }
}

/// Образуют ли `t1`, `t2` последовательность со сбросом `discard` (в любом порядке).
pub fn validate_chi_sequence(discard: Tile, t1: Tile, t2: Tile) -> Result<(), ActionError> {
    if !discard.is_suited() {
        return Err(ActionError::NonSuitedTile);
    }
    let valid = chi_partners(discard)
        .iter()
        .any(|&(a, b)| (a == t1 && b == t2) || (a == t2 && b == t1));
    if valid {
        Ok(())
    } else {
        Err(ActionError::InvalidSequence)
    }
}
