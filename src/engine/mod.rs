//! Движок раунда маджонга: раздача, ходы, перехваты сбросов, расчёт выигрыша.
//!
//! Высокоуровневый объект: `Round`
//! Основные операции:
//!   - `Round::start` – построить стену и раздать руки
//!   - `apply_action` – применить действие места
//!   - `evaluate_win` – проверить и оценить выигрыш места

pub mod actions;
pub mod distribution;
pub mod errors;
pub mod hand_history;
pub mod positions;
pub mod room_manager;
pub mod round;
pub mod settlement;
pub mod validation;

pub use actions::{ActionOutcome, RoundAction};
pub use distribution::{build_wall, distribute};
pub use errors::ActionError;
pub use hand_history::{KongSource, RoundEvent, RoundEventKind, RoundHistory};
pub use positions::{next_seat, previous_seat, seat_wind, seats_from};
pub use round::{apply_action, Phase, Round};
pub use settlement::{evaluate_win, WinEvaluation};

/// RNG интерфейс для engine.
/// Реализации — в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}

pub use room_manager::{ManagerError, RoomManager};
