use crate::domain::SeatIndex;

use thiserror::Error;

/// Ошибки действий в раунде.
///
/// Любая ошибка означает, что состояние раунда не изменилось.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ActionError {
    #[error("Места {0} не существует")]
    InvalidSeat(SeatIndex),

    #[error("Сейчас не ход этого места")]
    WrongTurn,

    #[error("Действие недопустимо в текущей фазе")]
    WrongPhase,

    #[error("В руке нет нужных тайлов")]
    MissingTiles,

    #[error("Сбросов ещё нет")]
    NoDiscards,

    #[error("Тайлы не образуют последовательность со сбросом")]
    InvalidSequence,

    #[error("Идёт окно перехвата сброса, повторите позже")]
    ReservedWindowActive,

    #[error("Чи возможно только с числовым тайлом")]
    NonSuitedTile,

    #[error("В стене не осталось тайлов для добора")]
    WallExhausted,
}

impl ActionError {
    /// Имеет ли смысл повторить то же действие позже без изменений.
    pub fn is_retriable(&self) -> bool {
        matches!(self, ActionError::ReservedWindowActive)
    }
}
