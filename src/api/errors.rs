use serde::{Deserialize, Serialize};

use crate::domain::RoomId;
use crate::engine::{ActionError, ManagerError};

/// Ошибки внешнего API (то, что отдаём клиенту).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (например, битый JSON конфига).
    BadRequest(String),

    /// Комната не найдена.
    RoomNotFound(RoomId),

    /// Действие отклонено раундом. `retriable` — можно повторить позже как есть.
    ActionRejected { reason: String, retriable: bool },

    /// Внутренняя ошибка сервера.
    Internal(String),
}

impl From<ActionError> for ApiError {
    fn from(err: ActionError) -> Self {
        ApiError::ActionRejected {
            reason: err.to_string(),
            retriable: err.is_retriable(),
        }
    }
}

impl From<ManagerError> for ApiError {
    fn from(err: ManagerError) -> Self {
        match err {
            ManagerError::RoomNotFound(id) => ApiError::RoomNotFound(id),
            ManagerError::Engine(e) => e.into(),
            ManagerError::Poisoned => ApiError::Internal(err.to_string()),
        }
    }
}
