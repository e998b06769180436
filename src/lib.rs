//! Главный модуль приложения Mahjong на Linera.
//!
//! Здесь описываем ABI (Operation / Message / Query / Response) и
//! собираем дерево модулей движка.

pub mod api;
pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;
pub mod state;
pub mod time_ctrl;

use linera_sdk::linera_base_types::{ContractAbi, ServiceAbi};
use serde::{Deserialize, Serialize};

use crate::api::{Command, Query, QueryResponse};

/// Операции (внешние команды), которые модуль принимает.
///
/// Одна операция = одна команда из api::Command.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum MahjongOperation {
    Command(Command),
}

/// Сообщения между приложениями Linera. Пока не нужны.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum MahjongMessage {}

/// Запросы к сервису (read-only).
pub type MahjongQuery = Query;

/// Ответы на запросы.
pub type MahjongResponse = QueryResponse;

/// ABI для контракта и сервиса.
#[derive(Clone, Debug)]
pub struct MahjongAbi;

impl ContractAbi for MahjongAbi {
    type Operation = MahjongOperation;
    type Response = ();
}

impl ServiceAbi for MahjongAbi {
    type Query = MahjongQuery;
    type QueryResponse = MahjongResponse;
}

/// Снапшот, который хранит внешний слой.
pub type Storage = state::RoundSnapshot;
