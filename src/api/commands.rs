use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::{RoomId, RoundConfig, SeatIndex};
use crate::engine::{RoomManager, RoundAction};
use crate::infra::{map_round_to_dto, RngSeed};
use crate::time_ctrl::Timestamp;

use super::dto::CommandResponse;
use super::errors::ApiError;

/// Команда верхнего уровня.
///
/// Эти команды превращаются в операции (`MahjongOperation`),
/// которые Linera экспонирует наружу.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Command {
    /// Раздать новый раунд в комнате.
    CreateRound(CreateRoundCommand),

    /// Действие места в текущем раунде комнаты.
    Action(RoundActionCommand),
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateRoundCommand {
    pub room_id: RoomId,
    pub dealer: SeatIndex,
    /// Базовый seed; стена берётся из `derive(room_id, round_index)`.
    pub seed: [u8; 32],
    pub round_index: u64,
    /// `None` — стандартные правила.
    #[serde(default)]
    pub config: Option<RoundConfig>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoundActionCommand {
    pub room_id: RoomId,
    pub seat: SeatIndex,
    /// Время вызова в мс; часы ведёт вызывающая сторона.
    pub time_ms: u64,
    pub action: RoundAction,
}

/// Выполнить команду над менеджером комнат.
pub fn execute_command(
    manager: &RoomManager,
    command: Command,
) -> Result<CommandResponse, ApiError> {
    match command {
        Command::CreateRound(cmd) => {
            let mut rng = RngSeed::from_bytes(cmd.seed)
                .derive(cmd.room_id, cmd.round_index)
                .to_rng();
            let config = cmd.config.unwrap_or_default();
            manager.create_round(cmd.room_id, cmd.dealer, config, &mut rng)?;
            info!(room_id = cmd.room_id, dealer = cmd.dealer, "новый раунд");

            let view = manager.with_round(cmd.room_id, |round| {
                map_round_to_dto(cmd.room_id, round, Some(cmd.dealer))
            })?;
            Ok(CommandResponse::RoundCreated(view))
        }

        Command::Action(cmd) => {
            let outcome = manager.apply(
                cmd.room_id,
                cmd.seat,
                Timestamp::from_millis(cmd.time_ms),
                cmd.action,
            )?;
            let round = manager.with_round(cmd.room_id, |round| {
                map_round_to_dto(cmd.room_id, round, Some(cmd.seat))
            })?;
            Ok(CommandResponse::ActionApplied { outcome, round })
        }
    }
}
