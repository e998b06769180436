//! Раунд маджонга: машина состояний ходов.
//!
//! Состояние одно на весь раунд (не на место): `Phase::Draw` или `Phase::Discard`
//! для места `turn`. Каждое действие сначала полностью проверяется
//! (место/ход → фаза → наличие тайлов → окно перехвата) и только потом
//! меняет состояние. Любая ошибка = раунд остался прежним.
//!
//! Время приходит снаружи (`Timestamp`), часы движок не читает.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{Hand, Meld, RoundConfig, SeatIndex, Tile, Wall, SEATS};
use crate::engine::actions::{ActionOutcome, RoundAction};
use crate::engine::distribution::{build_wall, distribute};
use crate::engine::errors::ActionError;
use crate::engine::hand_history::{KongSource, RoundEventKind, RoundHistory};
use crate::engine::positions::{next_seat, previous_seat};
use crate::engine::validation::{
    ensure_phase, ensure_seat, ensure_turn, ensure_window_closed, validate_chi_sequence,
};
use crate::engine::RandomSource;
use crate::time_ctrl::Timestamp;

/// Фаза раунда для места, чей сейчас ход.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Phase {
    /// Место должно добрать (или забрать сброс).
    Draw,
    /// Место должно сбросить.
    Discard,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Round {
    config: RoundConfig,
    dealer: SeatIndex,
    turn: SeatIndex,
    phase: Phase,
    /// Стек сбросов, последний — самый свежий.
    discards: Vec<Tile>,
    last_discard_time: Timestamp,
    /// Чей сброс забрал `turn` чи или понгом; `None`, если тайл пришёл из стены.
    #[serde(default)]
    claimed_from: Option<SeatIndex>,
    hands: [Hand; SEATS],
    wall: Wall,
    history: RoundHistory,
}

impl Round {
    /// Новый раунд: перемешанная стена, раздача, первым сбрасывает дилер.
    pub fn start<R: RandomSource>(
        config: RoundConfig,
        dealer: SeatIndex,
        rng: &mut R,
    ) -> Result<Self, ActionError> {
        ensure_seat(dealer)?;
        let wall = build_wall(&config, rng);
        Self::from_wall(config, dealer, wall)
    }

    /// Раунд из уже готовой (не раздававшейся) стены.
    pub fn from_wall(
        config: RoundConfig,
        dealer: SeatIndex,
        wall: Wall,
    ) -> Result<Self, ActionError> {
        ensure_seat(dealer)?;
        let (hands, wall) = distribute(wall, dealer)?;
        let mut round = Self::from_parts(config, dealer, dealer, Phase::Discard, hands, wall)?;

        round.history.push(
            Timestamp::ZERO,
            RoundEventKind::Dealt {
                dealer,
                wall_remaining: round.wall.len(),
            },
        );
        for seat in 0..SEATS {
            let flowers = &round.hands[seat].flowers;
            if !flowers.is_empty() {
                let kind = RoundEventKind::BonusCollected {
                    seat: seat as SeatIndex,
                    tiles: flowers.clone(),
                };
                round.history.push(Timestamp::ZERO, kind);
            }
        }

        debug!(dealer, wall = round.wall.len(), "раунд начат");
        Ok(round)
    }

    /// Собрать раунд из частей (восстановление снапшота, подготовленные позиции).
    pub fn from_parts(
        config: RoundConfig,
        dealer: SeatIndex,
        turn: SeatIndex,
        phase: Phase,
        hands: [Hand; SEATS],
        wall: Wall,
    ) -> Result<Self, ActionError> {
        ensure_seat(dealer)?;
        ensure_seat(turn)?;
        Ok(Self {
            config,
            dealer,
            turn,
            phase,
            discards: Vec::new(),
            last_discard_time: Timestamp::ZERO,
            claimed_from: None,
            hands,
            wall,
            history: RoundHistory::new(),
        })
    }

    // ---- чтение ----

    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    pub fn dealer(&self) -> SeatIndex {
        self.dealer
    }

    pub fn turn(&self) -> SeatIndex {
        self.turn
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn hand(&self, seat: SeatIndex) -> Option<&Hand> {
        self.hands.get(seat as usize)
    }

    pub fn hands(&self) -> &[Hand; SEATS] {
        &self.hands
    }

    pub fn discards(&self) -> &[Tile] {
        &self.discards
    }

    pub fn last_discard(&self) -> Option<Tile> {
        self.discards.last().copied()
    }

    /// Кто сделал последний сброс, если его ещё можно забрать.
    pub fn discarder(&self) -> Option<SeatIndex> {
        match (self.phase, self.discards.is_empty()) {
            (Phase::Draw, false) => Some(previous_seat(self.turn)),
            _ => None,
        }
    }

    pub fn last_discard_time(&self) -> Timestamp {
        self.last_discard_time
    }

    /// В фазе Discard: у кого `turn` забрал последний тайл.
    /// `None` — тайл добран из стены (в том числе замена после конга).
    pub fn claimed_from(&self) -> Option<SeatIndex> {
        match self.phase {
            Phase::Discard => self.claimed_from,
            Phase::Draw => None,
        }
    }

    pub fn wall(&self) -> &Wall {
        &self.wall
    }

    pub fn wall_remaining(&self) -> usize {
        self.wall.len()
    }

    /// Стена исчерпана: добрать игровой тайл уже нельзя (ничья).
    pub fn is_wall_exhausted(&self) -> bool {
        !self.wall.has_playable_from_front()
    }

    pub fn history(&self) -> &RoundHistory {
        &self.history
    }

    // ---- действия ----

    /// Единая точка входа для внешних вызовов. Отказы логируются.
    pub fn apply(
        &mut self,
        seat: SeatIndex,
        now: Timestamp,
        action: RoundAction,
    ) -> Result<ActionOutcome, ActionError> {
        let result = match &action {
            RoundAction::Draw => self.draw(seat, now),
            RoundAction::Discard(tile) => self.discard(seat, now, *tile),
            RoundAction::Chi(t1, t2) => self.chi(seat, now, *t1, *t2),
            RoundAction::Pong => self.pong(seat, now),
            RoundAction::GangFromDiscard => self.gang_from_discard(seat, now),
            RoundAction::GangFromHand(tile) => self.gang_from_hand(seat, now, *tile),
        };

        if let Err(err) = &result {
            debug!(seat, ?action, error = ?err, now = now.as_millis(), "действие отклонено");
        }
        result
    }

    /// Добор с начала стены; бонусы уходят во flowers и заменяются тоже с начала.
    pub fn draw(&mut self, seat: SeatIndex, now: Timestamp) -> Result<ActionOutcome, ActionError> {
        ensure_seat(seat)?;
        ensure_turn(self.turn, seat)?;
        ensure_phase(self.phase, Phase::Draw)?;
        self.ensure_wall_playable()?;
        if !self.discards.is_empty() {
            ensure_window_closed(self.last_discard_time, &self.config, now)?;
        }

        let (tile, bonus) = self.draw_playable_from_front(seat, now)?;
        self.phase = Phase::Discard;
        self.history.push(now, RoundEventKind::Drew { seat });

        debug!(seat, wall = self.wall.len(), bonus = bonus.len(), "добор");
        Ok(ActionOutcome::Drew { tile, bonus })
    }

    pub fn discard(
        &mut self,
        seat: SeatIndex,
        now: Timestamp,
        tile: Tile,
    ) -> Result<ActionOutcome, ActionError> {
        ensure_seat(seat)?;
        ensure_turn(self.turn, seat)?;
        ensure_phase(self.phase, Phase::Discard)?;

        let idx = seat as usize;
        if !self.hands[idx].concealed.remove(tile) {
            return Err(ActionError::MissingTiles);
        }

        self.discards.push(tile);
        self.last_discard_time = now;
        self.turn = next_seat(seat);
        self.phase = Phase::Draw;
        self.history.push(now, RoundEventKind::Discarded { seat, tile });

        debug!(seat, %tile, next = self.turn, "сброс");
        Ok(ActionOutcome::Discarded)
    }

    /// Чи: только следующее за сбросившим место, после окна перехвата.
    pub fn chi(
        &mut self,
        seat: SeatIndex,
        now: Timestamp,
        t1: Tile,
        t2: Tile,
    ) -> Result<ActionOutcome, ActionError> {
        ensure_seat(seat)?;
        ensure_turn(self.turn, seat)?;
        ensure_phase(self.phase, Phase::Draw)?;
        let discard = self.last_discard().ok_or(ActionError::NoDiscards)?;
        validate_chi_sequence(discard, t1, t2)?;

        let concealed = &self.hands[seat as usize].concealed;
        if !concealed.contains(t1) || !concealed.contains(t2) {
            return Err(ActionError::MissingTiles);
        }
        ensure_window_closed(self.last_discard_time, &self.config, now)?;

        let hand = &mut self.hands[seat as usize];
        hand.concealed.remove(t1);
        hand.concealed.remove(t2);
        self.discards.pop();
        let meld = Meld::chi(discard, t1, t2);
        hand.revealed.push(meld.clone());
        self.phase = Phase::Discard;
        self.claimed_from = Some(previous_seat(seat));
        self.history.push(now, RoundEventKind::Chowed { seat, meld });

        debug!(seat, %discard, "чи");
        Ok(ActionOutcome::Claimed)
    }

    /// Понг: любое место, кроме сбросившего. Окно перехвата не проверяется.
    pub fn pong(&mut self, seat: SeatIndex, now: Timestamp) -> Result<ActionOutcome, ActionError> {
        let (discard, from) = self.check_claim(seat, 2)?;

        let hand = &mut self.hands[seat as usize];
        hand.concealed.remove_n(discard, 2);
        hand.revealed.push(Meld::pong(discard));
        self.discards.pop();
        self.turn = seat;
        self.phase = Phase::Discard;
        self.claimed_from = Some(from);
        self.history.push(
            now,
            RoundEventKind::Ponged {
                seat,
                from,
                tile: discard,
            },
        );

        debug!(seat, from, %discard, "понг");
        Ok(ActionOutcome::Claimed)
    }

    /// Конг сброса: как понг, но нужно три копии; затем добор замены.
    pub fn gang_from_discard(
        &mut self,
        seat: SeatIndex,
        now: Timestamp,
    ) -> Result<ActionOutcome, ActionError> {
        let (discard, from) = self.check_claim(seat, 3)?;
        self.ensure_wall_playable()?;

        let hand = &mut self.hands[seat as usize];
        hand.concealed.remove_n(discard, 3);
        hand.revealed.push(Meld::gang(discard));
        self.discards.pop();
        self.turn = seat;
        self.phase = Phase::Discard;
        self.history.push(
            now,
            RoundEventKind::Konged {
                seat,
                tile: discard,
                source: KongSource::Discard,
            },
        );

        let (tile, bonus) = self.draw_playable_from_front(seat, now)?;
        debug!(seat, from, %discard, "конг сброса");
        Ok(ActionOutcome::Drew { tile, bonus })
    }

    /// Закрытый конг (4 в руке) или добавленный к открытому понгу; затем добор замены.
    pub fn gang_from_hand(
        &mut self,
        seat: SeatIndex,
        now: Timestamp,
        tile: Tile,
    ) -> Result<ActionOutcome, ActionError> {
        ensure_seat(seat)?;
        ensure_turn(self.turn, seat)?;
        ensure_phase(self.phase, Phase::Discard)?;

        let idx = seat as usize;
        let hand = &self.hands[idx];
        let source = if hand.concealed.count(tile) == 4 {
            KongSource::Concealed
        } else if hand.concealed.contains(tile) && hand.find_pong(tile).is_some() {
            KongSource::Promoted
        } else {
            return Err(ActionError::MissingTiles);
        };
        self.ensure_wall_playable()?;

        let hand = &mut self.hands[idx];
        match source {
            KongSource::Concealed => {
                hand.concealed.remove_n(tile, 4);
                hand.revealed.push(Meld::gang(tile));
            }
            _ => {
                hand.concealed.remove(tile);
                if let Some(pos) = hand.find_pong(tile) {
                    hand.revealed[pos].upgrade_to_gang();
                }
            }
        }
        self.history
            .push(now, RoundEventKind::Konged { seat, tile, source });

        let (drawn, bonus) = self.draw_playable_from_front(seat, now)?;
        debug!(seat, %tile, ?source, "конг из руки");
        Ok(ActionOutcome::Drew { tile: drawn, bonus })
    }

    // ---- внутреннее ----

    /// Общие проверки Pong / GangFromDiscard. Возвращает (сброс, кто сбросил).
    fn check_claim(&self, seat: SeatIndex, need: u8) -> Result<(Tile, SeatIndex), ActionError> {
        ensure_seat(seat)?;
        let from = previous_seat(self.turn);
        if seat == from {
            return Err(ActionError::WrongTurn);
        }
        ensure_phase(self.phase, Phase::Draw)?;
        let discard = self.last_discard().ok_or(ActionError::NoDiscards)?;
        if self.hands[seat as usize].concealed.count(discard) < need {
            return Err(ActionError::MissingTiles);
        }
        Ok((discard, from))
    }

    fn ensure_wall_playable(&self) -> Result<(), ActionError> {
        if self.wall.has_playable_from_front() {
            Ok(())
        } else {
            Err(ActionError::WallExhausted)
        }
    }

    /// Добрать с начала стены до первого игрового тайла.
    /// Вызывать только после `ensure_wall_playable`.
    fn draw_playable_from_front(
        &mut self,
        seat: SeatIndex,
        now: Timestamp,
    ) -> Result<(Tile, Vec<Tile>), ActionError> {
        self.claimed_from = None;
        let hand = &mut self.hands[seat as usize];
        let mut bonus = Vec::new();

        let tile = loop {
            let tile = self.wall.draw_front().ok_or(ActionError::WallExhausted)?;
            if tile.is_bonus() {
                hand.flowers.push(tile);
                bonus.push(tile);
            } else {
                hand.concealed.add(tile);
                break tile;
            }
        };

        if !bonus.is_empty() {
            self.history.push(
                now,
                RoundEventKind::BonusCollected {
                    seat,
                    tiles: bonus.clone(),
                },
            );
        }
        Ok((tile, bonus))
    }

    // ---- отладочные вмешательства ----

    /// Заменить закрытую руку места.
    #[cfg(any(test, feature = "debug-overrides"))]
    pub fn set_concealed(
        &mut self,
        seat: SeatIndex,
        concealed: crate::domain::TileBag,
    ) -> Result<(), ActionError> {
        ensure_seat(seat)?;
        debug!(seat, tiles = concealed.len(), "debug: рука заменена");
        self.hands[seat as usize].concealed = concealed;
        Ok(())
    }

    /// Положить тайл в начало стены (следующий добор).
    #[cfg(any(test, feature = "debug-overrides"))]
    pub fn prepend_wall(&mut self, tile: Tile) {
        debug!(%tile, "debug: тайл в начало стены");
        self.wall.tiles.push_front(tile);
    }
}

/// Применить действие к раунду.
pub fn apply_action(
    round: &mut Round,
    seat: SeatIndex,
    now: Timestamp,
    action: RoundAction,
) -> Result<ActionOutcome, ActionError> {
    round.apply(seat, now, action)
}
