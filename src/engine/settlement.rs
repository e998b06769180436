use serde::{Deserialize, Serialize};

use crate::domain::{Melds, SeatIndex};
use crate::engine::positions::is_valid_seat;
use crate::engine::round::{Phase, Round};
use crate::eval::{score_breakdown, search, FanBreakdown, ScoreContext};

/// Результат проверки выигрыша места.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct WinEvaluation {
    pub seat: SeatIndex,
    pub self_drawn: bool,
    /// Открытые сеты + лучшее разложение закрытых тайлов.
    pub melds: Melds,
    pub breakdown: FanBreakdown,
}

impl WinEvaluation {
    pub fn fan(&self) -> u32 {
        self.breakdown.total
    }
}

/// Может ли `seat` объявить выигрыш прямо сейчас, и сколько это стоит.
///
/// - на своём ходу: ход `seat`, фаза Discard → разбираем закрытые тайлы;
///   самостоятельный добор, только если последний тайл пришёл из стены;
/// - на чужом сбросе: фаза Draw, `seat` не сбросивший → закрытые + последний сброс.
///
/// Из всех разложений берётся дающее больше фаней (при равенстве — первое).
pub fn evaluate_win(round: &Round, seat: SeatIndex) -> Option<WinEvaluation> {
    if !is_valid_seat(seat) {
        return None;
    }
    let hand = round.hand(seat)?;

    let (tiles, completed_by) = match round.phase() {
        Phase::Discard if round.turn() == seat => {
            let completed_by = round.claimed_from().unwrap_or(seat);
            (hand.concealed.clone(), completed_by)
        }
        Phase::Draw => {
            let discarder = round.discarder()?;
            if discarder == seat {
                return None;
            }
            let discard = round.last_discard()?;
            (hand.concealed_with(discard), discarder)
        }
        Phase::Discard => return None,
    };

    let ctx = ScoreContext::new(seat, round.dealer(), completed_by)
        .with_prevailing_wind(round.config().prevailing_wind);

    let mut best: Option<WinEvaluation> = None;
    for decomposition in search(&tiles) {
        let mut melds = hand.revealed.clone();
        melds.extend(decomposition);
        let breakdown = score_breakdown(&ctx, &melds, &hand.flowers);

        if best.as_ref().map_or(true, |b| breakdown.total > b.breakdown.total) {
            best = Some(WinEvaluation {
                seat,
                self_drawn: ctx.is_self_drawn(),
                melds,
                breakdown,
            });
        }
    }
    best
}
