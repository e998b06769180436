// tests/round_actions_tests.rs
//
// Машина состояний раунда:
//  - окно перехвата: ранний Draw/Chi отклоняется, после окна проходит
//  - Chi: последовательность, наличие тайлов, только следующее место
//  - Pong / GangFromDiscard: приоритет над очередью, сбросивший не может
//  - GangFromHand: закрытый, добавленный, отказ при трёх тайлах
//  - любая ошибка не меняет раунд

use mahjong_engine::domain::{parse_tiles, Hand, Meld, RoundConfig, Tile, TileBag, Wall, Wind};
use mahjong_engine::engine::{
    apply_action, ActionError, ActionOutcome, KongSource, Phase, Round, RoundAction,
    RoundEventKind,
};
use mahjong_engine::time_ctrl::Timestamp;

// -----------------------------
// ВСПОМОГАТЕЛЬНЫЕ КОНСТРУКТОРЫ
// -----------------------------

fn tiles(s: &str) -> Vec<Tile> {
    parse_tiles(s).unwrap()
}

fn hand(s: &str) -> Hand {
    Hand {
        concealed: TileBag::from_tiles(tiles(s)),
        ..Hand::default()
    }
}

fn round_with(hands: [&str; 4], wall: &str, turn: u8, phase: Phase) -> Round {
    Round::from_parts(
        RoundConfig::standard(),
        0,
        turn,
        phase,
        hands.map(hand),
        Wall::from_tiles(tiles(wall)),
    )
    .unwrap()
}

/// Место 0 сбрасывает, остальные держат разное под перехваты.
fn table() -> Round {
    round_with(
        ["3d 9c E", "1d 2d 4d 5d", "3d 3d 7b", "9c 9c 9c 1b"],
        "6b 7b 8b 9b",
        0,
        Phase::Discard,
    )
}

fn t(ms: u64) -> Timestamp {
    Timestamp(ms)
}

fn east() -> Tile {
    Tile::Wind(Wind::East)
}

// -----------------------------
// ОКНО ПЕРЕХВАТА
// -----------------------------

#[test]
fn draw_inside_reserved_window_is_rejected_then_allowed() {
    let mut r = table();
    assert_eq!(r.discard(0, t(1_000), Tile::dots(3)), Ok(ActionOutcome::Discarded));
    assert_eq!(r.turn(), 1);
    assert_eq!(r.phase(), Phase::Draw);
    assert_eq!(r.last_discard_time(), t(1_000));

    let before = r.clone();
    let err = r.draw(1, t(1_500)).unwrap_err();
    assert_eq!(err, ActionError::ReservedWindowActive);
    assert!(err.is_retriable());
    assert_eq!(r, before);

    let out = r.draw(1, t(3_000)).unwrap();
    assert_eq!(out.drawn_tile(), Some(Tile::bamboo(6)));
    assert_eq!(r.phase(), Phase::Discard);
    assert_eq!(r.wall_remaining(), 3);
}

#[test]
fn chi_waits_for_window_too() {
    let mut r = table();
    r.discard(0, t(1_000), Tile::dots(3)).unwrap();

    assert_eq!(
        r.chi(1, t(2_999), Tile::dots(2), Tile::dots(4)),
        Err(ActionError::ReservedWindowActive)
    );
    assert_eq!(r.chi(1, t(3_000), Tile::dots(4), Tile::dots(2)), Ok(ActionOutcome::Claimed));

    let h = r.hand(1).unwrap();
    assert_eq!(h.revealed, vec![Meld::chi(Tile::dots(2), Tile::dots(3), Tile::dots(4))]);
    assert_eq!(h.revealed[0].tiles, tiles("2d 3d 4d"));
    assert_eq!(h.concealed.to_sorted_vec(), tiles("1d 5d"));
    assert!(r.discards().is_empty());
    assert_eq!(r.turn(), 1);
    assert_eq!(r.phase(), Phase::Discard);
}

#[test]
fn draw_without_any_discard_is_not_gated() {
    let mut r = round_with(["9c", "", "", ""], "6b 7b", 0, Phase::Draw);
    assert!(r.discards().is_empty());

    let out = r.draw(0, t(0)).unwrap();
    assert_eq!(out.drawn_tile(), Some(Tile::bamboo(6)));
    assert_eq!(r.phase(), Phase::Discard);
}

// -----------------------------
// CHI
// -----------------------------

#[test]
fn chi_rejections() {
    let mut r = table();
    r.discard(0, t(0), Tile::dots(3)).unwrap();
    let before = r.clone();
    let later = t(10_000);

    assert_eq!(r.chi(2, later, Tile::dots(1), Tile::dots(2)), Err(ActionError::WrongTurn));
    assert_eq!(r.chi(1, later, Tile::dots(1), Tile::dots(5)), Err(ActionError::InvalidSequence));
    assert_eq!(r.chi(1, later, Tile::dots(4), Tile::bamboo(5)), Err(ActionError::InvalidSequence));
    assert_eq!(r.chi(1, later, Tile::dots(2), Tile::dots(2)), Err(ActionError::InvalidSequence));
    assert_eq!(r, before);
}

#[test]
fn chi_needs_both_tiles_in_hand() {
    let mut r = table();
    r.discard(0, t(0), Tile::characters(9)).unwrap();
    assert_eq!(
        r.chi(1, t(10_000), Tile::characters(7), Tile::characters(8)),
        Err(ActionError::MissingTiles)
    );
}

#[test]
fn chi_on_honor_discard_is_non_suited() {
    let mut r = table();
    r.discard(0, t(0), east()).unwrap();
    assert_eq!(
        r.chi(1, t(10_000), Tile::dots(1), Tile::dots(2)),
        Err(ActionError::NonSuitedTile)
    );
}

#[test]
fn claims_without_discards() {
    let mut r = round_with(["", "1d 2d", "3d 3d", ""], "1b", 1, Phase::Draw);
    assert_eq!(r.chi(1, t(0), Tile::dots(1), Tile::dots(2)), Err(ActionError::NoDiscards));
    assert_eq!(r.pong(2, t(0)), Err(ActionError::NoDiscards));
    assert_eq!(r.gang_from_discard(2, t(0)), Err(ActionError::NoDiscards));
}

// -----------------------------
// PONG / GANG FROM DISCARD
// -----------------------------

#[test]
fn discarder_cannot_pong_own_tile() {
    let mut r = table();
    r.discard(0, t(1_000), Tile::dots(3)).unwrap();
    assert_eq!(r.pong(0, t(1_001)), Err(ActionError::WrongTurn));
}

#[test]
fn pong_bypasses_window_and_takes_the_turn() {
    let mut r = table();
    r.discard(0, t(1_000), Tile::dots(3)).unwrap();

    assert_eq!(r.pong(3, t(1_001)), Err(ActionError::MissingTiles));
    assert_eq!(r.pong(2, t(1_001)), Ok(ActionOutcome::Claimed));

    assert_eq!(r.turn(), 2);
    assert_eq!(r.phase(), Phase::Discard);
    assert!(r.discards().is_empty());
    let h = r.hand(2).unwrap();
    assert_eq!(h.revealed, vec![Meld::pong(Tile::dots(3))]);
    assert_eq!(h.concealed.to_sorted_vec(), tiles("7b"));

    // Место 1 своё право на добор потеряло.
    assert_eq!(r.draw(1, t(5_000)), Err(ActionError::WrongTurn));

    assert!(matches!(
        r.history().last().map(|e| &e.kind),
        Some(RoundEventKind::Ponged { seat: 2, from: 0, .. })
    ));
}

#[test]
fn gang_from_discard_draws_replacement() {
    let mut r = table();
    r.discard(0, t(1_000), Tile::characters(9)).unwrap();

    let out = r.gang_from_discard(3, t(1_200)).unwrap();
    assert_eq!(
        out,
        ActionOutcome::Drew {
            tile: Tile::bamboo(6),
            bonus: vec![],
        }
    );
    assert_eq!(r.turn(), 3);
    assert_eq!(r.phase(), Phase::Discard);
    let h = r.hand(3).unwrap();
    assert_eq!(h.revealed, vec![Meld::gang(Tile::characters(9))]);
    assert_eq!(h.concealed.to_sorted_vec(), tiles("1b 6b"));
    assert_eq!(r.wall_remaining(), 3);
}

#[test]
fn pong_needs_draw_phase() {
    let mut r = table();
    assert_eq!(r.pong(2, t(0)), Err(ActionError::WrongPhase));
}

// -----------------------------
// GANG FROM HAND
// -----------------------------

#[test]
fn three_concealed_without_pong_is_missing_tiles() {
    let mut r = round_with(["E E E 1d", "", "", ""], "2d", 0, Phase::Discard);
    let before = r.clone();
    assert_eq!(r.gang_from_hand(0, t(0), east()), Err(ActionError::MissingTiles));
    assert_eq!(r, before);
}

#[test]
fn concealed_gang_keeps_discard_phase() {
    let mut r = round_with(["E E E E 1d", "", "", ""], "2d 3d", 0, Phase::Discard);
    let out = r.gang_from_hand(0, t(0), east()).unwrap();

    assert_eq!(out.drawn_tile(), Some(Tile::dots(2)));
    let h = r.hand(0).unwrap();
    assert_eq!(h.revealed, vec![Meld::gang(east())]);
    assert_eq!(h.concealed.to_sorted_vec(), tiles("1d 2d"));
    assert_eq!(r.turn(), 0);
    assert_eq!(r.phase(), Phase::Discard);
}

#[test]
fn promoted_gang_upgrades_existing_pong() {
    let mut seat0 = hand("E 5c");
    seat0.revealed.push(Meld::pong(east()));
    let hands = [seat0, Hand::default(), Hand::default(), Hand::default()];
    let mut r = Round::from_parts(
        RoundConfig::standard(),
        0,
        0,
        Phase::Discard,
        hands,
        Wall::from_tiles(tiles("9b")),
    )
    .unwrap();

    let out = r.gang_from_hand(0, t(3), east()).unwrap();
    assert_eq!(out.drawn_tile(), Some(Tile::bamboo(9)));

    let h = r.hand(0).unwrap();
    assert_eq!(h.revealed, vec![Meld::gang(east())]);
    assert_eq!(h.concealed.to_sorted_vec(), tiles("9b 5c"));
    assert!(matches!(
        r.history().events.first().map(|e| &e.kind),
        Some(RoundEventKind::Konged {
            seat: 0,
            source: KongSource::Promoted,
            ..
        })
    ));
}

#[test]
fn gang_from_hand_only_on_own_discard_phase() {
    let mut r = round_with(["", "E E E E", "", ""], "2d", 0, Phase::Discard);
    assert_eq!(r.gang_from_hand(1, t(0), east()), Err(ActionError::WrongTurn));
}

// -----------------------------
// DRAW / DISCARD
// -----------------------------

#[test]
fn draw_replaces_bonus_tiles_from_front() {
    let mut r = round_with(["1d", "", "", ""], "f2 s3 5c 1b", 0, Phase::Discard);
    r.discard(0, t(0), Tile::dots(1)).unwrap();

    let out = r.draw(1, t(5_000)).unwrap();
    assert_eq!(
        out,
        ActionOutcome::Drew {
            tile: Tile::characters(5),
            bonus: vec![Tile::Flower(2), Tile::Season(3)],
        }
    );
    let h = r.hand(1).unwrap();
    assert_eq!(h.flowers, vec![Tile::Flower(2), Tile::Season(3)]);
    assert_eq!(h.concealed.to_sorted_vec(), tiles("5c"));
    assert_eq!(r.wall().as_vec(), tiles("1b"));
    assert!(r
        .history()
        .events
        .iter()
        .any(|e| matches!(e.kind, RoundEventKind::BonusCollected { seat: 1, .. })));
}

#[test]
fn draw_from_bonus_only_wall_is_exhausted() {
    let mut r = round_with(["1d", "", "", ""], "f1 s1", 0, Phase::Discard);
    r.discard(0, t(0), Tile::dots(1)).unwrap();
    let before = r.clone();

    assert!(r.is_wall_exhausted());
    assert_eq!(r.draw(1, t(5_000)), Err(ActionError::WallExhausted));
    assert_eq!(r, before);
}

#[test]
fn basic_turn_and_phase_errors() {
    let mut r = table();
    let before = r.clone();

    assert_eq!(r.draw(4, t(0)), Err(ActionError::InvalidSeat(4)));
    assert_eq!(r.draw(0, t(0)), Err(ActionError::WrongPhase));
    assert_eq!(r.discard(1, t(0), Tile::dots(1)), Err(ActionError::WrongTurn));
    assert_eq!(r.discard(0, t(0), Tile::bamboo(9)), Err(ActionError::MissingTiles));
    assert_eq!(r, before);
}

#[test]
fn apply_action_dispatches_and_records_history() {
    let mut r = table();

    apply_action(&mut r, 0, t(100), RoundAction::Discard(Tile::dots(3))).unwrap();
    apply_action(&mut r, 2, t(200), RoundAction::Pong).unwrap();
    apply_action(&mut r, 2, t(300), RoundAction::Discard(Tile::bamboo(7))).unwrap();
    let err = apply_action(&mut r, 3, t(400), RoundAction::Draw).unwrap_err();
    assert_eq!(err, ActionError::ReservedWindowActive);
    apply_action(&mut r, 3, t(2_300), RoundAction::Draw).unwrap();

    let indices: Vec<u32> = r.history().events.iter().map(|e| e.index).collect();
    assert_eq!(indices, vec![0, 1, 2, 3]);
    assert_eq!(r.discards(), tiles("7b").as_slice());
    assert_eq!(r.turn(), 3);
    assert_eq!(r.phase(), Phase::Discard);
}
