// tests/distribution_tests.rs
//
// Раздача:
//  1) без бонусов: блоки по 4, по одному, лишний тайл дилеру
//  2) бонус в блоке заменяется с конца стены
//  3) бонус, пришедший на замену, заменяется следующим проходом
//  4) порядок замены — по кругу от дилера
//  5) стартовый раунд: дилер сбрасывает первым
//  6) свойство сохранения тайлов на случайных seed (proptest)

use mahjong_engine::domain::{Hand, RoundConfig, Tile, TileBag, Wall, SEATS};
use mahjong_engine::engine::{distribute, Phase, Round, RoundEventKind};
use mahjong_engine::infra::DeterministicRng;
use proptest::prelude::*;

/// 136 игровых тайлов в каноническом порядке: 1d×4, 2d×4, …, P×4.
fn standard_tiles() -> Vec<Tile> {
    Wall::catalogue(false)
        .as_vec()
        .into_iter()
        .filter(|t| !t.is_bonus())
        .collect()
}

fn concealed_len(hands: &[Hand; SEATS]) -> Vec<usize> {
    hands.iter().map(|h| h.concealed.len()).collect()
}

#[test]
fn deal_without_bonus_follows_block_order() {
    let wall = Wall::from_tiles(standard_tiles());
    let (hands, rest) = distribute(wall, 0).unwrap();

    assert_eq!(concealed_len(&hands), vec![14, 13, 13, 13]);
    assert_eq!(rest.len(), 136 - 53);

    // Дилер: 1d×4, 5d×4, 9d×4 (три блока), 4b (одиночный), 5b (лишний).
    let dealer = &hands[0].concealed;
    assert_eq!(dealer.count(Tile::dots(1)), 4);
    assert_eq!(dealer.count(Tile::dots(5)), 4);
    assert_eq!(dealer.count(Tile::dots(9)), 4);
    assert_eq!(dealer.count(Tile::bamboo(4)), 1);
    assert_eq!(dealer.count(Tile::bamboo(5)), 1);

    // Место 3: 4d×4, 8d×4, 3b×4, 4b.
    let last = &hands[3].concealed;
    assert_eq!(last.count(Tile::dots(4)), 4);
    assert_eq!(last.count(Tile::dots(8)), 4);
    assert_eq!(last.count(Tile::bamboo(3)), 4);
    assert_eq!(last.count(Tile::bamboo(4)), 1);

    assert!(hands.iter().all(|h| h.flowers.is_empty()));
}

#[test]
fn bonus_in_block_is_replaced_from_back() {
    let mut tiles = vec![Tile::Flower(1)];
    tiles.extend(standard_tiles());
    let wall = Wall::from_tiles(tiles);

    let (hands, rest) = distribute(wall, 0).unwrap();

    assert_eq!(hands[0].flowers, vec![Tile::Flower(1)]);
    assert_eq!(concealed_len(&hands), vec![14, 13, 13, 13]);
    // Замена — последний тайл стены (белый дракон).
    assert_eq!(hands[0].concealed.count("P".parse().unwrap()), 1);
    assert_eq!(rest.len(), 137 - 53 - 1);
}

#[test]
fn chained_bonus_is_replaced_in_next_pass() {
    let mut tiles = vec![Tile::Flower(1)];
    tiles.extend(standard_tiles());
    tiles.push(Tile::Season(2));
    let wall = Wall::from_tiles(tiles);

    let (hands, rest) = distribute(wall, 0).unwrap();

    assert_eq!(hands[0].flowers, vec![Tile::Flower(1), Tile::Season(2)]);
    assert_eq!(hands[0].concealed.len(), 14);
    assert_eq!(rest.len(), 138 - 53 - 2);
    for hand in &hands {
        assert!(hand.concealed.iter().all(|(t, _)| !t.is_bonus()));
    }
}

#[test]
fn replacement_goes_around_from_dealer() {
    // Дилер — место 2. Бонусы приходят месту 2 (первый блок) и месту 3 (второй блок).
    let std = standard_tiles();
    let mut tiles = vec![Tile::Flower(1)];
    tiles.extend_from_slice(&std[..3]);
    tiles.push(Tile::Season(1));
    tiles.extend_from_slice(&std[3..]);
    tiles.push(Tile::characters(9));
    tiles.push(Tile::Wind(mahjong_engine::domain::Wind::North));

    let (hands, _rest) = distribute(Wall::from_tiles(tiles), 2).unwrap();

    assert_eq!(hands[2].flowers, vec![Tile::Flower(1)]);
    assert_eq!(hands[3].flowers, vec![Tile::Season(1)]);
    // Место 2 (дилер) берёт с конца первым, место 3 — следующий тайл с конца.
    assert_eq!(hands[2].concealed.count(Tile::Wind(mahjong_engine::domain::Wind::North)), 1);
    assert_eq!(hands[3].concealed.count(Tile::characters(9)), 1);
    assert_eq!(concealed_len(&hands), vec![13, 13, 14, 13]);
}

#[test]
fn short_wall_is_rejected() {
    let wall = Wall::from_tiles(standard_tiles().into_iter().take(20));
    assert!(distribute(wall, 0).is_err());
}

#[test]
fn started_round_waits_for_dealer_discard() {
    let mut rng = DeterministicRng::from_u64(2024);
    let round = Round::start(RoundConfig::standard(), 1, &mut rng).unwrap();

    assert_eq!(round.turn(), 1);
    assert_eq!(round.dealer(), 1);
    assert_eq!(round.phase(), Phase::Discard);
    assert!(round.discards().is_empty());
    assert!(matches!(
        round.history().events.first().map(|e| &e.kind),
        Some(RoundEventKind::Dealt { dealer: 1, .. })
    ));
}

proptest! {
    #[test]
    fn distribution_conserves_every_tile(seed in any::<u64>(), dealer in 0u8..4, animals in any::<bool>()) {
        let config = RoundConfig::standard().with_animals(animals);
        let mut rng = DeterministicRng::from_u64(seed);
        let round = Round::start(config, dealer, &mut rng).unwrap();

        let mut all = TileBag::new();
        for hand in round.hands() {
            all.extend_from(&hand.concealed);
            all.extend(hand.flowers.iter().copied());
            prop_assert!(hand.concealed.iter().all(|(t, _)| !t.is_bonus()));
        }
        all.extend(round.wall().as_vec());

        let catalogue: TileBag = Wall::catalogue(animals).as_vec().into_iter().collect();
        prop_assert_eq!(all, catalogue);

        for seat in 0..4u8 {
            let expected = if seat == dealer { 14 } else { 13 };
            prop_assert_eq!(round.hand(seat).unwrap().concealed.len(), expected);
        }
    }
}
