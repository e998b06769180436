use std::sync::OnceLock;

use crate::domain::tile::{Suit, Tile};

/// Пара тайлов, которая вместе с заданным образует чи.
pub type ChiPair = (Tile, Tile);

/// Для каждого индекса каталога — все пары-партнёры для чи.
///
/// Для ранга r в масти s это (максимум три варианта):
///   (r-2, r-1), (r-1, r+1), (r+1, r+2)
/// Для не-числовых тайлов — пусто.
static CHI_PARTNERS: OnceLock<Vec<Vec<ChiPair>>> = OnceLock::new();

fn build_table() -> Vec<Vec<ChiPair>> {
    let mut table = vec![Vec::new(); Tile::KINDS];
    for suit in Suit::ALL {
        for rank in 1..=9u8 {
            let t = |r: u8| Tile::suited(suit, r);
            let mut pairs = Vec::with_capacity(3);
            if rank >= 3 {
                pairs.push((t(rank - 2), t(rank - 1)));
            }
            if (2..=8).contains(&rank) {
                pairs.push((t(rank - 1), t(rank + 1)));
            }
            if rank <= 7 {
                pairs.push((t(rank + 1), t(rank + 2)));
            }
            table[t(rank).index()] = pairs;
        }
    }
    table
}

/// Пары-партнёры для чи с тайлом `tile`.
pub fn chi_partners(tile: Tile) -> &'static [ChiPair] {
    CHI_PARTNERS
        .get_or_init(build_table)
        .get(tile.index())
        .map_or(&[][..], Vec::as_slice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tile::Wind;

    #[test]
    fn edges_have_single_partner_pair() {
        assert_eq!(
            chi_partners(Tile::dots(1)),
            &[(Tile::dots(2), Tile::dots(3))]
        );
        assert_eq!(
            chi_partners(Tile::characters(9)),
            &[(Tile::characters(7), Tile::characters(8))]
        );
    }

    #[test]
    fn middle_ranks_have_three_pairs() {
        assert_eq!(
            chi_partners(Tile::bamboo(5)),
            &[
                (Tile::bamboo(3), Tile::bamboo(4)),
                (Tile::bamboo(4), Tile::bamboo(6)),
                (Tile::bamboo(6), Tile::bamboo(7)),
            ]
        );
        assert_eq!(chi_partners(Tile::bamboo(2)).len(), 2);
    }

    #[test]
    fn honors_and_bonus_have_none() {
        assert!(chi_partners(Tile::Wind(Wind::East)).is_empty());
        assert!(chi_partners(Tile::Flower(1)).is_empty());
        assert!(chi_partners(Tile::dots(60)).is_empty());
    }
}
