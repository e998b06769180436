use crate::domain::{Meld, Melds, TileBag};

/// Все разложения закрытых тайлов на сеты по три (чи / понг) + ровно одну пару.
///
/// Перебор идёт от наименьшего оставшегося тайла `x` (канонический порядок каталога).
/// Все копии `x` должны уйти сразу: в `k` чи, начинающихся с `x`, максимум в один понг
/// и максимум в пару. Для каждой комбинации (понг?, пара?) число чи определено однозначно,
/// поэтому одно и то же разложение не появляется дважды.
///
/// Порядок вариантов: сначала без понга (чи), потом с понгом; внутри — без пары, с парой.
/// Сеты в разложении идут в порядке их нахождения: чи, понг, пара.
///
/// Пустой вход, размер не ≡ 2 (mod 3) или бонусные тайлы → пустой результат.
pub fn search(tiles: &TileBag) -> Vec<Melds> {
    let mut out = Vec::new();
    if tiles.is_empty() || tiles.len() % 3 != 2 {
        return out;
    }
    if tiles.iter().any(|(t, _)| t.is_bonus()) {
        return out;
    }

    let mut rest = tiles.clone();
    let mut acc = Vec::with_capacity(tiles.len() / 3 + 1);
    walk(&mut rest, &mut acc, false, &mut out);
    out
}

/// Есть ли хотя бы одно разложение.
pub fn is_complete(tiles: &TileBag) -> bool {
    !search(tiles).is_empty()
}

fn walk(rest: &mut TileBag, acc: &mut Melds, has_eyes: bool, out: &mut Vec<Melds>) {
    let Some(low) = rest.lowest() else {
        if has_eyes {
            out.push(acc.clone());
        }
        return;
    };
    let count = rest.count(low);

    for pongs in 0..=1u8 {
        for eyes in 0..=1u8 {
            if eyes == 1 && has_eyes {
                continue;
            }
            let grouped = 3 * pongs + 2 * eyes;
            if grouped > count {
                continue;
            }
            let chis = count - grouped;

            let run = if chis > 0 {
                let second = low.succ();
                let third = second.and_then(|t| t.succ());
                match (second, third) {
                    (Some(b), Some(c)) if rest.count(b) >= chis && rest.count(c) >= chis => {
                        Some((b, c))
                    }
                    _ => continue,
                }
            } else {
                None
            };

            let mark = acc.len();
            rest.remove_n(low, count);
            if let Some((b, c)) = run {
                rest.remove_n(b, chis);
                rest.remove_n(c, chis);
                for _ in 0..chis {
                    acc.push(Meld::chi(low, b, c));
                }
            }
            if pongs == 1 {
                acc.push(Meld::pong(low));
            }
            if eyes == 1 {
                acc.push(Meld::eyes(low));
            }

            walk(rest, acc, has_eyes || eyes == 1, out);

            acc.truncate(mark);
            rest.add_n(low, count);
            if let Some((b, c)) = run {
                rest.add_n(b, chis);
                rest.add_n(c, chis);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{parse_tiles, MeldKind};

    fn bag(s: &str) -> TileBag {
        TileBag::from_tiles(parse_tiles(s).unwrap())
    }

    fn kinds(melds: &Melds) -> Vec<MeldKind> {
        melds.iter().map(|m| m.kind).collect()
    }

    #[test]
    fn four_of_a_kind_splits_into_pong_and_run() {
        // 1111 2 3 + 99: понг 1 + чи 123, либо пара 11 + ... (не складывается)
        let res = search(&bag("1b 1b 1b 1b 2b 3b 9b 9b"));
        assert_eq!(res.len(), 1);
        assert_eq!(
            kinds(&res[0]),
            vec![MeldKind::Chi, MeldKind::Pong, MeldKind::Eyes]
        );
    }

    #[test]
    fn honors_never_start_runs() {
        assert!(search(&bag("E S W N N")).is_empty());
        assert_eq!(search(&bag("E E E C C")).len(), 1);
    }

    #[test]
    fn runs_do_not_wrap_between_suits() {
        assert!(search(&bag("8d 9d 1b 5c 5c")).is_empty());
    }

    #[test]
    fn search_leaves_input_untouched() {
        let input = bag("2c 3c 4c 4c 4c");
        let before = input.clone();
        let _ = search(&input);
        assert_eq!(input, before);
    }
}
