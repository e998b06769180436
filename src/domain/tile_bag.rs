use serde::{de, Deserialize, Deserializer, Serialize};

use crate::domain::tile::Tile;

/// Мультимножество тайлов: счётчик на каждый индекс каталога.
///
/// Итерация всегда идёт в каноническом порядке каталога, поэтому
/// перебор разложений и сериализация воспроизводимы.
/// Тайлы вне каталога в мешок не попадают.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct TileBag {
    counts: Vec<u8>,
    len: usize,
}

#[derive(Deserialize)]
struct RawTileBag {
    counts: Vec<u8>,
    len: usize,
}

impl<'de> Deserialize<'de> for TileBag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawTileBag::deserialize(deserializer)?;
        if raw.counts.len() != Tile::KINDS {
            return Err(de::Error::invalid_length(
                raw.counts.len(),
                &"по счётчику на каждый тайл каталога",
            ));
        }
        let total: usize = raw.counts.iter().map(|&c| c as usize).sum();
        if total != raw.len {
            return Err(de::Error::custom(format!(
                "len = {}, а сумма счётчиков = {total}",
                raw.len
            )));
        }
        Ok(TileBag {
            counts: raw.counts,
            len: raw.len,
        })
    }
}

impl Default for TileBag {
    fn default() -> Self {
        Self::new()
    }
}

impl TileBag {
    pub fn new() -> Self {
        Self {
            counts: vec![0; Tile::KINDS],
            len: 0,
        }
    }

    pub fn from_tiles<I>(tiles: I) -> Self
    where
        I: IntoIterator<Item = Tile>,
    {
        let mut bag = Self::new();
        for t in tiles {
            bag.add(t);
        }
        bag
    }

    pub fn add(&mut self, tile: Tile) {
        self.add_n(tile, 1);
    }

    pub fn add_n(&mut self, tile: Tile, n: u8) {
        let Some(c) = self.slot(tile) else {
            return;
        };
        let added = n.min(u8::MAX - *c);
        *c += added;
        self.len += added as usize;
    }

    /// Убрать один тайл. `false` — тайла нет, ничего не изменилось.
    pub fn remove(&mut self, tile: Tile) -> bool {
        self.remove_n(tile, 1)
    }

    /// Убрать `n` копий. Либо все, либо ни одной.
    pub fn remove_n(&mut self, tile: Tile, n: u8) -> bool {
        let Some(c) = self.slot(tile) else {
            return false;
        };
        if *c < n {
            return false;
        }
        *c -= n;
        self.len -= n as usize;
        true
    }

    pub fn count(&self, tile: Tile) -> u8 {
        tile.checked_index()
            .and_then(|idx| self.counts.get(idx).copied())
            .unwrap_or(0)
    }

    pub fn contains(&self, tile: Tile) -> bool {
        self.count(tile) > 0
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Различные тайлы с их количеством, по возрастанию.
    pub fn iter(&self) -> impl Iterator<Item = (Tile, u8)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &c)| c > 0)
            .filter_map(|(idx, &c)| Tile::from_index(idx).map(|t| (t, c)))
    }

    /// Младший из присутствующих тайлов.
    pub fn lowest(&self) -> Option<Tile> {
        self.iter().next().map(|(t, _)| t)
    }

    pub fn to_sorted_vec(&self) -> Vec<Tile> {
        let mut out = Vec::with_capacity(self.len);
        for (tile, count) in self.iter() {
            for _ in 0..count {
                out.push(tile);
            }
        }
        out
    }

    fn slot(&mut self, tile: Tile) -> Option<&mut u8> {
        let idx = tile.checked_index()?;
        self.counts.get_mut(idx)
    }

    /// Слить другое мультимножество в это.
    pub fn extend_from(&mut self, other: &TileBag) {
        for (tile, count) in other.iter() {
            self.add_n(tile, count);
        }
    }
}

impl FromIterator<Tile> for TileBag {
    fn from_iter<I: IntoIterator<Item = Tile>>(iter: I) -> Self {
        TileBag::from_tiles(iter)
    }
}

impl Extend<Tile> for TileBag {
    fn extend<I: IntoIterator<Item = Tile>>(&mut self, iter: I) {
        for t in iter {
            self.add(t);
        }
    }
}
