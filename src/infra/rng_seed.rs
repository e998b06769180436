//! RngSeed — доменный seed для RNG стены.
//!
//! Позволяет:
//!   - хранить базовый seed ([u8;32])
//!   - делать детерминированное hash-reseeding на каждый раунд:
//!         new = H(domain || old || room_id || round_index)
//!   - создавать DeterministicRng из seed
//!
//! В проде базовый seed берётся из системной энтропии один раз на раунд,
//! в тестах — из константы.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::domain::RoomId;
use crate::infra::rng::DeterministicRng;

/// 32-байтовый seed для RNG.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RngSeed {
    pub bytes: [u8; 32],
}

impl RngSeed {
    /// Создать seed из 32 байт.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Создать seed из u64 (для удобства тестов).
    pub fn from_u64(x: u64) -> Self {
        let mut b = [0u8; 32];
        b[..8].copy_from_slice(&x.to_le_bytes());
        Self { bytes: b }
    }

    /// Seed из системной энтропии.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn random() -> Self {
        use rand::RngCore;

        let mut b = [0u8; 32];
        rand::thread_rng().fill_bytes(&mut b);
        Self { bytes: b }
    }

    /// Доменное хэш-расширение: seed конкретного раунда в конкретной комнате.
    pub fn derive(&self, room_id: RoomId, round_index: u64) -> Self {
        let mut hasher = Sha256::new();

        hasher.update(b"MAHJONG_ENGINE_WALL_V1");
        hasher.update(self.bytes);
        hasher.update(room_id.to_le_bytes());
        hasher.update(round_index.to_le_bytes());

        Self {
            bytes: hasher.finalize().into(),
        }
    }

    /// Создать DeterministicRng из seed.
    pub fn to_rng(&self) -> DeterministicRng {
        DeterministicRng::from_seed(self.bytes)
    }
}
