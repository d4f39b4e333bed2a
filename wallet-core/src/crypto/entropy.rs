// wallet-core/src/crypto/entropy.rs
//
// Entropy Source - OS CSPRNG only
//
// Entropy chỉ được dùng MỘT lần để tạo mnemonic, sau đó bị zeroize.
// Không bao giờ fallback sang PRNG seed từ thời gian hệ thống.

use crate::crypto::mnemonic::WordCount;
use crate::error::{WalletError, WalletResult};
use rand::{rngs::OsRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Maximum entropy size (256 bits).
const MAX_ENTROPY_BYTES: usize = 32;

/// Raw mnemonic entropy (128 or 256 bits).
///
/// Consumed by value in [`WalletMnemonic::from_entropy`](crate::crypto::WalletMnemonic::from_entropy),
/// wiped on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Entropy {
    bytes: [u8; MAX_ENTROPY_BYTES],
    len: usize,
}

// Custom Debug - không hiển thị entropy bytes
impl std::fmt::Debug for Entropy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Entropy")
            .field("bits", &(self.len * 8))
            .finish_non_exhaustive()
    }
}

impl Entropy {
    /// Fill a fresh buffer from the OS CSPRNG.
    ///
    /// # Errors
    /// [`WalletError::EntropyUnavailable`] if the platform RNG fails. There is
    /// no retry path.
    pub fn generate(word_count: WordCount) -> WalletResult<Self> {
        let len = word_count.entropy_bytes();
        let mut bytes = [0u8; MAX_ENTROPY_BYTES];

        OsRng
            .try_fill_bytes(&mut bytes[..len])
            .map_err(|e| WalletError::EntropyUnavailable(e.to_string()))?;

        Ok(Self { bytes, len })
    }

    /// Wrap caller-supplied entropy (16 or 32 bytes).
    pub fn from_bytes(raw: &[u8]) -> WalletResult<Self> {
        if WordCount::from_entropy_len(raw.len()).is_none() {
            return Err(WalletError::Validation(format!(
                "Entropy must be 16 or 32 bytes, got {}",
                raw.len()
            )));
        }

        let mut bytes = [0u8; MAX_ENTROPY_BYTES];
        bytes[..raw.len()].copy_from_slice(raw);
        Ok(Self {
            bytes,
            len: raw.len(),
        })
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    #[inline]
    pub fn bits(&self) -> usize {
        self.len * 8
    }
}
