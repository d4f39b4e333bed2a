// wallet-core/src/crypto/key_deriver/mod.rs
//
// Key Derivation Engine - Solana accounts
//
// Kiến trúc:
// ┌─────────────────────────────────────────────────┐
// │  Seed (64 bytes from BIP-39 Mnemonic)           │
// │                    │                            │
// │                    ▼                            │
// │         m/44'/501'/{index}'/0'                  │
// │                    │                            │
// │                    ▼                            │
// │         ed25519 (SLIP-0010, hardened only)      │
// │                    │                            │
// │                    ▼                            │
// │         32-byte key material                    │
// └─────────────────────────────────────────────────┘

pub mod ed25519;

pub use ed25519::Ed25519Deriver;

use crate::crypto::paths::DerivationPaths;
use crate::error::{WalletError, WalletResult};
use zeroize::Zeroizing;

/// BIP-39 seeds are always 64 bytes.
pub const SEED_LEN: usize = 64;

// =============================================================================
// COMMON TYPES
// =============================================================================

/// Kết quả derivation chứa private key + metadata
pub struct DerivedKey {
    /// Raw key material (32 bytes, auto-zeroize khi drop)
    pub private_key: Zeroizing<[u8; 32]>,
    /// Wallet index đã sử dụng
    pub index: u32,
    /// Derivation path đã sử dụng
    pub path: String,
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey")
            .field("index", &self.index)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// SOLANA DERIVER
// =============================================================================

/// Entry point cho Solana key derivation: (seed, index) -> key material.
///
/// Pure function: cùng (seed, index) luôn cho cùng output, không cache.
pub struct KeyDeriver;

impl KeyDeriver {
    /// Derive key material for wallet `index` at `m/44'/501'/{index}'/0'`.
    ///
    /// # Errors
    /// `DerivationFailed` nếu seed không phải 64 bytes hoặc index >= 2^31.
    pub fn derive(seed: &[u8], index: u32) -> WalletResult<DerivedKey> {
        Self::validate_seed(seed)?;

        if !DerivationPaths::is_hardenable(index) {
            return Err(WalletError::derivation(format!(
                "Wallet index {} exceeds hardened range",
                index
            )));
        }

        let path = DerivationPaths::solana(index);
        let private_key = Ed25519Deriver::derive(seed, &path)?;

        Ok(DerivedKey {
            private_key,
            index,
            path,
        })
    }

    /// Derive nhiều keys liên tiếp (mỗi key derive độc lập, all hardened)
    pub fn derive_batch(
        seed: &[u8],
        indices: std::ops::Range<u32>,
    ) -> WalletResult<Vec<DerivedKey>> {
        Self::validate_seed(seed)?;
        indices.map(|idx| Self::derive(seed, idx)).collect()
    }

    /// Validate seed length
    #[inline]
    fn validate_seed(seed: &[u8]) -> WalletResult<()> {
        if seed.len() != SEED_LEN {
            return Err(WalletError::derivation(format!(
                "Invalid seed length: expected {} bytes, got {}",
                SEED_LEN,
                seed.len()
            )));
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
