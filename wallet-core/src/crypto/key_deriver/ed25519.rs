// wallet-core/src/crypto/key_deriver/ed25519.rs
//
// Ed25519 Key Derivation — SLIP-0010 Standard
//
// Dùng cho: Solana
// Algorithm: HMAC-SHA512 (khác BIP-32, chỉ hỗ trợ hardened derivation)
// Reference: https://github.com/satoshilabs/slips/blob/master/slip-0010.md
//
// QUAN TRỌNG: SLIP-0010 cho ed25519 CHỈ hỗ trợ hardened child derivation.
// Tất cả levels trong path PHẢI là hardened (có dấu ').
// VD: m/44'/501'/0'/0' (OK)    m/44'/501'/0'/0 (INVALID)

use crate::crypto::paths::HARDENED_OFFSET;
use crate::error::{WalletError, WalletResult};
use hmac::{Hmac, Mac};
use sha2::Sha512;
use zeroize::{Zeroize, Zeroizing};

type HmacSha512 = Hmac<Sha512>;

/// Ed25519 Key Deriver — SLIP-0010 Standard
///
/// # Khác biệt với secp256k1 (BIP-32)
/// - Master key seed: "ed25519 seed" (thay vì "Bitcoin seed")
/// - Chỉ hỗ trợ hardened derivation (index >= 2^31)
/// - Không cần validate key range (ed25519 key là bất kỳ 32 bytes)
pub struct Ed25519Deriver;

impl Ed25519Deriver {
    /// SLIP-0010 master key seed constant
    const MASTER_SECRET: &'static [u8] = b"ed25519 seed";

    /// Derive single ed25519 private key từ seed + path
    ///
    /// # Arguments
    /// * `seed` - BIP-39 seed
    /// * `path` - Derivation path, all levels MUST be hardened
    ///            e.g., "m/44'/501'/0'/0'"
    ///
    /// # Returns
    /// 32-byte ed25519 private key, auto-zeroize on drop
    pub fn derive(seed: &[u8], path: &str) -> WalletResult<Zeroizing<[u8; 32]>> {
        let indices = Self::parse_path(path)?;
        let (key, _chain_code) = Self::derive_node(seed, &indices)?;
        Ok(key)
    }

    /// Walk the hardened indices from the master node.
    ///
    /// Returns (key, chain_code) of the final node.
    fn derive_node(
        seed: &[u8],
        indices: &[u32],
    ) -> WalletResult<(Zeroizing<[u8; 32]>, Zeroizing<[u8; 32]>)> {
        // Step 1: I = HMAC-SHA512(Key = "ed25519 seed", Data = seed)
        let (mut key, mut chain_code) = Self::master_key_generate(seed)?;

        // Step 2: I = HMAC-SHA512(Key = chain_code, Data = 0x00 || key || index)
        for index in indices {
            let (child_key, child_chain) = Self::child_key_derive(&key, &chain_code, *index)?;
            // Zeroize old values trước khi overwrite
            key.zeroize();
            chain_code.zeroize();
            key = child_key;
            chain_code = child_chain;
        }

        Ok((Zeroizing::new(key), Zeroizing::new(chain_code)))
    }

    /// Derive master key từ seed
    ///
    /// IL (32 bytes) = private key, IR (32 bytes) = chain code
    fn master_key_generate(seed: &[u8]) -> WalletResult<([u8; 32], [u8; 32])> {
        let mut mac = HmacSha512::new_from_slice(Self::MASTER_SECRET)
            .map_err(|e| WalletError::derivation(format!("HMAC init failed: {}", e)))?;

        mac.update(seed);
        Ok(Self::split_output(mac))
    }

    /// Derive child key (hardened only)
    ///
    /// Data = 0x00 || parent_key || ser32(index + 0x80000000)
    /// I = HMAC-SHA512(Key = parent_chain_code, Data = Data)
    fn child_key_derive(
        parent_key: &[u8; 32],
        parent_chain_code: &[u8; 32],
        index: u32,
    ) -> WalletResult<([u8; 32], [u8; 32])> {
        if index >= HARDENED_OFFSET {
            return Err(WalletError::derivation(format!(
                "Index {} cannot be hardened (must be < 2^31)",
                index
            )));
        }

        let mut mac = HmacSha512::new_from_slice(parent_chain_code)
            .map_err(|e| WalletError::derivation(format!("HMAC init failed: {}", e)))?;

        let hardened_index = index | HARDENED_OFFSET;
        mac.update(&[0x00]);
        mac.update(parent_key);
        mac.update(&hardened_index.to_be_bytes());

        Ok(Self::split_output(mac))
    }

    /// IL -> key, IR -> chain code. The 64-byte intermediate is wiped.
    fn split_output(mac: HmacSha512) -> ([u8; 32], [u8; 32]) {
        let mut buf = [0u8; 64];
        buf.copy_from_slice(&mac.finalize().into_bytes());

        let mut key = [0u8; 32];
        let mut chain_code = [0u8; 32];
        key.copy_from_slice(&buf[..32]);
        chain_code.copy_from_slice(&buf[32..]);

        // Zeroize local buffer — chứa raw key material
        buf.zeroize();

        (key, chain_code)
    }

    /// Parse derivation path thành list of indices
    ///
    /// Input: "m/44'/501'/0'/0'"
    /// Output: [44, 501, 0, 0]
    ///
    /// Tất cả levels phải có dấu ' hoặc h (hardened)
    pub fn parse_path(path: &str) -> WalletResult<Vec<u32>> {
        let path = path.trim();

        let segments = path
            .strip_prefix("m/")
            .ok_or_else(|| WalletError::derivation(format!("Path must start with 'm/': {}", path)))?;

        if segments.is_empty() {
            return Err(WalletError::derivation("Empty derivation path"));
        }

        let mut indices = Vec::new();
        for segment in segments.split('/') {
            let segment = segment.trim();
            if segment.is_empty() {
                return Err(WalletError::derivation(format!(
                    "Empty segment in path: {}",
                    path
                )));
            }

            // Ed25519 SLIP-0010: tất cả phải hardened
            let num_str = segment
                .strip_suffix('\'')
                .or_else(|| segment.strip_suffix('h'))
                .ok_or_else(|| {
                    WalletError::derivation(format!(
                        "Ed25519 SLIP-0010 requires ALL levels to be hardened (add '). Invalid segment: '{}'",
                        segment
                    ))
                })?;

            let index: u32 = num_str.parse().map_err(|e| {
                WalletError::derivation(format!("Invalid index '{}': {}", num_str, e))
            })?;

            if index >= HARDENED_OFFSET {
                return Err(WalletError::derivation(format!(
                    "Index {} out of hardened range",
                    index
                )));
            }

            indices.push(index);
        }

        Ok(indices)
    }

    /// Validate ed25519 path (tất cả levels phải hardened)
    pub fn is_valid_path(path: &str) -> bool {
        Self::parse_path(path).is_ok()
    }
}

// =============================================================================
// TESTS
// =============================================================================
