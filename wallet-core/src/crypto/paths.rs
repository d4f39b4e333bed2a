// wallet-core/src/crypto/paths.rs
//
// Derivation Paths Module - Solana (SLIP-0010, ed25519)
// BIP-44 purpose + SLIP-44 coin type, mọi level đều hardened

/// BIP-44 purpose constant.
pub const PURPOSE: u32 = 44;

/// Change level constant used by Solana wallets.
pub const CHANGE: u32 = 0;

/// Hardened offset (2^31). Indices at or above this cannot be hardened again.
pub const HARDENED_OFFSET: u32 = 0x8000_0000;

/// SLIP-44 Registered Coin Types
/// Ref: https://github.com/satoshilabs/slips/blob/master/slip-0044.md
pub mod coin_type {
    pub const SOLANA: u32 = 501;
}

/// Pre-built Derivation Paths
///
/// # Conventions
/// - SLIP-0010: `m/44'/501'/account'/0'` (ed25519, all hardened)
pub struct DerivationPaths;

impl DerivationPaths {
    pub const SOLANA_0: &'static str = "m/44'/501'/0'/0'";

    /// Solana path for a wallet index: `m/44'/501'/{index}'/0'`
    #[inline]
    pub fn solana(index: u32) -> String {
        Self::ed25519_path(coin_type::SOLANA, index, &[CHANGE])
    }

    /// Tạo Path chuẩn SLIP-0010 cho Ed25519 (Luôn Hardened)
    ///
    /// Ép tất cả levels thành hardened (bắt buộc cho Ed25519).
    ///
    /// # Verify
    /// - Solana: `ed25519_path(501, 0, &[0])` -> m/44'/501'/0'/0'
    pub fn ed25519_path(coin_type: u32, account: u32, sub_paths: &[u32]) -> String {
        // Base: m/44'/coin_type'/account'
        let mut path = format!("m/{}'/{}'/{}'", PURPOSE, coin_type, account);

        for &idx in sub_paths {
            path.push_str(&format!("/{}'", idx));
        }
        path
    }

    /// `true` if `index` can be used as a hardened level.
    #[inline]
    pub const fn is_hardenable(index: u32) -> bool {
        index < HARDENED_OFFSET
    }
}
