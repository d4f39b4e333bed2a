// wallet-core/src/wallet/ledger.rs
//
// Wallet Ledger - danh sách address đã derive + next_index
//
// Quy tắc:
// - next_index chỉ tăng (monotonic), KHÔNG phụ thuộc vào entries.len()
// - remove() chỉ xóa khỏi danh sách hiển thị, không trả lại index
// - Thứ tự entries = thứ tự append, không bao giờ sort lại

use crate::chains::solana::SolanaKeypair;
use crate::crypto::paths::{DerivationPaths, HARDENED_OFFSET};
use crate::crypto::{KeyDeriver, Seed};
use crate::error::{LedgerError, WalletResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

/// One derived wallet: `{ index, address }`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WalletEntry {
    /// Wallet index used in `m/44'/501'/{index}'/0'`
    pub index: u32,
    /// Base58 public key
    pub address: String,
}

impl WalletEntry {
    #[inline]
    pub fn path(&self) -> String {
        DerivationPaths::solana(self.index)
    }
}

/// Serializable ledger snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerState {
    pub next_index: u32,
    pub entries: Vec<WalletEntry>,
}

impl LedgerState {
    /// Check that entry indices are strictly increasing and below `next_index`,
    /// and that `next_index` does not exceed the hardened range (2^31).
    pub fn validate(&self) -> WalletResult<()> {
        if self.next_index > HARDENED_OFFSET {
            return Err(LedgerError::StateConflict(format!(
                "next_index {} is beyond the hardened range",
                self.next_index
            ))
            .into());
        }

        let mut prev: Option<u32> = None;
        for entry in &self.entries {
            if entry.index >= self.next_index {
                return Err(LedgerError::StateConflict(format!(
                    "entry index {} is not below next_index {}",
                    entry.index, self.next_index
                ))
                .into());
            }
            if let Some(p) = prev {
                if entry.index <= p {
                    return Err(LedgerError::StateConflict(format!(
                        "entry index {} follows {} (must be strictly increasing)",
                        entry.index, p
                    ))
                    .into());
                }
            }
            prev = Some(entry.index);
        }
        Ok(())
    }
}

/// Ordered record of derived wallets for ONE mnemonic.
///
/// Mutation cần `&mut self`; [`WalletSession`](crate::wallet::WalletSession)
/// giữ ledger sau một lock để các request `derive_next` chạy tuần tự.
#[derive(Debug, Default)]
pub struct WalletLedger {
    state: LedgerState,
}

impl WalletLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore from a snapshot (validated).
    pub fn from_state(state: LedgerState) -> WalletResult<Self> {
        state.validate()?;
        Ok(Self { state })
    }

    #[inline]
    pub fn state(&self) -> &LedgerState {
        &self.state
    }

    #[inline]
    pub fn next_index(&self) -> u32 {
        self.state.next_index
    }

    #[inline]
    pub fn entries(&self) -> &[WalletEntry] {
        &self.state.entries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.state.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.state.entries.is_empty()
    }

    /// Clear all entries and restart at index 0.
    pub fn reset(&mut self) {
        self.state = LedgerState::default();
    }

    /// Derive the wallet at `next_index`, append it, then bump `next_index`.
    ///
    /// On error nothing is appended and `next_index` is unchanged.
    pub fn derive_next(&mut self, seed: &Seed) -> WalletResult<WalletEntry> {
        let index = self.state.next_index;
        if !DerivationPaths::is_hardenable(index) {
            return Err(LedgerError::IndexExhausted(index).into());
        }

        let key = KeyDeriver::derive(seed.as_bytes(), index).map_err(|e| {
            error!(index, error = %e, "wallet derivation failed");
            e
        })?;
        let keypair = SolanaKeypair::from_derived(&key);

        let entry = WalletEntry {
            index,
            address: keypair.address().to_string(),
        };
        self.state.entries.push(entry.clone());
        self.state.next_index = index + 1;

        debug!(index, path = %key.path, address = %entry.address, "derived wallet");
        Ok(entry)
    }

    /// Remove the entry with derivation index `index` from the list.
    ///
    /// `next_index` is untouched. Returns `None` if no such entry.
    pub fn remove(&mut self, index: u32) -> Option<WalletEntry> {
        let position = self.state.entries.iter().position(|e| e.index == index)?;
        self.remove_at(position)
    }

    /// Remove by display position (0-based).
    pub fn remove_at(&mut self, position: usize) -> Option<WalletEntry> {
        if position >= self.state.entries.len() {
            return None;
        }
        // Vec::remove giữ nguyên thứ tự các phần tử còn lại
        let removed = self.state.entries.remove(position);
        debug!(index = removed.index, position, "removed wallet from list");
        Some(removed)
    }
}
