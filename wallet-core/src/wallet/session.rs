// wallet-core/src/wallet/session.rs
//
// Wallet Session - chủ sở hữu duy nhất của (mnemonic, passphrase, ledger)
//
// Mọi mutation đi qua MỘT Mutex:
//   lock → seed = to_seed(mnemonic) → ledger.derive_next(seed) → unlock
// Hai request derive chồng nhau sẽ chạy tuần tự, không bao giờ cùng index.
// Đổi mnemonic cũng lấy cùng lock nên không chen giữa một lần derive.

use crate::chains::solana::SolanaKeypair;
use crate::config::WalletConfig;
use crate::crypto::{KeyDeriver, WalletMnemonic, WordCount};
use crate::error::{LedgerError, WalletError, WalletResult};
use crate::wallet::ledger::{LedgerState, WalletEntry, WalletLedger};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error, info};
use zeroize::Zeroizing;

struct SessionInner {
    mnemonic: WalletMnemonic,
    passphrase: Zeroizing<String>,
    ledger: WalletLedger,
}

/// Persistable view of a session: phrase + ledger.
///
/// Passphrase và private keys KHÔNG bao giờ nằm trong snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub mnemonic: WalletMnemonic,
    pub ledger: LedgerState,
}

/// One mnemonic session and its wallet ledger.
pub struct WalletSession {
    inner: Mutex<SessionInner>,
}

impl std::fmt::Debug for WalletSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Không chờ lock: một lần derive có thể đang chạy PBKDF2
        let Some(inner) = self.inner.try_lock() else {
            return f.write_str("WalletSession { <locked> }");
        };
        f.debug_struct("WalletSession")
            .field("mnemonic", &inner.mnemonic)
            .field("next_index", &inner.ledger.next_index())
            .field("wallets", &inner.ledger.len())
            .finish_non_exhaustive()
    }
}

impl WalletSession {
    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// New session with a freshly generated mnemonic.
    pub fn generate(config: &WalletConfig) -> WalletResult<Self> {
        let mnemonic = WalletMnemonic::generate(config.word_count)?;
        info!(word_count = mnemonic.word_count(), "generated new mnemonic");
        Ok(Self::from_mnemonic(mnemonic, config.passphrase()))
    }

    /// Session over an existing (already validated) mnemonic.
    pub fn from_mnemonic(mnemonic: WalletMnemonic, passphrase: &str) -> Self {
        Self {
            inner: Mutex::new(SessionInner {
                mnemonic,
                passphrase: Zeroizing::new(passphrase.to_string()),
                ledger: WalletLedger::new(),
            }),
        }
    }

    /// Validate `phrase` then open a session on it.
    pub fn from_phrase(phrase: &str, passphrase: &str) -> WalletResult<Self> {
        let mnemonic = WalletMnemonic::from_phrase(phrase)?;
        info!(word_count = mnemonic.word_count(), "loaded mnemonic");
        Ok(Self::from_mnemonic(mnemonic, passphrase))
    }

    /// Restore a persisted snapshot.
    ///
    /// Every entry is re-derived and compared against its stored address;
    /// any mismatch is a [`LedgerError::StateConflict`].
    pub fn restore(snapshot: SessionSnapshot, passphrase: &str) -> WalletResult<Self> {
        let SessionSnapshot { mnemonic, ledger } = snapshot;
        let ledger = WalletLedger::from_state(ledger)?;

        let seed = mnemonic.to_seed(passphrase).map_err(|e| {
            error!(error = %e, "seed derivation failed during restore");
            e
        })?;
        for entry in ledger.entries() {
            let key = KeyDeriver::derive(seed.as_bytes(), entry.index).map_err(|e| {
                error!(index = entry.index, error = %e, "wallet derivation failed during restore");
                e
            })?;
            let keypair = SolanaKeypair::from_derived(&key);
            if keypair.address() != entry.address {
                return Err(LedgerError::StateConflict(format!(
                    "address of wallet {} does not match this mnemonic",
                    entry.index
                ))
                .into());
            }
        }

        info!(
            next_index = ledger.next_index(),
            wallets = ledger.len(),
            "restored wallet session"
        );
        Ok(Self {
            inner: Mutex::new(SessionInner {
                mnemonic,
                passphrase: Zeroizing::new(passphrase.to_string()),
                ledger,
            }),
        })
    }

    // =========================================================================
    // MNEMONIC LIFECYCLE
    // =========================================================================

    /// Current mnemonic (clone).
    pub fn mnemonic(&self) -> WalletMnemonic {
        self.inner.lock().mnemonic.clone()
    }

    /// Words of the current phrase, in order.
    pub fn phrase_words(&self) -> Vec<String> {
        self.inner
            .lock()
            .mnemonic
            .words()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Generate a fresh mnemonic and reset the ledger.
    pub fn regenerate(&self, word_count: WordCount) -> WalletResult<WalletMnemonic> {
        let mnemonic = WalletMnemonic::generate(word_count)?;
        let mut inner = self.inner.lock();
        inner.mnemonic = mnemonic.clone();
        inner.ledger.reset();
        info!(word_count = mnemonic.word_count(), "regenerated mnemonic, ledger reset");
        Ok(mnemonic)
    }

    /// Swap in another mnemonic/passphrase.
    ///
    /// The ledger resets only if the (phrase, passphrase) pair actually changes.
    /// Returns `true` if it reset.
    pub fn replace_mnemonic(&self, mnemonic: WalletMnemonic, passphrase: &str) -> bool {
        let mut inner = self.inner.lock();
        if inner.mnemonic == mnemonic && inner.passphrase.as_str() == passphrase {
            debug!("replace_mnemonic with identical phrase, ledger kept");
            return false;
        }

        inner.mnemonic = mnemonic;
        inner.passphrase = Zeroizing::new(passphrase.to_string());
        inner.ledger.reset();
        info!("mnemonic replaced, ledger reset");
        true
    }

    // =========================================================================
    // LEDGER OPERATIONS
    // =========================================================================

    /// Derive the next wallet. Holds the session lock for the whole
    /// read-index / derive / append / increment sequence.
    pub fn derive_next_wallet(&self) -> WalletResult<WalletEntry> {
        let mut inner = self.inner.lock();
        let seed = inner.mnemonic.to_seed(&inner.passphrase).map_err(|e| {
            error!(index = inner.ledger.next_index(), error = %e, "seed derivation failed");
            e
        })?;
        inner.ledger.derive_next(&seed)
    }

    /// Same as [`derive_next_wallet`](Self::derive_next_wallet) but runs on
    /// tokio's blocking pool so an async caller is not stalled.
    pub async fn derive_next_wallet_async(self: Arc<Self>) -> WalletResult<WalletEntry> {
        tokio::task::spawn_blocking(move || self.derive_next_wallet())
            .await
            .map_err(|e| WalletError::derivation(format!("derivation task failed: {}", e)))?
    }

    /// Remove the wallet with derivation index `index` from the list.
    pub fn remove_wallet(&self, index: u32) -> Option<WalletEntry> {
        self.inner.lock().ledger.remove(index)
    }

    /// Remove the wallet at display position `position`.
    pub fn remove_wallet_at(&self, position: usize) -> Option<WalletEntry> {
        self.inner.lock().ledger.remove_at(position)
    }

    /// Wallets in insertion order.
    pub fn list_wallets(&self) -> Vec<WalletEntry> {
        self.inner.lock().ledger.entries().to_vec()
    }

    pub fn next_index(&self) -> u32 {
        self.inner.lock().ledger.next_index()
    }

    /// Clear the ledger but keep the mnemonic.
    pub fn reset(&self) {
        self.inner.lock().ledger.reset();
        info!("ledger reset");
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let inner = self.inner.lock();
        SessionSnapshot {
            mnemonic: inner.mnemonic.clone(),
            ledger: inner.ledger.state().clone(),
        }
    }
}
