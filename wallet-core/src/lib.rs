// wallet-core/src/lib.rs

//! Solana HD wallet core.
//!
//! mnemonic → seed → `m/44'/501'/{index}'/0'` → key material → ed25519 keypair → base58 address,
//! plus a per-session ledger of derived wallets.
//!
//! ```no_run
//! use wallet_core::{WalletConfig, WalletSession};
//!
//! let session = WalletSession::generate(&WalletConfig::default())?;
//! let wallet = session.derive_next_wallet()?;
//! println!("{} -> {}", wallet.index, wallet.address);
//! # Ok::<(), wallet_core::WalletError>(())
//! ```

pub mod api;
pub mod chains;
pub mod config;
pub mod crypto;
pub mod error;
pub mod wallet;

pub use chains::solana::{Cluster, SolanaAddress, SolanaKeypair};
pub use config::WalletConfig;
pub use crypto::{Entropy, KeyDeriver, Seed, WalletMnemonic, WordCount};
pub use error::{CryptoError, LedgerError, MnemonicError, WalletError, WalletResult};
pub use wallet::{LedgerState, SessionSnapshot, WalletEntry, WalletLedger, WalletSession};
