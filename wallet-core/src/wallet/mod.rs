// wallet-core/src/wallet/mod.rs

//! Wallet ledger and session.
//!
//! - [`WalletLedger`]: ordered derived wallets + monotonic `next_index`.
//! - [`WalletSession`]: owns mnemonic, passphrase and ledger behind one lock.

pub mod ledger;
pub mod session;

pub use ledger::{LedgerState, WalletEntry, WalletLedger};
pub use session::{SessionSnapshot, WalletSession};
