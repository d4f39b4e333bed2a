// wallet-core/src/crypto/mod.rs

//! Core Cryptography Module
//!
//! - **Entropy**: OS CSPRNG entropy for new phrases via [`Entropy`].
//! - **Mnemonic Generation**: BIP-39 compliant mnemonic phrases (12/24 words) via [`WalletMnemonic`].
//! - **Key Derivation**: SLIP-0010 ed25519 derivation for Solana accounts via [`KeyDeriver`].
//! - **Derivation Paths**: `m/44'/501'/{index}'/0'` builder via [`DerivationPaths`].

pub mod entropy;
pub mod key_deriver;
pub mod mnemonic;
pub mod paths;

// Re-exports for cleaner API access
pub use entropy::Entropy;
pub use key_deriver::{DerivedKey, Ed25519Deriver, KeyDeriver};
pub use mnemonic::{Seed, WalletMnemonic, WordCount};
pub use paths::DerivationPaths;
