// wallet-core/src/error.rs

use thiserror::Error;

pub type WalletResult<T> = std::result::Result<T, WalletError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WalletError {
    /// OS CSPRNG không khả dụng. Không có fallback.
    #[error("Secure entropy unavailable: {0}")]
    EntropyUnavailable(String),

    #[error("Mnemonic Error: {0}")]
    Mnemonic(#[from] MnemonicError),

    #[error("Cryptography Error: {0}")]
    Crypto(#[from] CryptoError),

    #[error("Ledger Error: {0}")]
    Ledger(#[from] LedgerError),

    #[error("Validation Error: {0}")]
    Validation(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MnemonicError {
    #[error("Invalid word count: {0}. Expected 12 or 24 words.")]
    InvalidWordCount(usize),

    #[error("Word '{0}' not found in the BIP39 wordlist.")]
    UnknownWord(String),

    #[error("Checksum validation failed.")]
    ChecksumFailed,

    #[error("BIP39 internal error: {0}")]
    Bip39Error(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CryptoError {
    #[error("Key derivation failed: {0}")]
    DerivationFailed(String),

    #[error("Invalid key format: {0}")]
    InvalidKeyFormat(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// Ledger state is internally inconsistent (duplicate or out-of-order
    /// indices, or an entry at or beyond `next_index`).
    #[error("Ledger state conflict: {0}")]
    StateConflict(String),

    /// `next_index` reached the first non-hardenable index (2^31).
    #[error("Derivation index space exhausted at {0}")]
    IndexExhausted(u32),
}

impl WalletError {
    /// Shorthand cho lỗi derivation, dùng ở mọi nơi map lỗi từ crate ngoài.
    pub(crate) fn derivation(msg: impl Into<String>) -> Self {
        WalletError::Crypto(CryptoError::DerivationFailed(msg.into()))
    }
}
