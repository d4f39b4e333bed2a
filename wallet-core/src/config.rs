// wallet-core/src/config.rs
//
// Session configuration. Plain parameters only, không đọc từ environment.

use crate::chains::solana::Cluster;
use crate::crypto::WordCount;
use serde::Deserialize;

/// Cấu hình cho một wallet session
#[derive(Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct WalletConfig {
    /// 12 hoặc 24 words
    pub word_count: WordCount,
    /// Optional BIP-39 passphrase (mặc định rỗng)
    pub passphrase: Option<String>,
    /// Cluster dùng cho explorer link
    pub cluster: Cluster,
}

// Custom Debug - không hiển thị passphrase
impl std::fmt::Debug for WalletConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletConfig")
            .field("word_count", &self.word_count)
            .field("passphrase", &self.passphrase.as_ref().map(|_| "[REDACTED]"))
            .field("cluster", &self.cluster)
            .finish()
    }
}

impl WalletConfig {
    pub fn mainnet() -> Self {
        Self::default()
    }

    pub fn devnet() -> Self {
        Self {
            cluster: Cluster::Devnet,
            ..Self::default()
        }
    }

    pub fn with_word_count(mut self, word_count: WordCount) -> Self {
        self.word_count = word_count;
        self
    }

    pub fn with_passphrase(mut self, passphrase: impl Into<String>) -> Self {
        self.passphrase = Some(passphrase.into());
        self
    }

    #[inline]
    pub fn passphrase(&self) -> &str {
        self.passphrase.as_deref().unwrap_or("")
    }
}
