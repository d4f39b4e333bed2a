// wallet-core/src/chains/solana/mod.rs

//! Solana Chain Support
//!
//! - **Keypair**: ed25519 key expansion, base58 address and message signing via [`SolanaKeypair`].
//! - **Address**: validation and explorer links via [`SolanaAddress`].

pub mod address;
pub mod keypair;

use serde::{Deserialize, Serialize};

// Re-exports for cleaner API access
pub use address::SolanaAddress;
pub use keypair::SolanaKeypair;

/// Solana cluster, only used to format explorer links.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cluster {
    #[default]
    MainnetBeta,
    Devnet,
    Testnet,
}

impl Cluster {
    /// `?cluster=` value used by the explorer (mainnet has none).
    pub fn query_param(self) -> Option<&'static str> {
        match self {
            Cluster::MainnetBeta => None,
            Cluster::Devnet => Some("devnet"),
            Cluster::Testnet => Some("testnet"),
        }
    }
}
