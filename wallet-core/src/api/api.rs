use crate::chains::solana::{Cluster, SolanaAddress};
use crate::config::WalletConfig;
use crate::crypto::{WalletMnemonic, WordCount};
use crate::error::WalletResult;
use crate::wallet::{WalletEntry, WalletSession};
use tracing_subscriber::EnvFilter;

// Core Initialization
//
// Cài tracing subscriber (RUST_LOG, mặc định "info"). Gọi nhiều lần vẫn OK.
pub fn init_core() -> WalletResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_err()
    {
        tracing::debug!("tracing subscriber already installed");
    }
    Ok(())
}

// --- Mnemonic ---

pub fn new_mnemonic(word_count: usize) -> WalletResult<WalletMnemonic> {
    WalletMnemonic::generate(WordCount::try_from(word_count)?)
}

pub fn phrase_words(mnemonic: &WalletMnemonic) -> Vec<String> {
    mnemonic.words().into_iter().map(str::to_string).collect()
}

pub fn load_mnemonic(phrase: String) -> WalletResult<WalletMnemonic> {
    WalletMnemonic::from_phrase(&phrase)
}

// --- Session ---

pub fn create_session(config: &WalletConfig) -> WalletResult<WalletSession> {
    WalletSession::generate(config)
}

pub fn open_session(mnemonic: WalletMnemonic, passphrase: Option<String>) -> WalletSession {
    WalletSession::from_mnemonic(mnemonic, passphrase.as_deref().unwrap_or(""))
}

// --- Wallet Ledger ---

pub fn derive_next_wallet(session: &WalletSession) -> WalletResult<WalletEntry> {
    session.derive_next_wallet()
}

pub fn remove_wallet(session: &WalletSession, index: u32) -> Option<WalletEntry> {
    session.remove_wallet(index)
}

pub fn list_wallets(session: &WalletSession) -> Vec<WalletEntry> {
    session.list_wallets()
}

// --- Address Helpers ---

pub fn validate_address(address: String) -> bool {
    SolanaAddress::is_valid(&address)
}

pub fn explorer_url(address: String, cluster: Cluster) -> String {
    SolanaAddress::explorer_url(&address, cluster)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{MnemonicError, WalletError};

    const TEST_MNEMONIC_12: &str =
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[test]
    fn test_init_core_idempotent() {
        assert!(init_core().is_ok());
        assert!(init_core().is_ok());
    }

    #[test]
    fn test_new_mnemonic_word_counts() {
        assert_eq!(phrase_words(&new_mnemonic(12).unwrap()).len(), 12);
        assert_eq!(phrase_words(&new_mnemonic(24).unwrap()).len(), 24);
        assert_eq!(
            new_mnemonic(18).unwrap_err(),
            WalletError::Mnemonic(MnemonicError::InvalidWordCount(18))
        );
    }

    #[test]
    fn test_full_flow() {
        let mnemonic = load_mnemonic(TEST_MNEMONIC_12.to_string()).unwrap();
        let session = open_session(mnemonic, None);

        let first = derive_next_wallet(&session).unwrap();
        let second = derive_next_wallet(&session).unwrap();
        assert_eq!(first.address, "HAgk14JpMQLgt6rVgv7cBQFJWFto5Dqxi472uT3DKpqk");
        assert!(validate_address(second.address.clone()));

        assert_eq!(remove_wallet(&session, 0), Some(first));
        assert_eq!(list_wallets(&session), vec![second]);
        assert_eq!(derive_next_wallet(&session).unwrap().index, 2);
    }

    #[test]
    fn test_load_mnemonic_rejects_invalid() {
        let bad = TEST_MNEMONIC_12.replace("about", "zzzz");
        assert!(matches!(
            load_mnemonic(bad),
            Err(WalletError::Mnemonic(MnemonicError::UnknownWord(_)))
        ));
    }

    #[test]
    fn test_create_session_devnet() {
        let session = create_session(&WalletConfig::devnet()).unwrap();
        let entry = derive_next_wallet(&session).unwrap();
        assert!(explorer_url(entry.address, Cluster::Devnet).ends_with("?cluster=devnet"));
    }
}
