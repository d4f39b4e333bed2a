// wallet-core/src/chains/solana/address.rs
//
// Solana Address Module - base58 encode/validate + explorer link

use crate::chains::solana::Cluster;
use crate::error::{WalletError, WalletResult};
use ed25519_dalek::{Signature, Verifier, VerifyingKey};

const EXPLORER_BASE_URL: &str = "https://explorer.solana.com";

/// Solana Address utilities (stateless)
pub struct SolanaAddress;

impl SolanaAddress {
    /// Public key (32B) → base58 string
    #[inline]
    pub fn from_public_key(public_key: &[u8; 32]) -> String {
        bs58::encode(public_key).into_string()
    }

    /// Decode base58 address → 32-byte public key
    pub fn decode(address: &str) -> WalletResult<[u8; 32]> {
        let bytes = bs58::decode(address)
            .into_vec()
            .map_err(|e| WalletError::Validation(format!("Invalid base58 address: {}", e)))?;

        bytes.as_slice().try_into().map_err(|_| {
            WalletError::Validation(format!(
                "Address must decode to 32 bytes, got {}",
                bytes.len()
            ))
        })
    }

    /// Validate chuỗi có phải Solana address hợp lệ không (base58, 32 bytes)
    #[inline]
    pub fn is_valid(address: &str) -> bool {
        Self::decode(address).is_ok()
    }

    /// Verify a detached message signature against an address.
    pub fn verify_message(address: &str, message: &[u8], signature: &[u8]) -> WalletResult<bool> {
        let public_key = Self::decode(address)?;
        let verifying_key = VerifyingKey::from_bytes(&public_key)
            .map_err(|e| WalletError::Validation(format!("Not an ed25519 point: {}", e)))?;

        Ok(match Signature::from_slice(signature) {
            Ok(sig) => verifying_key.verify(message, &sig).is_ok(),
            Err(_) => false,
        })
    }

    /// "View in Explorer" link.
    ///
    /// Mainnet: `https://explorer.solana.com/address/{address}`
    /// Others:  `...?cluster=devnet`
    pub fn explorer_url(address: &str, cluster: Cluster) -> String {
        match cluster.query_param() {
            Some(name) => format!("{}/address/{}?cluster={}", EXPLORER_BASE_URL, address, name),
            None => format!("{}/address/{}", EXPLORER_BASE_URL, address),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chains::solana::SolanaKeypair;

    const TEST_ADDRESS: &str = "HAgk14JpMQLgt6rVgv7cBQFJWFto5Dqxi472uT3DKpqk";

    #[test]
    fn test_is_valid() {
        assert!(SolanaAddress::is_valid(TEST_ADDRESS));
        assert!(SolanaAddress::is_valid("11111111111111111111111111111111"));
        assert!(!SolanaAddress::is_valid(""));
        assert!(!SolanaAddress::is_valid("0OIl")); // không thuộc alphabet base58
        assert!(!SolanaAddress::is_valid("HAgk14JpMQLgt6rVgv7c")); // quá ngắn
    }

    #[test]
    fn test_decode_roundtrip() {
        let pk = SolanaAddress::decode(TEST_ADDRESS).unwrap();
        assert_eq!(SolanaAddress::from_public_key(&pk), TEST_ADDRESS);
    }

    #[test]
    fn test_verify_message_by_address() {
        let kp = SolanaKeypair::from_seed_material(&[7u8; 32]);
        let sig = kp.sign_message(b"gm");
        assert!(SolanaAddress::verify_message(kp.address(), b"gm", &sig).unwrap());
        assert!(!SolanaAddress::verify_message(kp.address(), b"gn", &sig).unwrap());
        assert!(!SolanaAddress::verify_message(TEST_ADDRESS, b"gm", &sig).unwrap());
        assert!(SolanaAddress::verify_message("bad!", b"gm", &sig).is_err());
    }

    #[test]
    fn test_explorer_url() {
        assert_eq!(
            SolanaAddress::explorer_url(TEST_ADDRESS, Cluster::MainnetBeta),
            "https://explorer.solana.com/address/HAgk14JpMQLgt6rVgv7cBQFJWFto5Dqxi472uT3DKpqk"
        );
        assert_eq!(
            SolanaAddress::explorer_url(TEST_ADDRESS, Cluster::Devnet),
            "https://explorer.solana.com/address/HAgk14JpMQLgt6rVgv7cBQFJWFto5Dqxi472uT3DKpqk?cluster=devnet"
        );
    }
}
