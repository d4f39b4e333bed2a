// wallet-core/src/chains/solana/keypair.rs
//
// Solana Keypair Module - ed25519 key expansion + base58 address
// Flow: key material (32B) → SigningKey → VerifyingKey (32B) → base58 address

use crate::chains::solana::address::SolanaAddress;
use crate::crypto::DerivedKey;
use crate::error::{CryptoError, WalletError, WalletResult};
use ed25519_dalek::{Signature, Signer, SigningKey, Verifier};
use zeroize::Zeroizing;

/// Solana Keypair - ed25519 signing key + cached address
///
/// # Security Architecture
/// - **ZeroizeOnDrop**: `SigningKey` tự động ghi đè bộ nhớ bằng 0 khi Drop
/// - **No Debug Leak**: Custom Debug impl không hiển thị private key
/// - **Cached Address**: Địa chỉ được tính toán một lần khi khởi tạo
pub struct SolanaKeypair {
    signing_key: SigningKey,
    address: String,
}

// Custom Debug - KHÔNG BAO GIỜ hiển thị private key
impl std::fmt::Debug for SolanaKeypair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SolanaKeypair")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

impl SolanaKeypair {
    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// Expand 32-byte key material into a full keypair.
    ///
    /// The material is used directly as the ed25519 signing seed (same as
    /// `nacl.sign.keyPair.fromSeed`). No randomness.
    pub fn from_seed_material(material: &[u8; 32]) -> Self {
        let signing_key = SigningKey::from_bytes(material);
        let address = SolanaAddress::from_public_key(signing_key.verifying_key().as_bytes());
        Self {
            signing_key,
            address,
        }
    }

    #[inline]
    pub fn from_derived(key: &DerivedKey) -> Self {
        Self::from_seed_material(&key.private_key)
    }

    /// Khởi tạo từ slice (phải đúng 32 bytes)
    pub fn from_slice(material: &[u8]) -> WalletResult<Self> {
        let bytes: Zeroizing<[u8; 32]> =
            Zeroizing::new(material.try_into().map_err(|_| {
                WalletError::Crypto(CryptoError::InvalidKeyFormat(format!(
                    "ed25519 seed must be 32 bytes, got {}",
                    material.len()
                )))
            })?);
        Ok(Self::from_seed_material(&bytes))
    }

    // =========================================================================
    // GETTERS
    // =========================================================================

    /// Base58 public key (Solana address)
    #[inline]
    pub fn address(&self) -> &str {
        &self.address
    }

    #[inline]
    pub fn public_key_bytes(&self) -> [u8; 32] {
        self.signing_key.verifying_key().to_bytes()
    }

    /// 64-byte Solana secret key format: seed (32B) || public key (32B)
    ///
    /// # Warning
    /// Chứa private key. Auto-zeroize khi drop.
    pub fn to_keypair_bytes(&self) -> Zeroizing<[u8; 64]> {
        Zeroizing::new(self.signing_key.to_keypair_bytes())
    }

    // =========================================================================
    // MESSAGE SIGNING
    // =========================================================================

    pub fn sign_message(&self, message: &[u8]) -> [u8; 64] {
        self.signing_key.sign(message).to_bytes()
    }

    /// Verify chữ ký với public key của keypair này
    pub fn verify_message(&self, message: &[u8], signature: &[u8]) -> bool {
        match Signature::from_slice(signature) {
            Ok(sig) => self
                .signing_key
                .verifying_key()
                .verify(message, &sig)
                .is_ok(),
            Err(_) => false,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // m/44'/501'/0'/0' of "abandon ... about"
    const TEST_MATERIAL: &str = "37df573b3ac4ad5b522e064e25b63ea16bcbe79d449e81a0268d1047948bb445";
    const TEST_ADDRESS: &str = "HAgk14JpMQLgt6rVgv7cBQFJWFto5Dqxi472uT3DKpqk";

    fn create_test_keypair() -> SolanaKeypair {
        SolanaKeypair::from_slice(&hex::decode(TEST_MATERIAL).unwrap()).unwrap()
    }

    #[test]
    fn test_address_vector() {
        let kp = create_test_keypair();
        assert_eq!(kp.address(), TEST_ADDRESS);
        assert_eq!(
            SolanaAddress::from_public_key(&kp.public_key_bytes()),
            TEST_ADDRESS
        );
    }

    #[test]
    fn test_deterministic() {
        let material: [u8; 32] = hex::decode(TEST_MATERIAL).unwrap().try_into().unwrap();
        let a = SolanaKeypair::from_seed_material(&material);
        let b = SolanaKeypair::from_seed_material(&material);
        assert_eq!(a.address(), b.address());
        assert_eq!(*a.to_keypair_bytes(), *b.to_keypair_bytes());
    }

    #[test]
    fn test_keypair_bytes_layout() {
        let kp = create_test_keypair();
        let bytes = kp.to_keypair_bytes();
        assert_eq!(hex::encode(&bytes[..32]), TEST_MATERIAL);
        assert_eq!(&bytes[32..], &kp.public_key_bytes());
    }

    #[test]
    fn test_sign_and_verify() {
        let kp = create_test_keypair();
        let message = b"Hello, Solana!";
        let sig = kp.sign_message(message);

        assert!(kp.verify_message(message, &sig));
        assert!(!kp.verify_message(b"tampered", &sig));
        assert!(!kp.verify_message(message, &sig[..63]));
    }

    #[test]
    fn test_invalid_material_length() {
        let result = SolanaKeypair::from_slice(&[0u8; 31]);
        assert!(matches!(
            result,
            Err(WalletError::Crypto(CryptoError::InvalidKeyFormat(_)))
        ));
    }

    #[test]
    fn test_debug_does_not_leak_key() {
        let kp = create_test_keypair();
        let debug_output = format!("{:?}", kp);
        assert!(!debug_output.contains(TEST_MATERIAL));
        assert!(debug_output.contains("SolanaKeypair"));
        assert!(debug_output.contains(TEST_ADDRESS));
    }
}
