// wallet-core/src/crypto/mnemonic.rs
//
// Mnemonic Module - BIP-39 (English wordlist)
// Chuẩn: BIP-39 (Mnemonic), PBKDF2-HMAC-SHA512 (Seed Derivation)

use crate::crypto::entropy::Entropy;
use crate::error::{MnemonicError, WalletError, WalletResult};
use bip39::{Language, Mnemonic};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Số lượng words hỗ trợ
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum WordCount {
    /// 12 words (128-bit entropy)
    #[default]
    Twelve = 12,
    /// 24 words (256-bit entropy)
    TwentyFour = 24,
}

impl WordCount {
    /// Lấy số bytes entropy cần thiết
    #[inline]
    pub const fn entropy_bytes(self) -> usize {
        match self {
            WordCount::Twelve => 16,
            WordCount::TwentyFour => 32,
        }
    }

    #[inline]
    pub const fn strength_bits(self) -> usize {
        self.entropy_bytes() * 8
    }

    pub const fn from_entropy_len(len: usize) -> Option<Self> {
        match len {
            16 => Some(WordCount::Twelve),
            32 => Some(WordCount::TwentyFour),
            _ => None,
        }
    }
}

impl TryFrom<usize> for WordCount {
    type Error = WalletError;

    fn try_from(count: usize) -> Result<Self, Self::Error> {
        match count {
            12 => Ok(WordCount::Twelve),
            24 => Ok(WordCount::TwentyFour),
            other => Err(MnemonicError::InvalidWordCount(other).into()),
        }
    }
}

impl From<WordCount> for usize {
    fn from(count: WordCount) -> usize {
        count as usize
    }
}

/// 64-byte BIP-39 seed. Recomputed from the mnemonic on demand, wiped on drop.
pub struct Seed(Zeroizing<[u8; 64]>);

impl Seed {
    #[inline]
    pub fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }
}

impl std::fmt::Debug for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Seed([REDACTED])")
    }
}

/// Wallet Mnemonic - BIP-39 phrase (12 hoặc 24 words)
///
/// # Security Architecture
/// - **ZeroizeOnDrop**: Phrase được tự động ghi đè bằng 0 khi struct bị drop
/// - **CSPRNG**: Entropy lấy từ `OsRng` qua [`Entropy::generate`]
/// - **No Debug Leak**: Custom Debug impl không hiển thị phrase
///
/// Serializes as the bare phrase string; deserializing re-validates it.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct WalletMnemonic {
    phrase: String,
    word_count: usize,
}

// Custom Debug - KHÔNG BAO GIỜ hiển thị mnemonic phrase
impl std::fmt::Debug for WalletMnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletMnemonic")
            .field("word_count", &self.word_count)
            .field("phrase", &"[REDACTED]")
            .finish()
    }
}

impl PartialEq for WalletMnemonic {
    fn eq(&self, other: &Self) -> bool {
        self.phrase == other.phrase
    }
}

impl Eq for WalletMnemonic {}

impl WalletMnemonic {
    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// Tạo mnemonic mới từ OS entropy
    ///
    /// # Errors
    /// [`WalletError::EntropyUnavailable`] nếu OS RNG lỗi.
    pub fn generate(word_count: WordCount) -> WalletResult<Self> {
        let entropy = Entropy::generate(word_count)?;
        Self::from_entropy(entropy)
    }

    /// Encode entropy thành phrase (deterministic).
    ///
    /// Entropy bị consume và zeroize sau khi encode.
    pub fn from_entropy(entropy: Entropy) -> WalletResult<Self> {
        let mnemonic = Mnemonic::from_entropy(entropy.as_bytes())
            .map_err(|e| map_bip39_error(e, &[]))?;
        let word_count = entropy.bits() / 32 * 3;

        Ok(Self {
            phrase: mnemonic.to_string(),
            word_count,
        })
    }

    /// Khôi phục mnemonic từ phrase có sẵn
    ///
    /// # Validation
    /// - Kiểm tra số lượng words (12 hoặc 24)
    /// - Kiểm tra từng word có trong BIP-39 wordlist (case-sensitive)
    /// - Kiểm tra checksum
    pub fn from_phrase(phrase: &str) -> WalletResult<Self> {
        // Normalize whitespace và count words
        let normalized = phrase.split_whitespace().collect::<Vec<_>>();
        let count = normalized.len();

        WordCount::try_from(count)?;

        let normalized_phrase = normalized.join(" ");
        Mnemonic::parse_in_normalized(Language::English, &normalized_phrase)
            .map_err(|e| map_bip39_error(e, &normalized))?;

        Ok(Self {
            phrase: normalized_phrase,
            word_count: count,
        })
    }

    // =========================================================================
    // GETTERS
    // =========================================================================

    /// Lấy mnemonic phrase
    ///
    /// # Warning
    /// Cẩn thận khi hiển thị hoặc log giá trị này!
    #[inline]
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    #[inline]
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Lấy danh sách các words (theo thứ tự)
    pub fn words(&self) -> Vec<&str> {
        self.phrase.split(' ').collect()
    }

    /// Lấy strength (bit) của mnemonic
    pub fn strength_bits(&self) -> usize {
        self.word_count / 3 * 32
    }

    // =========================================================================
    // SEED DERIVATION
    // =========================================================================

    /// Tạo seed từ mnemonic (PBKDF2-HMAC-SHA512, 2048 rounds,
    /// salt = "mnemonic" + passphrase)
    ///
    /// # Security Note
    /// Passphrase khác với password. Nếu mất passphrase, không thể khôi phục ví
    /// ngay cả khi có mnemonic phrase.
    pub fn to_seed(&self, passphrase: &str) -> WalletResult<Seed> {
        let mnemonic = Mnemonic::parse_in_normalized(Language::English, &self.phrase)
            .map_err(|e| WalletError::derivation(format!("stored phrase unparsable: {}", e)))?;
        Ok(Seed(Zeroizing::new(mnemonic.to_seed(passphrase))))
    }

    // =========================================================================
    // VALIDATION
    // =========================================================================

    /// Kiểm tra xem phrase có hợp lệ không
    ///
    /// Thực hiện đầy đủ validation: word count, wordlist, checksum
    #[inline]
    pub fn validate(phrase: &str) -> bool {
        Self::from_phrase(phrase).is_ok()
    }

    /// Kiểm tra một từ có trong BIP-39 English wordlist không
    pub fn is_valid_word(word: &str) -> bool {
        Language::English.word_list().iter().any(|w| *w == word)
    }
}

fn map_bip39_error(err: bip39::Error, words: &[&str]) -> WalletError {
    let inner = match err {
        bip39::Error::UnknownWord(idx) => MnemonicError::UnknownWord(
            words.get(idx).map(|w| w.to_string()).unwrap_or_default(),
        ),
        bip39::Error::InvalidChecksum => MnemonicError::ChecksumFailed,
        bip39::Error::BadWordCount(n) => MnemonicError::InvalidWordCount(n),
        other => MnemonicError::Bip39Error(other.to_string()),
    };
    WalletError::Mnemonic(inner)
}

impl Serialize for WalletMnemonic {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.phrase)
    }
}

impl<'de> Deserialize<'de> for WalletMnemonic {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let phrase = Zeroizing::new(String::deserialize(deserializer)?);
        WalletMnemonic::from_phrase(&phrase).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
impl WalletMnemonic {
    /// Bypasses validation, for exercising failure paths downstream.
    pub(crate) fn from_phrase_unchecked(phrase: &str) -> Self {
        Self {
            phrase: phrase.to_string(),
            word_count: phrase.split_whitespace().count(),
        }
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // Standard test mnemonic (from BIP-39 test vectors)
    const TEST_MNEMONIC_12: &str =
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";
    const TEST_MNEMONIC_24: &str =
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon art";
    const TEST_SEED_12: &str = "5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc19a5ac40b389cd370d086206dec8aa6c43daea6690f20ad3d8d48b2d2ce9e38e4";

    #[test]
    fn test_generate_12_words() {
        let mnemonic = WalletMnemonic::generate(WordCount::Twelve).unwrap();
        assert_eq!(mnemonic.word_count(), 12);
        assert!(WalletMnemonic::validate(mnemonic.phrase()));
    }

    #[test]
    fn test_generate_24_words() {
        let mnemonic = WalletMnemonic::generate(WordCount::TwentyFour).unwrap();
        assert_eq!(mnemonic.word_count(), 24);
        assert!(WalletMnemonic::validate(mnemonic.phrase()));
    }

    #[test]
    fn test_from_entropy_vectors() {
        let zero_128 = Entropy::from_bytes(&[0u8; 16]).unwrap();
        let m = WalletMnemonic::from_entropy(zero_128).unwrap();
        assert_eq!(m.phrase(), TEST_MNEMONIC_12);
        assert_eq!(m.word_count(), 12);

        let zero_256 = Entropy::from_bytes(&[0u8; 32]).unwrap();
        let m = WalletMnemonic::from_entropy(zero_256).unwrap();
        assert_eq!(m.phrase(), TEST_MNEMONIC_24);
        assert_eq!(m.word_count(), 24);

        let legal = Entropy::from_bytes(&[0x7f; 16]).unwrap();
        let m = WalletMnemonic::from_entropy(legal).unwrap();
        assert_eq!(
            m.phrase(),
            "legal winner thank year wave sausage worth useful legal winner thank yellow"
        );
    }

    #[test]
    fn test_from_phrase_normalizes_whitespace() {
        let messy_phrase =
            "  abandon  abandon   abandon abandon abandon abandon abandon abandon abandon abandon abandon about  ";
        let mnemonic = WalletMnemonic::from_phrase(messy_phrase).unwrap();
        assert_eq!(mnemonic.word_count(), 12);
        assert_eq!(mnemonic.phrase(), TEST_MNEMONIC_12);
    }

    #[test]
    fn test_from_phrase_invalid_word_count() {
        let result = WalletMnemonic::from_phrase("abandon abandon abandon");
        assert_eq!(
            result.unwrap_err(),
            WalletError::Mnemonic(MnemonicError::InvalidWordCount(3))
        );

        // 15 words is valid BIP-39 but not supported here
        let fifteen = vec!["abandon"; 15].join(" ");
        assert!(matches!(
            WalletMnemonic::from_phrase(&fifteen),
            Err(WalletError::Mnemonic(MnemonicError::InvalidWordCount(15)))
        ));
    }

    #[test]
    fn test_from_phrase_invalid_word() {
        let invalid = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon invalid";
        let result = WalletMnemonic::from_phrase(invalid);
        assert_eq!(
            result.unwrap_err(),
            WalletError::Mnemonic(MnemonicError::UnknownWord("invalid".to_string()))
        );
    }

    #[test]
    fn test_from_phrase_bad_checksum() {
        // "abandon" là từ hợp lệ nhưng checksum sai
        let bad = vec!["abandon"; 12].join(" ");
        assert_eq!(
            WalletMnemonic::from_phrase(&bad).unwrap_err(),
            WalletError::Mnemonic(MnemonicError::ChecksumFailed)
        );
    }

    #[test]
    fn test_from_phrase_is_case_sensitive() {
        let upper = TEST_MNEMONIC_12.replacen("abandon", "Abandon", 1);
        assert!(!WalletMnemonic::validate(&upper));
    }

    #[test]
    fn test_to_seed_vector() {
        let mnemonic = WalletMnemonic::from_phrase(TEST_MNEMONIC_12).unwrap();
        let seed = mnemonic.to_seed("").unwrap();
        assert_eq!(hex::encode(seed.as_bytes()), TEST_SEED_12);
    }

    #[test]
    fn test_to_seed_deterministic() {
        let mnemonic = WalletMnemonic::generate(WordCount::Twelve).unwrap();
        let s1 = mnemonic.to_seed("").unwrap();
        let s2 = mnemonic.to_seed("").unwrap();
        assert_eq!(s1.as_bytes(), s2.as_bytes());
    }

    #[test]
    fn test_to_seed_with_passphrase() {
        let mnemonic = WalletMnemonic::from_phrase(TEST_MNEMONIC_12).unwrap();
        let seed_no_pass = mnemonic.to_seed("").unwrap();
        let seed_with_pass = mnemonic.to_seed("TREZOR").unwrap();

        // Seeds phải khác nhau
        assert_ne!(seed_no_pass.as_bytes(), seed_with_pass.as_bytes());
    }

    #[test]
    fn test_validate() {
        assert!(WalletMnemonic::validate(TEST_MNEMONIC_12));
        assert!(WalletMnemonic::validate(TEST_MNEMONIC_24));
        assert!(!WalletMnemonic::validate("invalid mnemonic phrase"));
        assert!(!WalletMnemonic::validate("abandon"));
    }

    #[test]
    fn test_is_valid_word() {
        assert!(WalletMnemonic::is_valid_word("abandon"));
        assert!(WalletMnemonic::is_valid_word("zoo"));
        assert!(!WalletMnemonic::is_valid_word("invalidword"));
        assert!(WalletMnemonic::is_valid_word("hello"));
        assert!(!WalletMnemonic::is_valid_word("helloo"));
        assert!(!WalletMnemonic::is_valid_word("walletx"));
        assert!(!WalletMnemonic::is_valid_word("Abandon"));
    }

    #[test]
    fn test_strength_bits() {
        let m12 = WalletMnemonic::from_phrase(TEST_MNEMONIC_12).unwrap();
        let m24 = WalletMnemonic::from_phrase(TEST_MNEMONIC_24).unwrap();
        assert_eq!(m12.strength_bits(), 128);
        assert_eq!(m24.strength_bits(), 256);
        assert_eq!(WordCount::TwentyFour.strength_bits(), 256);
    }

    #[test]
    fn test_words() {
        let mnemonic = WalletMnemonic::from_phrase(TEST_MNEMONIC_12).unwrap();
        let words = mnemonic.words();
        assert_eq!(words.len(), 12);
        assert_eq!(words[0], "abandon");
        assert_eq!(words[11], "about");
    }

    #[test]
    fn test_debug_does_not_leak_phrase() {
        let mnemonic = WalletMnemonic::from_phrase(TEST_MNEMONIC_12).unwrap();
        let debug_output = format!("{:?}", mnemonic);

        assert!(!debug_output.contains("abandon"));
        assert!(debug_output.contains("REDACTED"));
        assert!(debug_output.contains("word_count: 12"));

        let seed = mnemonic.to_seed("").unwrap();
        assert_eq!(format!("{:?}", seed), "Seed([REDACTED])");
    }

    #[test]
    fn test_serde_roundtrip_revalidates() {
        let mnemonic = WalletMnemonic::from_phrase(TEST_MNEMONIC_12).unwrap();
        let json = serde_json::to_string(&mnemonic).unwrap();
        assert_eq!(json, format!("\"{}\"", TEST_MNEMONIC_12));

        let back: WalletMnemonic = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mnemonic);

        let bad = format!("\"{}\"", vec!["abandon"; 12].join(" "));
        assert!(serde_json::from_str::<WalletMnemonic>(&bad).is_err());
    }

    #[test]
    fn test_word_count_conversions() {
        assert_eq!(WordCount::try_from(12).unwrap(), WordCount::Twelve);
        assert_eq!(WordCount::try_from(24).unwrap(), WordCount::TwentyFour);
        assert!(WordCount::try_from(18).is_err());
        assert_eq!(usize::from(WordCount::TwentyFour), 24);
        assert_eq!(WordCount::from_entropy_len(16), Some(WordCount::Twelve));
        assert_eq!(WordCount::from_entropy_len(20), None);
    }

    #[test]
    fn test_unique_generation() {
        let m1 = WalletMnemonic::generate(WordCount::Twelve).unwrap();
        let m2 = WalletMnemonic::generate(WordCount::Twelve).unwrap();
        assert_ne!(m1.phrase(), m2.phrase());
    }
}
