//! Solana public keys and program derived addresses.
//!
//! A Solana address is the Base58 encoding of a raw 32-byte Ed25519 public
//! key. Program derived addresses (PDAs) are 32-byte SHA-256 digests that are
//! deliberately *off* the Ed25519 curve, so no private key can sign for them.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};

use crate::error::SolError;

/// Maximum number of seeds accepted by PDA derivation.
pub const MAX_SEEDS: usize = 16;

/// Maximum length of a single PDA seed.
pub const MAX_SEED_LEN: usize = 32;

/// Suffix hashed into every PDA derivation.
const PDA_MARKER: &[u8] = b"ProgramDerivedAddress";

/// A 32-byte Solana account address.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pubkey([u8; 32]);

impl Pubkey {
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub const fn to_bytes(self) -> [u8; 32] {
        self.0
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Whether these bytes decompress to a point on the Ed25519 curve.
    pub fn is_on_curve(&self) -> bool {
        curve25519_dalek::edwards::CompressedEdwardsY(self.0)
            .decompress()
            .is_some()
    }

    /// Find a valid program derived address for `seeds` under `program_id`.
    ///
    /// Bump seeds are tried from 255 down to 0; the first digest that lands
    /// off the curve wins. Returns the address together with its bump.
    pub fn find_program_address(
        seeds: &[&[u8]],
        program_id: &Pubkey,
    ) -> Result<(Pubkey, u8), SolError> {
        check_seeds(seeds)?;

        for bump in (0u8..=255).rev() {
            if let Some(address) = Self::derive_off_curve(seeds, bump, program_id) {
                return Ok((address, bump));
            }
        }

        Err(SolError::InvalidAddress(
            "could not find valid PDA bump seed".into(),
        ))
    }

    /// Derive the program address for an explicit bump seed.
    ///
    /// Returns `Ok(None)` when the digest falls on the curve.
    pub fn create_program_address(
        seeds: &[&[u8]],
        bump: u8,
        program_id: &Pubkey,
    ) -> Result<Option<Pubkey>, SolError> {
        check_seeds(seeds)?;
        Ok(Self::derive_off_curve(seeds, bump, program_id))
    }

    fn derive_off_curve(seeds: &[&[u8]], bump: u8, program_id: &Pubkey) -> Option<Pubkey> {
        let mut hasher = Sha256::new();
        for seed in seeds {
            hasher.update(seed);
        }
        hasher.update([bump]);
        hasher.update(program_id.as_bytes());
        hasher.update(PDA_MARKER);

        let candidate = Pubkey(hasher.finalize().into());
        if candidate.is_on_curve() {
            None
        } else {
            Some(candidate)
        }
    }
}

/// The bump seed occupies one of the `MAX_SEEDS` slots.
fn check_seeds(seeds: &[&[u8]]) -> Result<(), SolError> {
    if seeds.len() >= MAX_SEEDS {
        return Err(SolError::InvalidAddress(format!(
            "too many seeds: {} (max {})",
            seeds.len(),
            MAX_SEEDS - 1
        )));
    }
    if let Some(seed) = seeds.iter().find(|s| s.len() > MAX_SEED_LEN) {
        return Err(SolError::InvalidAddress(format!(
            "seed of {} bytes exceeds {MAX_SEED_LEN}",
            seed.len()
        )));
    }
    Ok(())
}

impl From<[u8; 32]> for Pubkey {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Pubkey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for Pubkey {
    type Err = SolError;

    fn from_str(address: &str) -> Result<Self, Self::Err> {
        let bytes = bs58::decode(address)
            .into_vec()
            .map_err(|e| SolError::InvalidAddress(format!("base58 decode failed: {e}")))?;

        let arr: [u8; 32] = bytes.try_into().map_err(|v: Vec<u8>| {
            SolError::InvalidAddress(format!("expected 32 bytes, got {}", v.len()))
        })?;

        Ok(Self(arr))
    }
}

impl fmt::Display for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&bs58::encode(self.0).into_string())
    }
}

impl fmt::Debug for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pubkey({self})")
    }
}

impl Serialize for Pubkey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Pubkey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Check that `address` is a Base58 string decoding to exactly 32 bytes.
pub fn validate_address(address: &str) -> Result<bool, SolError> {
    address.parse::<Pubkey>().map(|_| true)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The System Program address is 32 zero bytes.
    #[test]
    fn system_program_address() {
        let key = Pubkey::new([0u8; 32]);
        assert_eq!(key.to_string(), "11111111111111111111111111111111");
    }

    #[test]
    fn parse_and_display_token_program() {
        let address = "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA";
        let key: Pubkey = address.parse().unwrap();
        assert_eq!(key.to_string(), address);
    }

    #[test]
    fn known_byte_patterns_encode() {
        assert_eq!(
            Pubkey::new([1u8; 32]).to_string(),
            "4vJ9JU1bJJE96FWSJKvHsmmFADCg4gpZQff4P3bkLKi"
        );
        assert_eq!(
            Pubkey::new([2u8; 32]).to_string(),
            "8qbHbw2BbbTHBW1sbeqakYXVKRQM8Ne7pLK7m6CVfeR"
        );
    }

    #[test]
    fn garbage_is_rejected() {
        assert!("not-a-valid-address!!!".parse::<Pubkey>().is_err());
        assert!(validate_address("###invalid###").is_err());
    }

    #[test]
    fn short_key_is_rejected() {
        // "1" decodes to a single zero byte.
        let err = "1".parse::<Pubkey>().unwrap_err();
        assert!(err.to_string().contains("expected 32 bytes, got 1"));
    }

    #[test]
    fn serde_uses_base58_strings() {
        let key = Pubkey::new([1u8; 32]);
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"4vJ9JU1bJJE96FWSJKvHsmmFADCg4gpZQff4P3bkLKi\"");

        let back: Pubkey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);

        assert!(serde_json::from_str::<Pubkey>("\"abc\"").is_err());
    }

    #[test]
    fn debug_shows_base58() {
        let debug = format!("{:?}", Pubkey::default());
        assert_eq!(debug, "Pubkey(11111111111111111111111111111111)");
    }

    #[test]
    fn basepoint_is_on_curve() {
        let mut bytes = [0x66u8; 32];
        bytes[0] = 0x58;
        assert!(Pubkey::new(bytes).is_on_curve());
    }

    #[test]
    fn twos_are_off_curve() {
        assert!(!Pubkey::new([0x02; 32]).is_on_curve());
    }

    #[test]
    fn pda_is_off_curve_and_deterministic() {
        let program = Pubkey::new([7u8; 32]);
        let seeds: &[&[u8]] = &[b"relay", &[1u8; 32]];
        let (a, bump_a) = Pubkey::find_program_address(seeds, &program).unwrap();
        let (b, bump_b) = Pubkey::find_program_address(seeds, &program).unwrap();
        assert_eq!(a, b);
        assert_eq!(bump_a, bump_b);
        assert!(!a.is_on_curve());
    }

    #[test]
    fn create_program_address_matches_found_bump() {
        let program = Pubkey::new([9u8; 32]);
        let seeds: &[&[u8]] = &[b"vault".as_slice()];
        let (found, bump) = Pubkey::find_program_address(seeds, &program).unwrap();
        let created = Pubkey::create_program_address(seeds, bump, &program).unwrap();
        assert_eq!(created, Some(found));
    }

    #[test]
    fn create_program_address_rejects_oversized_seed() {
        let program = Pubkey::new([9u8; 32]);
        let long = [0u8; MAX_SEED_LEN + 1];
        let err = Pubkey::create_program_address(&[long.as_slice()], 255, &program).unwrap_err();
        assert!(matches!(err, SolError::InvalidAddress(_)));
    }

    #[test]
    fn oversized_seed_is_rejected() {
        let program = Pubkey::new([9u8; 32]);
        let long = [0u8; 33];
        assert!(Pubkey::find_program_address(&[long.as_slice()], &program).is_err());
    }

    #[test]
    fn too_many_seeds_are_rejected() {
        let program = Pubkey::new([9u8; 32]);
        let seeds: Vec<&[u8]> = vec![b"s".as_slice(); MAX_SEEDS];
        assert!(Pubkey::find_program_address(&seeds, &program).is_err());
    }
}
