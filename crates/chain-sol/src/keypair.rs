//! Ed25519 keypairs.
//!
//! Swaps routed through the fee relayer use a throwaway transfer authority:
//! a fresh keypair that is approved to move the caller's input tokens for a
//! single transaction and then discarded.

use ed25519_dalek::SigningKey;
use rand::rngs::OsRng;
use zeroize::Zeroize;

use crate::pubkey::Pubkey;

/// An Ed25519 signing keypair. The secret is zeroized on drop.
pub struct Keypair {
    signing_key: SigningKey,
}

impl Keypair {
    /// Generate a new random keypair from the OS RNG.
    pub fn generate() -> Self {
        Self {
            signing_key: SigningKey::generate(&mut OsRng),
        }
    }

    /// Build a keypair from a 32-byte Ed25519 seed.
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        let mut copy = *seed;
        let signing_key = SigningKey::from_bytes(&copy);
        copy.zeroize();
        Self { signing_key }
    }

    pub fn pubkey(&self) -> Pubkey {
        Pubkey::new(self.signing_key.verifying_key().to_bytes())
    }
}

impl std::fmt::Debug for Keypair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Keypair")
            .field("pubkey", &self.pubkey())
            .finish_non_exhaustive()
    }
}
