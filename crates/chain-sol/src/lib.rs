//! Solana primitives for the swap toolkit.
//!
//! Public keys, program derived addresses, keypairs and instructions are
//! implemented directly on top of `ed25519-dalek`, `curve25519-dalek` and
//! `bs58` instead of `solana-sdk`, which drags in tokio and 200+ transitive
//! dependencies.

pub mod error;
pub mod instruction;
pub mod keypair;
pub mod pubkey;
pub mod token;

pub use error::SolError;
pub use instruction::{AccountMeta, Instruction};
pub use keypair::Keypair;
pub use pubkey::{validate_address, Pubkey};
pub use token::{
    derive_associated_token_address, ASSOCIATED_TOKEN_PROGRAM_ID, NATIVE_MINT, TOKEN_PROGRAM_ID,
};
