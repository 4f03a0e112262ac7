//! Cluster selection and the program ids deployed on each cluster.

use chain_sol::{Pubkey, TOKEN_PROGRAM_ID};
use serde::{Deserialize, Serialize};

use crate::error::SwapError;

/// Orca token-swap v2 on mainnet-beta: `9W959DqEETiGZocYWCQPaJ6sBmUzgfxXfqGeTEdp3aQP`
pub const ORCA_SWAP_PROGRAM_ID: Pubkey = Pubkey::new([
    0x7e, 0x54, 0x77, 0x1a, 0x57, 0xa6, 0xf1, 0x4c, 0xa9, 0xe4, 0x02, 0xd5, 0x4a, 0xee, 0x45,
    0xf7, 0x37, 0x8a, 0xca, 0x36, 0x5c, 0x7b, 0x16, 0x9a, 0x7e, 0xc8, 0x3f, 0x51, 0x82, 0xb2,
    0x98, 0xf0,
]);

/// Orca token-swap v2 on devnet: `3xQ8SWv2GaFXXpHZNqkXsdxq5DZciHBz6ZFoPPfbFd7U`
pub const ORCA_SWAP_PROGRAM_ID_DEVNET: Pubkey = Pubkey::new([
    0x2b, 0xe8, 0x78, 0x36, 0x16, 0x2b, 0xbc, 0x69, 0xdb, 0x1b, 0xc8, 0xa2, 0x4e, 0x99, 0x6a,
    0x58, 0x32, 0x3a, 0xf2, 0x5a, 0x70, 0x1c, 0xc4, 0xb6, 0xe6, 0x02, 0x6e, 0xfc, 0x7c, 0x46,
    0x9d, 0x17,
]);

/// Fee relayer program on mainnet-beta: `12YKFL4mnZz6CBEGePrf293mEzueQM3h8VLPUJsKpGs9`
pub const RELAY_PROGRAM_ID: Pubkey = Pubkey::new([
    0x00, 0x64, 0xfd, 0x04, 0x2d, 0x4c, 0x4d, 0x4d, 0xd7, 0xda, 0xc8, 0x0d, 0x1f, 0x82, 0x06,
    0xa6, 0x96, 0x7e, 0x35, 0x44, 0x20, 0xa2, 0x00, 0xb4, 0xe4, 0xa0, 0xb0, 0x41, 0xf5, 0x40,
    0x13, 0xf0,
]);

/// Fee relayer program on devnet: `6xKJFyuM6UHCT8F5SBxnjGt6ZrZYjsVfnAnAeHPU775k`
pub const RELAY_PROGRAM_ID_DEVNET: Pubkey = Pubkey::new([
    0x58, 0x76, 0x11, 0x78, 0x75, 0xba, 0x53, 0x2c, 0xa4, 0x84, 0x02, 0x99, 0xb8, 0xd4, 0x10,
    0x75, 0xc1, 0x90, 0x7c, 0xea, 0x5f, 0x81, 0x81, 0xe7, 0xa8, 0x5b, 0xc0, 0x62, 0x88, 0xec,
    0x58, 0xcb,
]);

/// Solana cluster the swap is built for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Network {
    #[default]
    #[serde(alias = "mainnet")]
    MainnetBeta,
    Devnet,
}

impl Network {
    /// Parse a cluster name as it appears in settings files and URLs.
    pub fn from_name(name: &str) -> Result<Self, SwapError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "mainnet" | "mainnet-beta" => Ok(Network::MainnetBeta),
            "devnet" => Ok(Network::Devnet),
            other => Err(SwapError::UnknownNetwork(other.to_string())),
        }
    }

    pub fn swap_program_id(&self) -> Pubkey {
        match self {
            Network::MainnetBeta => ORCA_SWAP_PROGRAM_ID,
            Network::Devnet => ORCA_SWAP_PROGRAM_ID_DEVNET,
        }
    }

    pub fn relay_program_id(&self) -> Pubkey {
        match self {
            Network::MainnetBeta => RELAY_PROGRAM_ID,
            Network::Devnet => RELAY_PROGRAM_ID_DEVNET,
        }
    }

    /// The SPL Token program is deployed at the same address on every cluster.
    pub fn token_program_id(&self) -> Pubkey {
        TOKEN_PROGRAM_ID
    }
}
