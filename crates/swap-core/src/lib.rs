//! Token swap payloads for the Solana wallet.
//!
//! The wallet resolves a pool and the caller's amounts; this crate turns them
//! into swap payloads and encodes those for the token-swap program or the
//! fee relayer. Building a payload never fails. Encoding validates it first.

pub mod collection_item;
pub mod error;
pub mod network;
pub mod pool;
pub mod relay;
pub mod swap_data;
pub mod transitive;

pub use collection_item::CollectionItem;
pub use error::SwapError;
pub use network::Network;
pub use pool::{parse_pools, PoolDescriptor};
pub use relay::SwapData;
pub use swap_data::{build_direct_swap_data, DirectSwapData, DirectSwapParams};
pub use transitive::{build_transitive_swap_data, TransitiveSwapData, TransitiveSwapParams};

/// Re-exported so callers need not depend on `chain-sol` directly.
pub use chain_sol::{Keypair, Pubkey};
