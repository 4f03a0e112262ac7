//! Liquidity pool descriptors.
//!
//! A descriptor names every account a token-swap pool owns. Descriptors are
//! resolved by pool discovery (usually from the published pool list JSON)
//! and are only ever read by the swap builders.

use std::collections::BTreeMap;

use chain_sol::Pubkey;
use serde::{Deserialize, Serialize};

use crate::error::SwapError;
use crate::network::Network;

/// Accounts of a single token-swap pool.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolDescriptor {
    /// Program that owns the pool and interprets swap instructions.
    pub swap_program_id: Pubkey,
    /// The pool state account.
    pub account: Pubkey,
    /// PDA that owns the pool reserves.
    pub authority: Pubkey,
    /// Reserve the swap takes input into.
    pub token_account_a: Pubkey,
    /// Reserve the swap pays output from.
    pub token_account_b: Pubkey,
    pub pool_token_mint: Pubkey,
    pub fee_account: Pubkey,
}

impl PoolDescriptor {
    /// The same pool traded in the opposite direction.
    pub fn reversed(&self) -> Self {
        Self {
            token_account_a: self.token_account_b,
            token_account_b: self.token_account_a,
            ..self.clone()
        }
    }

    /// Reject descriptors whose two reserves are the same account.
    pub fn validate(&self) -> Result<(), SwapError> {
        if self.token_account_a == self.token_account_b {
            return Err(SwapError::InvalidPool(format!(
                "pool {} uses {} as both reserves",
                self.account, self.token_account_a
            )));
        }
        Ok(())
    }
}

/// Pool entry as published in pool list files. The program id is often
/// omitted there and implied by the network.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PoolEntry {
    #[serde(default)]
    swap_program_id: Option<Pubkey>,
    account: Pubkey,
    authority: Pubkey,
    token_account_a: Pubkey,
    token_account_b: Pubkey,
    pool_token_mint: Pubkey,
    fee_account: Pubkey,
}

/// Parse a pool list (`{"SOL/USDC": {...}, ...}`) into descriptors keyed by
/// pool name.
///
/// Entries without `swapProgramId` get the token-swap program of `network`.
/// Unknown fields are ignored.
pub fn parse_pools(
    json: &str,
    network: Network,
) -> Result<BTreeMap<String, PoolDescriptor>, SwapError> {
    let entries: BTreeMap<String, PoolEntry> = serde_json::from_str(json)?;

    let mut pools = BTreeMap::new();
    for (name, entry) in entries {
        let pool = PoolDescriptor {
            swap_program_id: entry
                .swap_program_id
                .unwrap_or_else(|| network.swap_program_id()),
            account: entry.account,
            authority: entry.authority,
            token_account_a: entry.token_account_a,
            token_account_b: entry.token_account_b,
            pool_token_mint: entry.pool_token_mint,
            fee_account: entry.fee_account,
        };
        pool.validate()
            .map_err(|e| SwapError::InvalidPoolConfig(format!("{name}: {e}")))?;
        pools.insert(name, pool);
    }

    tracing::debug!(count = pools.len(), ?network, "parsed pool list");
    Ok(pools)
}
