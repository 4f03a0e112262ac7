//! Two-hop swaps routed through an intermediate token.
//!
//! The fee relayer executes A -> transit -> B as two direct swaps sharing a
//! transfer authority. The transit token lands in a relayer-owned account,
//! which may have to be created first.

use chain_sol::Pubkey;
use serde::Serialize;

use crate::error::SwapError;
use crate::pool::PoolDescriptor;
use crate::swap_data::{build_direct_swap_data, DirectSwapData, DirectSwapParams};

/// Inputs of [`build_transitive_swap_data`].
#[derive(Debug, Clone, Copy)]
pub struct TransitiveSwapParams<'a> {
    /// Pool converting the input token into the transit token.
    pub first_pool: &'a PoolDescriptor,
    /// Pool converting the transit token into the output token.
    pub second_pool: &'a PoolDescriptor,
    pub transfer_authority: Pubkey,
    pub amount_in: u64,
    /// Expected transit amount: the first hop's floor and the second hop's input.
    pub intermediate_amount: u64,
    pub min_amount_out: u64,
    pub transit_token_mint: Pubkey,
    pub needs_create_transit_token_account: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitiveSwapData {
    first_hop: DirectSwapData,
    second_hop: DirectSwapData,
    transit_token_mint: Pubkey,
    needs_create_transit_token_account: bool,
}

pub fn build_transitive_swap_data(params: TransitiveSwapParams<'_>) -> TransitiveSwapData {
    let first_hop = build_direct_swap_data(DirectSwapParams {
        pool: params.first_pool,
        transfer_authority: params.transfer_authority,
        amount_in: params.amount_in,
        min_amount_out: params.intermediate_amount,
    });
    let second_hop = build_direct_swap_data(DirectSwapParams {
        pool: params.second_pool,
        transfer_authority: params.transfer_authority,
        amount_in: params.intermediate_amount,
        min_amount_out: params.min_amount_out,
    });

    TransitiveSwapData {
        first_hop,
        second_hop,
        transit_token_mint: params.transit_token_mint,
        needs_create_transit_token_account: params.needs_create_transit_token_account,
    }
}

impl TransitiveSwapData {
    /// Reassemble a transitive swap from already built hops.
    pub(crate) fn from_parts(
        first_hop: DirectSwapData,
        second_hop: DirectSwapData,
        transit_token_mint: Pubkey,
        needs_create_transit_token_account: bool,
    ) -> Self {
        Self {
            first_hop,
            second_hop,
            transit_token_mint,
            needs_create_transit_token_account,
        }
    }

    pub fn first_hop(&self) -> &DirectSwapData {
        &self.first_hop
    }

    pub fn second_hop(&self) -> &DirectSwapData {
        &self.second_hop
    }

    pub fn transit_token_mint(&self) -> &Pubkey {
        &self.transit_token_mint
    }

    pub fn needs_create_transit_token_account(&self) -> bool {
        self.needs_create_transit_token_account
    }

    /// Both hops must carry a non-zero input.
    pub fn validate(&self) -> Result<(), SwapError> {
        self.first_hop.validate()?;
        self.second_hop.validate()
    }
}
