//! Direct (single-pool) swap payloads.
//!
//! [`build_direct_swap_data`] is a pure field mapping from a resolved pool and
//! the caller's amounts to an immutable [`DirectSwapData`]. It never fails;
//! amount checks happen in [`DirectSwapData::validate`], which every encoder
//! runs before producing bytes.

use chain_sol::{AccountMeta, Instruction, Pubkey};
use serde::Serialize;

use crate::error::SwapError;
use crate::pool::PoolDescriptor;

/// Token-swap program `Swap` instruction tag.
const TOKEN_SWAP_IX_SWAP: u8 = 1;

/// Size of a packed direct swap: eight pubkeys plus two u64 amounts.
pub const DIRECT_SWAP_DATA_LEN: usize = 8 * 32 + 2 * 8;

/// Inputs of [`build_direct_swap_data`].
#[derive(Debug, Clone, Copy)]
pub struct DirectSwapParams<'a> {
    pub pool: &'a PoolDescriptor,
    /// Account allowed to move the caller's input tokens.
    pub transfer_authority: Pubkey,
    /// Input amount in the source token's base units.
    pub amount_in: u64,
    /// Slippage floor in the destination token's base units. Zero means no floor.
    pub min_amount_out: u64,
}

/// Everything the swap program needs to execute one hop.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectSwapData {
    program_id: Pubkey,
    account: Pubkey,
    authority: Pubkey,
    transfer_authority: Pubkey,
    source: Pubkey,
    destination: Pubkey,
    pool_token_mint: Pubkey,
    pool_fee_account: Pubkey,
    amount_in: u64,
    minimum_amount_out: u64,
}

/// Map a pool descriptor and the caller's amounts into a direct swap payload.
///
/// Every field is copied verbatim: reserves A and B become source and
/// destination, amounts are passed through untouched.
pub fn build_direct_swap_data(params: DirectSwapParams<'_>) -> DirectSwapData {
    let DirectSwapParams {
        pool,
        transfer_authority,
        amount_in,
        min_amount_out,
    } = params;

    tracing::trace!(
        pool = %pool.account,
        amount_in,
        min_amount_out,
        "building direct swap data"
    );

    DirectSwapData {
        program_id: pool.swap_program_id,
        account: pool.account,
        authority: pool.authority,
        transfer_authority,
        source: pool.token_account_a,
        destination: pool.token_account_b,
        pool_token_mint: pool.pool_token_mint,
        pool_fee_account: pool.fee_account,
        amount_in,
        minimum_amount_out: min_amount_out,
    }
}

impl DirectSwapData {
    pub fn program_id(&self) -> &Pubkey {
        &self.program_id
    }

    pub fn account(&self) -> &Pubkey {
        &self.account
    }

    pub fn authority(&self) -> &Pubkey {
        &self.authority
    }

    pub fn transfer_authority(&self) -> &Pubkey {
        &self.transfer_authority
    }

    pub fn source(&self) -> &Pubkey {
        &self.source
    }

    pub fn destination(&self) -> &Pubkey {
        &self.destination
    }

    pub fn pool_token_mint(&self) -> &Pubkey {
        &self.pool_token_mint
    }

    pub fn pool_fee_account(&self) -> &Pubkey {
        &self.pool_fee_account
    }

    pub fn amount_in(&self) -> u64 {
        self.amount_in
    }

    pub fn minimum_amount_out(&self) -> u64 {
        self.minimum_amount_out
    }

    /// Reject payloads that must never reach a transaction.
    ///
    /// A zero input amount is refused. `minimum_amount_out` is not compared
    /// with `amount_in`: the two are in different tokens with different
    /// decimals.
    pub fn validate(&self) -> Result<(), SwapError> {
        if self.amount_in == 0 {
            return Err(SwapError::InvalidAmount(format!(
                "swap through pool {} has zero amount_in",
                self.account
            )));
        }
        Ok(())
    }

    /// Build the token-swap program's `Swap` instruction for this hop.
    ///
    /// `user_source` / `user_destination` are the caller's token accounts;
    /// the payload's source and destination are the pool reserves.
    ///
    /// Wire format: tag `1`, then `amount_in` and `minimum_amount_out` as
    /// little-endian u64 (17 bytes).
    pub fn to_token_swap_instruction(
        &self,
        user_source: &Pubkey,
        user_destination: &Pubkey,
        token_program_id: &Pubkey,
    ) -> Result<Instruction, SwapError> {
        self.validate()?;

        let mut data = Vec::with_capacity(17);
        data.push(TOKEN_SWAP_IX_SWAP);
        data.extend_from_slice(&self.amount_in.to_le_bytes());
        data.extend_from_slice(&self.minimum_amount_out.to_le_bytes());

        Ok(Instruction {
            program_id: self.program_id,
            accounts: vec![
                AccountMeta::readonly(self.account),
                AccountMeta::readonly(self.authority),
                AccountMeta::signer(self.transfer_authority),
                AccountMeta::writable(*user_source),
                AccountMeta::writable(self.source),
                AccountMeta::writable(self.destination),
                AccountMeta::writable(*user_destination),
                AccountMeta::writable(self.pool_token_mint),
                AccountMeta::writable(self.pool_fee_account),
                AccountMeta::readonly(*token_program_id),
            ],
            data,
        })
    }

    /// Append the relay-program body: the eight pubkeys in field order,
    /// then both amounts as little-endian u64.
    pub(crate) fn pack_into(&self, buf: &mut Vec<u8>) {
        for key in [
            &self.program_id,
            &self.account,
            &self.authority,
            &self.transfer_authority,
            &self.source,
            &self.destination,
            &self.pool_token_mint,
            &self.pool_fee_account,
        ] {
            buf.extend_from_slice(key.as_bytes());
        }
        buf.extend_from_slice(&self.amount_in.to_le_bytes());
        buf.extend_from_slice(&self.minimum_amount_out.to_le_bytes());
    }

    /// Inverse of [`Self::pack_into`]. `body` must be exactly
    /// [`DIRECT_SWAP_DATA_LEN`] bytes.
    pub(crate) fn unpack_from(body: &[u8]) -> Result<Self, SwapError> {
        if body.len() != DIRECT_SWAP_DATA_LEN {
            return Err(SwapError::Decode(format!(
                "direct swap body is {} bytes, expected {DIRECT_SWAP_DATA_LEN}",
                body.len()
            )));
        }

        let key = |i: usize| -> Result<Pubkey, SwapError> {
            let bytes: [u8; 32] = body[i * 32..(i + 1) * 32]
                .try_into()
                .map_err(|_| SwapError::Decode("truncated pubkey".into()))?;
            Ok(Pubkey::new(bytes))
        };
        let amount = |offset: usize| -> Result<u64, SwapError> {
            let bytes: [u8; 8] = body[offset..offset + 8]
                .try_into()
                .map_err(|_| SwapError::Decode("truncated amount".into()))?;
            Ok(u64::from_le_bytes(bytes))
        };

        Ok(Self {
            program_id: key(0)?,
            account: key(1)?,
            authority: key(2)?,
            transfer_authority: key(3)?,
            source: key(4)?,
            destination: key(5)?,
            pool_token_mint: key(6)?,
            pool_fee_account: key(7)?,
            amount_in: amount(256)?,
            minimum_amount_out: amount(264)?,
        })
    }
}
