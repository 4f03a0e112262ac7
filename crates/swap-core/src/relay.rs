//! Swap payload encoding for the fee relayer program.
//!
//! ```text
//! SwapData:
//!   tag                 u8   (0 = direct, 1 = transitive)
//!   direct:
//!     body              272 bytes (see below)
//!   transitive:
//!     from              272 bytes
//!     to                272 bytes
//!     transit_mint      32 bytes
//!     needs_create      u8   (0 | 1)
//!
//! Direct body:
//!   program_id, account, authority, transfer_authority,
//!   source, destination, pool_token_mint, pool_fee_account   32 bytes each
//!   amount_in                                                u64 LE
//!   minimum_amount_out                                       u64 LE
//! ```

use chain_sol::Pubkey;

use crate::error::SwapError;
use crate::swap_data::{DirectSwapData, DIRECT_SWAP_DATA_LEN};
use crate::transitive::TransitiveSwapData;

const TAG_DIRECT: u8 = 0;
const TAG_TRANSITIVE: u8 = 1;

const TRANSITIVE_BODY_LEN: usize = 2 * DIRECT_SWAP_DATA_LEN + 32 + 1;

/// A swap the relayer can execute on the caller's behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwapData {
    Direct(DirectSwapData),
    Transitive(TransitiveSwapData),
}

impl From<DirectSwapData> for SwapData {
    fn from(data: DirectSwapData) -> Self {
        SwapData::Direct(data)
    }
}

impl From<TransitiveSwapData> for SwapData {
    fn from(data: TransitiveSwapData) -> Self {
        SwapData::Transitive(data)
    }
}

impl SwapData {
    pub fn validate(&self) -> Result<(), SwapError> {
        match self {
            SwapData::Direct(data) => data.validate(),
            SwapData::Transitive(data) => data.validate(),
        }
    }

    /// Encode for the relay program. Fails if any hop has a zero input.
    pub fn pack(&self) -> Result<Vec<u8>, SwapError> {
        self.validate()?;

        let buf = match self {
            SwapData::Direct(data) => {
                let mut buf = Vec::with_capacity(1 + DIRECT_SWAP_DATA_LEN);
                buf.push(TAG_DIRECT);
                data.pack_into(&mut buf);
                buf
            }
            SwapData::Transitive(data) => {
                let mut buf = Vec::with_capacity(1 + TRANSITIVE_BODY_LEN);
                buf.push(TAG_TRANSITIVE);
                data.first_hop().pack_into(&mut buf);
                data.second_hop().pack_into(&mut buf);
                buf.extend_from_slice(data.transit_token_mint().as_bytes());
                buf.push(u8::from(data.needs_create_transit_token_account()));
                buf
            }
        };

        tracing::debug!(len = buf.len(), tag = buf[0], "packed relay swap data");
        Ok(buf)
    }

    /// Decode bytes produced by [`SwapData::pack`]. Trailing bytes are an error.
    pub fn unpack(input: &[u8]) -> Result<Self, SwapError> {
        let (&tag, body) = input
            .split_first()
            .ok_or_else(|| SwapError::Decode("empty swap data".into()))?;

        match tag {
            TAG_DIRECT => DirectSwapData::unpack_from(body).map(SwapData::Direct),
            TAG_TRANSITIVE => {
                if body.len() != TRANSITIVE_BODY_LEN {
                    return Err(SwapError::Decode(format!(
                        "transitive swap body is {} bytes, expected {TRANSITIVE_BODY_LEN}",
                        body.len()
                    )));
                }

                let (from, rest) = body.split_at(DIRECT_SWAP_DATA_LEN);
                let (to, rest) = rest.split_at(DIRECT_SWAP_DATA_LEN);
                let (mint, flag) = rest.split_at(32);

                let mint: [u8; 32] = mint
                    .try_into()
                    .map_err(|_| SwapError::Decode("truncated transit mint".into()))?;
                let needs_create = match flag {
                    [0] => false,
                    [1] => true,
                    other => {
                        return Err(SwapError::Decode(format!(
                            "invalid needs-create flag {other:?}"
                        )))
                    }
                };

                Ok(SwapData::Transitive(TransitiveSwapData::from_parts(
                    DirectSwapData::unpack_from(from)?,
                    DirectSwapData::unpack_from(to)?,
                    Pubkey::new(mint),
                    needs_create,
                )))
            }
            other => Err(SwapError::Decode(format!("unknown swap data tag {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::PoolDescriptor;
    use crate::swap_data::{build_direct_swap_data, DirectSwapParams};
    use crate::transitive::{build_transitive_swap_data, TransitiveSwapParams};

    fn pool(seed: u8) -> PoolDescriptor {
        let key = |offset: u8| Pubkey::new([seed + offset; 32]);
        PoolDescriptor {
            swap_program_id: key(0),
            account: key(1),
            authority: key(2),
            token_account_a: key(3),
            token_account_b: key(4),
            pool_token_mint: key(5),
            fee_account: key(6),
        }
    }

    fn direct(amount_in: u64) -> SwapData {
        let pool = pool(1);
        build_direct_swap_data(DirectSwapParams {
            pool: &pool,
            transfer_authority: Pubkey::new([0xAA; 32]),
            amount_in,
            min_amount_out: 10,
        })
        .into()
    }

    fn transitive() -> SwapData {
        let (first, second) = (pool(20), pool(40));
        build_transitive_swap_data(TransitiveSwapParams {
            first_pool: &first,
            second_pool: &second,
            transfer_authority: Pubkey::new([0xAA; 32]),
            amount_in: 5_000,
            intermediate_amount: 70,
            min_amount_out: 12,
            transit_token_mint: Pubkey::new([0xCC; 32]),
            needs_create_transit_token_account: false,
        })
        .into()
    }

    #[test]
    fn direct_layout() {
        let bytes = direct(99).pack().unwrap();
        assert_eq!(bytes.len(), 1 + DIRECT_SWAP_DATA_LEN);
        assert_eq!(bytes[0], TAG_DIRECT);
        assert_eq!(&bytes[1..33], &[1u8; 32]);
        assert_eq!(&bytes[257..265], &99u64.to_le_bytes());
        assert_eq!(&bytes[265..273], &10u64.to_le_bytes());
    }

    #[test]
    fn transitive_layout() {
        let bytes = transitive().pack().unwrap();
        assert_eq!(bytes.len(), 1 + TRANSITIVE_BODY_LEN);
        assert_eq!(bytes[0], TAG_TRANSITIVE);
        assert_eq!(&bytes[bytes.len() - 33..bytes.len() - 1], &[0xCCu8; 32]);
        assert_eq!(bytes[bytes.len() - 1], 0);
    }

    #[test]
    fn unpack_restores_both_variants() {
        for data in [direct(1), transitive()] {
            let bytes = data.pack().unwrap();
            assert_eq!(SwapData::unpack(&bytes).unwrap(), data);
        }
    }

    #[test]
    fn pack_rejects_zero_input() {
        assert!(matches!(direct(0).pack(), Err(SwapError::InvalidAmount(_))));
    }

    #[test]
    fn unpack_rejects_empty() {
        assert!(matches!(SwapData::unpack(&[]), Err(SwapError::Decode(_))));
    }

    #[test]
    fn unpack_rejects_unknown_tag() {
        let mut bytes = direct(1).pack().unwrap();
        bytes[0] = 7;
        let err = SwapData::unpack(&bytes).unwrap_err();
        assert!(err.to_string().contains("unknown swap data tag 7"));
    }

    #[test]
    fn unpack_rejects_trailing_bytes() {
        let mut bytes = transitive().pack().unwrap();
        bytes.push(0);
        assert!(SwapData::unpack(&bytes).is_err());
    }

    #[test]
    fn unpack_rejects_bad_flag() {
        let mut bytes = transitive().pack().unwrap();
        let last = bytes.len() - 1;
        bytes[last] = 2;
        assert!(SwapData::unpack(&bytes).is_err());
    }
}
