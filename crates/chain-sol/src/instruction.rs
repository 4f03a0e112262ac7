//! Program instructions before they are compiled into a transaction message.

use serde::{Deserialize, Serialize};

use crate::pubkey::Pubkey;

/// A single account reference in an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountMeta {
    pub pubkey: Pubkey,
    pub is_signer: bool,
    pub is_writable: bool,
}

impl AccountMeta {
    /// Writable, non-signing account.
    pub fn writable(pubkey: Pubkey) -> Self {
        Self {
            pubkey,
            is_signer: false,
            is_writable: true,
        }
    }

    /// Read-only, non-signing account.
    pub fn readonly(pubkey: Pubkey) -> Self {
        Self {
            pubkey,
            is_signer: false,
            is_writable: false,
        }
    }

    /// Read-only signer.
    pub fn signer(pubkey: Pubkey) -> Self {
        Self {
            pubkey,
            is_signer: true,
            is_writable: false,
        }
    }
}

/// An instruction for a single on-chain program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    pub program_id: Pubkey,
    pub accounts: Vec<AccountMeta>,
    pub data: Vec<u8>,
}

impl Instruction {
    /// Accounts that must sign the enclosing transaction.
    pub fn signers(&self) -> impl Iterator<Item = &Pubkey> {
        self.accounts
            .iter()
            .filter(|meta| meta.is_signer)
            .map(|meta| &meta.pubkey)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_roles() {
        let key = Pubkey::new([1u8; 32]);

        let w = AccountMeta::writable(key);
        assert!(w.is_writable && !w.is_signer);

        let r = AccountMeta::readonly(key);
        assert!(!r.is_writable && !r.is_signer);

        let s = AccountMeta::signer(key);
        assert!(!s.is_writable && s.is_signer);
    }

    #[test]
    fn signers_filters_accounts() {
        let ix = Instruction {
            program_id: Pubkey::default(),
            accounts: vec![
                AccountMeta::writable(Pubkey::new([1u8; 32])),
                AccountMeta::signer(Pubkey::new([2u8; 32])),
                AccountMeta::readonly(Pubkey::new([3u8; 32])),
            ],
            data: vec![],
        };

        let signers: Vec<_> = ix.signers().copied().collect();
        assert_eq!(signers, vec![Pubkey::new([2u8; 32])]);
    }
}
