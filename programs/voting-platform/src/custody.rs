use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::error::ErrorCode;

/// Moves an entry fee from the paying voter into the election's custody.
pub fn deposit<'info>(
    payer: &Signer<'info>,
    vault: AccountInfo<'info>,
    system_program: &Program<'info, System>,
    amount: u64,
) -> Result<()> {
    let accounts = Transfer {
        from: payer.to_account_info(),
        to: vault,
    };
    system_program::transfer(
        CpiContext::new(system_program.to_account_info(), accounts),
        amount,
    )
}

/// Pays custodied lamports out of a program-owned election account.
///
/// Callers flip the matching one-shot flag before calling this.
pub fn release<'info>(
    vault: &AccountInfo<'info>,
    recipient: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    let vault_balance = vault
        .lamports()
        .checked_sub(amount)
        .ok_or(ErrorCode::Overflow)?;
    let recipient_balance = recipient
        .lamports()
        .checked_add(amount)
        .ok_or(ErrorCode::Overflow)?;

    **vault.try_borrow_mut_lamports()? = vault_balance;
    **recipient.try_borrow_mut_lamports()? = recipient_balance;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::assert_error;

    #[test]
    fn release_moves_exact_amount() {
        let (vault_key, recipient_key) = (Pubkey::new_unique(), Pubkey::new_unique());
        let (owner, system) = (crate::ID, system_program::ID);
        let (mut vault_lamports, mut recipient_lamports) = (5_000_000u64, 1_000u64);
        let (mut vault_data, mut recipient_data) = ([0u8; 8], [0u8; 0]);
        let vault = AccountInfo::new(
            &vault_key,
            false,
            true,
            &mut vault_lamports,
            &mut vault_data,
            &owner,
            false,
            0,
        );
        let recipient = AccountInfo::new(
            &recipient_key,
            false,
            true,
            &mut recipient_lamports,
            &mut recipient_data,
            &system,
            false,
            0,
        );

        release(&vault, &recipient, 4_000_000).unwrap();
        assert_eq!(vault.lamports(), 1_000_000);
        assert_eq!(recipient.lamports(), 4_001_000);

        assert_error(release(&vault, &recipient, 1_000_001), ErrorCode::Overflow);
        assert_eq!(vault.lamports(), 1_000_000);
    }
}
