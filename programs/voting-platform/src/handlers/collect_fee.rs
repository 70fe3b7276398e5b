use anchor_lang::prelude::*;

use crate::{
    constants::REGISTRY_SEED,
    custody,
    state::{load_account, store_account, Election, PlatformFeeCollectedEvent, Registry},
};

#[derive(Accounts)]
pub struct CollectFee<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        seeds = [REGISTRY_SEED, registry.owner.as_ref()],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    /// CHECK: any account may be passed; `Registry::collect_fee` rejects
    /// anything that is not one of this registry's elections.
    #[account(mut)]
    pub election: UncheckedAccount<'info>,
}

impl<'info> CollectFee<'info> {
    /// Moves a finished election's platform fee straight to the registry owner.
    pub fn handler(ctx: Context<Self>) -> Result<()> {
        let registry_key = ctx.accounts.registry.key();
        let owner = ctx.accounts.owner.key();
        let election_info = ctx.accounts.election.to_account_info();
        let mut election = load_account::<Election>(&election_info);

        let amount = ctx.accounts.registry.collect_fee(
            &registry_key,
            &owner,
            election_info.key,
            election.as_mut(),
        )?;
        if let Some(election) = &election {
            store_account(election, &election_info)?;
        }

        custody::release(
            &election_info,
            &ctx.accounts.owner.to_account_info(),
            amount,
        )?;

        msg!("Collected platform fee of {} lamports", amount);
        emit!(PlatformFeeCollectedEvent {
            election: *election_info.key,
            beneficiary: owner,
            amount,
        });

        Ok(())
    }
}
