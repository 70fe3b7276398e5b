use anchor_lang::prelude::*;

use crate::{
    constants::ELECTION_SEED,
    custody,
    state::{Election, PlatformFeeCollectedEvent, Registry},
};

#[derive(Accounts)]
pub struct WithdrawPlatformFee<'info> {
    /// Must be the election's registry. A registry is a PDA and can't sign a
    /// transaction itself, so in practice the fee moves through `collect_fee`.
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [ELECTION_SEED, election.registry.as_ref(), election.index.to_le_bytes().as_ref()],
        bump = election.bump,
    )]
    pub election: Account<'info, Election>,

    #[account(address = election.registry)]
    pub registry: Account<'info, Registry>,

    /// CHECK: receives lamports only; pinned to the registry owner
    #[account(mut, address = registry.owner)]
    pub beneficiary: UncheckedAccount<'info>,
}

impl<'info> WithdrawPlatformFee<'info> {
    /// Pays the platform's 10% share of a successful election to the registry
    /// owner, once. Only the admin may call it.
    pub fn handler(ctx: Context<Self>) -> Result<()> {
        let admin = ctx.accounts.admin.key();
        let amount = ctx.accounts.election.claim_platform_fee(&admin)?;

        custody::release(
            &ctx.accounts.election.to_account_info(),
            &ctx.accounts.beneficiary.to_account_info(),
            amount,
        )?;

        msg!("Platform fee of {} lamports withdrawn", amount);
        emit!(PlatformFeeCollectedEvent {
            election: ctx.accounts.election.key(),
            beneficiary: ctx.accounts.beneficiary.key(),
            amount,
        });

        Ok(())
    }
}
