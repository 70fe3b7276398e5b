use anchor_lang::prelude::*;

use crate::{
    constants::ELECTION_SEED,
    custody,
    state::{Election, RewardWithdrawnEvent},
};

#[derive(Accounts)]
pub struct WithdrawReward<'info> {
    #[account(mut)]
    pub leader: Signer<'info>,

    #[account(
        mut,
        seeds = [ELECTION_SEED, election.registry.as_ref(), election.index.to_le_bytes().as_ref()],
        bump = election.bump,
    )]
    pub election: Account<'info, Election>,
}

impl<'info> WithdrawReward<'info> {
    /// Pays the leader's 90% share of a successful election, once.
    pub fn handler(ctx: Context<Self>) -> Result<()> {
        let leader = ctx.accounts.leader.key();
        let amount = ctx.accounts.election.claim_reward(&leader)?;

        custody::release(
            &ctx.accounts.election.to_account_info(),
            &ctx.accounts.leader.to_account_info(),
            amount,
        )?;

        msg!("Leader withdrew {} lamports", amount);
        emit!(RewardWithdrawnEvent {
            election: ctx.accounts.election.key(),
            leader,
            amount,
        });

        Ok(())
    }
}
