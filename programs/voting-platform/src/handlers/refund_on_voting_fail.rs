use anchor_lang::prelude::*;

use crate::{
    constants::{BALLOT_SEED, ELECTION_SEED},
    custody,
    state::{load_account, store_account, Ballot, Election, RefundEvent},
};

#[derive(Accounts)]
pub struct RefundOnVotingFail<'info> {
    #[account(mut)]
    pub voter: Signer<'info>,

    #[account(
        mut,
        seeds = [ELECTION_SEED, election.registry.as_ref(), election.index.to_le_bytes().as_ref()],
        bump = election.bump,
    )]
    pub election: Account<'info, Election>,

    /// CHECK: the voter's ballot PDA. It does not exist when the signer never
    /// voted, which `Election::claim_refund` reports as `NeverVoted`.
    #[account(
        mut,
        seeds = [BALLOT_SEED, election.key().as_ref(), voter.key().as_ref()],
        bump,
    )]
    pub ballot: UncheckedAccount<'info>,
}

impl<'info> RefundOnVotingFail<'info> {
    /// Returns the entry fee to a voter of a failed election, once per voter.
    pub fn handler(ctx: Context<Self>) -> Result<()> {
        let voter = ctx.accounts.voter.key();
        let ballot_info = ctx.accounts.ballot.to_account_info();
        let mut ballot = load_account::<Ballot>(&ballot_info);

        let amount = ctx.accounts.election.claim_refund(&voter, ballot.as_mut())?;
        if let Some(ballot) = &ballot {
            store_account(ballot, &ballot_info)?;
        }

        custody::release(
            &ctx.accounts.election.to_account_info(),
            &ctx.accounts.voter.to_account_info(),
            amount,
        )?;

        msg!("Refunded {} lamports", amount);
        emit!(RefundEvent {
            election: ctx.accounts.election.key(),
            voter,
            amount,
        });

        Ok(())
    }
}
