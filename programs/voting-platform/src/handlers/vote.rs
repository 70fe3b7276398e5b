use anchor_lang::prelude::*;

use crate::{
    constants::{BALLOT_SEED, ELECTION_SEED},
    custody,
    principal::RuntimePrincipals,
    state::{Ballot, Election, VoteCastEvent, VoteRequest},
};

#[derive(Accounts)]
pub struct Vote<'info> {
    #[account(mut)]
    pub voter: Signer<'info>,

    #[account(
        mut,
        seeds = [ELECTION_SEED, election.registry.as_ref(), election.index.to_le_bytes().as_ref()],
        bump = election.bump,
    )]
    pub election: Account<'info, Election>,

    // An existing ballot is rejected as a second vote by `Election::cast_vote`.
    #[account(
        init_if_needed,
        payer = voter,
        space = 8 + Ballot::INIT_SPACE,
        seeds = [BALLOT_SEED, election.key().as_ref(), voter.key().as_ref()],
        bump,
    )]
    pub ballot: Account<'info, Ballot>,

    pub system_program: Program<'info, System>,
}

impl<'info> Vote<'info> {
    /// Casts the signer's vote for `candidate`, paying exactly the entry fee.
    pub fn handler(ctx: Context<Self>, candidate: Pubkey, payment: u64) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        let voter = ctx.accounts.voter.to_account_info();
        let principals = RuntimePrincipals::caller(std::slice::from_ref(&voter));
        let request = VoteRequest {
            voter: *voter.key,
            candidate,
            payment,
        };

        let election = &mut ctx.accounts.election;
        let ballot = &mut ctx.accounts.ballot;
        election.cast_vote(ballot, request, now, &principals)?;
        ballot.bump = ctx.bumps.ballot;
        ballot.election = election.key();

        custody::deposit(
            &ctx.accounts.voter,
            election.to_account_info(),
            &ctx.accounts.system_program,
            payment,
        )?;

        msg!("Vote cast for {}", candidate);
        emit!(VoteCastEvent {
            election: election.key(),
            voter: request.voter,
            candidate,
            timestamp: now,
        });

        Ok(())
    }
}
