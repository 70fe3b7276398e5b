use anchor_lang::prelude::*;

use crate::{
    constants::{ELECTION_SEED, REGISTRY_SEED},
    principal::RuntimePrincipals,
    state::{Election, ElectionCreatedEvent, Registry},
};

#[derive(Accounts)]
pub struct CreateElection<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [REGISTRY_SEED, registry.owner.as_ref()],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    #[account(
        init,
        payer = owner,
        space = 8 + Election::INIT_SPACE,
        seeds = [
            ELECTION_SEED,
            registry.key().as_ref(),
            registry.election_count.to_le_bytes().as_ref(),
        ],
        bump,
    )]
    pub election: Account<'info, Election>,

    pub system_program: Program<'info, System>,
}

impl<'info> CreateElection<'info> {
    /// Creates the registry's next election. Voting opens immediately.
    ///
    /// Every candidate's account must be passed in `remaining_accounts`, so that
    /// program-controlled accounts can be told apart from wallets.
    pub fn handler(ctx: Context<Self>, candidates: Vec<Pubkey>) -> Result<()> {
        let registry_key = ctx.accounts.registry.key();
        let election_key = ctx.accounts.election.key();
        let now = Clock::get()?.unix_timestamp;
        let principals = RuntimePrincipals::accounts(ctx.remaining_accounts);

        let terms = ctx.accounts.registry.next_election(
            registry_key,
            &ctx.accounts.owner.key(),
            ctx.bumps.election,
        )?;
        ctx.accounts
            .election
            .open(&election_key, terms, candidates, now, &principals)?;
        let index = ctx.accounts.registry.append_election()?;

        let election = &ctx.accounts.election;
        msg!(
            "Created election {} with {} candidates, closing at {}",
            index,
            election.candidates.len(),
            election.deadline
        );
        emit!(ElectionCreatedEvent {
            registry: registry_key,
            election: election_key,
            index,
            candidates: election.candidates.clone(),
            deadline: election.deadline,
        });

        Ok(())
    }
}
