use anchor_lang::prelude::*;

use crate::{
    constants::{ELECTION_SEED, REGISTRY_SEED},
    state::{load_account, Election, Registry},
};

#[derive(Accounts)]
pub struct IsElection<'info> {
    #[account(
        seeds = [REGISTRY_SEED, registry.owner.as_ref()],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    /// CHECK: read only; any account is a valid question
    pub election: UncheckedAccount<'info>,
}

#[derive(Accounts)]
pub struct IsClosed<'info> {
    #[account(
        seeds = [ELECTION_SEED, election.registry.as_ref(), election.index.to_le_bytes().as_ref()],
        bump = election.bump,
    )]
    pub election: Account<'info, Election>,
}

impl<'info> IsElection<'info> {
    /// Whether the account was created by this registry. Never fails for a
    /// well-formed registry.
    pub fn handler(ctx: Context<Self>) -> Result<bool> {
        let registry_key = ctx.accounts.registry.key();
        let info = ctx.accounts.election.to_account_info();
        Ok(load_account::<Election>(&info).is_some_and(|election| {
            ctx.accounts
                .registry
                .is_election(&registry_key, info.key, &election)
        }))
    }
}

impl<'info> IsClosed<'info> {
    /// Whether voting has closed, judged against the current clock.
    pub fn handler(ctx: Context<Self>) -> Result<bool> {
        let now = Clock::get()?.unix_timestamp;
        Ok(ctx.accounts.election.is_closed(now))
    }
}
