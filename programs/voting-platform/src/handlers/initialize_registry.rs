use anchor_lang::prelude::*;

use crate::{
    constants::REGISTRY_SEED,
    state::{Registry, RegistryInitializedEvent},
};

#[derive(Accounts)]
pub struct InitializeRegistry<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        init,
        payer = owner,
        space = 8 + Registry::INIT_SPACE,
        seeds = [REGISTRY_SEED, owner.key().as_ref()],
        bump,
    )]
    pub registry: Account<'info, Registry>,

    pub system_program: Program<'info, System>,
}

impl<'info> InitializeRegistry<'info> {
    /// Sets up a registry owned by the signer. Every election it creates charges
    /// `entry_fee` lamports per vote and stays open for `voting_period` seconds.
    pub fn handler(
        ctx: Context<Self>,
        entry_fee: u64,
        voting_period: i64,
    ) -> Result<()> {
        let owner = ctx.accounts.owner.key();
        ctx.accounts
            .registry
            .initialize(owner, entry_fee, voting_period, ctx.bumps.registry)?;

        msg!(
            "Registry initialized: entry fee {} lamports, voting period {}s",
            entry_fee,
            voting_period
        );
        emit!(RegistryInitializedEvent {
            registry: ctx.accounts.registry.key(),
            owner,
            entry_fee,
            voting_period,
        });

        Ok(())
    }
}
