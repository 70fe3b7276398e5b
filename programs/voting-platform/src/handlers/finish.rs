use anchor_lang::prelude::*;

use crate::{
    constants::ELECTION_SEED,
    state::{Election, ElectionFinishedEvent},
};

#[derive(Accounts)]
pub struct Finish<'info> {
    #[account(
        mut,
        seeds = [ELECTION_SEED, election.registry.as_ref(), election.index.to_le_bytes().as_ref()],
        bump = election.bump,
    )]
    pub election: Account<'info, Election>,
}

impl<'info> Finish<'info> {
    /// Settles a closed election. Permissionless; succeeds once.
    pub fn handler(ctx: Context<Self>) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        let election = &mut ctx.accounts.election;
        election.finish(now)?;

        if election.success {
            msg!(
                "Election finished, leader {} with reward {} lamports",
                election.leader,
                election.reward
            );
        } else {
            msg!("Election finished without a unique leader, entry fees are refundable");
        }
        emit!(ElectionFinishedEvent {
            election: election.key(),
            success: election.success,
            leader: election.leader,
            reward: election.reward,
            platform_fee: election.platform_fee,
        });

        Ok(())
    }
}
