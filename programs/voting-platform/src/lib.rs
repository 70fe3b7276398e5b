// Stops Rust Analyzer complaining about missing configs
// See https://solana.stackexchange.com/questions/17777
#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

pub mod constants;
pub mod custody;
pub mod error;
pub mod handlers;
pub mod principal;
pub mod state;

pub use error::ErrorCode;
pub use handlers::*;
pub use state::{Ballot, Election, Registry};

declare_id!("D7j4cEyGV3q3143qq8AHKRb2KPqcvEsgAUmh1HHx7JdP");

#[program]
pub mod voting_platform {
    use super::*;

    pub fn initialize_registry(
        ctx: Context<InitializeRegistry>,
        entry_fee: u64,
        voting_period: i64,
    ) -> Result<()> {
        InitializeRegistry::handler(ctx, entry_fee, voting_period)
    }

    pub fn create_election(ctx: Context<CreateElection>, candidates: Vec<Pubkey>) -> Result<()> {
        CreateElection::handler(ctx, candidates)
    }

    pub fn vote(ctx: Context<Vote>, candidate: Pubkey, payment: u64) -> Result<()> {
        Vote::handler(ctx, candidate, payment)
    }

    pub fn finish(ctx: Context<Finish>) -> Result<()> {
        Finish::handler(ctx)
    }

    pub fn withdraw_reward(ctx: Context<WithdrawReward>) -> Result<()> {
        WithdrawReward::handler(ctx)
    }

    pub fn withdraw_platform_fee(ctx: Context<WithdrawPlatformFee>) -> Result<()> {
        WithdrawPlatformFee::handler(ctx)
    }

    pub fn refund_on_voting_fail(ctx: Context<RefundOnVotingFail>) -> Result<()> {
        RefundOnVotingFail::handler(ctx)
    }

    pub fn collect_fee(ctx: Context<CollectFee>) -> Result<()> {
        CollectFee::handler(ctx)
    }

    // Views, read through transaction simulation return data

    pub fn is_election(ctx: Context<IsElection>) -> Result<bool> {
        IsElection::handler(ctx)
    }

    pub fn is_closed(ctx: Context<IsClosed>) -> Result<bool> {
        IsClosed::handler(ctx)
    }
}
