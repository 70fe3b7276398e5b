use anchor_lang::prelude::*;

#[event]
pub struct RegistryInitializedEvent {
    pub registry: Pubkey,
    pub owner: Pubkey,
    pub entry_fee: u64,
    pub voting_period: i64,
}

#[event]
pub struct ElectionCreatedEvent {
    pub registry: Pubkey,
    pub election: Pubkey,
    pub index: u64,
    pub candidates: Vec<Pubkey>,
    pub deadline: i64,
}

#[event]
pub struct VoteCastEvent {
    pub election: Pubkey,
    pub voter: Pubkey,
    pub candidate: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct ElectionFinishedEvent {
    pub election: Pubkey,
    pub success: bool,
    /// Default key when the election failed
    pub leader: Pubkey,
    pub reward: u64,
    pub platform_fee: u64,
}

#[event]
pub struct RewardWithdrawnEvent {
    pub election: Pubkey,
    pub leader: Pubkey,
    pub amount: u64,
}

#[event]
pub struct PlatformFeeCollectedEvent {
    pub election: Pubkey,
    pub beneficiary: Pubkey,
    pub amount: u64,
}

#[event]
pub struct RefundEvent {
    pub election: Pubkey,
    pub voter: Pubkey,
    pub amount: u64,
}
