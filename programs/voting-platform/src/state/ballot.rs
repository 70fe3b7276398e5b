use anchor_lang::prelude::*;

/// One voter's participation in one election.
///
/// The account exists only for voters: its presence is what "has voted"
/// means. Everything but `refunded` is written once, by the vote itself.
#[account]
#[derive(InitSpace, Default, Debug)]
pub struct Ballot {
    /// PDA bump seed
    pub bump: u8,
    pub election: Pubkey,
    pub voter: Pubkey,
    /// The candidate this voter chose
    pub candidate: Pubkey,
    /// Set once the entry fee went back to the voter after a failed election
    pub refunded: bool,
}

impl Ballot {
    /// A freshly allocated ballot carries the default key until a vote fills it.
    pub fn is_cast(&self) -> bool {
        self.voter != Pubkey::default()
    }
}
