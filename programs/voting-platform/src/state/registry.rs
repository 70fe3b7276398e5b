use anchor_lang::prelude::*;

use crate::{
    constants::ELECTION_SEED,
    error::ErrorCode,
    state::{Election, ElectionTerms},
};

/// Factory and administrator of elections.
///
/// Elections form an append-only list: the election at position `i` lives at
/// the PDA `["election", registry, i]`, so `election_count` is the whole list.
#[account]
#[derive(InitSpace, Default, Debug)]
pub struct Registry {
    /// PDA bump seed
    pub bump: u8,
    /// Only key allowed to create elections and collect platform fees
    pub owner: Pubkey,
    /// Entry fee, in lamports, for every election created here
    pub entry_fee: u64,
    /// Length of each election's voting window, in seconds
    pub voting_period: i64,
    pub election_count: u64,
}

impl Registry {
    pub fn initialize(
        &mut self,
        owner: Pubkey,
        entry_fee: u64,
        voting_period: i64,
        bump: u8,
    ) -> Result<()> {
        require!(
            entry_fee > 0 && voting_period > 0,
            ErrorCode::InvalidConfig
        );
        self.bump = bump;
        self.owner = owner;
        self.entry_fee = entry_fee;
        self.voting_period = voting_period;
        self.election_count = 0;
        Ok(())
    }

    /// Terms for the next election, if `caller` may create one. Nothing is
    /// recorded until [`Registry::append_election`].
    pub fn next_election(
        &self,
        registry: Pubkey,
        caller: &Pubkey,
        bump: u8,
    ) -> Result<ElectionTerms> {
        require_keys_eq!(*caller, self.owner, ErrorCode::Unauthorized);
        Ok(ElectionTerms {
            registry,
            index: self.election_count,
            entry_fee: self.entry_fee,
            voting_period: self.voting_period,
            bump,
        })
    }

    pub fn append_election(&mut self) -> Result<u64> {
        let index = self.election_count;
        self.election_count = index.checked_add(1).ok_or(ErrorCode::Overflow)?;
        Ok(index)
    }

    /// Address of the election at `index`, if the list is that long.
    pub fn election_address(&self, registry: &Pubkey, index: u64) -> Option<Pubkey> {
        (index < self.election_count).then(|| election_pda(registry, index).0)
    }

    /// Whether `election`, stored at `address`, was created by this registry.
    /// Constant time: one address derivation, no list scan.
    pub fn is_election(&self, registry: &Pubkey, address: &Pubkey, election: &Election) -> bool {
        election.registry == *registry
            && election.index < self.election_count
            && Pubkey::create_program_address(
                &[
                    ELECTION_SEED,
                    registry.as_ref(),
                    election.index.to_le_bytes().as_ref(),
                    &[election.bump],
                ],
                &crate::ID,
            )
            .is_ok_and(|derived| derived == *address)
    }

    /// Takes the platform fee of one of this registry's elections on behalf of
    /// the owner. Errors from the election are passed through unchanged.
    pub fn collect_fee(
        &self,
        registry: &Pubkey,
        caller: &Pubkey,
        address: &Pubkey,
        election: Option<&mut Election>,
    ) -> Result<u64> {
        require_keys_eq!(*caller, self.owner, ErrorCode::Unauthorized);
        let election = election
            .filter(|election| self.is_election(registry, address, election))
            .ok_or(ErrorCode::NotAnElection)?;
        election.claim_platform_fee(registry)
    }
}

pub fn election_pda(registry: &Pubkey, index: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[ELECTION_SEED, registry.as_ref(), index.to_le_bytes().as_ref()],
        &crate::ID,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        constants::{DEFAULT_ENTRY_FEE, DEFAULT_VOTING_PERIOD, REGISTRY_SEED},
        error::assert_error,
        principal::FixedPrincipals,
        state::{Ballot, VoteRequest},
    };

    const START: i64 = 1_700_000_000;

    struct Platform {
        key: Pubkey,
        registry: Registry,
    }

    impl Platform {
        fn new(owner: Pubkey) -> Self {
            let (key, bump) =
                Pubkey::find_program_address(&[REGISTRY_SEED, owner.as_ref()], &crate::ID);
            let mut registry = Registry::default();
            registry
                .initialize(owner, DEFAULT_ENTRY_FEE, DEFAULT_VOTING_PERIOD, bump)
                .unwrap();
            Self { key, registry }
        }

        fn create(
            &mut self,
            caller: &Pubkey,
            candidates: Vec<Pubkey>,
        ) -> Result<(Pubkey, Election)> {
            let (address, bump) = election_pda(&self.key, self.registry.election_count);
            let terms = self.registry.next_election(self.key, caller, bump)?;
            let mut election = Election::default();
            election.open(&address, terms, candidates, START, &FixedPrincipals::default())?;
            self.registry.append_election()?;
            Ok((address, election))
        }
    }

    fn candidates() -> Vec<Pubkey> {
        vec![Pubkey::new_unique(), Pubkey::new_unique()]
    }

    #[test]
    fn initialize_rejects_empty_config() {
        let mut registry = Registry::default();
        let owner = Pubkey::new_unique();

        assert_error(
            registry.initialize(owner, 0, DEFAULT_VOTING_PERIOD, 255),
            ErrorCode::InvalidConfig,
        );
        assert_error(
            registry.initialize(owner, DEFAULT_ENTRY_FEE, 0, 255),
            ErrorCode::InvalidConfig,
        );
        assert_eq!(registry.owner, Pubkey::default());
    }

    #[test]
    fn owner_creates_elections_in_order() {
        let owner = Pubkey::new_unique();
        let mut platform = Platform::new(owner);

        let (first, election) = platform.create(&owner, candidates()).unwrap();
        let (second, _) = platform.create(&owner, candidates()).unwrap();

        assert_eq!(platform.registry.election_count, 2);
        assert_eq!(platform.registry.election_address(&platform.key, 0), Some(first));
        assert_eq!(platform.registry.election_address(&platform.key, 1), Some(second));
        assert_eq!(platform.registry.election_address(&platform.key, 2), None);
        assert_eq!(election.registry, platform.key);
        assert_eq!(election.index, 0);
        assert_eq!(election.entry_fee, DEFAULT_ENTRY_FEE);
        assert_eq!(election.deadline, START + DEFAULT_VOTING_PERIOD);
    }

    #[test]
    fn only_owner_creates_elections() {
        let owner = Pubkey::new_unique();
        let mut platform = Platform::new(owner);

        assert_error(
            platform.create(&Pubkey::new_unique(), candidates()),
            ErrorCode::Unauthorized,
        );
        assert_eq!(platform.registry.election_count, 0);
    }

    #[test]
    fn invalid_candidates_leave_the_list_untouched() {
        let owner = Pubkey::new_unique();
        let mut platform = Platform::new(owner);

        assert_error(
            platform.create(&owner, vec![Pubkey::new_unique()]),
            ErrorCode::TooFewCandidates,
        );
        assert_eq!(platform.registry.election_count, 0);
    }

    #[test]
    fn membership_is_checked_against_registry_and_address() {
        let owner = Pubkey::new_unique();
        let mut platform = Platform::new(owner);
        let mut other = Platform::new(Pubkey::new_unique());
        let (address, election) = platform.create(&owner, candidates()).unwrap();
        let other_owner = other.registry.owner;
        let (foreign_address, foreign) = other.create(&other_owner, candidates()).unwrap();

        assert!(platform.registry.is_election(&platform.key, &address, &election));
        assert!(!platform.registry.is_election(&platform.key, &Pubkey::new_unique(), &election));
        assert!(!platform.registry.is_election(&platform.key, &foreign_address, &foreign));

        // An index past the list is not a member even if the account claims it.
        let mut forged = election.clone();
        forged.index = 5;
        assert!(!platform.registry.is_election(&platform.key, &address, &forged));
    }

    #[test]
    fn collect_fee_checks_owner_then_membership() {
        let owner = Pubkey::new_unique();
        let mut platform = Platform::new(owner);
        let (address, mut election) = platform.create(&owner, candidates()).unwrap();
        let key = platform.key;

        assert_error(
            platform.registry.collect_fee(
                &key,
                &Pubkey::new_unique(),
                &address,
                Some(&mut election),
            ),
            ErrorCode::Unauthorized,
        );
        assert_error(
            platform.registry.collect_fee(&key, &owner, &Pubkey::new_unique(), None),
            ErrorCode::NotAnElection,
        );
        // Errors of the election itself come through as they are.
        assert_error(
            platform.registry.collect_fee(&key, &owner, &address, Some(&mut election)),
            ErrorCode::NotFinishedYet,
        );
    }

    #[test]
    fn collect_fee_after_successful_election() {
        let owner = Pubkey::new_unique();
        let mut platform = Platform::new(owner);
        let (address, mut election) = platform.create(&owner, candidates()).unwrap();
        let key = platform.key;
        let leader = election.candidates[0];

        let request = VoteRequest {
            voter: Pubkey::new_unique(),
            candidate: leader,
            payment: DEFAULT_ENTRY_FEE,
        };
        election
            .cast_vote(&mut Ballot::default(), request, START, &FixedPrincipals::default())
            .unwrap();
        election.finish(START + DEFAULT_VOTING_PERIOD).unwrap();

        assert_eq!(
            platform.registry.collect_fee(&key, &owner, &address, Some(&mut election)).unwrap(),
            1_000_000
        );
        assert!(election.fee_withdrawn);
        assert_error(
            platform.registry.collect_fee(&key, &owner, &address, Some(&mut election)),
            ErrorCode::AlreadyWithdrawn,
        );
        assert_eq!(election.claim_reward(&leader).unwrap(), 9_000_000);
    }

    #[test]
    fn collect_fee_after_failed_election() {
        let owner = Pubkey::new_unique();
        let mut platform = Platform::new(owner);
        let (address, mut election) = platform.create(&owner, candidates()).unwrap();
        let key = platform.key;
        election.finish(START + DEFAULT_VOTING_PERIOD).unwrap();

        assert_error(
            platform.registry.collect_fee(&key, &owner, &address, Some(&mut election)),
            ErrorCode::VotingNotSuccessful,
        );
        assert!(!election.fee_withdrawn);
    }
}
