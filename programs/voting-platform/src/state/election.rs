use anchor_lang::prelude::*;

use crate::{
    constants::{MAX_CANDIDATES, MIN_CANDIDATES, PLATFORM_FEE_PERCENT, REWARD_PERCENT},
    error::ErrorCode,
    principal::PrincipalOracle,
    state::Ballot,
};

/// A time-boxed, fee-funded plurality election.
///
/// The account custodies every entry fee it accepts in its own lamports,
/// above the rent-exempt minimum. Lifecycle: open until `deadline`, closed
/// afterwards, finished once `finish` ran, then settled by pull-based claims.
/// Nothing ever moves backwards.
#[account]
#[derive(InitSpace, Default, Debug)]
pub struct Election {
    /// PDA bump seed
    pub bump: u8,
    /// Registry that created this election; its only admin
    pub registry: Pubkey,
    /// Position in the registry's election list
    pub index: u64,
    /// Candidates in creation order
    #[max_len(MAX_CANDIDATES)]
    pub candidates: Vec<Pubkey>,
    /// Vote counts aligned with `candidates`
    #[max_len(MAX_CANDIDATES)]
    pub tally: Vec<u64>,
    /// Exact payment required per vote, in lamports
    pub entry_fee: u64,
    /// Unix timestamp at which voting closes
    pub deadline: i64,
    pub finished: bool,
    /// Meaningful once finished: a unique leader exists
    pub success: bool,
    /// Default key unless the election succeeded
    pub leader: Pubkey,
    pub reward: u64,
    pub platform_fee: u64,
    pub reward_withdrawn: bool,
    pub fee_withdrawn: bool,
}

/// Parameters a registry stamps onto each election it creates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ElectionTerms {
    pub registry: Pubkey,
    pub index: u64,
    pub entry_fee: u64,
    pub voting_period: i64,
    pub bump: u8,
}

#[derive(Clone, Copy, Debug)]
pub struct VoteRequest {
    pub voter: Pubkey,
    pub candidate: Pubkey,
    /// Lamports the voter attaches
    pub payment: u64,
}

impl Election {
    /// Fills a freshly allocated election and starts its voting window at `now`.
    ///
    /// `address` is the election's own account, which may not stand as a candidate.
    pub fn open(
        &mut self,
        address: &Pubkey,
        terms: ElectionTerms,
        candidates: Vec<Pubkey>,
        now: i64,
        principals: &impl PrincipalOracle,
    ) -> Result<()> {
        validate_candidates(address, &candidates, principals)?;
        let deadline = now
            .checked_add(terms.voting_period)
            .ok_or(ErrorCode::Overflow)?;

        self.bump = terms.bump;
        self.registry = terms.registry;
        self.index = terms.index;
        self.tally = vec![0; candidates.len()];
        self.candidates = candidates;
        self.entry_fee = terms.entry_fee;
        self.deadline = deadline;
        self.finished = false;
        self.success = false;
        self.leader = Pubkey::default();
        self.reward = 0;
        self.platform_fee = 0;
        self.reward_withdrawn = false;
        self.fee_withdrawn = false;
        Ok(())
    }

    /// Voting is closed from the deadline onwards. Evaluated lazily; nothing
    /// fires at the deadline itself.
    pub fn is_closed(&self, now: i64) -> bool {
        now >= self.deadline
    }

    pub fn votes_for(&self, candidate: &Pubkey) -> Option<u64> {
        self.position_of(candidate).map(|position| self.tally[position])
    }

    /// Σ tally × entry fee. Recomputed on demand and never stored.
    pub fn total_collected(&self) -> Result<u128> {
        self.tally
            .iter()
            .try_fold(0u128, |sum, &votes| sum.checked_add(u128::from(votes)))
            .and_then(|votes| votes.checked_mul(u128::from(self.entry_fee)))
            .ok_or_else(|| error!(ErrorCode::Overflow))
    }

    /// Lamports of a successful pool assigned to neither the reward nor the
    /// platform fee because of percentage truncation. Zero otherwise.
    pub fn unallocated(&self) -> Result<u64> {
        if !self.success {
            return Ok(0);
        }
        let assigned = u128::from(self.reward) + u128::from(self.platform_fee);
        let remainder = self
            .total_collected()?
            .checked_sub(assigned)
            .ok_or(ErrorCode::Overflow)?;
        u64::try_from(remainder).map_err(|_| error!(ErrorCode::Overflow))
    }

    /// Admits one paid vote. Checks run in a fixed order and nothing is
    /// written unless all of them pass.
    pub fn cast_vote(
        &mut self,
        ballot: &mut Ballot,
        request: VoteRequest,
        now: i64,
        principals: &impl PrincipalOracle,
    ) -> Result<()> {
        require!(!self.is_closed(now), ErrorCode::AlreadyClosed);
        require!(
            principals.is_direct_principal(&request.voter),
            ErrorCode::ContractCallerRejected
        );
        require!(
            !self.candidates.contains(&request.voter),
            ErrorCode::CandidateCannotVote
        );
        require!(!ballot.is_cast(), ErrorCode::AlreadyVoted);
        require!(request.payment == self.entry_fee, ErrorCode::WrongEntryFee);
        let position = self
            .position_of(&request.candidate)
            .ok_or(ErrorCode::NotACandidate)?;
        let votes = self.tally[position]
            .checked_add(1)
            .ok_or(ErrorCode::Overflow)?;

        self.tally[position] = votes;
        ballot.voter = request.voter;
        ballot.candidate = request.candidate;
        ballot.refunded = false;
        Ok(())
    }

    /// Settles the outcome once voting has closed. Anyone may call it, once.
    ///
    /// A unique maximum makes the election successful and splits the pool
    /// 90/10 between leader and platform. Ties, including nobody voting,
    /// fail the election and leave the whole pool refundable.
    pub fn finish(&mut self, now: i64) -> Result<()> {
        require!(self.is_closed(now), ErrorCode::NotClosedYet);
        require!(!self.finished, ErrorCode::AlreadyFinished);

        if let Some(leader) = self.unique_leader() {
            let total = self.total_collected()?;
            self.reward = share_of(total, REWARD_PERCENT)?;
            self.platform_fee = share_of(total, PLATFORM_FEE_PERCENT)?;
            self.leader = leader;
            self.success = true;
        }

        self.finished = true;
        Ok(())
    }

    /// Marks the leader's reward as taken and returns the lamports to pay out.
    pub fn claim_reward(&mut self, caller: &Pubkey) -> Result<u64> {
        require!(self.finished, ErrorCode::NotFinishedYet);
        require!(self.success, ErrorCode::VotingNotSuccessful);
        require_keys_eq!(*caller, self.leader, ErrorCode::NotTheLeader);
        require!(!self.reward_withdrawn, ErrorCode::AlreadyWithdrawn);

        self.reward_withdrawn = true;
        Ok(self.reward)
    }

    /// Marks the platform fee as taken and returns the lamports to pay out.
    /// Only the creating registry may claim it.
    pub fn claim_platform_fee(&mut self, caller: &Pubkey) -> Result<u64> {
        require_keys_eq!(*caller, self.registry, ErrorCode::NotAdmin);
        require!(self.finished, ErrorCode::NotFinishedYet);
        require!(self.success, ErrorCode::VotingNotSuccessful);
        require!(!self.fee_withdrawn, ErrorCode::AlreadyWithdrawn);

        self.fee_withdrawn = true;
        Ok(self.platform_fee)
    }

    /// Marks a failed election's entry fee as returned to `voter` and returns
    /// the lamports to pay out. `ballot` is `None` when the voter never voted.
    pub fn claim_refund(&self, voter: &Pubkey, ballot: Option<&mut Ballot>) -> Result<u64> {
        require!(self.finished, ErrorCode::NotFinishedYet);
        require!(!self.success, ErrorCode::VotingWasSuccessful);
        let ballot = ballot
            .filter(|ballot| ballot.is_cast() && ballot.voter == *voter)
            .ok_or(ErrorCode::NeverVoted)?;
        require!(!ballot.refunded, ErrorCode::AlreadyWithdrawn);

        ballot.refunded = true;
        Ok(self.entry_fee)
    }

    fn position_of(&self, candidate: &Pubkey) -> Option<usize> {
        self.candidates.iter().position(|c| c == candidate)
    }

    fn unique_leader(&self) -> Option<Pubkey> {
        let max = *self.tally.iter().max()?;
        let mut leaders = self
            .candidates
            .iter()
            .zip(&self.tally)
            .filter(|(_, votes)| **votes == max);
        match (leaders.next(), leaders.next()) {
            (Some((leader, _)), None) => Some(*leader),
            _ => None,
        }
    }
}

/// Candidate rules, checked per candidate in input order so the first
/// offending entry decides the error.
pub fn validate_candidates(
    election: &Pubkey,
    candidates: &[Pubkey],
    principals: &impl PrincipalOracle,
) -> Result<()> {
    require!(
        candidates.len() >= MIN_CANDIDATES,
        ErrorCode::TooFewCandidates
    );
    require!(
        candidates.len() <= MAX_CANDIDATES,
        ErrorCode::TooManyCandidates
    );
    for (i, candidate) in candidates.iter().enumerate() {
        require_keys_neq!(
            *candidate,
            Pubkey::default(),
            ErrorCode::ZeroAddressCandidate
        );
        require_keys_neq!(*candidate, *election, ErrorCode::SelfCandidate);
        require!(
            principals.is_direct_principal(candidate),
            ErrorCode::ContractCandidate
        );
        require!(
            !candidates[..i].contains(candidate),
            ErrorCode::DuplicateCandidate
        );
    }
    Ok(())
}

fn share_of(total: u128, percent: u128) -> Result<u64> {
    let share = total.checked_mul(percent).ok_or(ErrorCode::Overflow)? / 100;
    u64::try_from(share).map_err(|_| error!(ErrorCode::Overflow))
}
