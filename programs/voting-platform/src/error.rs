use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    // Registry
    #[msg("Caller is not the registry owner")]
    Unauthorized,
    #[msg("Account is not an election of this registry")]
    NotAnElection,
    #[msg("Entry fee and voting period must be positive")]
    InvalidConfig,

    // Candidate set
    #[msg("At least 2 candidates are required")]
    TooFewCandidates,
    #[msg("Too many candidates")]
    TooManyCandidates,
    #[msg("Zero address candidate")]
    ZeroAddressCandidate,
    #[msg("An election can't be its own candidate")]
    SelfCandidate,
    #[msg("A program-controlled account can't be a candidate")]
    ContractCandidate,
    #[msg("Candidate is listed more than once")]
    DuplicateCandidate,

    // Voting
    #[msg("Voting is already closed")]
    AlreadyClosed,
    #[msg("Votes must be cast directly, not through another program")]
    ContractCallerRejected,
    #[msg("A candidate can't vote")]
    CandidateCannotVote,
    #[msg("Already voted")]
    AlreadyVoted,
    #[msg("Payment must equal the entry fee exactly")]
    WrongEntryFee,
    #[msg("Not a candidate")]
    NotACandidate,

    // Finishing and payouts
    #[msg("Voting is not closed yet")]
    NotClosedYet,
    #[msg("Election is already finished")]
    AlreadyFinished,
    #[msg("Election is not finished yet")]
    NotFinishedYet,
    #[msg("The voting was not successful")]
    VotingNotSuccessful,
    #[msg("The voting was successful")]
    VotingWasSuccessful,
    #[msg("Caller is not the leader")]
    NotTheLeader,
    #[msg("Caller is not the election admin")]
    NotAdmin,
    #[msg("Caller never voted in this election")]
    NeverVoted,
    #[msg("Already withdrawn")]
    AlreadyWithdrawn,

    #[msg("Arithmetic overflow")]
    Overflow,
}

/// Asserts that `result` failed with exactly `expected`.
#[cfg(test)]
pub fn assert_error<T: std::fmt::Debug>(result: Result<T>, expected: ErrorCode) {
    match result {
        Err(anchor_lang::error::Error::AnchorError(err)) => assert_eq!(
            err.error_code_number,
            u32::from(expected),
            "expected {expected:?}, got {}",
            err.error_name
        ),
        other => panic!("expected {expected:?}, got {other:?}"),
    }
}
