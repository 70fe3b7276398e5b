// PDA seeds
pub const REGISTRY_SEED: &[u8] = b"registry";
pub const ELECTION_SEED: &[u8] = b"election";
pub const BALLOT_SEED: &[u8] = b"ballot";

/// Upper bound on candidates per election; also sizes the `Election` account.
pub const MAX_CANDIDATES: usize = 16;
pub const MIN_CANDIDATES: usize = 2;

/// 0.01 SOL
pub const DEFAULT_ENTRY_FEE: u64 = 10_000_000;
/// 4 days, in seconds
pub const DEFAULT_VOTING_PERIOD: i64 = 4 * 24 * 60 * 60;

// Split of the collected pool on a successful election, in percent.
// Truncation remainder stays in the election account.
pub const REWARD_PERCENT: u128 = 90;
pub const PLATFORM_FEE_PERCENT: u128 = 10;
