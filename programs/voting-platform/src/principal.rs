use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::{get_stack_height, TRANSACTION_LEVEL_STACK_HEIGHT};
use anchor_lang::system_program;

/// Decides whether an account is operated directly by a keypair holder
/// rather than by a program acting on someone's behalf.
///
/// Candidates and voters must be direct principals. The state machine only
/// asks the question; the answer comes from whoever hosts it.
pub trait PrincipalOracle {
    fn is_direct_principal(&self, key: &Pubkey) -> bool;
}

/// Answers from the accounts handed to the current instruction.
///
/// An account counts as a direct principal when it was passed in, is owned by
/// the System Program and is not executable. Program-derived addresses and
/// program-owned state never satisfy this.
pub struct RuntimePrincipals<'a, 'info> {
    accounts: &'a [AccountInfo<'info>],
    top_level: bool,
}

impl<'a, 'info> RuntimePrincipals<'a, 'info> {
    /// Judges accounts listed by someone else, e.g. the candidates of a new election.
    pub fn accounts(accounts: &'a [AccountInfo<'info>]) -> Self {
        Self {
            accounts,
            top_level: true,
        }
    }

    /// Judges the signer of the running instruction. A signer reached through
    /// CPI is relayed by another program and never counts.
    pub fn caller(accounts: &'a [AccountInfo<'info>]) -> Self {
        Self {
            accounts,
            top_level: get_stack_height() == TRANSACTION_LEVEL_STACK_HEIGHT,
        }
    }
}

impl PrincipalOracle for RuntimePrincipals<'_, '_> {
    fn is_direct_principal(&self, key: &Pubkey) -> bool {
        self.top_level
            && self
                .accounts
                .iter()
                .find(|account| account.key == key)
                .is_some_and(|account| {
                    !account.executable && account.owner == &system_program::ID
                })
    }
}

/// Fixed answers for host-side tests: everything is a direct principal except
/// the listed program accounts.
#[cfg(test)]
#[derive(Default)]
pub struct FixedPrincipals {
    programs: Vec<Pubkey>,
}

#[cfg(test)]
impl FixedPrincipals {
    pub fn with_programs(programs: &[Pubkey]) -> Self {
        Self {
            programs: programs.to_vec(),
        }
    }
}

#[cfg(test)]
impl PrincipalOracle for FixedPrincipals {
    fn is_direct_principal(&self, key: &Pubkey) -> bool {
        !self.programs.contains(key)
    }
}
