pub mod ballot;
pub mod election;
pub mod events;
pub mod registry;

pub use ballot::*;
pub use election::*;
pub use events::*;
pub use registry::*;

use anchor_lang::prelude::*;
use anchor_lang::{AccountDeserialize, AccountSerialize, Owner};

/// Reads a program account that Anchor could not validate up front, e.g. one
/// that may not exist yet. Anything not owned by this program, or carrying a
/// different discriminator, reads as `None`.
pub fn load_account<T: AccountDeserialize + Owner>(info: &AccountInfo) -> Option<T> {
    if info.owner != &T::owner() {
        return None;
    }
    let data = info.try_borrow_data().ok()?;
    T::try_deserialize(&mut &data[..]).ok()
}

/// Writes back an account obtained through [`load_account`].
pub fn store_account<T: AccountSerialize>(account: &T, info: &AccountInfo) -> Result<()> {
    let mut data = info.try_borrow_mut_data()?;
    let mut writer: &mut [u8] = &mut data[..];
    account.try_serialize(&mut writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::system_program;

    #[test]
    fn ballot_written_back_is_read_again() {
        let key = Pubkey::new_unique();
        let owner = crate::ID;
        let mut lamports = 1_000_000;
        let mut data = vec![0u8; 8 + Ballot::INIT_SPACE];
        let info = AccountInfo::new(&key, false, true, &mut lamports, &mut data, &owner, false, 0);

        // Zeroed data has no discriminator yet.
        assert!(load_account::<Ballot>(&info).is_none());

        let ballot = Ballot {
            voter: Pubkey::new_unique(),
            refunded: true,
            ..Ballot::default()
        };
        store_account(&ballot, &info).unwrap();

        let loaded = load_account::<Ballot>(&info).unwrap();
        assert_eq!(loaded.voter, ballot.voter);
        assert!(loaded.refunded);
        assert!(load_account::<Election>(&info).is_none());
    }

    #[test]
    fn wallet_never_loads_as_program_state() {
        let key = Pubkey::new_unique();
        let owner = system_program::ID;
        let mut lamports = 1_000_000;
        let mut data: [u8; 0] = [];
        let info = AccountInfo::new(&key, true, true, &mut lamports, &mut data, &owner, false, 0);

        assert!(load_account::<Ballot>(&info).is_none());
        assert!(load_account::<Election>(&info).is_none());
    }
}
