// Access control guard
//
// Stateless checks shared by every mutating instruction. A failed check
// aborts the whole instruction, so no partial state is ever observable.

use anchor_lang::prelude::*;

use crate::{errors::VoteError, state::Proposal};

// The signer must be the account's designated authority/owner
pub fn assert_authority(expected: &Pubkey, caller: &Pubkey) -> Result<()> {
    require_keys_eq!(*expected, *caller, VoteError::UnauthorizedAccess);
    Ok(())
}

// Resolve an address to a live Proposal
// Anything else (empty, closed, foreign-owned, wrong discriminator) is ProposalNotFound
pub fn load_proposal(account: &AccountInfo) -> Result<Proposal> {
    require!(
        account.owner == &crate::ID && !account.data_is_empty(),
        VoteError::ProposalNotFound
    );

    let data = account.try_borrow_data()?;
    Proposal::try_deserialize(&mut &data[..]).map_err(|_| error!(VoteError::ProposalNotFound))
}

// Write a Proposal loaded with load_proposal back to its account
pub fn store_proposal(account: &AccountInfo, proposal: &Proposal) -> Result<()> {
    let mut data = account.try_borrow_mut_data()?;
    let mut writer: &mut [u8] = &mut data[..];
    proposal.try_serialize(&mut writer)
}
