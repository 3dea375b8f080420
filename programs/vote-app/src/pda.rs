// Deterministic address derivation
//
// Every program-owned account lives at a PDA built from a fixed seed label,
// optional discriminators and the program id. The account constraints use the
// same labels from constants; these functions let any client recompute an
// address without a lookup.

use anchor_lang::prelude::*;
use anchor_spl::associated_token::get_associated_token_address;

use crate::constants::*;

// (address, bump) for `label` followed by `discriminators`
pub fn derive_address(label: &[u8], discriminators: &[&[u8]]) -> (Pubkey, u8) {
    let mut seeds: Vec<&[u8]> = Vec::with_capacity(discriminators.len() + 1);
    seeds.push(label);
    seeds.extend_from_slice(discriminators);
    Pubkey::find_program_address(&seeds, &crate::ID)
}

pub fn treasury_config_address() -> (Pubkey, u8) {
    derive_address(TREASURY_CONFIG, &[])
}

pub fn x_mint_address() -> (Pubkey, u8) {
    derive_address(X_MINT, &[])
}

pub fn sol_vault_address() -> (Pubkey, u8) {
    derive_address(SOL_VAULT, &[])
}

pub fn mint_authority_address() -> (Pubkey, u8) {
    derive_address(MINT_AUTHORITY, &[])
}

pub fn proposal_counter_address() -> (Pubkey, u8) {
    derive_address(PROPOSAL_COUNTER, &[])
}

pub fn winner_address() -> (Pubkey, u8) {
    derive_address(WINNER, &[])
}

pub fn voter_address(voter: &Pubkey) -> (Pubkey, u8) {
    derive_address(VOTER, &[voter.as_ref()])
}

pub fn proposal_address(proposal_id: u64) -> (Pubkey, u8) {
    derive_address(PROPOSAL, &[&proposal_id.to_le_bytes()])
}

// Treasury X token account: the treasury config PDA's associated token account
pub fn treasury_token_account_address() -> Pubkey {
    get_associated_token_address(&treasury_config_address().0, &x_mint_address().0)
}

// A holder's X token account
pub fn holder_token_account_address(holder: &Pubkey) -> Pubkey {
    get_associated_token_address(holder, &x_mint_address().0)
}
