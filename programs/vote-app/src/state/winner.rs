use anchor_lang::prelude::*;

use crate::constants::MAX_PROPOSAL_INFO_LEN;

// Result of the most recently resolved proposal
// Singleton PDA: ["winner"], fully overwritten by pick_winner
#[account]
#[derive(InitSpace)]
pub struct Winner {
    pub winning_proposal_id: u64,
    pub winning_votes: u64,
    #[max_len(MAX_PROPOSAL_INFO_LEN)]
    pub proposal_info: String,
    pub declared_at: i64,
    pub bump: u8,
}
