use anchor_lang::prelude::*;

// Voter registration
// PDA: ["voter", voter_id]
// Closing the account drops its vote history
#[account]
#[derive(InitSpace)]
pub struct Voter {
    pub voter_id: Pubkey,
    // Proposal this voter backed, 0 until the first vote
    pub proposal_voted: u64,
    pub registered_at: i64,
    pub bump: u8,
}

impl Voter {
    pub fn is_registered(&self) -> bool {
        self.voter_id != Pubkey::default()
    }

    pub fn has_voted(&self) -> bool {
        self.proposal_voted != 0
    }
}
