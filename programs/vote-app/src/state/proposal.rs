use anchor_lang::prelude::*;
use crate::{constants::MAX_PROPOSAL_INFO_LEN, errors::VoteError, phase::*};

// Monotonic proposal id sequence
// Singleton PDA: ["proposal_counter"]
#[account]
#[derive(InitSpace)]
pub struct ProposalCounter {
    pub authority: Pubkey,
    // Number of proposals ever registered, which is also the last id handed out
    pub count: u64,
    pub bump: u8,
}

impl ProposalCounter {
    // Id the next registered proposal will receive
    // Saturates so seed derivation never panics; advance() reports the overflow
    pub fn next_id(&self) -> u64 {
        self.count.saturating_add(1)
    }

    pub fn advance(&mut self) -> Result<u64> {
        let id = self
            .count
            .checked_add(1)
            .ok_or(VoteError::ProposalCounterOverflow)?;
        self.count = id;
        Ok(id)
    }
}

// Proposal account
// PDA: ["proposal", proposal_id (u64 LE)]
#[account]
#[derive(InitSpace)]
pub struct Proposal {
    pub proposal_id: u64,

    // Creator, the only key allowed to close the proposal
    pub authority: Pubkey,

    #[max_len(MAX_PROPOSAL_INFO_LEN)]
    pub proposal_info: String,

    // Unix timestamp; voting is open strictly before it
    pub deadline: i64,

    pub number_of_votes: u64,

    // Tokens staked by the creator at registration
    pub stake_amount: u64,

    // Creator stake plus every voter stake
    pub total_staked: u64,

    pub created_at: i64,
    pub bump: u8,
}

impl Proposal {
    pub fn phase(&self, now: i64) -> ProposalPhase {
        derive_phase(now, self.deadline)
    }

    pub fn assert_voting_open(&self, now: i64) -> Result<()> {
        require!(
            self.phase(now) == ProposalPhase::Open,
            VoteError::VotingClosed
        );
        Ok(())
    }

    pub fn assert_voting_ended(&self, now: i64) -> Result<()> {
        require!(
            self.phase(now) == ProposalPhase::Closed,
            VoteError::VotingStillActive
        );
        Ok(())
    }

    // One vote per call, whatever the stake
    pub fn record_vote(&mut self, stake_amount: u64) -> Result<()> {
        self.number_of_votes = self
            .number_of_votes
            .checked_add(1)
            .ok_or(VoteError::MathOverflow)?;
        self.total_staked = self
            .total_staked
            .checked_add(stake_amount)
            .ok_or(VoteError::MathOverflow)?;
        Ok(())
    }
}
