use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{constants::*, errors::*, events::*, guard::*, helpers::*, state::*};

// Vote Instruction (wire name: proposal_to_vote)
//
// A registered voter stakes X tokens on an open proposal. Each call is
// exactly one vote; the stake is a participation deposit, not a weight.
//
// The proposal is taken as an UncheckedAccount and resolved through the
// guard so a missing proposal reports ProposalNotFound.

#[derive(Accounts)]
#[instruction(proposal_id: u64)]
pub struct Vote<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [VOTER, authority.key().as_ref()],
        bump = voter_account.bump,
    )]
    pub voter_account: Account<'info, Voter>,

    #[account(
        seeds = [TREASURY_CONFIG],
        bump = treasury_config.config_bump,
        has_one = x_mint @ VoteError::MintMismatch,
        has_one = treasury_token_account @ VoteError::InvalidTreasuryAccount,
    )]
    pub treasury_config: Box<Account<'info, TreasuryConfig>>,

    pub x_mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        constraint = voter_token_account.owner == authority.key() @ VoteError::UnauthorizedAccess,
        constraint = voter_token_account.mint == x_mint.key() @ VoteError::MintMismatch,
    )]
    pub voter_token_account: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub treasury_token_account: Box<Account<'info, TokenAccount>>,

    /// CHECK: resolved with guard::load_proposal
    #[account(
        mut,
        seeds = [PROPOSAL, proposal_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub proposal_account: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
}

impl<'info> Vote<'info> {
    pub fn proposal_to_vote(&mut self, proposal_id: u64, stake_amount: u64) -> Result<()> {
        // 1. One vote per registration (voter PDA is seeded by the signer)
        require!(!self.voter_account.has_voted(), VoteError::AlreadyVoted);

        // 2. Proposal exists and is open
        let mut proposal = load_proposal(&self.proposal_account)?;
        let now = Clock::get()?.unix_timestamp;
        proposal.assert_voting_open(now)?;

        // 3. Stake
        require!(stake_amount > 0, VoteError::InvalidStakeAmount);
        require!(
            self.voter_token_account.amount >= stake_amount,
            VoteError::InsufficientFunds
        );

        transfer_tokens(
            stake_amount,
            &self.token_program.to_account_info(),
            &self.voter_token_account.to_account_info(),
            &self.treasury_token_account.to_account_info(),
            &self.authority.to_account_info(),
        )?;

        proposal.record_vote(stake_amount)?;
        store_proposal(&self.proposal_account, &proposal)?;

        self.voter_account.proposal_voted = proposal_id;

        emit!(VoteCast {
            proposal_id,
            voter: self.authority.key(),
            stake_amount,
            number_of_votes: proposal.number_of_votes,
            timestamp: now,
        });

        msg!(
            "Vote cast on proposal {} by {} ({} votes)",
            proposal_id,
            self.authority.key(),
            proposal.number_of_votes
        );

        Ok(())
    }
}
