use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{constants::*, errors::*, events::*, helpers::*, phase::*, state::*};

// Register Proposal Instruction
//
// Creator stakes X tokens into the treasury token account and opens a
// proposal until `deadline`. The proposal takes the next counter id.
//
// Checks:
// 1. Deadline strictly in the future
// 2. Description length
// 3. Non-zero stake the creator can cover

#[derive(Accounts)]
pub struct RegisterProposal<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        seeds = [TREASURY_CONFIG],
        bump = treasury_config.config_bump,
        has_one = x_mint @ VoteError::MintMismatch,
        has_one = treasury_token_account @ VoteError::InvalidTreasuryAccount,
    )]
    pub treasury_config: Box<Account<'info, TreasuryConfig>>,

    #[account(
        mut,
        seeds = [PROPOSAL_COUNTER],
        bump = proposal_counter.bump,
    )]
    pub proposal_counter: Account<'info, ProposalCounter>,

    #[account(
        init,
        payer = authority,
        space = ANCHOR_DISCRIMINATOR + Proposal::INIT_SPACE,
        seeds = [PROPOSAL, proposal_counter.next_id().to_le_bytes().as_ref()],
        bump,
    )]
    pub proposal_account: Box<Account<'info, Proposal>>,

    pub x_mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        constraint = proposer_token_account.owner == authority.key() @ VoteError::UnauthorizedAccess,
        constraint = proposer_token_account.mint == x_mint.key() @ VoteError::MintMismatch,
    )]
    pub proposer_token_account: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub treasury_token_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> RegisterProposal<'info> {
    pub fn register_proposal(
        &mut self,
        proposal_info: String,
        deadline: i64,
        stake_amount: u64,
        bumps: &RegisterProposalBumps,
    ) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;

        // 1. A proposal must start out open
        require!(
            derive_phase(now, deadline) == ProposalPhase::Open,
            VoteError::InvalidDeadline
        );

        // 2. Description
        require!(
            !proposal_info.is_empty() && proposal_info.len() <= MAX_PROPOSAL_INFO_LEN,
            VoteError::InvalidProposalInfo
        );

        // 3. Stake
        require!(stake_amount > 0, VoteError::InvalidStakeAmount);
        require!(
            self.proposer_token_account.amount >= stake_amount,
            VoteError::InsufficientFunds
        );

        transfer_tokens(
            stake_amount,
            &self.token_program.to_account_info(),
            &self.proposer_token_account.to_account_info(),
            &self.treasury_token_account.to_account_info(),
            &self.authority.to_account_info(),
        )?;

        let proposal_id = self.proposal_counter.advance()?;

        self.proposal_account.set_inner(Proposal {
            proposal_id,
            authority: self.authority.key(),
            proposal_info: proposal_info.clone(),
            deadline,
            number_of_votes: 0,
            stake_amount,
            total_staked: stake_amount,
            created_at: now,
            bump: bumps.proposal_account,
        });

        emit!(ProposalCreated {
            proposal_id,
            creator: self.authority.key(),
            proposal_info,
            deadline,
            stake_amount,
            timestamp: now,
        });

        msg!(
            "Proposal {} registered by {}, deadline {}",
            proposal_id,
            self.authority.key(),
            deadline
        );

        Ok(())
    }
}
