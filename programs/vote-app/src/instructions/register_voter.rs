use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, events::*, state::*};

// Register Voter Instruction
//
// Creates the caller's Voter PDA. init_if_needed so a repeat registration
// reports AlreadyRegistered.

#[derive(Accounts)]
pub struct RegisterVoter<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init_if_needed,
        payer = authority,
        space = ANCHOR_DISCRIMINATOR + Voter::INIT_SPACE,
        seeds = [VOTER, authority.key().as_ref()],
        bump,
    )]
    pub voter_account: Account<'info, Voter>,

    pub system_program: Program<'info, System>,
}

impl<'info> RegisterVoter<'info> {
    pub fn register_voter(&mut self, bumps: &RegisterVoterBumps) -> Result<()> {
        require!(
            !self.voter_account.is_registered(),
            VoteError::AlreadyRegistered
        );

        let now = Clock::get()?.unix_timestamp;

        self.voter_account.set_inner(Voter {
            voter_id: self.authority.key(),
            proposal_voted: 0,
            registered_at: now,
            bump: bumps.voter_account,
        });

        emit!(VoterRegistered {
            voter: self.authority.key(),
            timestamp: now,
        });

        msg!("Voter registered: {}", self.authority.key());

        Ok(())
    }
}
