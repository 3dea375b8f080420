use anchor_lang::prelude::*;

use crate::{constants::*, events::*, state::*};

// Close Voter Instruction
//
// Voter closes their own registration; rent goes back to them. The PDA is
// derived from the signer, so only the owner can address it.

#[derive(Accounts)]
pub struct CloseVoter<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [VOTER, authority.key().as_ref()],
        bump = voter_account.bump,
        close = authority,
    )]
    pub voter_account: Account<'info, Voter>,
}

impl<'info> CloseVoter<'info> {
    pub fn close_voter(&mut self) -> Result<()> {
        emit!(VoterAccountClosed {
            voter: self.voter_account.voter_id,
            rent_recovered_to: self.authority.key(),
            timestamp: Clock::get()?.unix_timestamp,
        });

        msg!("Voter account closed: {}", self.voter_account.voter_id);

        Ok(())
    }
}
