use anchor_lang::prelude::*;

use crate::{constants::*, events::*, guard::*, state::*};

// Close Proposal Instruction
//
// Creator closes a proposal after its deadline; rent goes to `destination`.
// Staked tokens stay in the treasury.

#[derive(Accounts)]
#[instruction(proposal_id: u64)]
pub struct CloseProposal<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [PROPOSAL, proposal_id.to_le_bytes().as_ref()],
        bump = proposal_account.bump,
        close = destination,
    )]
    pub proposal_account: Account<'info, Proposal>,

    /// CHECK: only receives the reclaimed rent
    #[account(mut)]
    pub destination: UncheckedAccount<'info>,
}

impl<'info> CloseProposal<'info> {
    pub fn close_proposal(&mut self, proposal_id: u64) -> Result<()> {
        assert_authority(&self.proposal_account.authority, &self.authority.key())?;

        let now = Clock::get()?.unix_timestamp;
        self.proposal_account.assert_voting_ended(now)?;

        emit!(ProposalClosed {
            proposal_id,
            rent_recovered_to: self.destination.key(),
            timestamp: now,
        });

        msg!(
            "Proposal {} closed, rent sent to {}",
            proposal_id,
            self.destination.key()
        );

        Ok(())
    }
}
