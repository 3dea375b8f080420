use anchor_lang::prelude::*;

use crate::{constants::*, events::*, guard::*, state::*};

// Pick Winner Instruction
//
// Treasury authority finalizes one proposal's tally once its deadline has
// passed. The Winner singleton is overwritten with that proposal's result;
// no comparison against other proposals is made.

#[derive(Accounts)]
#[instruction(proposal_id: u64)]
pub struct PickWinner<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        seeds = [TREASURY_CONFIG],
        bump = treasury_config.config_bump,
    )]
    pub treasury_config: Box<Account<'info, TreasuryConfig>>,

    #[account(
        init_if_needed,
        payer = authority,
        space = ANCHOR_DISCRIMINATOR + Winner::INIT_SPACE,
        seeds = [WINNER],
        bump,
    )]
    pub winner_account: Account<'info, Winner>,

    /// CHECK: resolved with guard::load_proposal
    #[account(
        seeds = [PROPOSAL, proposal_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub proposal_account: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> PickWinner<'info> {
    pub fn pick_winner(&mut self, proposal_id: u64, bumps: &PickWinnerBumps) -> Result<()> {
        self.treasury_config.assert_is_authority(&self.authority.key())?;

        let proposal = load_proposal(&self.proposal_account)?;
        let now = Clock::get()?.unix_timestamp;
        proposal.assert_voting_ended(now)?;

        self.winner_account.set_inner(Winner {
            winning_proposal_id: proposal_id,
            winning_votes: proposal.number_of_votes,
            proposal_info: proposal.proposal_info,
            declared_at: now,
            bump: bumps.winner_account,
        });

        emit!(WinnerDeclared {
            proposal_id,
            winning_votes: proposal.number_of_votes,
            timestamp: now,
        });

        msg!(
            "Winner declared: proposal {} with {} votes",
            proposal_id,
            proposal.number_of_votes
        );

        Ok(())
    }
}
