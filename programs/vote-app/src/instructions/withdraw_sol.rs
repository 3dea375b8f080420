use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, events::*, helpers::*, state::*};

// Withdraw SOL Instruction
//
// Treasury authority pulls lamports out of the SOL vault. The vault keeps
// its rent-exempt minimum, so only the excess is withdrawable.

#[derive(Accounts)]
pub struct WithdrawSol<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [TREASURY_CONFIG],
        bump = treasury_config.config_bump,
    )]
    pub treasury_config: Box<Account<'info, TreasuryConfig>>,

    #[account(
        mut,
        seeds = [SOL_VAULT],
        bump = treasury_config.sol_vault_bump,
    )]
    pub sol_vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> WithdrawSol<'info> {
    pub fn withdraw_sol(&mut self, amount: u64) -> Result<()> {
        self.treasury_config.assert_is_authority(&self.authority.key())?;

        require!(amount > 0, VoteError::InvalidAmount);

        let available = withdrawable_lamports(&self.sol_vault.to_account_info())?;
        require!(amount <= available, VoteError::InsufficientVaultBalance);

        transfer_lamports_from_vault(
            amount,
            &self.system_program.to_account_info(),
            &self.sol_vault.to_account_info(),
            &self.authority.to_account_info(),
            &[SOL_VAULT, &[self.treasury_config.sol_vault_bump]],
        )?;

        self.treasury_config.record_withdrawal(amount)?;

        emit!(SolWithdrawn {
            authority: self.authority.key(),
            amount,
            timestamp: Clock::get()?.unix_timestamp,
        });

        msg!("Withdrew {} lamports to {}", amount, self.authority.key());

        Ok(())
    }
}
