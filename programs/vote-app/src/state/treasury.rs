use anchor_lang::prelude::*;
use crate::{errors::VoteError, guard::assert_authority};

// Treasury configuration
// Singleton PDA: ["treasury_config"]
// Owns the token sale parameters and remembers every derived treasury address
#[account]
#[derive(InitSpace)]
pub struct TreasuryConfig {
    // Signer of initialize_treasury; the only key allowed to withdraw and pick winners
    pub authority: Pubkey,

    // Lamports charged per buy_tokens call
    pub sol_price: u64,

    // Raw X token units (6 decimals) minted per buy_tokens call
    pub tokens_per_purchase: u64,

    pub x_mint: Pubkey,

    // Treasury's own X token account, receives every stake
    pub treasury_token_account: Pubkey,

    pub sol_vault: Pubkey,
    pub mint_authority: Pubkey,

    // Sale accounting
    pub total_tokens_sold: u64,
    pub total_sol_received: u64,
    pub total_sol_withdrawn: u64,

    pub config_bump: u8,
    pub sol_vault_bump: u8,
    pub mint_authority_bump: u8,
}

impl TreasuryConfig {
    pub fn is_initialized(&self) -> bool {
        self.authority != Pubkey::default()
    }

    pub fn assert_is_authority(&self, caller: &Pubkey) -> Result<()> {
        assert_authority(&self.authority, caller)
    }

    pub fn record_sale(&mut self) -> Result<()> {
        self.total_tokens_sold = self
            .total_tokens_sold
            .checked_add(self.tokens_per_purchase)
            .ok_or(VoteError::MathOverflow)?;
        self.total_sol_received = self
            .total_sol_received
            .checked_add(self.sol_price)
            .ok_or(VoteError::MathOverflow)?;
        Ok(())
    }

    pub fn record_withdrawal(&mut self, amount: u64) -> Result<()> {
        self.total_sol_withdrawn = self
            .total_sol_withdrawn
            .checked_add(amount)
            .ok_or(VoteError::MathOverflow)?;
        Ok(())
    }
}
