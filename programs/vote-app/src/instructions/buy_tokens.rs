use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{constants::*, errors::*, events::*, helpers::*, state::*};

// Buy Tokens Instruction
//
// Buyer pays sol_price lamports into the vault and receives
// tokens_per_purchase freshly minted X tokens. Both legs run in the same
// instruction, so either both land or neither does.

#[derive(Accounts)]
pub struct BuyTokens<'info> {
    #[account(mut)]
    pub buyer: Signer<'info>,

    #[account(
        mut,
        seeds = [TREASURY_CONFIG],
        bump = treasury_config.config_bump,
        has_one = x_mint @ VoteError::MintMismatch,
    )]
    pub treasury_config: Box<Account<'info, TreasuryConfig>>,

    #[account(
        mut,
        seeds = [SOL_VAULT],
        bump = treasury_config.sol_vault_bump,
    )]
    pub sol_vault: SystemAccount<'info>,

    #[account(mut)]
    pub x_mint: Box<Account<'info, Mint>>,

    /// CHECK: PDA signer for mint_to, holds no data
    #[account(
        seeds = [MINT_AUTHORITY],
        bump = treasury_config.mint_authority_bump,
    )]
    pub mint_authority: UncheckedAccount<'info>,

    // Created on the first purchase, paid by the buyer
    #[account(
        init_if_needed,
        payer = buyer,
        associated_token::mint = x_mint,
        associated_token::authority = buyer,
    )]
    pub buyer_token_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> BuyTokens<'info> {
    pub fn buy_tokens(&mut self) -> Result<()> {
        let sol_price = self.treasury_config.sol_price;
        let tokens_per_purchase = self.treasury_config.tokens_per_purchase;

        require!(
            self.buyer.lamports() >= sol_price,
            VoteError::InsufficientFunds
        );

        // 1. Lamports: buyer -> vault
        transfer_lamports(
            sol_price,
            &self.system_program.to_account_info(),
            &self.buyer.to_account_info(),
            &self.sol_vault.to_account_info(),
        )?;

        // 2. Tokens: mint -> buyer
        mint_tokens(
            tokens_per_purchase,
            &self.token_program.to_account_info(),
            &self.x_mint.to_account_info(),
            &self.buyer_token_account.to_account_info(),
            &self.mint_authority.to_account_info(),
            &[MINT_AUTHORITY, &[self.treasury_config.mint_authority_bump]],
        )?;

        self.treasury_config.record_sale()?;

        emit!(TokensPurchased {
            buyer: self.buyer.key(),
            sol_paid: sol_price,
            tokens_minted: tokens_per_purchase,
            timestamp: Clock::get()?.unix_timestamp,
        });

        msg!(
            "Sold {} tokens to {} for {} lamports",
            tokens_per_purchase,
            self.buyer.key(),
            sol_price
        );

        Ok(())
    }
}
