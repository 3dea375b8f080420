use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{constants::*, errors::*, events::*, helpers::*, state::*};

// Initialize Treasury Instruction
//
// One-time setup of the token sale:
// - TreasuryConfig singleton (signer becomes authority)
// - X mint, minted only by the mint authority PDA
// - Treasury X token account (ATA of the config PDA) that receives stakes
// - ProposalCounter singleton starting at 0
// - SOL vault PDA, created rent-exempt
//
// init_if_needed lets a second call reach the handler and fail with
// AlreadyInitialized instead of a system program error.

#[derive(Accounts)]
pub struct InitializeTreasury<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init_if_needed,
        payer = authority,
        space = ANCHOR_DISCRIMINATOR + TreasuryConfig::INIT_SPACE,
        seeds = [TREASURY_CONFIG],
        bump,
    )]
    pub treasury_config: Box<Account<'info, TreasuryConfig>>,

    #[account(
        init_if_needed,
        payer = authority,
        seeds = [X_MINT],
        bump,
        mint::decimals = TOKEN_DECIMALS,
        mint::authority = mint_authority,
    )]
    pub x_mint: Box<Account<'info, Mint>>,

    #[account(
        init_if_needed,
        payer = authority,
        associated_token::mint = x_mint,
        associated_token::authority = treasury_config,
    )]
    pub treasury_token_account: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = authority,
        space = ANCHOR_DISCRIMINATOR + ProposalCounter::INIT_SPACE,
        seeds = [PROPOSAL_COUNTER],
        bump,
    )]
    pub proposal_counter: Account<'info, ProposalCounter>,

    // Lamport vault, created in the handler
    #[account(
        mut,
        seeds = [SOL_VAULT],
        bump,
    )]
    pub sol_vault: SystemAccount<'info>,

    /// CHECK: PDA signer for mint_to, holds no data
    #[account(
        seeds = [MINT_AUTHORITY],
        bump,
    )]
    pub mint_authority: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> InitializeTreasury<'info> {
    pub fn initialize_treasury(
        &mut self,
        sol_price: u64,
        tokens_per_purchase: u64,
        bumps: &InitializeTreasuryBumps,
    ) -> Result<()> {
        // 1. Create-once
        require!(
            !self.treasury_config.is_initialized(),
            VoteError::AlreadyInitialized
        );

        // 2. Non-zero sale terms
        require!(
            sol_price > 0 && tokens_per_purchase > 0,
            VoteError::InvalidPrice
        );

        // 3. Vault account (a pre-funded vault is already a valid system account)
        if self.sol_vault.lamports() == 0 {
            create_vault(
                &self.system_program.to_account_info(),
                &self.authority.to_account_info(),
                &self.sol_vault.to_account_info(),
                &[SOL_VAULT, &[bumps.sol_vault]],
            )?;
        }

        self.treasury_config.set_inner(TreasuryConfig {
            authority: self.authority.key(),
            sol_price,
            tokens_per_purchase,
            x_mint: self.x_mint.key(),
            treasury_token_account: self.treasury_token_account.key(),
            sol_vault: self.sol_vault.key(),
            mint_authority: self.mint_authority.key(),
            total_tokens_sold: 0,
            total_sol_received: 0,
            total_sol_withdrawn: 0,
            config_bump: bumps.treasury_config,
            sol_vault_bump: bumps.sol_vault,
            mint_authority_bump: bumps.mint_authority,
        });

        self.proposal_counter.set_inner(ProposalCounter {
            authority: self.authority.key(),
            count: 0,
            bump: bumps.proposal_counter,
        });

        emit!(TreasuryInitialized {
            authority: self.authority.key(),
            x_mint: self.x_mint.key(),
            sol_price,
            tokens_per_purchase,
            timestamp: Clock::get()?.unix_timestamp,
        });

        msg!("Treasury initialized by {}", self.authority.key());
        msg!(
            "Price: {} lamports per {} tokens",
            sol_price,
            tokens_per_purchase
        );

        Ok(())
    }
}
