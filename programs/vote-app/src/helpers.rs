// Token vault adapter
//
// Thin CPI wrappers over the SPL Token and System programs. Instructions
// never build CPI contexts themselves; they go through these helpers.

use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, CreateAccount, Transfer as SystemTransfer};
use anchor_spl::token::{self, MintTo, Transfer};

// TOKEN HELPERS

// Move X tokens out of a holder-signed account (stake deposits)
pub fn transfer_tokens<'info>(
    amount: u64,
    token_program: &AccountInfo<'info>,
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    authority: &AccountInfo<'info>,
) -> Result<()> {
    token::transfer(
        CpiContext::new(
            token_program.clone(),
            Transfer {
                from: from.clone(),
                to: to.clone(),
                authority: authority.clone(),
            },
        ),
        amount,
    )
}

// Mint fresh X tokens, signed by the mint authority PDA
pub fn mint_tokens<'info>(
    amount: u64,
    token_program: &AccountInfo<'info>,
    mint: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    authority: &AccountInfo<'info>,
    authority_seeds: &[&[u8]],
) -> Result<()> {
    let signer_seeds = &[authority_seeds];

    token::mint_to(
        CpiContext::new_with_signer(
            token_program.clone(),
            MintTo {
                mint: mint.clone(),
                to: to.clone(),
                authority: authority.clone(),
            },
            signer_seeds,
        ),
        amount,
    )
}

// LAMPORT HELPERS

// Pay lamports from a signing wallet
pub fn transfer_lamports<'info>(
    amount: u64,
    system_program: &AccountInfo<'info>,
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
) -> Result<()> {
    system_program::transfer(
        CpiContext::new(
            system_program.clone(),
            SystemTransfer {
                from: from.clone(),
                to: to.clone(),
            },
        ),
        amount,
    )
}

// Pay lamports out of the SOL vault PDA
pub fn transfer_lamports_from_vault<'info>(
    amount: u64,
    system_program: &AccountInfo<'info>,
    vault: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    vault_seeds: &[&[u8]],
) -> Result<()> {
    let signer_seeds = &[vault_seeds];

    system_program::transfer(
        CpiContext::new_with_signer(
            system_program.clone(),
            SystemTransfer {
                from: vault.clone(),
                to: to.clone(),
            },
            signer_seeds,
        ),
        amount,
    )
}

// Create the SOL vault as a zero-data, system-owned, rent-exempt account
pub fn create_vault<'info>(
    system_program: &AccountInfo<'info>,
    payer: &AccountInfo<'info>,
    vault: &AccountInfo<'info>,
    vault_seeds: &[&[u8]],
) -> Result<()> {
    let signer_seeds = &[vault_seeds];
    let min_rent = Rent::get()?.minimum_balance(0);

    system_program::create_account(
        CpiContext::new_with_signer(
            system_program.clone(),
            CreateAccount {
                from: payer.clone(),
                to: vault.clone(),
            },
            signer_seeds,
        ),
        min_rent,
        0,
        &system_program::ID,
    )
}

// Lamports the vault can pay out while staying rent-exempt
pub fn withdrawable_lamports(vault: &AccountInfo) -> Result<u64> {
    let min_rent = Rent::get()?.minimum_balance(0);
    Ok(vault.lamports().saturating_sub(min_rent))
}
