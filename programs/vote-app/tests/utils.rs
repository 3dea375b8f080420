// Test utilities for the vote app program

#![allow(dead_code)]

use anchor_lang::AccountDeserialize;
use litesvm::LiteSVM;
use litesvm_token::get_spl_account;
use sha2::{Digest, Sha256};
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    transaction::Transaction,
};
use vote_app::state::{Proposal, ProposalCounter, TreasuryConfig, Voter, Winner};

// Program ID matching declare_id!
pub const VOTE_APP_PROGRAM_ID: Pubkey = Pubkey::new_from_array(vote_app::ID.to_bytes());

// Standard program IDs
pub const TOKEN_PROGRAM_ID: Pubkey = spl_token::ID;
pub const ASSOCIATED_TOKEN_PROGRAM_ID: Pubkey = spl_associated_token_account::ID;
use solana_system_interface::program::ID as system_program;

// Sale parameters used by most tests (1 SOL buys 1_000 X tokens)
pub const SOL_PRICE: u64 = 1_000_000_000;
pub const TOKENS_PER_PURCHASE: u64 = 1_000_000_000;

// Ledger time the SVM starts at
pub const START_TIME: i64 = 1_700_000_000;

// ======================== HELPERS ========================

/// Build Anchor instruction discriminator (first 8 bytes of sha256("global:method_name"))
pub fn anchor_discriminator(method: &str) -> [u8; 8] {
    let preimage = format!("global:{}", method);
    let hash = Sha256::digest(preimage.as_bytes());
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&hash[..8]);
    discriminator
}

// Program-side keys and client-side keys are distinct types; both are 32 bytes
pub fn to_sdk(key: anchor_lang::prelude::Pubkey) -> Pubkey {
    Pubkey::new_from_array(key.to_bytes())
}

pub fn to_program(key: &Pubkey) -> anchor_lang::prelude::Pubkey {
    anchor_lang::prelude::Pubkey::new_from_array(key.to_bytes())
}

// Setup LiteSVM with the vote app program and a fixed clock
pub fn setup_svm() -> LiteSVM {
    let mut svm = LiteSVM::new();
    let program_bytes = include_bytes!("../../../target/deploy/vote_app.so");
    svm.add_program(VOTE_APP_PROGRAM_ID, program_bytes);

    let mut clock: solana_sdk::clock::Clock = svm.get_sysvar();
    clock.unix_timestamp = START_TIME;
    svm.set_sysvar(&clock);
    svm
}

// Create and fund account
pub fn create_funded_account(svm: &mut LiteSVM, lamports: u64) -> Keypair {
    let keypair = Keypair::new();
    svm.airdrop(&keypair.pubkey(), lamports)
        .expect("Airdrop should succeed");
    keypair
}

// Advance the SVM clock by the specified number of seconds
pub fn advance_time(svm: &mut LiteSVM, seconds: u64) {
    let mut clock: solana_sdk::clock::Clock = svm.get_sysvar();
    clock.unix_timestamp += seconds as i64;
    svm.set_sysvar(&clock);

    let current_slot = clock.slot;
    svm.warp_to_slot(current_slot + (seconds * 2) + 5);
}

pub fn now(svm: &LiteSVM) -> i64 {
    let clock: solana_sdk::clock::Clock = svm.get_sysvar();
    clock.unix_timestamp
}

// Send a transaction and expect success
// A fresh blockhash keeps repeated identical instructions from being deduplicated
pub fn send_tx_expect_success(
    svm: &mut LiteSVM,
    ix: Instruction,
    payer: &Keypair,
    signers: &[&Keypair],
) {
    svm.expire_blockhash();
    let tx = Transaction::new_signed_with_payer(
        &[ix],
        Some(&payer.pubkey()),
        signers,
        svm.latest_blockhash(),
    );

    if let Err(e) = svm.send_transaction(tx) {
        panic!("Transaction should succeed, got: {:?}", e);
    }
}

// Send a transaction and expect failure, returning the debug-formatted error
pub fn send_tx_expect_failure(
    svm: &mut LiteSVM,
    ix: Instruction,
    payer: &Keypair,
    signers: &[&Keypair],
) -> String {
    svm.expire_blockhash();
    let tx = Transaction::new_signed_with_payer(
        &[ix],
        Some(&payer.pubkey()),
        signers,
        svm.latest_blockhash(),
    );

    let result = svm.send_transaction(tx);
    assert!(result.is_err(), "Transaction should have failed");
    format!("{:?}", result.err().unwrap())
}

// ======================== ADDRESSES ========================
// All derived through vote_app::pda, the same derivation the program's seeds describe

pub fn treasury_config_pda() -> Pubkey {
    to_sdk(vote_app::pda::treasury_config_address().0)
}

pub fn x_mint_pda() -> Pubkey {
    to_sdk(vote_app::pda::x_mint_address().0)
}

pub fn sol_vault_pda() -> Pubkey {
    to_sdk(vote_app::pda::sol_vault_address().0)
}

pub fn mint_authority_pda() -> Pubkey {
    to_sdk(vote_app::pda::mint_authority_address().0)
}

pub fn proposal_counter_pda() -> Pubkey {
    to_sdk(vote_app::pda::proposal_counter_address().0)
}

pub fn winner_pda() -> Pubkey {
    to_sdk(vote_app::pda::winner_address().0)
}

pub fn voter_pda(voter: &Pubkey) -> Pubkey {
    to_sdk(vote_app::pda::voter_address(&to_program(voter)).0)
}

pub fn proposal_pda(proposal_id: u64) -> Pubkey {
    to_sdk(vote_app::pda::proposal_address(proposal_id).0)
}

pub fn treasury_token_account() -> Pubkey {
    to_sdk(vote_app::pda::treasury_token_account_address())
}

pub fn holder_token_account(holder: &Pubkey) -> Pubkey {
    to_sdk(vote_app::pda::holder_token_account_address(&to_program(holder)))
}

// ======================== ACCOUNT READERS ========================

fn read_account<T: AccountDeserialize>(svm: &LiteSVM, address: &Pubkey) -> T {
    let account = svm.get_account(address).expect("Account should exist");
    T::try_deserialize(&mut account.data.as_slice()).expect("Account should deserialize")
}

pub fn read_treasury_config(svm: &LiteSVM) -> TreasuryConfig {
    read_account(svm, &treasury_config_pda())
}

pub fn read_proposal_counter(svm: &LiteSVM) -> ProposalCounter {
    read_account(svm, &proposal_counter_pda())
}

pub fn read_voter(svm: &LiteSVM, voter: &Pubkey) -> Voter {
    read_account(svm, &voter_pda(voter))
}

pub fn read_proposal(svm: &LiteSVM, proposal_id: u64) -> Proposal {
    read_account(svm, &proposal_pda(proposal_id))
}

pub fn read_winner(svm: &LiteSVM) -> Winner {
    read_account(svm, &winner_pda())
}

pub fn token_balance(svm: &LiteSVM, token_account: &Pubkey) -> u64 {
    let account: spl_token::state::Account =
        get_spl_account(svm, token_account).expect("Token account should exist");
    account.amount
}

pub fn lamports(svm: &LiteSVM, address: &Pubkey) -> u64 {
    svm.get_account(address).map(|a| a.lamports).unwrap_or(0)
}

pub fn is_closed(svm: &LiteSVM, address: &Pubkey) -> bool {
    match svm.get_account(address) {
        Some(account) => account.data.is_empty() && account.lamports == 0,
        None => true,
    }
}

// ======================== INSTRUCTION BUILDERS ========================

// Build initialize_treasury instruction
pub fn build_initialize_treasury_ix(
    authority: &Pubkey,
    sol_price: u64,
    tokens_per_purchase: u64,
) -> Instruction {
    let mut data = anchor_discriminator("initialize_treasury").to_vec();
    data.extend_from_slice(&sol_price.to_le_bytes());
    data.extend_from_slice(&tokens_per_purchase.to_le_bytes());

    Instruction {
        program_id: VOTE_APP_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*authority, true),
            AccountMeta::new(treasury_config_pda(), false),
            AccountMeta::new(x_mint_pda(), false),
            AccountMeta::new(treasury_token_account(), false),
            AccountMeta::new(proposal_counter_pda(), false),
            AccountMeta::new(sol_vault_pda(), false),
            AccountMeta::new_readonly(mint_authority_pda(), false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(ASSOCIATED_TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

// Build buy_tokens instruction
pub fn build_buy_tokens_ix(buyer: &Pubkey) -> Instruction {
    Instruction {
        program_id: VOTE_APP_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*buyer, true),
            AccountMeta::new(treasury_config_pda(), false),
            AccountMeta::new(sol_vault_pda(), false),
            AccountMeta::new(x_mint_pda(), false),
            AccountMeta::new_readonly(mint_authority_pda(), false),
            AccountMeta::new(holder_token_account(buyer), false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(ASSOCIATED_TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data: anchor_discriminator("buy_tokens").to_vec(),
    }
}

// Build withdrawl_sol instruction
pub fn build_withdraw_sol_ix(authority: &Pubkey, amount: u64) -> Instruction {
    let mut data = anchor_discriminator("withdrawl_sol").to_vec();
    data.extend_from_slice(&amount.to_le_bytes());

    Instruction {
        program_id: VOTE_APP_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*authority, true),
            AccountMeta::new(treasury_config_pda(), false),
            AccountMeta::new(sol_vault_pda(), false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

// Build register_voter instruction
pub fn build_register_voter_ix(voter: &Pubkey) -> Instruction {
    Instruction {
        program_id: VOTE_APP_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*voter, true),
            AccountMeta::new(voter_pda(voter), false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data: anchor_discriminator("register_voter").to_vec(),
    }
}

// Build close_voter instruction
pub fn build_close_voter_ix(voter: &Pubkey) -> Instruction {
    Instruction {
        program_id: VOTE_APP_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*voter, true),
            AccountMeta::new(voter_pda(voter), false),
        ],
        data: anchor_discriminator("close_voter").to_vec(),
    }
}

// Build register_proposal instruction
// `proposal_id` is the id the counter will hand out (count + 1)
pub fn build_register_proposal_ix(
    creator: &Pubkey,
    proposal_id: u64,
    proposal_info: &str,
    deadline: i64,
    stake_amount: u64,
) -> Instruction {
    let mut data = anchor_discriminator("register_proposal").to_vec();
    // Borsh serialization: len (4 bytes) + string bytes
    data.extend_from_slice(&(proposal_info.len() as u32).to_le_bytes());
    data.extend_from_slice(proposal_info.as_bytes());
    data.extend_from_slice(&deadline.to_le_bytes());
    data.extend_from_slice(&stake_amount.to_le_bytes());

    Instruction {
        program_id: VOTE_APP_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*creator, true),
            AccountMeta::new_readonly(treasury_config_pda(), false),
            AccountMeta::new(proposal_counter_pda(), false),
            AccountMeta::new(proposal_pda(proposal_id), false),
            AccountMeta::new_readonly(x_mint_pda(), false),
            AccountMeta::new(holder_token_account(creator), false),
            AccountMeta::new(treasury_token_account(), false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

// Build proposal_to_vote instruction
pub fn build_vote_ix(voter: &Pubkey, proposal_id: u64, stake_amount: u64) -> Instruction {
    let mut data = anchor_discriminator("proposal_to_vote").to_vec();
    data.extend_from_slice(&proposal_id.to_le_bytes());
    data.extend_from_slice(&stake_amount.to_le_bytes());

    Instruction {
        program_id: VOTE_APP_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*voter, true),
            AccountMeta::new(voter_pda(voter), false),
            AccountMeta::new_readonly(treasury_config_pda(), false),
            AccountMeta::new_readonly(x_mint_pda(), false),
            AccountMeta::new(holder_token_account(voter), false),
            AccountMeta::new(treasury_token_account(), false),
            AccountMeta::new(proposal_pda(proposal_id), false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        ],
        data,
    }
}

// Build pick_winner instruction
pub fn build_pick_winner_ix(authority: &Pubkey, proposal_id: u64) -> Instruction {
    let mut data = anchor_discriminator("pick_winner").to_vec();
    data.extend_from_slice(&proposal_id.to_le_bytes());

    Instruction {
        program_id: VOTE_APP_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*authority, true),
            AccountMeta::new_readonly(treasury_config_pda(), false),
            AccountMeta::new(winner_pda(), false),
            AccountMeta::new_readonly(proposal_pda(proposal_id), false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

// Build close_proposal instruction
pub fn build_close_proposal_ix(
    creator: &Pubkey,
    proposal_id: u64,
    destination: &Pubkey,
) -> Instruction {
    let mut data = anchor_discriminator("close_proposal").to_vec();
    data.extend_from_slice(&proposal_id.to_le_bytes());

    Instruction {
        program_id: VOTE_APP_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*creator, true),
            AccountMeta::new(proposal_pda(proposal_id), false),
            AccountMeta::new(*destination, false),
        ],
        data,
    }
}

// ======================== FLOW HELPERS ========================

// Initialize the treasury with the default sale parameters
pub fn initialize_treasury(svm: &mut LiteSVM, authority: &Keypair) {
    let ix = build_initialize_treasury_ix(&authority.pubkey(), SOL_PRICE, TOKENS_PER_PURCHASE);
    send_tx_expect_success(svm, ix, authority, &[authority]);
}

pub fn buy_tokens(svm: &mut LiteSVM, buyer: &Keypair) {
    let ix = build_buy_tokens_ix(&buyer.pubkey());
    send_tx_expect_success(svm, ix, buyer, &[buyer]);
}

pub fn register_voter(svm: &mut LiteSVM, voter: &Keypair) {
    let ix = build_register_voter_ix(&voter.pubkey());
    send_tx_expect_success(svm, ix, voter, &[voter]);
}

// Register a proposal and return the id it received
pub fn register_proposal(
    svm: &mut LiteSVM,
    creator: &Keypair,
    proposal_info: &str,
    deadline: i64,
    stake_amount: u64,
) -> u64 {
    let proposal_id = read_proposal_counter(svm).count + 1;
    let ix = build_register_proposal_ix(
        &creator.pubkey(),
        proposal_id,
        proposal_info,
        deadline,
        stake_amount,
    );
    send_tx_expect_success(svm, ix, creator, &[creator]);
    proposal_id
}
