// Vote App Program
//
// Staked, deadline-bounded proposal voting funded by a treasury that sells
// the X governance token for SOL.
//
// Instructions:
// - initialize_treasury: One-time setup of config, mint, vault and counter
// - buy_tokens: Pay SOL into the vault, receive freshly minted X tokens
// - withdrawl_sol: Authority withdraws SOL from the vault
// - register_voter / close_voter: Voter registration lifecycle
// - register_proposal: Stake X tokens and open a proposal until its deadline
// - proposal_to_vote: Stake X tokens for one vote on an open proposal
// - pick_winner: Authority records a finished proposal's tally
// - close_proposal: Creator reclaims rent after the deadline

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod guard;
pub mod helpers;
pub mod instructions;
pub mod pda;
pub mod phase;
pub mod state;

use instructions::*;

declare_id!("BEHV6ieq6ByUUbGraJThrA17zYrdBN5aPydfQe3F11PC");

#[program]
pub mod vote_app {
    use super::*;

    pub fn initialize_treasury(
        ctx: Context<InitializeTreasury>,
        sol_price: u64,
        tokens_per_purchase: u64,
    ) -> Result<()> {
        ctx.accounts.initialize_treasury(sol_price, tokens_per_purchase, &ctx.bumps)
    }

    pub fn buy_tokens(ctx: Context<BuyTokens>) -> Result<()> {
        ctx.accounts.buy_tokens()
    }

    pub fn withdrawl_sol(ctx: Context<WithdrawSol>, amount: u64) -> Result<()> {
        ctx.accounts.withdraw_sol(amount)
    }

    pub fn register_voter(ctx: Context<RegisterVoter>) -> Result<()> {
        ctx.accounts.register_voter(&ctx.bumps)
    }

    pub fn close_voter(ctx: Context<CloseVoter>) -> Result<()> {
        ctx.accounts.close_voter()
    }

    pub fn register_proposal(
        ctx: Context<RegisterProposal>,
        proposal_info: String,
        deadline: i64,
        stake_amount: u64,
    ) -> Result<()> {
        ctx.accounts.register_proposal(proposal_info, deadline, stake_amount, &ctx.bumps)
    }

    pub fn proposal_to_vote(
        ctx: Context<Vote>,
        proposal_id: u64,
        stake_amount: u64,
    ) -> Result<()> {
        ctx.accounts.proposal_to_vote(proposal_id, stake_amount)
    }

    pub fn pick_winner(ctx: Context<PickWinner>, proposal_id: u64) -> Result<()> {
        ctx.accounts.pick_winner(proposal_id, &ctx.bumps)
    }

    pub fn close_proposal(ctx: Context<CloseProposal>, proposal_id: u64) -> Result<()> {
        ctx.accounts.close_proposal(proposal_id)
    }
}
