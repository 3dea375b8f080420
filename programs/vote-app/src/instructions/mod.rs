// Instructions module
// - initialize_treasury
// - buy_tokens
// - withdraw_sol (wire name: withdrawl_sol)
// - register_voter
// - close_voter
// - register_proposal
// - vote (wire name: proposal_to_vote)
// - pick_winner
// - close_proposal

pub mod buy_tokens;
pub mod close_proposal;
pub mod close_voter;
pub mod initialize_treasury;
pub mod pick_winner;
pub mod register_proposal;
pub mod register_voter;
pub mod vote;
pub mod withdraw_sol;

pub use buy_tokens::*;
pub use close_proposal::*;
pub use close_voter::*;
pub use initialize_treasury::*;
pub use pick_winner::*;
pub use register_proposal::*;
pub use register_voter::*;
pub use vote::*;
pub use withdraw_sol::*;
