use anchor_lang::prelude::*;

#[error_code]
pub enum VoteError {
    // Lifecycle errors
    #[msg("Treasury is already initialized")]
    AlreadyInitialized,

    #[msg("Voter is already registered")]
    AlreadyRegistered,

    // Authorization errors
    #[msg("Unauthorized access")]
    UnauthorizedAccess,

    // Balance errors
    #[msg("Insufficient funds")]
    InsufficientFunds,

    #[msg("Insufficient SOL vault balance")]
    InsufficientVaultBalance,

    // Proposal errors
    #[msg("Deadline must be in the future")]
    InvalidDeadline,

    #[msg("Voting has closed for this proposal")]
    VotingClosed,

    #[msg("Voting is still active for this proposal")]
    VotingStillActive,

    #[msg("Proposal not found")]
    ProposalNotFound,

    #[msg("Voter has already cast a vote")]
    AlreadyVoted,

    #[msg("Proposal info must be between 1 and 200 bytes")]
    InvalidProposalInfo,

    // Parameter errors
    #[msg("SOL price and tokens per purchase must be greater than zero")]
    InvalidPrice,

    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    #[msg("Stake amount must be greater than zero")]
    InvalidStakeAmount,

    // Account validation errors
    #[msg("Mint mismatch")]
    MintMismatch,

    #[msg("Invalid treasury token account")]
    InvalidTreasuryAccount,

    // Arithmetic errors
    #[msg("Proposal counter overflow")]
    ProposalCounterOverflow,

    #[msg("Math overflow occurred")]
    MathOverflow,
}
