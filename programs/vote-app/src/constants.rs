// Seeds for PDA derivation: ["treasury_config"]
pub const TREASURY_CONFIG: &[u8] = b"treasury_config";

// Seeds for PDA derivation: ["x_mint"]
pub const X_MINT: &[u8] = b"x_mint";

// Seeds for PDA derivation: ["sol_vault"]
pub const SOL_VAULT: &[u8] = b"sol_vault";

// Seeds for PDA derivation: ["mint_authority"]
pub const MINT_AUTHORITY: &[u8] = b"mint_authority";

// Seeds for PDA derivation: ["proposal_counter"]
pub const PROPOSAL_COUNTER: &[u8] = b"proposal_counter";

// Seeds for PDA derivation: ["voter", voter]
pub const VOTER: &[u8] = b"voter";

// Seeds for PDA derivation: ["proposal", proposal_id (u64 LE)]
pub const PROPOSAL: &[u8] = b"proposal";

// Seeds for PDA derivation: ["winner"]
pub const WINNER: &[u8] = b"winner";

pub const ANCHOR_DISCRIMINATOR: usize = 8;

// X token uses 6 implied decimals (1 token = 1_000_000 raw units)
pub const TOKEN_DECIMALS: u8 = 6;

// Upper bound on proposal descriptions, in bytes
pub const MAX_PROPOSAL_INFO_LEN: usize = 200;
