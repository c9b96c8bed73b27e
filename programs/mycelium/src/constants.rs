// Centralized Program Constants

// Reward Constants
// ================

/// Amount of `reward_mint` base units minted to each participant on claim.
/// Fixed at build time; claimants cannot influence it.
/// 1_000_000 = 1.0 token for a 6-decimal mint.
pub const REWARD_AMOUNT: u64 = 1_000_000;

// Phase Timing
// ============

/// Minimum time the ledger stays Open before the operator may move it to Claiming.
/// 259_200 s = 3 days.
pub const MIN_OPEN_SECONDS: i64 = 259_200;

// Account Layout
// ==============

/// Initial version for account structures.
pub const INITIAL_VERSION: u16 = 1;
