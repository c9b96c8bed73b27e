use anchor_lang::prelude::*;

use crate::state::Phase;

/// Emitted once, when the ledger is created.
#[event]
pub struct LedgerInitialized {
    pub ledger: Pubkey,
    pub operator: Pubkey,
    pub reward_mint: Pubkey,
    pub authority: Pubkey,
}

/// Emitted on every successful `advance_phase`.
#[event]
pub struct PhaseAdvanced {
    pub ledger: Pubkey,
    pub from: Phase,
    pub to: Phase,
    /// Participant count at the moment of the transition
    pub participant_count: u64,
    pub timestamp: i64,
}

#[event]
pub struct Participated {
    pub participant: Pubkey,
    pub record: Pubkey,
    /// Ledger count after this participation
    pub participant_count: u64,
}

#[event]
pub struct RewardClaimed {
    pub participant: Pubkey,
    pub destination: Pubkey,
    pub amount: u64,
}

#[event]
pub struct ParticipantClosed {
    pub participant: Pubkey,
    pub record: Pubkey,
}
