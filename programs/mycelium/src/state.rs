use anchor_lang::prelude::*;

use crate::constants::{INITIAL_VERSION, MIN_OPEN_SECONDS};
use crate::errors::MyceliumError;

/// Campaign lifecycle. Only ever moves forward, one step at a time.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum Phase {
    Setup,
    Open,
    Claiming,
}

impl Phase {
    /// The phase reached by one `advance_phase`, or `None` from the terminal phase.
    pub fn next(self) -> Option<Phase> {
        match self {
            Phase::Setup => Some(Phase::Open),
            Phase::Open => Some(Phase::Claiming),
            Phase::Claiming => None,
        }
    }
}

/// Singleton campaign state, PDA `["ledger"]`.
#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct GlobalLedger {
    pub operator: Pubkey,
    pub reward_mint: Pubkey,

    pub phase: Phase,
    pub participant_count: u64,

    pub bump: u8,
    // bump of the mint authority PDA, used as signer seed in claim
    pub authority_bump: u8,

    pub created_at: i64,
    pub phase_started_at: i64,

    pub version: u16,
}

impl GlobalLedger {
    pub const SPACE: usize = 8 + GlobalLedger::INIT_SPACE;

    pub fn new(
        operator: Pubkey,
        reward_mint: Pubkey,
        bump: u8,
        authority_bump: u8,
        now: i64,
    ) -> Self {
        Self {
            operator,
            reward_mint,
            phase: Phase::Setup,
            participant_count: 0,
            bump,
            authority_bump,
            created_at: now,
            phase_started_at: now,
            version: INITIAL_VERSION,
        }
    }

    pub fn require_phase(&self, expected: Phase) -> Result<()> {
        require!(self.phase == expected, MyceliumError::WrongPhase);
        Ok(())
    }

    /// Moves the ledger one phase forward on behalf of `signer`.
    /// Open cannot end before `MIN_OPEN_SECONDS` have passed since it began.
    pub fn advance(&mut self, signer: &Pubkey, now: i64) -> Result<Phase> {
        require_keys_eq!(self.operator, *signer, MyceliumError::Unauthorized);

        let next = self
            .phase
            .next()
            .ok_or_else(|| error!(MyceliumError::InvalidPhaseTransition))?;

        if self.phase == Phase::Open {
            let window_end = self
                .phase_started_at
                .checked_add(MIN_OPEN_SECONDS)
                .ok_or_else(|| error!(MyceliumError::MathOverflow))?;
            require!(now >= window_end, MyceliumError::PhaseWindowOpen);
        }

        self.phase = next;
        self.phase_started_at = now;
        Ok(next)
    }

    /// Counts one more participant. Returns the new count.
    pub fn register_participant(&mut self) -> Result<u64> {
        self.require_phase(Phase::Open)?;

        self.participant_count = self
            .participant_count
            .checked_add(1)
            .ok_or_else(|| error!(MyceliumError::MathOverflow))?;

        Ok(self.participant_count)
    }
}

/// Proof of participation, PDA `["participant", participant]`.
/// The account existing at all is what "has participated" means.
#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct ParticipantRecord {
    pub participant: Pubkey,
    pub bump: u8,

    // reward claim guard
    pub claimed: bool,

    pub participated_at: i64,
    pub claimed_at: i64,
}

impl ParticipantRecord {
    pub const SPACE: usize = 8 + ParticipantRecord::INIT_SPACE;

    pub fn new(participant: Pubkey, bump: u8, now: i64) -> Self {
        Self {
            participant,
            bump,
            claimed: false,
            participated_at: now,
            claimed_at: 0,
        }
    }

    pub fn redeem(&mut self, now: i64) -> Result<()> {
        require!(!self.claimed, MyceliumError::AlreadyClaimed);
        self.claimed = true;
        self.claimed_at = now;
        Ok(())
    }
}
