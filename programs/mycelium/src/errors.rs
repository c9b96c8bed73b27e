use anchor_lang::prelude::*;

#[error_code]
pub enum MyceliumError {
    #[msg("Ledger already initialized")]
    AlreadyInitialized,
    #[msg("Invalid phase transition")]
    InvalidPhaseTransition,
    #[msg("Instruction not allowed in the current phase")]
    WrongPhase,
    #[msg("Participant already registered")]
    DuplicateParticipation,
    #[msg("No participant record for this signer")]
    NoSuchParticipant,
    #[msg("Reward already claimed")]
    AlreadyClaimed,

    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Math overflow")]
    MathOverflow,
    #[msg("Failed to borrow account data")]
    AccountBorrowFailed,
    #[msg("Reward not claimed yet")]
    NotClaimed,
    #[msg("Participation window still open")]
    PhaseWindowOpen,
}
