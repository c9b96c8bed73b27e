// programs/mycelium/src/contexts.rs

use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::state::{GlobalLedger, ParticipantRecord};

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// CHECK: created in the handler so a second call fails with `AlreadyInitialized`.
    /// Address enforced by seeds/bump.
    #[account(
        mut,
        seeds = [crate::LEDGER_SEED],
        bump
    )]
    pub ledger: UncheckedAccount<'info>,

    /// CHECK: PDA mint authority, never holds data. Address enforced by seeds/bump.
    #[account(
        seeds = [crate::AUTHORITY_SEED],
        bump
    )]
    pub authority: UncheckedAccount<'info>,

    /// Reward mint, created off-chain; its current mint authority must be `operator`
    #[account(mut)]
    pub reward_mint: Account<'info, Mint>,

    #[account(mut)]
    pub operator: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct AdvancePhase<'info> {
    #[account(
        mut,
        seeds = [crate::LEDGER_SEED],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, GlobalLedger>,

    pub operator: Signer<'info>,
}

#[derive(Accounts)]
pub struct Participate<'info> {
    #[account(
        mut,
        seeds = [crate::LEDGER_SEED],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, GlobalLedger>,

    /// CHECK: created in the handler; an occupied address means the signer already
    /// participated. Address enforced by seeds/bump.
    #[account(
        mut,
        seeds = [crate::PARTICIPANT_SEED, participant.key().as_ref()],
        bump
    )]
    pub participant_record: UncheckedAccount<'info>,

    #[account(mut)]
    pub participant: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct Claim<'info> {
    #[account(
        seeds = [crate::LEDGER_SEED],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, GlobalLedger>,

    /// CHECK: may be empty; the handler reports `NoSuchParticipant` then.
    /// Address enforced by seeds/bump.
    #[account(
        mut,
        seeds = [crate::PARTICIPANT_SEED, participant.key().as_ref()],
        bump
    )]
    pub participant_record: UncheckedAccount<'info>,

    #[account(mut, address = ledger.reward_mint)]
    pub reward_mint: Account<'info, Mint>,

    #[account(
        init_if_needed,
        payer = participant,
        associated_token::mint = reward_mint,
        associated_token::authority = participant
    )]
    pub destination: Account<'info, TokenAccount>,

    /// CHECK: PDA mint authority, signs `mint_to`. Address enforced by seeds/bump.
    #[account(
        seeds = [crate::AUTHORITY_SEED],
        bump = ledger.authority_bump
    )]
    pub authority: UncheckedAccount<'info>,

    #[account(mut)]
    pub participant: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct CloseParticipant<'info> {
    #[account(
        mut,
        seeds = [crate::PARTICIPANT_SEED, participant.key().as_ref()],
        bump = participant_record.bump,
        has_one = participant,
        close = participant
    )]
    pub participant_record: Account<'info, ParticipantRecord>,

    #[account(mut)]
    pub participant: Signer<'info>,
}
