use anchor_lang::prelude::*;
use anchor_spl::token::{self, MintTo};

use crate::{
    constants::REWARD_AMOUNT,
    errors::MyceliumError,
    events::{ParticipantClosed, RewardClaimed},
    state::{GlobalLedger, ParticipantRecord, Phase},
    utils::{read_account, write_account, AUTHORITY_SEED},
    Claim, CloseParticipant,
};

/// Consumes a participant record for its reward. The ledger is only read.
pub fn redeem_record(
    ledger: &GlobalLedger,
    record: Option<ParticipantRecord>,
    now: i64,
) -> Result<ParticipantRecord> {
    ledger.require_phase(Phase::Claiming)?;

    let mut record = record.ok_or_else(|| error!(MyceliumError::NoSuchParticipant))?;
    record.redeem(now)?;
    Ok(record)
}

pub fn claim(ctx: Context<Claim>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let ledger = &ctx.accounts.ledger;
    let participant = ctx.accounts.participant.key();
    let record_ai = ctx.accounts.participant_record.to_account_info();

    let existing = read_account::<ParticipantRecord>(&record_ai, ctx.program_id)?;
    let record = redeem_record(ledger, existing, now)?;

    // mark before minting
    write_account(&record_ai, &record)?;

    let signer_seeds: &[&[&[u8]]] = &[&[AUTHORITY_SEED, &[ledger.authority_bump]]];
    token::mint_to(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            MintTo {
                mint: ctx.accounts.reward_mint.to_account_info(),
                to: ctx.accounts.destination.to_account_info(),
                authority: ctx.accounts.authority.to_account_info(),
            },
            signer_seeds,
        ),
        REWARD_AMOUNT,
    )?;

    msg!("Minted {} to {}", REWARD_AMOUNT, participant);
    emit!(RewardClaimed {
        participant,
        destination: ctx.accounts.destination.key(),
        amount: REWARD_AMOUNT,
    });

    Ok(())
}

/// Only redeemed records may be closed.
pub fn release_record(record: &ParticipantRecord) -> Result<()> {
    require!(record.claimed, MyceliumError::NotClaimed);
    Ok(())
}

/// Releases the rent held by a redeemed record.
pub fn close_participant(ctx: Context<CloseParticipant>) -> Result<()> {
    let record = &ctx.accounts.participant_record;
    release_record(record)?;

    emit!(ParticipantClosed {
        participant: ctx.accounts.participant.key(),
        record: record.key(),
    });

    // `close = participant` returns the lamports
    Ok(())
}
