use anchor_lang::prelude::*;

use crate::{
    errors::MyceliumError,
    events::Participated,
    state::{GlobalLedger, ParticipantRecord, Phase},
    utils::{create_pda_account, slot_occupied, write_account, PARTICIPANT_SEED},
    Participate,
};

/// Admits `participant` into the campaign and counts them on the ledger.
///
/// `occupied` reports whether the participant's record address is already taken;
/// that address is the only deduplication gate.
pub fn admit_participant(
    ledger: &mut GlobalLedger,
    occupied: bool,
    participant: Pubkey,
    bump: u8,
    now: i64,
) -> Result<ParticipantRecord> {
    ledger.require_phase(Phase::Open)?;
    require!(!occupied, MyceliumError::DuplicateParticipation);

    ledger.register_participant()?;
    Ok(ParticipantRecord::new(participant, bump, now))
}

pub fn participate(ctx: Context<Participate>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let participant = ctx.accounts.participant.key();
    let record_ai = ctx.accounts.participant_record.to_account_info();
    let bump = ctx.bumps.participant_record;

    let record = admit_participant(
        &mut ctx.accounts.ledger,
        slot_occupied(record_ai.owner, record_ai.data_len()),
        participant,
        bump,
        now,
    )?;

    let bump_bytes = [bump];
    let record_seeds: &[&[u8]] = &[PARTICIPANT_SEED, participant.as_ref(), &bump_bytes];
    create_pda_account(
        &ctx.accounts.participant.to_account_info(),
        &record_ai,
        &ctx.accounts.system_program.to_account_info(),
        ParticipantRecord::SPACE,
        record_seeds,
        ctx.program_id,
    )?;
    write_account(&record_ai, &record)?;

    emit!(Participated {
        participant,
        record: record_ai.key(),
        participant_count: ctx.accounts.ledger.participant_count,
    });

    Ok(())
}
