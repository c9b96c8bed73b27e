use anchor_lang::prelude::*;
use anchor_spl::token::{self, spl_token::instruction::AuthorityType, SetAuthority};

use crate::{
    errors::MyceliumError,
    events::{LedgerInitialized, PhaseAdvanced},
    state::GlobalLedger,
    utils::{create_pda_account, slot_occupied, write_account, LEDGER_SEED},
    AdvancePhase, Initialize,
};

/// Builds the initial ledger, refusing if the ledger address is already in use.
pub fn open_ledger(
    occupied: bool,
    operator: Pubkey,
    reward_mint: Pubkey,
    bump: u8,
    authority_bump: u8,
    now: i64,
) -> Result<GlobalLedger> {
    require!(!occupied, MyceliumError::AlreadyInitialized);
    Ok(GlobalLedger::new(operator, reward_mint, bump, authority_bump, now))
}

pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    let ledger_ai = ctx.accounts.ledger.to_account_info();
    let now = Clock::get()?.unix_timestamp;

    let ledger = open_ledger(
        slot_occupied(ledger_ai.owner, ledger_ai.data_len()),
        ctx.accounts.operator.key(),
        ctx.accounts.reward_mint.key(),
        ctx.bumps.ledger,
        ctx.bumps.authority,
        now,
    )?;

    let bump = [ctx.bumps.ledger];
    let ledger_seeds: &[&[u8]] = &[LEDGER_SEED, &bump];
    create_pda_account(
        &ctx.accounts.operator.to_account_info(),
        &ledger_ai,
        &ctx.accounts.system_program.to_account_info(),
        GlobalLedger::SPACE,
        ledger_seeds,
        ctx.program_id,
    )?;
    write_account(&ledger_ai, &ledger)?;

    // hand minting over to the authority PDA; from here only `claim` can mint
    token::set_authority(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            SetAuthority {
                account_or_mint: ctx.accounts.reward_mint.to_account_info(),
                current_authority: ctx.accounts.operator.to_account_info(),
            },
        ),
        AuthorityType::MintTokens,
        Some(ctx.accounts.authority.key()),
    )?;

    msg!("Ledger initialized, reward mint {}", ledger.reward_mint);
    emit!(LedgerInitialized {
        ledger: ledger_ai.key(),
        operator: ledger.operator,
        reward_mint: ledger.reward_mint,
        authority: ctx.accounts.authority.key(),
    });

    Ok(())
}

pub fn advance_phase(ctx: Context<AdvancePhase>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let ledger = &mut ctx.accounts.ledger;

    let from = ledger.phase;
    let to = ledger.advance(&ctx.accounts.operator.key(), now)?;

    msg!("Phase {:?} -> {:?}", from, to);
    emit!(PhaseAdvanced {
        ledger: ledger.key(),
        from,
        to,
        participant_count: ledger.participant_count,
        timestamp: now,
    });

    Ok(())
}
