use anchor_lang::prelude::*;
use anchor_lang::solana_program::{
    program::{invoke, invoke_signed},
    system_instruction, system_program,
};

use crate::errors::MyceliumError;

// -----------------
// Seeds
// -----------------
pub const LEDGER_SEED: &[u8] = b"ledger";
pub const AUTHORITY_SEED: &[u8] = b"authority";
pub const PARTICIPANT_SEED: &[u8] = b"participant";

// -------------------------
// Deterministic addresses
// -------------------------
pub fn ledger_address(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[LEDGER_SEED], program_id)
}

/// Mint authority of the reward mint. No private key exists for it.
pub fn authority_address(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[AUTHORITY_SEED], program_id)
}

pub fn participant_address(program_id: &Pubkey, participant: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[PARTICIPANT_SEED, participant.as_ref()], program_id)
}

// -------------------------
// Account slots
// -------------------------

/// True once anything has been allocated or assigned at a PDA address.
/// A system-owned address holding only lamports still counts as free.
pub fn slot_occupied(owner: &Pubkey, data_len: usize) -> bool {
    *owner != system_program::ID || data_len > 0
}

/// Creates a program-owned account at a PDA. `signer_seeds` must derive `target`.
///
/// Handles addresses that were pre-funded with lamports: those cannot go through
/// `create_account`, so they are topped up, allocated and assigned instead.
pub fn create_pda_account<'info>(
    payer: &AccountInfo<'info>,
    target: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    space: usize,
    signer_seeds: &[&[u8]],
    program_id: &Pubkey,
) -> Result<()> {
    let required = Rent::get()?.minimum_balance(space);
    let current = target.lamports();

    if current == 0 {
        let ix = system_instruction::create_account(
            payer.key,
            target.key,
            required,
            space as u64,
            program_id,
        );
        invoke_signed(
            &ix,
            &[payer.clone(), target.clone(), system_program.clone()],
            &[signer_seeds],
        )?;
        return Ok(());
    }

    let top_up = required.saturating_sub(current);
    if top_up > 0 {
        invoke(
            &system_instruction::transfer(payer.key, target.key, top_up),
            &[payer.clone(), target.clone(), system_program.clone()],
        )?;
    }

    invoke_signed(
        &system_instruction::allocate(target.key, space as u64),
        &[target.clone(), system_program.clone()],
        &[signer_seeds],
    )?;
    invoke_signed(
        &system_instruction::assign(target.key, program_id),
        &[target.clone(), system_program.clone()],
        &[signer_seeds],
    )?;

    Ok(())
}

// -------------------------
// (De)serialization
// -------------------------
pub fn encode_account<T: AccountSerialize>(value: &T, dst: &mut [u8]) -> Result<()> {
    let mut w = std::io::Cursor::new(dst);
    value.try_serialize(&mut w)
}

pub fn decode_account<T: AccountDeserialize>(src: &[u8]) -> Result<T> {
    let mut slice: &[u8] = src;
    T::try_deserialize(&mut slice)
}

pub fn write_account<T: AccountSerialize>(ai: &AccountInfo, value: &T) -> Result<()> {
    let mut data = ai
        .try_borrow_mut_data()
        .map_err(|_| error!(MyceliumError::AccountBorrowFailed))?;
    encode_account(value, &mut data[..])
}

/// Loads `T` from an account this program owns, `None` if nothing lives there.
pub fn read_account<T: AccountDeserialize>(
    ai: &AccountInfo,
    program_id: &Pubkey,
) -> Result<Option<T>> {
    if ai.owner != program_id || ai.data_is_empty() {
        return Ok(None);
    }

    let data = ai
        .try_borrow_data()
        .map_err(|_| error!(MyceliumError::AccountBorrowFailed))?;
    decode_account(&data[..]).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{GlobalLedger, ParticipantRecord, Phase};

    #[test]
    fn participant_address_is_stable_and_unique() {
        let program_id = crate::ID;
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();

        let (a1, bump) = participant_address(&program_id, &alice);
        let (a2, _) = participant_address(&program_id, &alice);
        let (b, _) = participant_address(&program_id, &bob);

        assert_eq!(a1, a2);
        assert_ne!(a1, b);
        assert_eq!(
            Pubkey::create_program_address(&[PARTICIPANT_SEED, alice.as_ref(), &[bump]], &program_id)
                .unwrap(),
            a1
        );
    }

    #[test]
    fn fixed_labels_do_not_collide() {
        let program_id = crate::ID;
        let (ledger, _) = ledger_address(&program_id);
        let (authority, _) = authority_address(&program_id);
        assert_ne!(ledger, authority);
    }

    #[test]
    fn slot_occupancy() {
        // untouched or pre-funded address
        assert!(!slot_occupied(&system_program::ID, 0));
        // allocated but still system owned
        assert!(slot_occupied(&system_program::ID, 16));
        // assigned to the program
        assert!(slot_occupied(&crate::ID, 0));
        assert!(slot_occupied(&crate::ID, ParticipantRecord::SPACE));
    }

    #[test]
    fn account_space_fits_encoding() {
        let ledger = GlobalLedger::new(Pubkey::new_unique(), Pubkey::new_unique(), 1, 2, 3);
        let mut buf = vec![0u8; GlobalLedger::SPACE];
        encode_account(&ledger, &mut buf).unwrap();
        assert_eq!(decode_account::<GlobalLedger>(&buf).unwrap(), ledger);

        let mut small = vec![0u8; GlobalLedger::SPACE - 1];
        assert!(encode_account(&ledger, &mut small).is_err());
    }

    fn read_record_at(owner: Pubkey, lamports: u64, data: &[u8]) -> Result<Option<ParticipantRecord>> {
        let key = Pubkey::new_unique();
        let mut lamports = lamports;
        let mut data = data.to_vec();
        let ai = AccountInfo::new(&key, false, true, &mut lamports, &mut data, &owner, false, 0);
        read_account(&ai, &crate::ID)
    }

    fn encoded_record() -> (ParticipantRecord, Vec<u8>) {
        let record = ParticipantRecord::new(Pubkey::new_unique(), 254, 10);
        let mut buf = vec![0u8; ParticipantRecord::SPACE];
        encode_account(&record, &mut buf).unwrap();
        (record, buf)
    }

    #[test]
    fn read_account_skips_unowned_or_empty_slots() {
        // pre-funded with lamports, nothing allocated
        assert_eq!(read_record_at(system_program::ID, 5_000, &[]).unwrap(), None);
        // closed: handed back to the system program and zero-sized
        assert_eq!(read_record_at(system_program::ID, 0, &[]).unwrap(), None);
        // assigned to the program but never written
        assert_eq!(read_record_at(crate::ID, 0, &[]).unwrap(), None);

        // same bytes under another program do not count
        let (_, buf) = encoded_record();
        let stranger = Pubkey::new_unique();
        assert_eq!(read_record_at(stranger, 1, &buf).unwrap(), None);
    }

    #[test]
    fn read_account_loads_program_owned_record() {
        let (record, buf) = encoded_record();
        assert_eq!(read_record_at(crate::ID, 1, &buf).unwrap(), Some(record));
    }

    #[test]
    fn read_account_rejects_foreign_layout() {
        let ledger = GlobalLedger::new(Pubkey::new_unique(), Pubkey::new_unique(), 1, 2, 3);
        let mut buf = vec![0u8; GlobalLedger::SPACE];
        encode_account(&ledger, &mut buf).unwrap();

        assert!(read_record_at(crate::ID, 1, &buf).is_err());
    }

    #[test]
    fn decode_rejects_foreign_discriminator() {
        let mut ledger = GlobalLedger::new(Pubkey::new_unique(), Pubkey::new_unique(), 1, 2, 3);
        ledger.phase = Phase::Claiming;
        let mut buf = vec![0u8; GlobalLedger::SPACE];
        encode_account(&ledger, &mut buf).unwrap();

        assert!(decode_account::<ParticipantRecord>(&buf).is_err());
    }
}
