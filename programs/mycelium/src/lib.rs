use anchor_lang::prelude::*;

pub mod constants;
pub mod contexts;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;


pub use constants::*;
pub use contexts::*;
pub use errors::*;
pub use events::*;
pub use state::*;
pub use utils::*;

#[cfg(not(feature = "no-entrypoint"))]
use solana_security_txt::security_txt;

#[cfg(not(feature = "no-entrypoint"))]
security_txt! {
    // Required fields
    name: "Mycelium",
    project_url: "https://mycelium.invalid",
    contacts: "link:https://mycelium.invalid/security",
    policy: "https://mycelium.invalid/security",

    // Optional fields
    preferred_languages: "en",
    source_code: "https://mycelium.invalid"
}

declare_id!("CMLBhrxJKPXr8GEJznTvgj9yiEskNH1anA2UUpQ5kV4G");

/// Three-phase participation campaign.
///
/// The operator walks a singleton ledger through Setup -> Open -> Claiming. While Open,
/// every signer may register exactly once (one PDA record per signer). While Claiming,
/// each registered signer redeems their record once for `REWARD_AMOUNT` tokens, minted
/// under a program-derived authority.
#[program]
pub mod mycelium {
    use super::*;
    use crate::instructions::{claim, participate, phase};

    // ----------------------------
    // Phase controller (operator)
    // ----------------------------
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        phase::initialize(ctx)
    }

    pub fn advance_phase(ctx: Context<AdvancePhase>) -> Result<()> {
        phase::advance_phase(ctx)
    }

    // ----------------------------
    // Participants
    // ----------------------------
    pub fn participate(ctx: Context<Participate>) -> Result<()> {
        participate::participate(ctx)
    }

    pub fn claim(ctx: Context<Claim>) -> Result<()> {
        claim::claim(ctx)
    }

    pub fn close_participant(ctx: Context<CloseParticipant>) -> Result<()> {
        claim::close_participant(ctx)
    }
}
