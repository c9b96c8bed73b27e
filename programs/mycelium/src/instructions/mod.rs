pub mod claim;
pub mod participate;
pub mod phase;
