// Proposal phase
//
// Proposals carry no status field. Every handler derives the phase from the
// ledger clock and the stored deadline through derive_phase, so there is no
// persisted state that can go stale.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProposalPhase {
    // now < deadline: votes are accepted
    Open,
    // now >= deadline: winner can be picked, proposal can be closed
    Closed,
}

pub fn derive_phase(now: i64, deadline: i64) -> ProposalPhase {
    if now < deadline {
        ProposalPhase::Open
    } else {
        ProposalPhase::Closed
    }
}
