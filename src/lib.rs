//! Pactum
//!
//! A deterministic validation engine for bilateral agreement records on a
//! shared append-only ledger. Given a candidate transaction (consumed
//! record versions, produced record versions, one transition intent, a
//! signer set), [`validate`] decides whether the transition is admissible
//! as a pure function of that transaction alone, so every node reaches
//! the same verdict independently.

pub mod engine;
pub mod error;
pub mod invariants;
pub mod paths;
pub mod signing;
pub mod types;

// Re-export core types and entry points
pub use engine::{validate, validate_all};
pub use error::{Side, SignerRole, UniversalRule, ValidationError};
pub use paths::{allowed_paths, match_path, Multiplicity, PathConstraint};
pub use types::{Agreement, Amount, Intent, LinearId, Party, Status, Transaction};
