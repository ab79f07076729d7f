//! Validation engine
//!
//! The public entry point for the hosting ledger runtime. `validate` is a
//! pure function of the transaction it is given: no storage, no network,
//! no shared mutable state. Every honest node computes the identical
//! verdict from identical input, so it may be called concurrently from
//! any number of threads without synchronization.

use crate::error::ValidationError;
use crate::types::Transaction;
use crate::{invariants, paths, signing};
use rayon::prelude::*;

/// Decide whether a transaction is an admissible ledger transition.
///
/// Checks run in a fixed order so diagnostics are precise: record-level
/// field invariants first (a malformed record version should never be
/// reported as a path problem), then path matching, then the
/// cross-version checks. Logically every check is independent; the first
/// failure aborts the whole transaction.
pub fn validate(tx: &Transaction) -> Result<(), ValidationError> {
    for state in tx.inputs.iter().chain(tx.outputs.iter()) {
        invariants::check_universal(state)?;
        invariants::check_status_fields(state)?;
    }

    paths::match_path(tx)?;
    invariants::check_linear_id(tx)?;
    invariants::check_frozen_fields(tx)?;
    signing::check_signers(tx)?;

    Ok(())
}

/// Validate a batch of unrelated transactions in parallel.
///
/// Verdicts come back in input order. Each transaction is validated
/// independently; one rejection says nothing about its neighbours.
pub fn validate_all(transactions: &[Transaction]) -> Vec<Result<(), ValidationError>> {
    transactions.par_iter().map(validate).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Agreement, Amount, Intent, LinearId, Party, Status};

    fn proposal(linear_id: LinearId) -> Agreement {
        Agreement::new(
            Status::Proposed,
            Party::new("Alice Ltd"),
            Party::new("Bob Inc"),
            "20 boxes of apples",
            Amount::new(12, "GBP"),
            Party::new("Alice Ltd"),
            Party::new("Bob Inc"),
            linear_id,
        )
    }

    #[test]
    fn test_field_invariants_run_before_path_matching() {
        // Bad nullity and a bad path at once: the nullity error wins.
        let id = LinearId::from_bytes([1; 16]);
        let mut output = proposal(id);
        output.rejection_reason = Some("never sent".to_string());

        let tx = Transaction::new(Intent::Complete)
            .with_output(output)
            .with_signer(Party::new("Alice Ltd"));

        assert_eq!(
            validate(&tx).unwrap_err(),
            ValidationError::StatusInvariantViolation {
                status: Status::Proposed,
                field: "rejection_reason",
                expected_present: false,
            }
        );
    }

    #[test]
    fn test_validate_all_preserves_order() {
        let id = LinearId::from_bytes([2; 16]);
        let good = Transaction::new(Intent::Propose)
            .with_output(proposal(id))
            .with_signer(Party::new("Alice Ltd"));
        let bad = Transaction::new(Intent::Complete);

        let verdicts = validate_all(&[good, bad]);
        assert!(verdicts[0].is_ok());
        assert_eq!(
            verdicts[1].as_ref().unwrap_err(),
            &ValidationError::PathNotAllowed {
                source_status: None,
                intent: Intent::Complete,
            }
        );
    }
}
