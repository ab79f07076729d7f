//! Field invariant checks
//!
//! Three tiers, all pure functions of the record versions they are given:
//! universal rules that hold for every record version, status-conditional
//! rules on the optional rejection fields, and per-intent frozen-field
//! rules for transitions that carry one record version to its successor.
//! Linear-id correspondence for those same transitions lives here too.

use crate::error::{UniversalRule, ValidationError};
use crate::types::{Agreement, Intent, Status, Transaction};

/// The four invariants every record version must satisfy, in any status,
/// on either side of any transaction.
pub fn check_universal(state: &Agreement) -> Result<(), ValidationError> {
    let rule = |rule| ValidationError::UniversalInvariantViolation { rule };

    if state.buyer == state.seller {
        return Err(rule(UniversalRule::BuyerSellerDistinct));
    }
    if !state.participants().contains(&&state.proposer) {
        return Err(rule(UniversalRule::ProposerIsParticipant));
    }
    if !state.participants().contains(&&state.consenter) {
        return Err(rule(UniversalRule::ConsenterIsParticipant));
    }
    if state.proposer == state.consenter {
        return Err(rule(UniversalRule::ProposerConsenterDistinct));
    }
    Ok(())
}

/// Status-conditional population rules for the rejection fields.
///
/// `Proposed` forbids both, `Rejected` requires both, `Agreed` adds
/// nothing beyond the universal rules.
pub fn check_status_fields(state: &Agreement) -> Result<(), ValidationError> {
    let violation = |field, expected_present| ValidationError::StatusInvariantViolation {
        status: state.status,
        field,
        expected_present,
    };

    match state.status {
        Status::Proposed => {
            if state.rejection_reason.is_some() {
                return Err(violation("rejection_reason", false));
            }
            if state.rejected_by.is_some() {
                return Err(violation("rejected_by", false));
            }
        }
        Status::Rejected => {
            if state.rejection_reason.is_none() {
                return Err(violation("rejection_reason", true));
            }
            if state.rejected_by.is_none() {
                return Err(violation("rejected_by", true));
            }
        }
        Status::Agreed => {}
    }
    Ok(())
}

/// One-input/one-output transitions must keep the output on the same
/// logical agreement as the input.
pub fn check_linear_id(tx: &Transaction) -> Result<(), ValidationError> {
    if let ([input], [output]) = (tx.inputs.as_slice(), tx.outputs.as_slice()) {
        if input.linear_id != output.linear_id {
            return Err(ValidationError::LinearIdMismatch {
                input: input.linear_id,
                output: output.linear_id,
            });
        }
    }
    Ok(())
}

fn ensure_frozen<T: PartialEq>(
    field: &'static str,
    intent: Intent,
    before: &T,
    after: &T,
) -> Result<(), ValidationError> {
    if before != after {
        return Err(ValidationError::FrozenFieldViolation { field, intent });
    }
    Ok(())
}

/// Per-intent frozen-field rules for one-input/one-output transitions.
///
/// `Reject` may change only the status and the rejection fields; `Agree`
/// may change only the status. `Repropose` replaces the proposal outright
/// (new goods, new price, swapped roles are all legal), and `Propose` and
/// `Complete` have no input/output pair to compare.
pub fn check_frozen_fields(tx: &Transaction) -> Result<(), ValidationError> {
    let (before, after) = match (tx.intent, tx.inputs.as_slice(), tx.outputs.as_slice()) {
        (Intent::Reject | Intent::Agree, [input], [output]) => (input, output),
        _ => return Ok(()),
    };

    let intent = tx.intent;
    ensure_frozen("buyer", intent, &before.buyer, &after.buyer)?;
    ensure_frozen("seller", intent, &before.seller, &after.seller)?;
    ensure_frozen("goods", intent, &before.goods, &after.goods)?;
    ensure_frozen("price", intent, &before.price, &after.price)?;
    ensure_frozen("proposer", intent, &before.proposer, &after.proposer)?;
    ensure_frozen("consenter", intent, &before.consenter, &after.consenter)?;

    if intent == Intent::Agree {
        ensure_frozen(
            "rejection_reason",
            intent,
            &before.rejection_reason,
            &after.rejection_reason,
        )?;
        ensure_frozen("rejected_by", intent, &before.rejected_by, &after.rejected_by)?;
    }

    Ok(())
}
