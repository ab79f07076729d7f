//! Signing requirement checks
//!
//! Each intent names one role whose identity must appear in the
//! transaction's signer set. Signature cryptography is the hosting
//! runtime's job; by the time the engine runs, a signer is an
//! authenticated identity and only set membership is left to check.

use crate::error::{SignerRole, ValidationError};
use crate::types::{Intent, Party, Transaction};

/// The identity whose signature the transition requires, and the role it
/// holds on the record.
///
/// Returns `None` when the record version the rule reads from is absent;
/// the path matcher rejects such transactions before signing is checked.
fn required_signer(tx: &Transaction) -> Option<(&Party, SignerRole)> {
    match tx.intent {
        Intent::Propose | Intent::Repropose => tx
            .outputs
            .first()
            .map(|output| (&output.proposer, SignerRole::Proposer)),
        Intent::Reject => tx
            .outputs
            .first()
            .and_then(|output| output.rejected_by.as_ref())
            .map(|party| (party, SignerRole::RejectedBy)),
        Intent::Agree => tx
            .inputs
            .first()
            .map(|input| (&input.consenter, SignerRole::Consenter)),
        Intent::Complete => tx
            .inputs
            .first()
            .map(|input| (&input.seller, SignerRole::Seller)),
    }
}

/// Require the intent's signer to be a member of the signer set.
///
/// Extra signers are always permitted; the rule is a lower bound, not an
/// exact set.
pub fn check_signers(tx: &Transaction) -> Result<(), ValidationError> {
    let Some((party, role)) = required_signer(tx) else {
        return Ok(());
    };
    if !tx.signers.contains(party) {
        return Err(ValidationError::MissingRequiredSigner {
            intent: tx.intent,
            role,
        });
    }
    Ok(())
}
