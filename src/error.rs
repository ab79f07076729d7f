//! Error types for transaction validation
//!
//! Every failure is one [`ValidationError`] kind with enough context to
//! render a precise message. Message text is stable: downstream tooling
//! and the test suite match on it verbatim.

use crate::types::{Intent, LinearId, Status};
use thiserror::Error;

/// Which side of a transaction a structural check refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Input,
    Output,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Input => write!(f, "input"),
            Side::Output => write!(f, "output"),
        }
    }
}

/// The four universal field invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UniversalRule {
    #[error("The buyer and seller must be different parties.")]
    BuyerSellerDistinct,

    #[error("The proposer must be either the buyer or the seller.")]
    ProposerIsParticipant,

    #[error("The consenter must be either the buyer or the seller.")]
    ConsenterIsParticipant,

    #[error("The consenter and proposer must be different parties.")]
    ProposerConsenterDistinct,
}

/// The role whose signature a transition requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignerRole {
    Proposer,
    Consenter,
    RejectedBy,
    Seller,
}

impl std::fmt::Display for SignerRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SignerRole::Proposer => write!(f, "proposer"),
            SignerRole::Consenter => write!(f, "consenter"),
            SignerRole::RejectedBy => write!(f, "rejecting party"),
            SignerRole::Seller => write!(f, "seller"),
        }
    }
}

fn source_label(source: &Option<Status>) -> String {
    match source {
        Some(status) => status.to_string(),
        None => "initial".to_string(),
    }
}

fn presence(expected_present: &bool) -> &'static str {
    if *expected_present {
        "be set"
    } else {
        "not be set"
    }
}

/// The closed set of reasons a transaction is rejected.
///
/// A single violation rejects the whole transaction; there is no partial
/// acceptance. Validation is deterministic, so resubmitting an identical
/// transaction fails identically.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("all input states must share the same status")]
    InconsistentInputStatus,

    #[error("all output states must share the same status")]
    InconsistentOutputStatus,

    #[error("no path constraint allows intent {intent} from status {}", source_label(.source_status))]
    PathNotAllowed {
        source_status: Option<Status>,
        intent: Intent,
    },

    #[error("expected exactly {expected} {side} state(s), found {actual}")]
    MultiplicityViolation {
        side: Side,
        expected: usize,
        actual: usize,
    },

    #[error("{rule}")]
    UniversalInvariantViolation { rule: UniversalRule },

    #[error("when status is {status}, {field} must {}", presence(.expected_present))]
    StatusInvariantViolation {
        status: Status,
        field: &'static str,
        expected_present: bool,
    },

    #[error("field {field} may not change in a {intent} transition")]
    FrozenFieldViolation {
        field: &'static str,
        intent: Intent,
    },

    #[error("output linear id {output} does not match input linear id {input}")]
    LinearIdMismatch { input: LinearId, output: LinearId },

    #[error("intent {intent} requires a signature from the {role}")]
    MissingRequiredSigner { intent: Intent, role: SignerRole },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_not_allowed_labels_initial_status() {
        let err = ValidationError::PathNotAllowed {
            source_status: None,
            intent: Intent::Complete,
        };
        assert_eq!(
            err.to_string(),
            "no path constraint allows intent Complete from status initial"
        );
    }

    #[test]
    fn test_path_not_allowed_labels_source_status() {
        let err = ValidationError::PathNotAllowed {
            source_status: Some(Status::Agreed),
            intent: Intent::Reject,
        };
        assert_eq!(
            err.to_string(),
            "no path constraint allows intent Reject from status Agreed"
        );
    }

    #[test]
    fn test_status_invariant_message_direction() {
        let absent = ValidationError::StatusInvariantViolation {
            status: Status::Proposed,
            field: "rejection_reason",
            expected_present: false,
        };
        assert_eq!(
            absent.to_string(),
            "when status is Proposed, rejection_reason must not be set"
        );

        let present = ValidationError::StatusInvariantViolation {
            status: Status::Rejected,
            field: "rejected_by",
            expected_present: true,
        };
        assert_eq!(
            present.to_string(),
            "when status is Rejected, rejected_by must be set"
        );
    }

    #[test]
    fn test_universal_rule_messages_are_stable() {
        assert_eq!(
            UniversalRule::BuyerSellerDistinct.to_string(),
            "The buyer and seller must be different parties."
        );
        assert_eq!(
            UniversalRule::ProposerConsenterDistinct.to_string(),
            "The consenter and proposer must be different parties."
        );
    }

    #[test]
    fn test_missing_signer_message_names_intent_and_role() {
        let err = ValidationError::MissingRequiredSigner {
            intent: Intent::Complete,
            role: SignerRole::Seller,
        };
        assert_eq!(
            err.to_string(),
            "intent Complete requires a signature from the seller"
        );
    }
}
