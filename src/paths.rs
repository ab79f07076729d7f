//! Path constraint table and path matcher
//!
//! The table is the lifecycle in data form: for each source status
//! (including "initial", the absence of any input) the set of legal
//! transitions. The matcher resolves a transaction against it. Both are
//! pure; the table is built once at compile time and never written.

use crate::error::{Side, ValidationError};
use crate::types::{Agreement, Intent, Status, Transaction};

/// An exact bound on the number of record versions on one side of a
/// transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Multiplicity {
    pub exactly: usize,
}

impl Multiplicity {
    pub const fn exactly(count: usize) -> Self {
        Self { exactly: count }
    }

    /// The default bound when a constraint leaves it unspecified.
    pub const ONE: Multiplicity = Multiplicity::exactly(1);

    fn check(&self, actual: usize, side: Side) -> Result<(), ValidationError> {
        if actual != self.exactly {
            return Err(ValidationError::MultiplicityViolation {
                side,
                expected: self.exactly,
                actual,
            });
        }
        Ok(())
    }
}

/// One legal transition out of a source status.
///
/// `output_status` is `None` for terminal transitions that produce no
/// record version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathConstraint {
    pub intent: Intent,
    pub output_status: Option<Status>,
    pub inputs: Multiplicity,
    pub outputs: Multiplicity,
}

static FROM_INITIAL: [PathConstraint; 1] = [PathConstraint {
    intent: Intent::Propose,
    output_status: Some(Status::Proposed),
    inputs: Multiplicity::exactly(0),
    outputs: Multiplicity::ONE,
}];

static FROM_PROPOSED: [PathConstraint; 2] = [
    PathConstraint {
        intent: Intent::Reject,
        output_status: Some(Status::Rejected),
        inputs: Multiplicity::ONE,
        outputs: Multiplicity::ONE,
    },
    PathConstraint {
        intent: Intent::Agree,
        output_status: Some(Status::Agreed),
        inputs: Multiplicity::ONE,
        outputs: Multiplicity::ONE,
    },
];

static FROM_REJECTED: [PathConstraint; 1] = [PathConstraint {
    intent: Intent::Repropose,
    output_status: Some(Status::Proposed),
    inputs: Multiplicity::ONE,
    outputs: Multiplicity::ONE,
}];

static FROM_AGREED: [PathConstraint; 1] = [PathConstraint {
    intent: Intent::Complete,
    output_status: None,
    inputs: Multiplicity::ONE,
    outputs: Multiplicity::exactly(0),
}];

/// The constraints legal from a given source status.
///
/// Total over all four source cases; the exhaustive match makes a missing
/// row a compile error, and every row is non-empty.
pub fn allowed_paths(source_status: Option<Status>) -> &'static [PathConstraint] {
    match source_status {
        None => &FROM_INITIAL,
        Some(Status::Proposed) => &FROM_PROPOSED,
        Some(Status::Rejected) => &FROM_REJECTED,
        Some(Status::Agreed) => &FROM_AGREED,
    }
}

/// The single status shared by every record version on one side, or
/// `None` for an empty side. Mixed statuses are a structural defect and
/// fail before any path lookup.
fn uniform_status(states: &[Agreement], side: Side) -> Result<Option<Status>, ValidationError> {
    let mut statuses = states.iter().map(|s| s.status);
    let first = match statuses.next() {
        Some(status) => status,
        None => return Ok(None),
    };
    if statuses.any(|status| status != first) {
        return Err(match side {
            Side::Input => ValidationError::InconsistentInputStatus,
            Side::Output => ValidationError::InconsistentOutputStatus,
        });
    }
    Ok(Some(first))
}

/// Resolve a transaction against the constraint table.
///
/// Fails with `InconsistentInputStatus` / `InconsistentOutputStatus` on a
/// status mix, `PathNotAllowed` when no constraint carries the
/// transaction's intent and output status out of its source status, and
/// `MultiplicityViolation` when a matching constraint exists but the
/// record version counts break its bounds.
pub fn match_path(tx: &Transaction) -> Result<&'static PathConstraint, ValidationError> {
    let source_status = uniform_status(&tx.inputs, Side::Input)?;
    let produced_status = uniform_status(&tx.outputs, Side::Output)?;

    let constraint = allowed_paths(source_status)
        .iter()
        .find(|c| c.intent == tx.intent && c.output_status == produced_status)
        .ok_or(ValidationError::PathNotAllowed {
            source_status,
            intent: tx.intent,
        })?;

    constraint.inputs.check(tx.inputs.len(), Side::Input)?;
    constraint.outputs.check(tx.outputs.len(), Side::Output)?;

    Ok(constraint)
}
