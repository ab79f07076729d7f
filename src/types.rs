//! Core data types for the agreement ledger model

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Lifecycle stage of an agreement record version.
///
/// The absence of any prior record version ("initial") is modelled as
/// `Option<Status>::None` at the points where it matters, never as an
/// extra variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Proposed,
    Rejected,
    Agreed,
}

impl Status {
    /// All statuses, in lifecycle order. Used by exhaustiveness tests.
    pub const ALL: [Status; 3] = [Status::Proposed, Status::Rejected, Status::Agreed];
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Proposed => write!(f, "Proposed"),
            Status::Rejected => write!(f, "Rejected"),
            Status::Agreed => write!(f, "Agreed"),
        }
    }
}

/// Declared purpose of a transaction. Carries no data beyond its tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    Propose,
    Repropose,
    Reject,
    Agree,
    Complete,
}

impl Intent {
    /// All intents, in declaration order. Used by exhaustiveness tests.
    pub const ALL: [Intent; 5] = [
        Intent::Propose,
        Intent::Repropose,
        Intent::Reject,
        Intent::Agree,
        Intent::Complete,
    ];
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intent::Propose => write!(f, "Propose"),
            Intent::Repropose => write!(f, "Repropose"),
            Intent::Reject => write!(f, "Reject"),
            Intent::Agree => write!(f, "Agree"),
            Intent::Complete => write!(f, "Complete"),
        }
    }
}

/// An authenticated participant identity.
///
/// The engine only ever compares parties for equality and set membership;
/// authentication and key material live in the hosting runtime.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Party(String);

impl Party {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque identifier shared by every record version of one logical
/// agreement across its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LinearId([u8; 16]);

impl LinearId {
    /// Generate a fresh identifier for a new logical agreement.
    pub fn random() -> Self {
        Self(rand::random())
    }

    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }
}

impl fmt::Display for LinearId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

/// A currency amount.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Amount {
    pub quantity: u64,
    pub currency: String,
}

impl Amount {
    pub fn new(quantity: u64, currency: impl Into<String>) -> Self {
        Self {
            quantity,
            currency: currency.into(),
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.quantity, self.currency)
    }
}

/// One immutable record version of a bilateral agreement.
///
/// Record versions are created only as transaction outputs and consumed
/// only as transaction inputs; once created they never change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agreement {
    pub status: Status,
    pub buyer: Party,
    pub seller: Party,
    pub goods: String,
    pub price: Amount,
    pub proposer: Party,
    pub consenter: Party,
    pub rejection_reason: Option<String>,
    pub rejected_by: Option<Party>,
    pub linear_id: LinearId,
}

impl Agreement {
    /// Create a record version with no rejection fields populated.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        status: Status,
        buyer: Party,
        seller: Party,
        goods: impl Into<String>,
        price: Amount,
        proposer: Party,
        consenter: Party,
        linear_id: LinearId,
    ) -> Self {
        Self {
            status,
            buyer,
            seller,
            goods: goods.into(),
            price,
            proposer,
            consenter,
            rejection_reason: None,
            rejected_by: None,
            linear_id,
        }
    }

    /// Populate the rejection fields, for `Rejected` record versions.
    pub fn with_rejection(mut self, reason: impl Into<String>, rejected_by: Party) -> Self {
        self.rejection_reason = Some(reason.into());
        self.rejected_by = Some(rejected_by);
        self
    }

    /// The parties on the record: always the buyer and the seller.
    pub fn participants(&self) -> [&Party; 2] {
        [&self.buyer, &self.seller]
    }
}

/// A candidate ledger change: consumed inputs, produced outputs, one
/// intent, and the set of identities that signed it.
///
/// The transaction is the engine's entire universe. It carries no
/// reference to ledger history or to other transactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub inputs: Vec<Agreement>,
    pub outputs: Vec<Agreement>,
    pub intent: Intent,
    pub signers: BTreeSet<Party>,
}

impl Transaction {
    /// Create an empty transaction with the given intent.
    pub fn new(intent: Intent) -> Self {
        Self {
            inputs: Vec::new(),
            outputs: Vec::new(),
            intent,
            signers: BTreeSet::new(),
        }
    }

    /// Add a consumed record version.
    pub fn with_input(mut self, input: Agreement) -> Self {
        self.inputs.push(input);
        self
    }

    /// Add a produced record version.
    pub fn with_output(mut self, output: Agreement) -> Self {
        self.outputs.push(output);
        self
    }

    /// Add a signer identity. Duplicates collapse; signers form a set.
    pub fn with_signer(mut self, signer: Party) -> Self {
        self.signers.insert(signer);
        self
    }
}
