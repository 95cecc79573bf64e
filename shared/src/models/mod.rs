//! Data models
//!
//! Master-data and user records shared between the client and the backend
//! API. All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod item;
pub mod machine;
pub mod operator;
pub mod party;
pub mod user;

// Re-exports
pub use item::*;
pub use machine::*;
pub use operator::*;
pub use party::*;
pub use user::*;

use serde::{Deserialize, Serialize};

/// Master-data table selector, sent as the `table` field of the
/// add/delete master requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MasterTable {
    Operators,
    Parties,
    Machines,
    Items,
}

impl MasterTable {
    /// Wire name of the table
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Operators => "operators",
            Self::Parties => "parties",
            Self::Machines => "machines",
            Self::Items => "items",
        }
    }

    /// Singular display name, used in user-facing messages
    pub fn singular(&self) -> &'static str {
        match self {
            Self::Operators => "Operator",
            Self::Parties => "Party",
            Self::Machines => "Machine",
            Self::Items => "Item",
        }
    }
}

impl std::fmt::Display for MasterTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Create payload for any master table, paired with its [`MasterTable`] tag
/// on the wire as `{ "table": …, "data": … }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MasterCreate {
    Operator(OperatorCreate),
    Party(PartyCreate),
    Machine(MachineCreate),
    Item(ItemCreate),
}

impl MasterCreate {
    /// The table this payload belongs to
    pub fn table(&self) -> MasterTable {
        match self {
            Self::Operator(_) => MasterTable::Operators,
            Self::Party(_) => MasterTable::Parties,
            Self::Machine(_) => MasterTable::Machines,
            Self::Item(_) => MasterTable::Items,
        }
    }

    /// The record name, required to be non-empty before submission
    pub fn name(&self) -> &str {
        match self {
            Self::Operator(p) => &p.name,
            Self::Party(p) => &p.name,
            Self::Machine(p) => &p.name,
            Self::Item(p) => &p.name,
        }
    }
}
