//! Validation errors
//!
//! Failures detected locally, before any request leaves the client. Each
//! variant's display text is the exact message shown to the user.

use crate::models::MasterTable;
use thiserror::Error;

/// A locally-detected validation failure; no state is mutated and no
/// request is sent when one of these is raised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Production line item needs both selections
    #[error("Please select both item and machine")]
    ItemAndMachineRequired,

    /// Sale line item needs an item selection
    #[error("Please select an item")]
    ItemRequired,

    /// Production submission needs an operator
    #[error("Please select an operator")]
    OperatorRequired,

    /// Sale submission needs a party
    #[error("Please select a party")]
    PartyRequired,

    /// Production submission needs at least one staged line item
    #[error("Please add at least one production item")]
    NoProductionItems,

    /// Sale submission needs at least one staged line item
    #[error("Please add at least one sale item")]
    NoSaleItems,

    /// Master-data record needs a name
    #[error("{} name is required", .0.singular())]
    NameRequired(MasterTable),

    /// User creation needs both credentials
    #[error("Username and password are required")]
    CredentialsRequired,
}
