//! Customer - Credit applicant identity
//!
//! Pure domain entity without infrastructure dependencies.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Address;

/// Customer - Person who owns zero or more credits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Assigned by the store on first save
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    /// National tax identifier, unique across all customers
    pub cpf: String,
    pub email: String,
    pub income: Decimal,
    /// Opaque credential, stored as given; never serialized
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub address: Address,
}

/// Fields a customer may change after creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerUpdate {
    pub first_name: String,
    pub last_name: String,
    pub income: Decimal,
    pub zip_code: String,
    pub street: String,
}

impl Customer {
    /// Create a new, not yet persisted Customer
    pub fn new(
        first_name: String,
        last_name: String,
        cpf: String,
        email: String,
        income: Decimal,
        password_hash: String,
        address: Address,
    ) -> Self {
        Self {
            id: None,
            first_name,
            last_name,
            cpf,
            email,
            income,
            password_hash,
            address,
        }
    }

    /// Merge permitted fields into this record, keeping identity and credentials
    pub fn apply_update(self, update: CustomerUpdate) -> Self {
        Self {
            first_name: update.first_name,
            last_name: update.last_name,
            income: update.income,
            address: Address {
                zip_code: update.zip_code,
                street: update.street,
            },
            ..self
        }
    }
}
