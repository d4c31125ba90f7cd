//! Address - Postal address embedded in a Customer

use serde::{Deserialize, Serialize};

/// Postal address
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub zip_code: String,
    pub street: String,
}

impl Address {
    pub fn new(zip_code: impl Into<String>, street: impl Into<String>) -> Self {
        Self {
            zip_code: zip_code.into(),
            street: street.into(),
        }
    }
}
