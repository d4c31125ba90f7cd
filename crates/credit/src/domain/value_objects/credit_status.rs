//! CreditStatus - Lifecycle state of a Credit

use serde::{Deserialize, Serialize};

/// Credit lifecycle status
///
/// Only `InProgress` is assigned here; the terminal states are reached
/// through processes outside this system.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CreditStatus {
    #[default]
    InProgress,
    Approved,
    Reject,
}

impl std::fmt::Display for CreditStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CreditStatus::InProgress => write!(f, "IN_PROGRESS"),
            CreditStatus::Approved => write!(f, "APPROVED"),
            CreditStatus::Reject => write!(f, "REJECT"),
        }
    }
}

impl std::str::FromStr for CreditStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "IN_PROGRESS" => Ok(CreditStatus::InProgress),
            "APPROVED" => Ok(CreditStatus::Approved),
            "REJECT" => Ok(CreditStatus::Reject),
            _ => Err(format!("Unknown credit status: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text_matches_serde() {
        for status in [
            CreditStatus::InProgress,
            CreditStatus::Approved,
            CreditStatus::Reject,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status));
            assert_eq!(status.to_string().parse::<CreditStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_unknown_status() {
        assert!("CANCELLED".parse::<CreditStatus>().is_err());
    }
}
