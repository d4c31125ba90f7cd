//! Server configuration
//!
//! Read from Shuttle secrets, falling back to defaults.

use credit::{CreditPolicy, InstallmentWindow, UpperBound};

/// Runtime configuration for the credit API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    /// Months ahead the first installment may fall
    pub first_installment_max_months: u32,
    /// Whether the last day of that window is accepted
    pub first_installment_upper_bound: UpperBound,
    pub max_installments: i32,
}

impl ServerConfig {
    pub const MAX_MONTHS_KEY: &'static str = "FIRST_INSTALLMENT_MAX_MONTHS";
    pub const UPPER_BOUND_KEY: &'static str = "FIRST_INSTALLMENT_UPPER_BOUND";
    pub const MAX_INSTALLMENTS_KEY: &'static str = "MAX_INSTALLMENTS";

    /// Build from a key lookup (Shuttle `SecretStore::get` in production)
    pub fn from_lookup<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            first_installment_max_months: parse_or(
                &get,
                Self::MAX_MONTHS_KEY,
                defaults.first_installment_max_months,
            ),
            first_installment_upper_bound: parse_or(
                &get,
                Self::UPPER_BOUND_KEY,
                defaults.first_installment_upper_bound,
            ),
            max_installments: parse_or(&get, Self::MAX_INSTALLMENTS_KEY, defaults.max_installments)
                .max(CreditPolicy::MIN_INSTALLMENTS),
        }
    }

    pub fn credit_policy(&self) -> CreditPolicy {
        CreditPolicy::default()
            .with_first_installment(InstallmentWindow::new(
                self.first_installment_max_months,
                self.first_installment_upper_bound,
            ))
            .with_max_installments(self.max_installments)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            first_installment_max_months: InstallmentWindow::DEFAULT_MAX_MONTHS_AHEAD,
            first_installment_upper_bound: UpperBound::default(),
            max_installments: CreditPolicy::MAX_INSTALLMENTS,
        }
    }
}

fn parse_or<F, T>(get: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + std::fmt::Display,
{
    match get(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("⚠️  Invalid {}={:?}, using default {}", key, raw, default);
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup(&[]));
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.credit_policy(), CreditPolicy::default());
    }

    #[test]
    fn test_reads_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("FIRST_INSTALLMENT_MAX_MONTHS", "3"),
            ("FIRST_INSTALLMENT_UPPER_BOUND", "exclusive"),
            ("MAX_INSTALLMENTS", "24"),
        ]));

        let policy = config.credit_policy();
        assert_eq!(policy.first_installment.max_months_ahead, 3);
        assert_eq!(policy.first_installment.upper_bound, UpperBound::Exclusive);
        assert_eq!(policy.max_installments, 24);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("FIRST_INSTALLMENT_MAX_MONTHS", "two"),
            ("FIRST_INSTALLMENT_UPPER_BOUND", "sometimes"),
            ("MAX_INSTALLMENTS", "-4"),
        ]));

        assert_eq!(config.first_installment_max_months, 2);
        assert_eq!(config.first_installment_upper_bound, UpperBound::Inclusive);
        assert_eq!(config.max_installments, 1);
    }
}
