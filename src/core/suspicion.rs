//! Risk screening: flags transactions worth a manual look regardless of
//! whether they are otherwise well-formed.

use crate::domain::model::{SuspicionReason, TransactionRecord};

pub const DEFAULT_AMOUNT_THRESHOLD: f64 = 10_000.0;

/// Two independent predicates, each contributing a typed reason: an amount
/// threshold and a high-risk country watch-list. Reasons stay distinguishable
/// by variant, never by message text.
#[derive(Debug, Clone)]
pub struct SuspicionDetector {
    amount_threshold: f64,
    high_risk_countries: Vec<String>,
}

impl Default for SuspicionDetector {
    fn default() -> Self {
        Self::new(DEFAULT_AMOUNT_THRESHOLD, Vec::new())
    }
}

impl SuspicionDetector {
    pub fn new(amount_threshold: f64, high_risk_countries: Vec<String>) -> Self {
        Self {
            amount_threshold,
            high_risk_countries,
        }
    }

    /// Returns one reason per predicate that fired, amount check first.
    /// An empty list means the record is not suspicious.
    pub fn detect(&self, record: &TransactionRecord) -> Vec<SuspicionReason> {
        let mut reasons = Vec::new();

        if record.transaction_amount > self.amount_threshold {
            reasons.push(SuspicionReason::AmountExceeded {
                amount: record.transaction_amount,
                threshold: self.amount_threshold,
            });
        }

        if let Some(country) = &record.country {
            if self.high_risk_countries.iter().any(|c| c == country) {
                reasons.push(SuspicionReason::HighRiskCountry {
                    country: country.clone(),
                });
            }
        }

        reasons
    }
}
