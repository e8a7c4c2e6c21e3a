//! Per-record rule evaluation: runs every field check in a fixed order and
//! collects the failures as human-readable issues.

use crate::core::validators;
use crate::domain::model::{TransactionRecord, ValidationIssue};
use chrono::NaiveDate;

pub const DEFAULT_ACCOUNT_TYPES: [&str; 3] = ["Savings", "Credit", "Checking"];

/// Applies all field validators to one record. The accepted account types
/// are configurable; everything else is fixed.
#[derive(Debug, Clone)]
pub struct RecordValidator {
    account_types: Vec<String>,
}

impl Default for RecordValidator {
    fn default() -> Self {
        Self::new(DEFAULT_ACCOUNT_TYPES.iter().map(|s| s.to_string()).collect())
    }
}

impl RecordValidator {
    pub fn new(account_types: Vec<String>) -> Self {
        Self { account_types }
    }

    /// Returns the issue list in check order; an empty list means the record
    /// is compliant. Numeric and categorical failures embed the offending
    /// value for auditability. `today` anchors the expiry check.
    pub fn validate(&self, record: &TransactionRecord, today: NaiveDate) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        if !validators::is_valid_account_number(&record.account_number) {
            issues.push("Invalid account number format".into());
        }
        if !validators::is_valid_email(&record.customer_email) {
            issues.push("Invalid email format".into());
        }
        if !validators::is_valid_phone(&record.customer_phone) {
            issues.push(format!("Invalid phone number format ({})", record.customer_phone).into());
        }
        if record.transaction_amount <= 0.0 {
            issues.push(
                format!(
                    "Transaction amount must be positive ({})",
                    record.transaction_amount
                )
                .into(),
            );
        }
        if !validators::is_valid_expiry(&record.card_expiry, today) {
            issues.push(
                format!("Card expiry date is invalid or past ({})", record.card_expiry).into(),
            );
        }
        if !validators::is_valid_currency(&record.currency) {
            issues.push(format!("Invalid currency code ({})", record.currency).into());
        }
        if !validators::is_valid_status(&record.status) {
            issues.push(format!("Invalid transaction status ({})", record.status).into());
        }
        if !validators::is_valid_timestamp(&record.timestamp) {
            issues.push(format!("Invalid timestamp format ({})", record.timestamp).into());
        }
        if !self.account_types.iter().any(|t| t == &record.account_type) {
            issues.push(format!("Invalid account type ({})", record.account_type).into());
        }
        if !validators::is_valid_transaction_type(&record.transaction_type) {
            issues.push(
                format!("Invalid transaction type ({})", record.transaction_type).into(),
            );
        }
        if record.available_balance <= 0.0 {
            issues.push(
                format!(
                    "Available balance must be positive ({})",
                    record.available_balance
                )
                .into(),
            );
        }
        if !validators::is_valid_customer_name(&record.customer_name) {
            issues.push(format!("Invalid customer name format ({})", record.customer_name).into());
        }
        if !validators::is_valid_card_number(&record.card_number) {
            issues.push(format!("Invalid card number ({})", record.card_number).into());
        }

        issues
    }
}
