use serde::{Deserialize, Serialize};
use std::fmt;

/// One row of a transaction export. Field names follow the spreadsheet
/// headers so the CSV reader can deserialize rows directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    #[serde(rename = "Transaction ID")]
    pub transaction_id: String,
    #[serde(rename = "Account Number")]
    pub account_number: String,
    #[serde(rename = "Customer Email")]
    pub customer_email: String,
    #[serde(rename = "Customer Phone")]
    pub customer_phone: String,
    #[serde(rename = "Transaction Amount")]
    pub transaction_amount: f64,
    #[serde(rename = "Card Expiry")]
    pub card_expiry: String,
    #[serde(rename = "Currency")]
    pub currency: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
    #[serde(rename = "Account Type")]
    pub account_type: String,
    #[serde(rename = "Transaction Type")]
    pub transaction_type: String,
    #[serde(rename = "Available Balance")]
    pub available_balance: f64,
    #[serde(rename = "Customer Name")]
    pub customer_name: String,
    #[serde(rename = "Card Number")]
    pub card_number: String,
    #[serde(rename = "Country", default, deserialize_with = "empty_as_none")]
    pub country: Option<String>,
}

/// CSV has no notion of null; an absent column and an empty cell both mean
/// "no country".
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// Human-readable description of one failed field check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue(pub String);

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ValidationIssue {
    fn from(message: String) -> Self {
        ValidationIssue(message)
    }
}

impl From<&str> for ValidationIssue {
    fn from(message: &str) -> Self {
        ValidationIssue(message.to_string())
    }
}

/// Why a record was flagged for manual review. Typed so consumers never have
/// to classify reasons by message text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SuspicionReason {
    AmountExceeded { amount: f64, threshold: f64 },
    HighRiskCountry { country: String },
}

impl fmt::Display for SuspicionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuspicionReason::AmountExceeded { amount, threshold } => {
                write!(f, "Suspicious transaction amount ({} > {})", amount, threshold)
            }
            SuspicionReason::HighRiskCountry { country } => {
                write!(f, "High-risk country ({})", country)
            }
        }
    }
}

/// Row of the compliance-issues table. Only exists for records with at
/// least one issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceEntry {
    pub transaction_id: String,
    pub issues: Vec<ValidationIssue>,
}

impl ComplianceEntry {
    /// Semicolon-joined issue text, the format of the output table.
    pub fn issues_joined(&self) -> String {
        self.issues
            .iter()
            .map(|issue| issue.0.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Row of the suspicious-transactions table: the full record plus the
/// reasons that fired. Only exists for flagged records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuspicionEntry {
    pub record: TransactionRecord,
    pub reasons: Vec<SuspicionReason>,
}

impl SuspicionEntry {
    pub fn reasons_joined(&self) -> String {
        self.reasons
            .iter()
            .map(|reason| reason.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Findings for a single record, before aggregation.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordFindings {
    pub issues: Vec<ValidationIssue>,
    pub reasons: Vec<SuspicionReason>,
}

impl RecordFindings {
    pub fn is_suspicious(&self) -> bool {
        !self.reasons.is_empty()
    }
}

/// The two output tables of one triage run, in input order.
#[derive(Debug, Clone, Default)]
pub struct TriageReport {
    pub compliance: Vec<ComplianceEntry>,
    pub suspicious: Vec<SuspicionEntry>,
    pub total_records: usize,
}
