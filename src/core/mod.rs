pub mod engine;
pub mod pipeline;
pub mod record;
pub mod report;
pub mod suspicion;
pub mod validators;

pub use crate::domain::model::{
    ComplianceEntry, RecordFindings, SuspicionEntry, SuspicionReason, TransactionRecord,
    TriageReport, ValidationIssue,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::domain::model::TransactionRecord;

    /// A record that passes every field check with a mid-2023 reference date.
    pub(crate) fn valid_record() -> TransactionRecord {
        TransactionRecord {
            transaction_id: "TXN0001".to_string(),
            account_number: "GB29NWBK60161331926819".to_string(),
            customer_email: "jane.doe@example.com".to_string(),
            customer_phone: "+1 555 010 9999".to_string(),
            transaction_amount: 250.0,
            card_expiry: "12/30".to_string(),
            currency: "USD".to_string(),
            status: "Completed".to_string(),
            timestamp: "2023-06-01T12:00:00Z".to_string(),
            account_type: "Savings".to_string(),
            transaction_type: "Debit".to_string(),
            available_balance: 1200.0,
            customer_name: "Jane Doe".to_string(),
            card_number: "4111111111111111".to_string(),
            country: Some("CountryA".to_string()),
        }
    }
}
