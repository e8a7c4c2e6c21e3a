//! File-based triage pipeline: CSV export in, two result tables plus a JSON
//! summary out. The evaluation core never touches the filesystem; all I/O
//! goes through the `Storage` port.

use crate::core::report::RecordEvaluator;
use crate::domain::model::{TransactionRecord, TriageReport};
use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
use crate::utils::error::{Result, TriageError};
use chrono::Utc;

pub const COMPLIANCE_FILE: &str = "compliance_issues.csv";
pub const SUSPICIOUS_FILE: &str = "suspicious_transactions.csv";
pub const SUMMARY_FILE: &str = "summary.json";

/// Columns a transaction export must carry. `Country` is optional and
/// deliberately absent here.
pub const REQUIRED_COLUMNS: [&str; 14] = [
    "Transaction ID",
    "Account Number",
    "Customer Email",
    "Customer Phone",
    "Transaction Amount",
    "Card Expiry",
    "Currency",
    "Status",
    "Timestamp",
    "Account Type",
    "Transaction Type",
    "Available Balance",
    "Customer Name",
    "Card Number",
];

pub struct CsvPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    evaluator: RecordEvaluator,
}

impl<S: Storage, C: ConfigProvider> CsvPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        let evaluator = RecordEvaluator::from_config(&config);
        Self {
            storage,
            config,
            evaluator,
        }
    }

    fn parse_csv(&self, data: &[u8]) -> Result<Vec<TransactionRecord>> {
        let mut reader = csv::Reader::from_reader(data);

        let headers = reader.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(TriageError::SchemaError {
                    column: column.to_string(),
                    message: "required column is missing from the input".to_string(),
                });
            }
        }

        let mut records = Vec::new();
        for (row, result) in reader.deserialize::<TransactionRecord>().enumerate() {
            let record = result.map_err(|e| TriageError::SchemaError {
                column: format!("row {}", row + 2),
                message: e.to_string(),
            })?;
            records.push(record);
        }
        Ok(records)
    }

    fn compliance_csv(&self, report: &TriageReport) -> Result<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(["Transaction ID", "Issues"])?;
        for entry in &report.compliance {
            let issues = entry.issues_joined();
            writer.write_record([entry.transaction_id.as_str(), issues.as_str()])?;
        }
        writer
            .into_inner()
            .map_err(|e| TriageError::IoError(e.into_error()))
    }

    fn suspicious_csv(&self, report: &TriageReport) -> Result<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        let mut header: Vec<&str> = REQUIRED_COLUMNS.to_vec();
        header.push("Country");
        header.push("Reasons");
        writer.write_record(&header)?;

        for entry in &report.suspicious {
            let r = &entry.record;
            let amount = r.transaction_amount.to_string();
            let balance = r.available_balance.to_string();
            let reasons = entry.reasons_joined();
            writer.write_record([
                r.transaction_id.as_str(),
                r.account_number.as_str(),
                r.customer_email.as_str(),
                r.customer_phone.as_str(),
                amount.as_str(),
                r.card_expiry.as_str(),
                r.currency.as_str(),
                r.status.as_str(),
                r.timestamp.as_str(),
                r.account_type.as_str(),
                r.transaction_type.as_str(),
                balance.as_str(),
                r.customer_name.as_str(),
                r.card_number.as_str(),
                r.country.as_deref().unwrap_or(""),
                reasons.as_str(),
            ])?;
        }
        writer
            .into_inner()
            .map_err(|e| TriageError::IoError(e.into_error()))
    }

    fn summary_json(&self, report: &TriageReport) -> Result<Vec<u8>> {
        let summary = serde_json::json!({
            "total_records": report.total_records,
            "records_with_issues": report.compliance.len(),
            "suspicious_records": report.suspicious.len(),
        });
        Ok(serde_json::to_vec_pretty(&summary)?)
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for CsvPipeline<S, C> {
    fn extract(&self) -> Result<Vec<TransactionRecord>> {
        match self.config.input_file() {
            Some(path) => {
                tracing::debug!("Reading transaction export from: {}", path);
                let data = self.storage.read_file(path)?;
                self.parse_csv(&data)
            }
            None => {
                tracing::warn!("No input file configured, generating demo batch");
                Ok(demo_records())
            }
        }
    }

    fn evaluate(&self, records: Vec<TransactionRecord>) -> Result<TriageReport> {
        // one clock read per run; every record sees the same date
        let today = Utc::now().date_naive();
        tracing::debug!("Evaluating {} records as of {}", records.len(), today);
        Ok(self.evaluator.aggregate(&records, today))
    }

    fn load(&self, report: &TriageReport) -> Result<String> {
        self.storage
            .write_file(COMPLIANCE_FILE, &self.compliance_csv(report)?)?;
        self.storage
            .write_file(SUSPICIOUS_FILE, &self.suspicious_csv(report)?)?;
        self.storage
            .write_file(SUMMARY_FILE, &self.summary_json(report)?)?;

        tracing::debug!(
            "Wrote {} compliance rows and {} suspicious rows",
            report.compliance.len(),
            report.suspicious.len()
        );
        Ok(self.config.output_path().to_string())
    }
}

/// Small deterministic batch for demo runs: a clean record, two malformed
/// ones and a suspicious one.
fn demo_records() -> Vec<TransactionRecord> {
    vec![
        TransactionRecord {
            transaction_id: "DEMO0001".to_string(),
            account_number: "GB29NWBK60161331926819".to_string(),
            customer_email: "alice@example.com".to_string(),
            customer_phone: "+1 555 010 1000".to_string(),
            transaction_amount: 120.50,
            card_expiry: "11/32".to_string(),
            currency: "USD".to_string(),
            status: "Completed".to_string(),
            timestamp: "2023-06-01T09:15:00Z".to_string(),
            account_type: "Savings".to_string(),
            transaction_type: "Debit".to_string(),
            available_balance: 4200.0,
            customer_name: "Alice Smith".to_string(),
            card_number: "4111111111111111".to_string(),
            country: Some("CountryA".to_string()),
        },
        TransactionRecord {
            transaction_id: "DEMO0002".to_string(),
            account_number: "not-an-iban".to_string(),
            customer_email: "bob_at_example.com".to_string(),
            customer_phone: "12345".to_string(),
            transaction_amount: -50.0,
            card_expiry: "01/20".to_string(),
            currency: "XYZ".to_string(),
            status: "Archived".to_string(),
            timestamp: "2023-06-01 10:00:00".to_string(),
            account_type: "Offshore".to_string(),
            transaction_type: "Transfer".to_string(),
            available_balance: 0.0,
            customer_name: "B0b".to_string(),
            card_number: "1234".to_string(),
            country: None,
        },
        TransactionRecord {
            transaction_id: "DEMO0003".to_string(),
            account_number: "DE44500105175407324931".to_string(),
            customer_email: "carol@example.org".to_string(),
            customer_phone: "+44 20 7946 0958".to_string(),
            transaction_amount: 15_000.0,
            card_expiry: "09/31".to_string(),
            currency: "EUR".to_string(),
            status: "Pending".to_string(),
            timestamp: "2023-06-02T14:30:00Z".to_string(),
            account_type: "Credit".to_string(),
            transaction_type: "Credit".to_string(),
            available_balance: 52_000.0,
            customer_name: "Carol Jones".to_string(),
            card_number: "5555555555554444".to_string(),
            country: Some("Country1".to_string()),
        },
        TransactionRecord {
            transaction_id: "DEMO0004".to_string(),
            account_number: "FR1420041010050500013M02606".to_string(),
            customer_email: "dave@example.net".to_string(),
            customer_phone: "5550102000x44".to_string(),
            transaction_amount: 75.0,
            card_expiry: "12/27".to_string(),
            currency: "GBP".to_string(),
            status: "Failed".to_string(),
            timestamp: "2023-06-03T08:45:30Z".to_string(),
            account_type: "Checking".to_string(),
            transaction_type: "Debit".to_string(),
            available_balance: 310.75,
            customer_name: "Dave Brown".to_string(),
            card_number: "4111 1111 1111 1111".to_string(),
            country: Some("CountryB".to_string()),
        },
    ]
}
