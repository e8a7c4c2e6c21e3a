//! Builds the two triage tables: per-record findings through a pure mapping,
//! then a fold over the input sequence that preserves input order.

use crate::core::record::RecordValidator;
use crate::core::suspicion::SuspicionDetector;
use crate::domain::model::{
    ComplianceEntry, RecordFindings, SuspicionEntry, TransactionRecord, TriageReport,
};
use crate::domain::ports::ConfigProvider;
use chrono::NaiveDate;

/// Composes the record validator and the suspicion detector over a batch.
#[derive(Debug, Clone, Default)]
pub struct RecordEvaluator {
    validator: RecordValidator,
    detector: SuspicionDetector,
}

impl RecordEvaluator {
    pub fn new(validator: RecordValidator, detector: SuspicionDetector) -> Self {
        Self {
            validator,
            detector,
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(
            RecordValidator::new(config.account_types().to_vec()),
            SuspicionDetector::new(
                config.amount_threshold(),
                config.high_risk_countries().to_vec(),
            ),
        )
    }

    /// Pure mapping for one record. Each record is evaluated exactly once;
    /// both checks see the same `today`.
    pub fn evaluate_record(
        &self,
        record: &TransactionRecord,
        today: NaiveDate,
    ) -> RecordFindings {
        RecordFindings {
            issues: self.validator.validate(record, today),
            reasons: self.detector.detect(record),
        }
    }

    /// Folds the whole input into the two tables. A record lands in the
    /// compliance table iff it has issues and in the suspicion table iff a
    /// risk predicate fired; both tables keep input order. Nothing is emitted
    /// until the full batch has been processed.
    pub fn aggregate(&self, records: &[TransactionRecord], today: NaiveDate) -> TriageReport {
        records.iter().fold(
            TriageReport {
                total_records: records.len(),
                ..TriageReport::default()
            },
            |mut report, record| {
                let RecordFindings { issues, reasons } = self.evaluate_record(record, today);

                if !issues.is_empty() {
                    report.compliance.push(ComplianceEntry {
                        transaction_id: record.transaction_id.clone(),
                        issues,
                    });
                }
                if !reasons.is_empty() {
                    report.suspicious.push(SuspicionEntry {
                        record: record.clone(),
                        reasons,
                    });
                }

                report
            },
        )
    }
}
