pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig, TriageConfig};
pub use core::{engine::TriageEngine, pipeline::CsvPipeline, report::RecordEvaluator};
pub use domain::model::{
    ComplianceEntry, SuspicionEntry, SuspicionReason, TransactionRecord, TriageReport,
    ValidationIssue,
};
pub use utils::error::{Result, TriageError};
