use crate::domain::model::{TransactionRecord, TriageReport};
use crate::utils::error::Result;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn input_file(&self) -> Option<&str>;
    fn output_path(&self) -> &str;
    fn amount_threshold(&self) -> f64;
    fn high_risk_countries(&self) -> &[String];
    fn account_types(&self) -> &[String];
}

pub trait Pipeline: Send + Sync {
    fn extract(&self) -> Result<Vec<TransactionRecord>>;
    fn evaluate(&self, records: Vec<TransactionRecord>) -> Result<TriageReport>;
    fn load(&self, report: &TriageReport) -> Result<String>;
}
