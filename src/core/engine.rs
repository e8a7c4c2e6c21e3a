use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

/// Drives one triage run: extract, evaluate, load. Either the whole batch is
/// processed and both tables written, or the run fails with no output.
pub struct TriageEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> TriageEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<String> {
        tracing::info!("Starting triage run");

        tracing::info!("Loading transaction records...");
        let records = self.pipeline.extract()?;
        tracing::info!("Loaded {} records", records.len());

        tracing::info!("Evaluating records...");
        let report = self.pipeline.evaluate(records)?;
        tracing::info!(
            "Found {} records with compliance issues, {} suspicious",
            report.compliance.len(),
            report.suspicious.len()
        );

        tracing::info!("Writing result tables...");
        let output_path = self.pipeline.load(&report)?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{TransactionRecord, TriageReport};
    use crate::utils::error::TriageError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingPipeline {
        extracts: AtomicUsize,
        evaluates: AtomicUsize,
        loads: AtomicUsize,
        fail_extract: bool,
    }

    impl CountingPipeline {
        fn new(fail_extract: bool) -> Self {
            Self {
                extracts: AtomicUsize::new(0),
                evaluates: AtomicUsize::new(0),
                loads: AtomicUsize::new(0),
                fail_extract,
            }
        }
    }

    impl Pipeline for CountingPipeline {
        fn extract(&self) -> Result<Vec<TransactionRecord>> {
            self.extracts.fetch_add(1, Ordering::SeqCst);
            if self.fail_extract {
                return Err(TriageError::SchemaError {
                    column: "Transaction ID".to_string(),
                    message: "required column is missing from the input".to_string(),
                });
            }
            Ok(Vec::new())
        }

        fn evaluate(&self, _records: Vec<TransactionRecord>) -> Result<TriageReport> {
            self.evaluates.fetch_add(1, Ordering::SeqCst);
            Ok(TriageReport::default())
        }

        fn load(&self, _report: &TriageReport) -> Result<String> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            Ok("./output".to_string())
        }
    }

    #[test]
    fn test_run_invokes_each_stage_once() {
        let engine = TriageEngine::new(CountingPipeline::new(false));
        assert_eq!(engine.run().unwrap(), "./output");
        assert_eq!(engine.pipeline.extracts.load(Ordering::SeqCst), 1);
        assert_eq!(engine.pipeline.evaluates.load(Ordering::SeqCst), 1);
        assert_eq!(engine.pipeline.loads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_schema_error_aborts_before_any_output() {
        let engine = TriageEngine::new(CountingPipeline::new(true));
        assert!(engine.run().is_err());
        assert_eq!(engine.pipeline.evaluates.load(Ordering::SeqCst), 0);
        assert_eq!(engine.pipeline.loads.load(Ordering::SeqCst), 0);
    }
}
