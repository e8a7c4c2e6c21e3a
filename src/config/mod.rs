pub mod cli;
pub mod toml_config;

use crate::core::record::DEFAULT_ACCOUNT_TYPES;
use crate::core::suspicion::DEFAULT_AMOUNT_THRESHOLD;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, TriageError};
use crate::utils::validation::{
    validate_non_empty_set, validate_path, validate_positive_amount, Validate,
};
use clap::Parser;
use toml_config::RulesConfig;

#[derive(Debug, Clone, Parser)]
#[command(name = "txn-triage")]
#[command(about = "Validates a transaction export and flags suspicious records")]
pub struct CliConfig {
    /// Transaction export (CSV). Without it a built-in demo batch is triaged.
    #[arg(long)]
    pub input: Option<String>,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// TOML rules file; explicit flags below override it.
    #[arg(long)]
    pub rules: Option<String>,

    #[arg(long)]
    pub amount_threshold: Option<f64>,

    #[arg(long, value_delimiter = ',')]
    pub high_risk_countries: Vec<String>,

    #[arg(long, value_delimiter = ',')]
    pub account_types: Vec<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Fully-resolved run configuration: CLI flags over rules file over defaults.
#[derive(Debug, Clone)]
pub struct TriageConfig {
    pub input: Option<String>,
    pub output_path: String,
    pub amount_threshold: f64,
    pub high_risk_countries: Vec<String>,
    pub account_types: Vec<String>,
}

impl CliConfig {
    pub fn resolve(self) -> Result<TriageConfig> {
        let rules = match &self.rules {
            Some(path) => RulesConfig::from_file(path)?,
            None => RulesConfig::default(),
        };

        let input = match self.input {
            Some(path) => Some(resolve_input_path(&path)?),
            None => None,
        };

        let amount_threshold = self
            .amount_threshold
            .or_else(|| rules.amount_threshold())
            .unwrap_or(DEFAULT_AMOUNT_THRESHOLD);

        let high_risk_countries = if !self.high_risk_countries.is_empty() {
            self.high_risk_countries
        } else {
            rules.high_risk_countries().unwrap_or_default().to_vec()
        };

        let account_types = if !self.account_types.is_empty() {
            self.account_types
        } else {
            rules
                .account_types()
                .map(|types| types.to_vec())
                .unwrap_or_else(|| DEFAULT_ACCOUNT_TYPES.iter().map(|s| s.to_string()).collect())
        };

        Ok(TriageConfig {
            input,
            output_path: self.output_path,
            amount_threshold,
            high_risk_countries,
            account_types,
        })
    }
}

fn resolve_input_path(path: &str) -> Result<String> {
    let canonical =
        std::fs::canonicalize(path).map_err(|e| TriageError::InvalidConfigValueError {
            field: "input".to_string(),
            value: path.to_string(),
            reason: format!("Input file not accessible: {}", e),
        })?;
    Ok(canonical.to_string_lossy().into_owned())
}

impl ConfigProvider for TriageConfig {
    fn input_file(&self) -> Option<&str> {
        self.input.as_deref()
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn amount_threshold(&self) -> f64 {
        self.amount_threshold
    }

    fn high_risk_countries(&self) -> &[String] {
        &self.high_risk_countries
    }

    fn account_types(&self) -> &[String] {
        &self.account_types
    }
}

impl Validate for TriageConfig {
    fn validate(&self) -> Result<()> {
        validate_path("output_path", &self.output_path)?;
        validate_positive_amount("amount_threshold", self.amount_threshold)?;
        validate_non_empty_set("account_types", &self.account_types)?;
        if let Some(input) = &self.input {
            validate_path("input", input)?;
        }
        Ok(())
    }
}
