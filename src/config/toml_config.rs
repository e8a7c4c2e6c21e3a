use crate::utils::error::{Result, TriageError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Rules file overriding the built-in defaults, e.g.:
///
/// ```toml
/// [suspicion]
/// amount_threshold = 10000.0
/// high_risk_countries = ["Country1", "Country2"]
///
/// [validation]
/// account_types = ["Savings", "Credit", "Checking"]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RulesConfig {
    pub suspicion: Option<SuspicionRules>,
    pub validation: Option<ValidationRules>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuspicionRules {
    pub amount_threshold: Option<f64>,
    pub high_risk_countries: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationRules {
    pub account_types: Option<Vec<String>>,
}

impl RulesConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(TriageError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| TriageError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` with the environment value; unknown variables
    /// are left as-is.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").expect("valid regex");

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn amount_threshold(&self) -> Option<f64> {
        self.suspicion.as_ref().and_then(|s| s.amount_threshold)
    }

    pub fn high_risk_countries(&self) -> Option<&[String]> {
        self.suspicion
            .as_ref()
            .and_then(|s| s.high_risk_countries.as_deref())
    }

    pub fn account_types(&self) -> Option<&[String]> {
        self.validation
            .as_ref()
            .and_then(|v| v.account_types.as_deref())
    }
}
