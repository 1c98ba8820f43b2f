//! Code-year threshold configuration
//!
//! Leakage limits are keyed by energy code year and loaded from TOML, so a
//! jurisdiction adopting a new code edition only needs a config change:
//!
//! ```toml
//! default_code_year = "2020"
//!
//! [[code_years]]
//! year = "2020"
//! tdl_limit = 4.0
//! dlo_limit = 3.0
//! ```
//!
//! The power-law exponent and outlier tolerance are constants, not settings.

use crate::error::{ComplianceError, Result};
use crate::leakage::threshold::{LeakageLimits, DEFAULT_CODE_YEAR};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Leakage limits for one code edition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeYearThresholds {
    pub year: String,
    pub tdl_limit: f64,
    pub dlo_limit: f64,
}

impl CodeYearThresholds {
    pub fn limits(&self) -> LeakageLimits {
        LeakageLimits {
            tdl_limit: self.tdl_limit,
            dlo_limit: self.dlo_limit,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default = "default_code_year")]
    pub default_code_year: String,
    pub code_years: Vec<CodeYearThresholds>,
}

fn default_code_year() -> String {
    DEFAULT_CODE_YEAR.to_string()
}

impl Default for EngineConfig {
    fn default() -> Self {
        let limits = LeakageLimits::MN_2020;
        Self {
            default_code_year: default_code_year(),
            code_years: vec![CodeYearThresholds {
                year: DEFAULT_CODE_YEAR.to_string(),
                tdl_limit: limits.tdl_limit,
                dlo_limit: limits.dlo_limit,
            }],
        }
    }
}

impl EngineConfig {
    /// Load and validate configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML is malformed,
    /// or [`validate`](Self::validate) rejects the table.
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::from_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        debug!(
            path = %path.display(),
            code_years = config.code_years.len(),
            "loaded compliance engine config"
        );
        Ok(config)
    }

    /// Parse and validate configuration from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> anyhow::Result<Self> {
        let config: EngineConfig = toml::from_str(s).context("Failed to parse TOML")?;
        config.validate()?;
        Ok(config)
    }

    /// Reject non-positive limits, duplicate years and a default year with no entry
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.code_years.is_empty() {
            anyhow::bail!("At least one code year must be configured");
        }

        let mut seen = HashSet::new();
        for entry in &self.code_years {
            if !seen.insert(entry.year.as_str()) {
                anyhow::bail!("Duplicate code year: {}", entry.year);
            }
            for (name, value) in [("tdl_limit", entry.tdl_limit), ("dlo_limit", entry.dlo_limit)] {
                if !value.is_finite() || value <= 0.0 {
                    anyhow::bail!(
                        "Code year {}: {} must be a positive number (found {})",
                        entry.year,
                        name,
                        value
                    );
                }
            }
        }

        if !seen.contains(self.default_code_year.as_str()) {
            anyhow::bail!(
                "Default code year {} has no configured thresholds",
                self.default_code_year
            );
        }

        Ok(())
    }

    pub fn thresholds_for(&self, code_year: &str) -> Result<LeakageLimits> {
        self.code_years
            .iter()
            .find(|entry| entry.year == code_year)
            .map(CodeYearThresholds::limits)
            .ok_or_else(|| {
                ComplianceError::invalid(
                    "code year",
                    format!("{} has no configured thresholds", code_year),
                )
            })
    }

    pub fn supported_years(&self) -> Vec<&str> {
        self.code_years.iter().map(|entry| entry.year.as_str()).collect()
    }
}
