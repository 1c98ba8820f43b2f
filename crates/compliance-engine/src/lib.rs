pub mod clock;
pub mod config;
pub mod error;
pub mod leakage;
pub mod metrics;
pub mod numeric;
pub mod patterns;
pub mod rules;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{CodeYearThresholds, EngineConfig};
pub use error::{ComplianceError, Result};
pub use metrics::{MetricLabels, MetricsObserver, NoopObserver, Outcome, TracingObserver};

use shared_types::{ComplianceResult, MeasurementInput, PressureConversion};

/// ComplianceEngine entry point
///
/// Bundles the code-year threshold table with the leakage calculators. The
/// free functions in [`leakage`] and [`rules`] remain usable on their own.
#[derive(Debug, Clone, Default)]
pub struct ComplianceEngine {
    config: EngineConfig,
}

impl ComplianceEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Normalize a measurement and classify it against `code_year`
    /// (the configured default when `None`).
    pub fn evaluate(
        &self,
        input: &MeasurementInput,
        code_year: Option<&str>,
        observer: Option<&dyn MetricsObserver>,
    ) -> Result<ComplianceResult> {
        let metrics = leakage::validate_measurement(input)?;
        self.check_thresholds(metrics.tdl, metrics.dlo, code_year, observer)
    }

    /// Classify already-normalized TDL/DLO against a configured code year
    pub fn check_thresholds(
        &self,
        tdl: f64,
        dlo: f64,
        code_year: Option<&str>,
        observer: Option<&dyn MetricsObserver>,
    ) -> Result<ComplianceResult> {
        let code_year = code_year.unwrap_or(&self.config.default_code_year);
        let limits = self.config.thresholds_for(code_year)?;
        leakage::check_against_limits(tdl, dlo, limits, code_year, observer)
    }

    pub fn convert(&self, conversion: &PressureConversion) -> Result<f64> {
        leakage::convert(conversion)
    }
}
