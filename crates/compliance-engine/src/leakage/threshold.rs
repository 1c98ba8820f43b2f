// Pass/fail classification against code-year leakage limits
use crate::error::Result;
use crate::metrics::{MetricLabels, MetricsObserver, Outcome};
use crate::numeric::{require_non_negative, round2};
use serde::{Deserialize, Serialize};
use shared_types::{ComplianceResult, LeakageMetric};

/// Code year applied when the caller does not name one
pub const DEFAULT_CODE_YEAR: &str = "2020";

/// Maximum TDL and DLO, in CFM25 per 100 sq ft
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LeakageLimits {
    pub tdl_limit: f64,
    pub dlo_limit: f64,
}

impl LeakageLimits {
    /// Minnesota 2020 Energy Code
    pub const MN_2020: LeakageLimits = LeakageLimits {
        tdl_limit: 4.0,
        dlo_limit: 3.0,
    };
}

/// Classify TDL/DLO against the Minnesota 2020 limits.
///
/// `code_year` is echoed into the result. When an observer is supplied it
/// receives one pass/fail tally for TDL and one for DLO.
pub fn check_compliance_threshold(
    tdl: f64,
    dlo: f64,
    code_year: &str,
    observer: Option<&dyn MetricsObserver>,
) -> Result<ComplianceResult> {
    check_against_limits(tdl, dlo, LeakageLimits::MN_2020, code_year, observer)
}

/// Same as [`check_compliance_threshold`] with caller-chosen limits
pub fn check_against_limits(
    tdl: f64,
    dlo: f64,
    limits: LeakageLimits,
    code_year: &str,
    observer: Option<&dyn MetricsObserver>,
) -> Result<ComplianceResult> {
    let tdl = require_non_negative("tdl", tdl)?;
    let dlo = require_non_negative("dlo", dlo)?;

    let tdl_compliant = tdl <= limits.tdl_limit;
    let dlo_compliant = dlo <= limits.dlo_limit;

    if let Some(observer) = observer {
        observer.increment(&MetricLabels {
            metric_type: LeakageMetric::Tdl,
            outcome: Outcome::from_compliant(tdl_compliant),
        });
        observer.increment(&MetricLabels {
            metric_type: LeakageMetric::Dlo,
            outcome: Outcome::from_compliant(dlo_compliant),
        });
    }

    Ok(ComplianceResult {
        tdl,
        dlo,
        tdl_limit: limits.tdl_limit,
        dlo_limit: limits.dlo_limit,
        tdl_compliant,
        dlo_compliant,
        overall_compliant: tdl_compliant && dlo_compliant,
        tdl_margin: round2(limits.tdl_limit - tdl),
        dlo_margin: round2(limits.dlo_limit - dlo),
        code_year: code_year.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Tally {
        seen: RefCell<Vec<MetricLabels>>,
    }

    impl MetricsObserver for Tally {
        fn increment(&self, labels: &MetricLabels) {
            self.seen.borrow_mut().push(*labels);
        }
    }

    #[test]
    fn test_passing_result() {
        let result = check_compliance_threshold(3.5, 2.0, DEFAULT_CODE_YEAR, None).unwrap();
        assert_eq!(
            result,
            ComplianceResult {
                tdl: 3.5,
                dlo: 2.0,
                tdl_limit: 4.0,
                dlo_limit: 3.0,
                tdl_compliant: true,
                dlo_compliant: true,
                overall_compliant: true,
                tdl_margin: 0.5,
                dlo_margin: 1.0,
                code_year: "2020".to_string(),
            }
        );
    }

    #[test]
    fn test_failing_result_has_negative_margins() {
        let result = check_compliance_threshold(4.5, 3.5, "2020", None).unwrap();
        assert!(!result.overall_compliant);
        assert!(!result.tdl_compliant);
        assert!(!result.dlo_compliant);
        assert_eq!(result.tdl_margin, -0.5);
        assert_eq!(result.dlo_margin, -0.5);
    }

    #[test]
    fn test_limit_is_inclusive() {
        let result = check_compliance_threshold(4.0, 3.0, "2020", None).unwrap();
        assert!(result.overall_compliant);
        assert_eq!(result.tdl_margin, 0.0);
    }

    #[test]
    fn test_single_metric_failure_fails_overall() {
        let result = check_compliance_threshold(3.9, 3.01, "2020", None).unwrap();
        assert!(result.tdl_compliant);
        assert!(!result.dlo_compliant);
        assert!(!result.overall_compliant);
        assert_eq!(result.dlo_margin, -0.01);
    }

    #[test]
    fn test_margins_rounded() {
        let result = check_compliance_threshold(1.333, 0.0, "2020", None).unwrap();
        assert_eq!(result.tdl_margin, 2.67);
        assert_eq!(result.dlo_margin, 3.0);
    }

    #[test]
    fn test_code_year_echoed() {
        let result = check_compliance_threshold(1.0, 1.0, "2024-draft", None).unwrap();
        assert_eq!(result.code_year, "2024-draft");
    }

    #[test]
    fn test_rejects_negative_and_non_finite() {
        assert!(check_compliance_threshold(-0.1, 1.0, "2020", None).is_err());
        assert!(check_compliance_threshold(1.0, f64::NAN, "2020", None).is_err());
        assert!(check_compliance_threshold(f64::INFINITY, 1.0, "2020", None).is_err());
    }

    #[test]
    fn test_observer_receives_one_tally_per_metric() {
        let tally = Tally::default();
        check_compliance_threshold(4.5, 2.0, "2020", Some(&tally)).unwrap();
        let seen = tally.seen.borrow();
        assert_eq!(
            *seen,
            vec![
                MetricLabels {
                    metric_type: LeakageMetric::Tdl,
                    outcome: Outcome::Fail,
                },
                MetricLabels {
                    metric_type: LeakageMetric::Dlo,
                    outcome: Outcome::Pass,
                },
            ]
        );
    }

    #[test]
    fn test_observer_not_called_on_error() {
        let tally = Tally::default();
        assert!(check_compliance_threshold(-1.0, 2.0, "2020", Some(&tally)).is_err());
        assert!(tally.seen.borrow().is_empty());
    }

    #[test]
    fn test_custom_limits() {
        let limits = LeakageLimits {
            tdl_limit: 6.0,
            dlo_limit: 4.0,
        };
        let result = check_against_limits(5.0, 3.5, limits, "2012", None).unwrap();
        assert!(result.overall_compliant);
        assert_eq!(result.tdl_margin, 1.0);
    }

    #[test]
    fn test_observer_does_not_change_result() {
        let tally = Tally::default();
        let observed = check_compliance_threshold(3.2, 2.7, "2020", Some(&tally)).unwrap();
        let plain = check_compliance_threshold(3.2, 2.7, "2020", None).unwrap();
        assert_eq!(observed, plain);
        assert_eq!(observed.tdl_margin.to_bits(), plain.tdl_margin.to_bits());
    }
}
