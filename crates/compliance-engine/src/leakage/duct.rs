// TDL / DLO normalization per RESNET / ASHRAE 152
use crate::error::{ComplianceError, Result};
use crate::numeric::{require_non_negative, require_positive, round2};
use shared_types::{LeakageMetrics, MeasurementInput};

/// CFM25 per 100 sq ft of conditioned floor area
fn per_hundred_square_feet(field: &'static str, cfm25: f64, floor_area: f64) -> Result<f64> {
    let cfm25 = require_non_negative(field, cfm25)?;
    let floor_area = require_positive("floor area", floor_area)?;
    Ok(round2(cfm25 / floor_area * 100.0))
}

/// Total Duct Leakage: `(cfm25_total / floor_area) * 100`, rounded to 2 decimals
pub fn calculate_tdl(cfm25_total: f64, floor_area: f64) -> Result<f64> {
    per_hundred_square_feet("cfm25 total", cfm25_total, floor_area)
}

/// Duct Leakage to Outside: `(cfm25_outside / floor_area) * 100`, rounded to 2 decimals
pub fn calculate_dlo(cfm25_outside: f64, floor_area: f64) -> Result<f64> {
    per_hundred_square_feet("cfm25 outside", cfm25_outside, floor_area)
}

/// Compute TDL and DLO, rejecting leakage-to-outside above total leakage.
///
/// The error carries the raw CFM25 readings rather than the normalized
/// figures so the offending field values can be shown as entered.
pub fn validate_leakage_consistency(
    cfm25_total: f64,
    cfm25_outside: f64,
    floor_area: f64,
) -> Result<LeakageMetrics> {
    let tdl = calculate_tdl(cfm25_total, floor_area)?;
    let dlo = calculate_dlo(cfm25_outside, floor_area)?;

    if cfm25_outside > cfm25_total {
        return Err(ComplianceError::PhysicallyInconsistentMeasurement {
            cfm25_total,
            cfm25_outside,
        });
    }

    Ok(LeakageMetrics { tdl, dlo })
}

pub fn validate_measurement(input: &MeasurementInput) -> Result<LeakageMetrics> {
    validate_leakage_consistency(input.cfm25_total, input.cfm25_outside, input.floor_area)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tdl_basic() {
        assert_eq!(calculate_tdl(100.0, 2000.0), Ok(5.0));
        assert_eq!(calculate_tdl(75.0, 2400.0), Ok(3.13));
        assert_eq!(calculate_tdl(0.0, 1500.0), Ok(0.0));
    }

    #[test]
    fn test_dlo_basic() {
        assert_eq!(calculate_dlo(50.0, 2000.0), Ok(2.5));
        assert_eq!(calculate_dlo(33.0, 1800.0), Ok(1.83));
    }

    #[test]
    fn test_rejects_non_positive_floor_area() {
        let err = calculate_tdl(100.0, 0.0).unwrap_err();
        assert_eq!(err.to_string(), "floor area must be > 0");
        assert!(calculate_dlo(100.0, -10.0).is_err());
    }

    #[test]
    fn test_rejects_negative_and_non_finite_cfm() {
        assert_eq!(calculate_tdl(-1.0, 2000.0).unwrap_err().kind(), "invalid_input");
        assert!(calculate_tdl(f64::NAN, 2000.0).is_err());
        assert!(calculate_tdl(100.0, f64::INFINITY).is_err());
        assert!(calculate_dlo(f64::NEG_INFINITY, 2000.0).is_err());
    }

    #[test]
    fn test_consistent_measurement() {
        let metrics = validate_leakage_consistency(100.0, 50.0, 2000.0).unwrap();
        assert_eq!(metrics, LeakageMetrics { tdl: 5.0, dlo: 2.5 });
    }

    #[test]
    fn test_equal_readings_are_consistent() {
        let metrics = validate_leakage_consistency(80.0, 80.0, 2000.0).unwrap();
        assert_eq!(metrics.tdl, metrics.dlo);
    }

    #[test]
    fn test_outside_above_total_is_inconsistent() {
        let err = validate_leakage_consistency(50.0, 100.0, 2000.0).unwrap_err();
        assert_eq!(
            err,
            ComplianceError::PhysicallyInconsistentMeasurement {
                cfm25_total: 50.0,
                cfm25_outside: 100.0,
            }
        );
    }

    #[test]
    fn test_field_errors_take_precedence_over_consistency() {
        let err = validate_leakage_consistency(50.0, 100.0, 0.0).unwrap_err();
        assert_eq!(err.kind(), "invalid_input");
    }

    #[test]
    fn test_validate_measurement_input() {
        let input = MeasurementInput {
            cfm25_total: 120.0,
            cfm25_outside: 40.0,
            floor_area: 3000.0,
        };
        assert_eq!(
            validate_measurement(&input),
            Ok(LeakageMetrics { tdl: 4.0, dlo: 1.33 })
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: TDL never decreases as total leakage grows
        #[test]
        fn tdl_monotonic_in_cfm(
            a in 0.0f64..5000.0,
            b in 0.0f64..5000.0,
            area in 100.0f64..10000.0,
        ) {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(calculate_tdl(low, area).unwrap() <= calculate_tdl(high, area).unwrap());
        }

        /// Property: TDL never increases as floor area grows
        #[test]
        fn tdl_decreasing_in_floor_area(
            cfm in 0.0f64..5000.0,
            a in 100.0f64..10000.0,
            b in 100.0f64..10000.0,
        ) {
            let (small, large) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(calculate_tdl(cfm, large).unwrap() <= calculate_tdl(cfm, small).unwrap());
        }

        /// Property: consistency check accepts exactly outside <= total
        #[test]
        fn consistency_matches_ordering(
            total in 0.0f64..2000.0,
            outside in 0.0f64..2000.0,
            area in 500.0f64..5000.0,
        ) {
            let result = validate_leakage_consistency(total, outside, area);
            prop_assert_eq!(result.is_ok(), outside <= total);
        }

        /// Property: identical inputs give bit-identical outputs
        #[test]
        fn tdl_is_deterministic(cfm in 0.0f64..5000.0, area in 1.0f64..10000.0) {
            let first = calculate_tdl(cfm, area).unwrap();
            let second = calculate_tdl(cfm, area).unwrap();
            prop_assert_eq!(first.to_bits(), second.to_bits());
        }
    }
}
