// Numeric guards and rounding shared by the leakage calculators
use crate::error::{ComplianceError, Result};

/// Round to 2 decimal places, half away from zero
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Reject NaN and infinities
pub fn require_finite(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ComplianceError::invalid(field, "must be a finite number"))
    }
}

/// Finite and `>= 0`
pub fn require_non_negative(field: &'static str, value: f64) -> Result<f64> {
    let value = require_finite(field, value)?;
    if value < 0.0 {
        return Err(ComplianceError::invalid(field, "must be >= 0"));
    }
    Ok(value)
}

/// Finite and `> 0`
pub fn require_positive(field: &'static str, value: f64) -> Result<f64> {
    let value = require_finite(field, value)?;
    if value <= 0.0 {
        return Err(ComplianceError::invalid(field, "must be > 0"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2_half_away_from_zero() {
        assert_eq!(round2(2.345_000_1), 2.35);
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(-0.125), -0.13);
        assert_eq!(round2(5.0), 5.0);
    }

    #[test]
    fn test_require_positive_rejects_zero() {
        let err = require_positive("floor area", 0.0).unwrap_err();
        assert_eq!(err.to_string(), "floor area must be > 0");
    }

    #[test]
    fn test_require_non_negative_accepts_zero() {
        assert_eq!(require_non_negative("cfm25 total", 0.0), Ok(0.0));
        assert!(require_non_negative("cfm25 total", -0.01).is_err());
    }

    #[test]
    fn test_non_finite_rejected_everywhere() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(require_finite("x", value).is_err());
            assert!(require_non_negative("x", value).is_err());
            assert!(require_positive("x", value).is_err());
        }
    }
}
