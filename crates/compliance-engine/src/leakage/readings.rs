// Multi-sample CFM25 averaging with median-based outlier flagging
use crate::error::{ComplianceError, Result};
use crate::numeric::{require_non_negative, round2};
use shared_types::AverageResult;

/// Relative deviation from the reference median above which a reading is flagged
pub const OUTLIER_TOLERANCE: f64 = 0.20;

/// Outlier detection needs at least this many samples
pub const MIN_SAMPLES_FOR_OUTLIERS: usize = 3;

/// Average a set of readings, optionally flagging outliers.
///
/// The mean always includes every reading; flagged values are reported but
/// never dropped.
pub fn average_readings(readings: &[f64], detect_outliers: bool) -> Result<AverageResult> {
    if readings.is_empty() {
        return Err(ComplianceError::EmptyInput("readings"));
    }
    for &reading in readings {
        require_non_negative("reading", reading)?;
    }

    let mean = readings.iter().sum::<f64>() / readings.len() as f64;

    let outliers = if detect_outliers && readings.len() >= MIN_SAMPLES_FOR_OUTLIERS {
        flag_outliers(readings)
    } else {
        Vec::new()
    };
    let has_outliers = !outliers.is_empty();

    Ok(AverageResult {
        average: round2(mean),
        outliers: has_outliers.then_some(outliers),
        has_outliers,
    })
}

/// Element at `sorted[n / 2]`: the upper of the two middle values for even
/// counts, not the interpolated median
fn reference_median(readings: &[f64]) -> f64 {
    let mut sorted = readings.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted[sorted.len() / 2]
}

/// Readings deviating more than 20% from the reference median, in input order
fn flag_outliers(readings: &[f64]) -> Vec<f64> {
    let median = reference_median(readings);
    // A zero median makes every non-zero reading an infinite deviation and 0/0 unflagged
    readings
        .iter()
        .copied()
        .filter(|reading| (reading - median).abs() / median > OUTLIER_TOLERANCE)
        .collect()
}
