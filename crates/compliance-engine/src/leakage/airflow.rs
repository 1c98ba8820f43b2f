// Pressure conversion and system-airflow ratios
use crate::error::Result;
use crate::numeric::{require_non_negative, require_positive, round2};
use shared_types::PressureConversion;

/// Duct leakage power-law exponent `n` in `Q = C * dP^n`
pub const POWER_LAW_EXPONENT: f64 = 0.6;

/// Reference pressure for CFM25 readings, Pascals
pub const CFM25_PRESSURE_PA: f64 = 25.0;

/// Reference pressure for CFM50 readings, Pascals
pub const CFM50_PRESSURE_PA: f64 = 50.0;

/// Translate an airflow reading taken at `from_pressure` to its equivalent at
/// `to_pressure`: `cfm * (to / from)^0.6`, rounded to 2 decimals.
pub fn convert_pressure(cfm: f64, from_pressure: f64, to_pressure: f64) -> Result<f64> {
    let cfm = require_non_negative("cfm", cfm)?;
    let from_pressure = require_positive("from pressure", from_pressure)?;
    let to_pressure = require_positive("to pressure", to_pressure)?;

    Ok(round2(
        cfm * (to_pressure / from_pressure).powf(POWER_LAW_EXPONENT),
    ))
}

pub fn convert(conversion: &PressureConversion) -> Result<f64> {
    convert_pressure(
        conversion.cfm,
        conversion.from_pressure,
        conversion.to_pressure,
    )
}

/// Equivalent CFM25 for a reading taken at 50 Pa
pub fn cfm50_to_cfm25(cfm50: f64) -> Result<f64> {
    convert_pressure(cfm50, CFM50_PRESSURE_PA, CFM25_PRESSURE_PA)
}

/// Leakage as a percentage of total system airflow, rounded to 2 decimals
pub fn percent_of_system_airflow(cfm25: f64, system_airflow: f64) -> Result<f64> {
    let cfm25 = require_non_negative("cfm25", cfm25)?;
    let system_airflow = require_positive("system airflow", system_airflow)?;
    Ok(round2(cfm25 / system_airflow * 100.0))
}
