//! Duct leakage and airflow calculations
//!
//! Converts raw duct-blaster readings into the normalized figures used by the
//! Minnesota 2020 Energy Code (RESNET / ASHRAE 152 methodology):
//! - Total Duct Leakage (TDL) and Duct Leakage to Outside (DLO), CFM25 per 100 sq ft
//! - Power-law pressure conversion between test pressures
//! - Multi-sample averaging with median-based outlier flagging
//! - Pass/fail classification against code-year limits
//!
//! Every function is a one-shot transform over its arguments.

pub mod airflow;
pub mod duct;
pub mod readings;
pub mod threshold;

pub use airflow::{cfm50_to_cfm25, convert, convert_pressure, percent_of_system_airflow};
pub use duct::{calculate_dlo, calculate_tdl, validate_leakage_consistency, validate_measurement};
pub use readings::average_readings;
pub use threshold::{check_compliance_threshold, check_against_limits, LeakageLimits};
