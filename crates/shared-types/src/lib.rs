pub mod entities;
pub mod types;

pub use entities::{
    AgreementInput, BuilderContactInput, BuilderInput, InteractionInput, Job, Lot,
    ProgramEnrollmentInput,
};
pub use types::{
    AverageResult, ComplianceResult, ExpirationCategory, ExpirationStatus, HierarchyLink,
    LeakageMetric, LeakageMetrics, MeasurementInput, PressureConversion, TemporalWindow,
};
