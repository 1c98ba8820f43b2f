use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComplianceError {
    #[error("{field} {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("{0} must contain at least one value")]
    EmptyInput(&'static str),

    #[error(
        "Physically inconsistent measurement: leakage to outside ({cfm25_outside} CFM25) \
         exceeds total duct leakage ({cfm25_total} CFM25)"
    )]
    PhysicallyInconsistentMeasurement { cfm25_total: f64, cfm25_outside: f64 },

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("{child_entity} {child_id} does not belong to {parent_entity} {expected_parent}")]
    HierarchyMismatch {
        child_entity: &'static str,
        child_id: String,
        parent_entity: &'static str,
        expected_parent: String,
        actual_parent: Option<String>,
    },

    #[error("Invalid {field} '{value}'. Must be one of: {}", .allowed.join(", "))]
    EnumMismatch {
        field: &'static str,
        value: String,
        allowed: Vec<&'static str>,
    },

    #[error("{0}")]
    DateOrderViolation(String),
}

impl ComplianceError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ComplianceError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Stable discriminant for mapping errors to status codes
    pub fn kind(&self) -> &'static str {
        match self {
            ComplianceError::InvalidInput { .. } => "invalid_input",
            ComplianceError::EmptyInput(_) => "empty_input",
            ComplianceError::PhysicallyInconsistentMeasurement { .. } => {
                "physically_inconsistent_measurement"
            }
            ComplianceError::NotFound { .. } => "not_found",
            ComplianceError::HierarchyMismatch { .. } => "hierarchy_mismatch",
            ComplianceError::EnumMismatch { .. } => "enum_mismatch",
            ComplianceError::DateOrderViolation(_) => "date_order_violation",
        }
    }
}

pub type Result<T> = std::result::Result<T, ComplianceError>;
