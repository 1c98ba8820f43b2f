use chrono::{DateTime, Utc};

/// Raw duct-blaster readings for a single inspection
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementInput {
    pub cfm25_total: f64,   // Total duct leakage at 25 Pa
    pub cfm25_outside: f64, // Leakage to outside at 25 Pa
    pub floor_area: f64,    // Conditioned floor area, sq ft
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PressureConversion {
    pub cfm: f64,
    pub from_pressure: f64, // Pascals
    pub to_pressure: f64,   // Pascals
}

/// TDL and DLO normalized to CFM25 per 100 sq ft
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LeakageMetrics {
    pub tdl: f64,
    pub dlo: f64,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceResult {
    pub tdl: f64,
    pub dlo: f64,
    pub tdl_limit: f64,
    pub dlo_limit: f64,
    pub tdl_compliant: bool,
    pub dlo_compliant: bool,
    pub overall_compliant: bool,
    pub tdl_margin: f64, // limit - tdl; negative means over the limit
    pub dlo_margin: f64, // limit - dlo; negative means over the limit
    pub code_year: String,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AverageResult {
    pub average: f64,
    /// Present only when at least one reading was flagged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outliers: Option<Vec<f64>>,
    pub has_outliers: bool,
}

/// Which normalized leakage figure a tally or message refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeakageMetric {
    Tdl,
    Dlo,
}

impl LeakageMetric {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeakageMetric::Tdl => "tdl",
            LeakageMetric::Dlo => "dlo",
        }
    }
}

impl std::fmt::Display for LeakageMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Start/end pair shared by agreements and program enrollments
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemporalWindow {
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpirationCategory {
    Critical,
    Warning,
    Notice,
    Ok,
}

impl ExpirationCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpirationCategory::Critical => "critical",
            ExpirationCategory::Warning => "warning",
            ExpirationCategory::Notice => "notice",
            ExpirationCategory::Ok => "ok",
        }
    }
}

impl std::fmt::Display for ExpirationCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpirationStatus {
    pub category: ExpirationCategory,
    /// `None` when there is no end date (never expires)
    pub days_until_expiration: Option<i64>,
    pub message: String,
}

/// Parent/child identifier pair, e.g. lot -> development
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HierarchyLink {
    pub child_id: String,
    pub parent_id: String,
}

impl HierarchyLink {
    pub fn new(child_id: impl Into<String>, parent_id: impl Into<String>) -> Self {
        Self {
            child_id: child_id.into(),
            parent_id: parent_id.into(),
        }
    }
}
