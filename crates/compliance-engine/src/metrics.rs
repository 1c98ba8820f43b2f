//! Pass/fail tallies for compliance checks
//!
//! The calculators never talk to a metrics backend directly. Callers hand in
//! an observer; the HTTP layer wires one to its counter registry and tests
//! use an in-memory tally.

use shared_types::LeakageMetric;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Pass,
    Fail,
}

impl Outcome {
    pub fn from_compliant(compliant: bool) -> Self {
        if compliant {
            Outcome::Pass
        } else {
            Outcome::Fail
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Pass => "pass",
            Outcome::Fail => "fail",
        }
    }
}

/// Label set for a single counter increment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MetricLabels {
    pub metric_type: LeakageMetric,
    pub outcome: Outcome,
}

pub trait MetricsObserver {
    fn increment(&self, labels: &MetricLabels);
}

/// Discards every tally
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl MetricsObserver for NoopObserver {
    fn increment(&self, _labels: &MetricLabels) {}
}

/// Emits each tally as a structured `tracing` event
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl MetricsObserver for TracingObserver {
    fn increment(&self, labels: &MetricLabels) {
        info!(
            metric_type = labels.metric_type.as_str(),
            outcome = labels.outcome.as_str(),
            "duct leakage compliance check"
        );
    }
}

impl<F> MetricsObserver for F
where
    F: Fn(&MetricLabels),
{
    fn increment(&self, labels: &MetricLabels) {
        self(labels)
    }
}
