//! Parent/child membership checks (lot -> development, job -> lot)
//!
//! The engine never owns storage. Callers supply an [`EntityLookup`] that
//! resolves a child id; the check only compares the child's recorded parent
//! against the expected one.

use crate::error::{ComplianceError, Result};
use shared_types::{HierarchyLink, Job, Lot};
use std::collections::HashMap;

/// Resolves an entity by id
pub trait EntityLookup<T> {
    fn fetch_by_id(&self, id: &str) -> Option<T>;
}

impl<T, F> EntityLookup<T> for F
where
    F: Fn(&str) -> Option<T>,
{
    fn fetch_by_id(&self, id: &str) -> Option<T> {
        self(id)
    }
}

impl<T: Clone> EntityLookup<T> for HashMap<String, T> {
    fn fetch_by_id(&self, id: &str) -> Option<T> {
        self.get(id).cloned()
    }
}

/// An entity that records the id of the parent it belongs to
pub trait HierarchyMember {
    const KIND: &'static str;
    const PARENT_KIND: &'static str;

    fn parent_id(&self) -> Option<&str>;
}

impl HierarchyMember for Lot {
    const KIND: &'static str = "Lot";
    const PARENT_KIND: &'static str = "Development";

    fn parent_id(&self) -> Option<&str> {
        Some(&self.development_id)
    }
}

impl HierarchyMember for Job {
    const KIND: &'static str = "Job";
    const PARENT_KIND: &'static str = "Lot";

    fn parent_id(&self) -> Option<&str> {
        self.lot_id.as_deref()
    }
}

/// Resolve `child_id` and confirm it belongs to `parent_id`.
///
/// Returns the resolved child so callers can continue without a second lookup.
pub fn validate_hierarchy_membership<T, L>(child_id: &str, parent_id: &str, lookup: &L) -> Result<T>
where
    T: HierarchyMember,
    L: EntityLookup<T> + ?Sized,
{
    let child = lookup
        .fetch_by_id(child_id)
        .ok_or_else(|| ComplianceError::NotFound {
            entity: T::KIND,
            id: child_id.to_string(),
        })?;

    if child.parent_id() != Some(parent_id) {
        return Err(ComplianceError::HierarchyMismatch {
            child_entity: T::KIND,
            child_id: child_id.to_string(),
            parent_entity: T::PARENT_KIND,
            expected_parent: parent_id.to_string(),
            actual_parent: child.parent_id().map(str::to_string),
        });
    }

    Ok(child)
}

pub fn validate_link<T, L>(link: &HierarchyLink, lookup: &L) -> Result<T>
where
    T: HierarchyMember,
    L: EntityLookup<T> + ?Sized,
{
    validate_hierarchy_membership(&link.child_id, &link.parent_id, lookup)
}

pub fn validate_lot_in_development<L>(lot_id: &str, development_id: &str, lots: &L) -> Result<Lot>
where
    L: EntityLookup<Lot> + ?Sized,
{
    validate_hierarchy_membership(lot_id, development_id, lots)
}

pub fn validate_job_on_lot<L>(job_id: &str, lot_id: &str, jobs: &L) -> Result<Job>
where
    L: EntityLookup<Job> + ?Sized,
{
    validate_hierarchy_membership(job_id, lot_id, jobs)
}
