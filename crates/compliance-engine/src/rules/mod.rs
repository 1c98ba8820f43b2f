//! Cross-field and cross-entity business rules
//!
//! - Generic field checks (required text, email, phone)
//! - Closed enum membership
//! - Date ordering, future-date and expiration urgency
//! - Parent/child hierarchy membership via caller-supplied lookups
//! - Company-name abbreviation matching

pub mod company;
pub mod entities;
pub mod enums;
pub mod fields;
pub mod hierarchy;
pub mod temporal;

pub use company::match_company_abbreviation;
pub use entities::{
    validate_agreement, validate_builder, validate_builder_contact, validate_interaction,
    validate_program_enrollment,
};
pub use enums::{
    validate_enum_membership, AgreementStatus, ContactRole, DomainEnum, PreferredContact,
    VolumeTier,
};
pub use fields::{validate_email, validate_phone, validate_required_text_field};
pub use hierarchy::{
    validate_hierarchy_membership, validate_job_on_lot, validate_link,
    validate_lot_in_development, EntityLookup, HierarchyMember,
};
pub use temporal::{
    categorize_expiration, categorize_expiration_now, parse_instant, validate_date_ordering,
    validate_not_in_future, validate_window,
};
