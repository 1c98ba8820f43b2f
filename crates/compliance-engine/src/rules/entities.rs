//! Builder, contact, agreement and interaction payload validation
//!
//! Each validator stops at the first failing field, checking fields in
//! declaration order.

use super::enums::{AgreementStatus, ContactRole, DomainEnum, PreferredContact, VolumeTier};
use super::fields::{validate_email, validate_optional, validate_phone, validate_required_text_field};
use super::temporal::{validate_date_ordering, validate_not_in_future};
use crate::clock::Clock;
use crate::error::Result;
use shared_types::{
    AgreementInput, BuilderContactInput, BuilderInput, InteractionInput, ProgramEnrollmentInput,
    TemporalWindow,
};

pub const COMPANY_NAME_MIN_LEN: usize = 2;
pub const NAME_MAX_LEN: usize = 255;

pub fn validate_builder(input: &BuilderInput) -> Result<()> {
    validate_required_text_field(
        "company name",
        &input.company_name,
        Some(COMPANY_NAME_MIN_LEN),
        Some(NAME_MAX_LEN),
    )?;
    validate_optional(input.contact_name.as_deref(), |name| {
        validate_required_text_field("contact name", name, None, Some(NAME_MAX_LEN))
    })?;
    validate_optional(input.email.as_deref(), validate_email)?;
    validate_optional(input.phone.as_deref(), validate_phone)?;
    validate_optional(input.volume_tier.as_deref(), |tier| {
        VolumeTier::parse_member(tier).map(|_| ())
    })
}

pub fn validate_builder_contact(input: &BuilderContactInput) -> Result<()> {
    validate_required_text_field("contact name", &input.name, Some(1), Some(NAME_MAX_LEN))?;
    ContactRole::parse_member(&input.role)?;
    validate_optional(input.email.as_deref(), validate_email)?;
    validate_optional(input.phone.as_deref(), validate_phone)?;
    validate_optional(input.preferred_contact.as_deref(), |method| {
        PreferredContact::parse_member(method).map(|_| ())
    })
}

/// Returns the parsed window so callers can categorize its expiration
pub fn validate_agreement(input: &AgreementInput) -> Result<TemporalWindow> {
    let window = validate_date_ordering(&input.start_date, input.end_date.as_deref())?;
    AgreementStatus::parse_member(&input.status)?;
    Ok(window)
}

pub fn validate_program_enrollment(input: &ProgramEnrollmentInput) -> Result<TemporalWindow> {
    validate_required_text_field("program name", &input.program_name, None, Some(NAME_MAX_LEN))?;
    validate_date_ordering(&input.enrollment_date, input.expiration_date.as_deref())
}

pub fn validate_interaction(input: &InteractionInput, clock: &dyn Clock) -> Result<()> {
    validate_required_text_field("subject", &input.subject, None, Some(NAME_MAX_LEN))?;
    validate_not_in_future(input.interaction_date, clock)
}
