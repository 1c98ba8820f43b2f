//! Closed value sets for builder and agreement fields
//!
//! Each field is a proper enum; parsing a raw string reports an
//! [`EnumMismatch`](ComplianceError::EnumMismatch) that lists every allowed
//! value, comma-joined, in declaration order.

use crate::error::{ComplianceError, Result};
use std::str::FromStr;

/// Membership check against an arbitrary allowed set
pub fn validate_enum_membership(
    field: &'static str,
    value: &str,
    allowed: &[&'static str],
) -> Result<()> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(ComplianceError::EnumMismatch {
            field,
            value: value.to_string(),
            allowed: allowed.to_vec(),
        })
    }
}

/// A field whose values form a fixed, ordered set
pub trait DomainEnum: Sized + Copy + 'static {
    /// Field name used in error messages
    const FIELD: &'static str;
    const ALL: &'static [Self];

    fn as_str(&self) -> &'static str;

    fn all_members() -> Vec<&'static str> {
        Self::ALL.iter().map(Self::as_str).collect()
    }

    fn parse_member(value: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|member| member.as_str() == value)
            .ok_or_else(|| ComplianceError::EnumMismatch {
                field: Self::FIELD,
                value: value.to_string(),
                allowed: Self::all_members(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeTier {
    Low,
    Medium,
    High,
    Premium,
}

impl DomainEnum for VolumeTier {
    const FIELD: &'static str = "volume tier";
    const ALL: &'static [Self] = &[
        VolumeTier::Low,
        VolumeTier::Medium,
        VolumeTier::High,
        VolumeTier::Premium,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            VolumeTier::Low => "low",
            VolumeTier::Medium => "medium",
            VolumeTier::High => "high",
            VolumeTier::Premium => "premium",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactRole {
    Superintendent,
    ProjectManager,
    Owner,
    Estimator,
    OfficeManager,
    Other,
}

impl DomainEnum for ContactRole {
    const FIELD: &'static str = "contact role";
    const ALL: &'static [Self] = &[
        ContactRole::Superintendent,
        ContactRole::ProjectManager,
        ContactRole::Owner,
        ContactRole::Estimator,
        ContactRole::OfficeManager,
        ContactRole::Other,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            ContactRole::Superintendent => "superintendent",
            ContactRole::ProjectManager => "project_manager",
            ContactRole::Owner => "owner",
            ContactRole::Estimator => "estimator",
            ContactRole::OfficeManager => "office_manager",
            ContactRole::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreferredContact {
    Phone,
    Email,
    Text,
}

impl DomainEnum for PreferredContact {
    const FIELD: &'static str = "preferred contact method";
    const ALL: &'static [Self] = &[
        PreferredContact::Phone,
        PreferredContact::Email,
        PreferredContact::Text,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            PreferredContact::Phone => "phone",
            PreferredContact::Email => "email",
            PreferredContact::Text => "text",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgreementStatus {
    Active,
    Expired,
    Terminated,
}

impl DomainEnum for AgreementStatus {
    const FIELD: &'static str = "agreement status";
    const ALL: &'static [Self] = &[
        AgreementStatus::Active,
        AgreementStatus::Expired,
        AgreementStatus::Terminated,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            AgreementStatus::Active => "active",
            AgreementStatus::Expired => "expired",
            AgreementStatus::Terminated => "terminated",
        }
    }
}

macro_rules! domain_enum_traits {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(self.as_str())
                }
            }

            impl FromStr for $ty {
                type Err = ComplianceError;

                fn from_str(s: &str) -> Result<Self> {
                    Self::parse_member(s)
                }
            }
        )+
    };
}

domain_enum_traits!(VolumeTier, ContactRole, PreferredContact, AgreementStatus);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_membership_against_plain_set() {
        assert!(validate_enum_membership("status", "open", &["open", "closed"]).is_ok());
        let err = validate_enum_membership("status", "pending", &["open", "closed"]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid status 'pending'. Must be one of: open, closed");
    }

    #[test]
    fn test_membership_is_case_sensitive() {
        assert!(validate_enum_membership("status", "Open", &["open"]).is_err());
    }

    #[test]
    fn test_parse_volume_tier() {
        assert_eq!("premium".parse::<VolumeTier>(), Ok(VolumeTier::Premium));
        let err = "huge".parse::<VolumeTier>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid volume tier 'huge'. Must be one of: low, medium, high, premium"
        );
    }

    #[test]
    fn test_contact_role_members_in_order() {
        assert_eq!(
            ContactRole::all_members(),
            vec![
                "superintendent",
                "project_manager",
                "owner",
                "estimator",
                "office_manager",
                "other"
            ]
        );
    }

    #[test]
    fn test_display_matches_wire_value() {
        for role in ContactRole::ALL {
            assert_eq!(role.to_string(), role.as_str());
            assert_eq!(
                serde_json::to_value(role).unwrap(),
                serde_json::json!(role.as_str())
            );
        }
        assert_eq!(PreferredContact::Text.to_string(), "text");
    }

    #[test]
    fn test_agreement_status_round_trip() {
        for status in AgreementStatus::ALL {
            assert_eq!(status.as_str().parse::<AgreementStatus>(), Ok(*status));
        }
        assert_eq!("cancelled".parse::<AgreementStatus>().unwrap_err().kind(), "enum_mismatch");
    }
}
