//! Closed enumerations for role and status columns.
//!
//! The database stores these as `TEXT` guarded by `CHECK` constraints. Request
//! bodies deserialize straight into these enums, so an unknown value is
//! rejected before any query runs. Rows decode back through `TryFrom<String>`,
//! so a value outside the set fails loudly on the way out too.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::roles::{ROLE_ADMIN, ROLE_USER};

/// Account role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    User,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => ROLE_USER,
            Self::Admin => ROLE_ADMIN,
        }
    }
}

/// Account moderation status. Blocked users cannot log in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    #[default]
    Active,
    Blocked,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Blocked => "blocked",
        }
    }
}

/// Review state of an ownership claim.
///
/// Any state may be overwritten by any other; there is no transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl ClaimStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

macro_rules! impl_text_enum {
    ($ty:ident, $label:literal, [$($variant:ident),+]) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $(
                    if s == $ty::$variant.as_str() {
                        return Ok($ty::$variant);
                    }
                )+
                Err(CoreError::Validation(format!(
                    "Unknown {} '{s}'. Expected one of: {}",
                    $label,
                    [$($ty::$variant.as_str()),+].join(", ")
                )))
            }
        }

        impl TryFrom<String> for $ty {
            type Error = CoreError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                s.parse()
            }
        }
    };
}

impl_text_enum!(UserRole, "role", [User, Admin]);
impl_text_enum!(UserStatus, "user status", [Active, Blocked]);
impl_text_enum!(ClaimStatus, "claim status", [Pending, Approved, Rejected]);
