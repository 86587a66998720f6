// src/domain/accounts.rs

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Account roles on the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Client,
    Agent,
    PropertyOwner,
    Office,
    Partner,
    Support,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Client => "client",
            UserRole::Agent => "agent",
            UserRole::PropertyOwner => "property_owner",
            UserRole::Office => "office",
            UserRole::Partner => "partner",
            UserRole::Support => "support",
            UserRole::Admin => "admin",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Client => "Client",
            UserRole::Agent => "Agent",
            UserRole::PropertyOwner => "Property Owner",
            UserRole::Office => "Real-Estate Office",
            UserRole::Partner => "Partner",
            UserRole::Support => "Support",
            UserRole::Admin => "Admin",
        }
    }

    pub fn parse(value: &str) -> Option<UserRole> {
        match value {
            "client" => Some(UserRole::Client),
            "agent" => Some(UserRole::Agent),
            "property_owner" => Some(UserRole::PropertyOwner),
            "office" => Some(UserRole::Office),
            "partner" => Some(UserRole::Partner),
            "support" => Some(UserRole::Support),
            "admin" => Some(UserRole::Admin),
            _ => None,
        }
    }
}

/// An account as stored in the `users` table. Standing is derived from the
/// timestamp fields, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub display_name: String,
    pub role: UserRole,
    pub suspended_at: Option<NaiveDateTime>,
    pub suspension_ends_at: Option<NaiveDateTime>,
    pub trial_ends_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
}

/// The account's effective standing at a point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AccountStanding {
    /// `until: None` is an indefinite suspension.
    Suspended { until: Option<NaiveDateTime> },
    TrialActive { ends_at: NaiveDateTime },
    TrialExpired,
    Active,
}

impl AccountStanding {
    pub fn label(&self) -> &'static str {
        match self {
            AccountStanding::Suspended { .. } => "Suspended",
            AccountStanding::TrialActive { .. } => "Trial",
            AccountStanding::TrialExpired => "Trial Expired",
            AccountStanding::Active => "Active",
        }
    }

    pub fn is_suspended(&self) -> bool {
        matches!(self, AccountStanding::Suspended { .. })
    }
}

/// Determines the account's standing. The order of checks sets precedence:
/// an active suspension wins over any trial state, and a timed suspension
/// that has already elapsed counts as not suspended at all.
pub fn derive_standing(user: &User, now: NaiveDateTime) -> AccountStanding {
    if user.suspended_at.is_some() {
        match user.suspension_ends_at {
            // Timed suspension already served; fall through to trial checks.
            Some(ends_at) if ends_at <= now => {}
            until => return AccountStanding::Suspended { until },
        }
    }

    match user.trial_ends_at {
        Some(ends_at) if ends_at > now => AccountStanding::TrialActive { ends_at },
        Some(_) => AccountStanding::TrialExpired,
        None => AccountStanding::Active,
    }
}
