use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::error::{GreenfieldError, Result};
use crate::utils::is_valid_email;

/// A registered user.
///
/// Passive identity record shared between the API and the page. Field names
/// stay camelCase on the wire (`createdAt`), matching the JSON contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Opaque unique identifier.
    pub id: String,
    pub email: String,
    /// Display name.
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Build a user, rejecting an implausible email address.
    ///
    /// Struct literal construction stays available for callers that already
    /// hold validated data (e.g. deserialized responses).
    pub fn new(
        id: impl Into<String>,
        email: impl Into<String>,
        name: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Result<Self> {
        let email = email.into();
        if !is_valid_email(&email) {
            return Err(GreenfieldError::InvalidEmail { email });
        }
        Ok(Self {
            id: id.into(),
            email,
            name: name.into(),
            created_at,
        })
    }
}

/// Deployment environment discriminator.
///
/// Lowercase on the wire and in [`FromStr`](std::str::FromStr); unknown
/// strings are rejected rather than defaulted.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}
