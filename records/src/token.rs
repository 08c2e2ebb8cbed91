//! Session token claims.
//!
//! The backend issues an HS256 JWT whose `sub` carries the account email. The
//! client never verifies the signature; it only reads the payload to decide
//! what to render. Authorization is enforced server-side.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

use crate::model::Role;

/// Claims read from a token payload.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Claims {
    /// Account email. The backend puts no separate user id in the token, so
    /// this doubles as the id for enrollment and membership calls.
    pub sub: String,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub exp: Option<i64>,
}

impl Claims {
    #[must_use]
    pub fn email(&self) -> &str {
        &self.sub
    }

    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.sub
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Some(Role::Admin)
    }

    #[must_use]
    pub fn is_super_admin(&self) -> bool {
        self.role == Some(Role::SuperAdmin)
    }

    #[must_use]
    pub fn is_permanent(&self) -> bool {
        self.role == Some(Role::Permanent)
    }

    #[must_use]
    pub fn is_user(&self) -> bool {
        self.role == Some(Role::User)
    }

    /// Whether the admin console and CRUD controls are shown.
    #[must_use]
    pub fn can_moderate(&self) -> bool {
        self.is_admin() || self.is_super_admin()
    }
}

/// Decode the payload segment of `token`. Returns `None` for anything that is
/// not a three-segment token with a base64url JSON payload carrying `sub`.
#[must_use]
pub fn decode_claims(token: &str) -> Option<Claims> {
    let mut segments = token.trim().split('.');
    let (Some(_header), Some(payload), Some(_signature), None) =
        (segments.next(), segments.next(), segments.next(), segments.next())
    else {
        return None;
    };
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    serde_json::from_slice(&bytes).ok()
}
