use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user record as kept by the hub.
///
/// The authenticator only relies on `name`; everything else is hub
/// bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Login name, identical to the OS account name
    pub name: String,
    /// When the hub first saw this user
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a fresh record for `name`
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            created_at: Utc::now(),
        }
    }
}
