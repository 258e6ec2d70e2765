use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The signed-in user as remembered between launches
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserSession {
    pub name: String,
    pub email: String,
    pub signed_in_at: DateTime<Utc>,
}

impl UserSession {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            signed_in_at: Utc::now(),
        }
    }
}
