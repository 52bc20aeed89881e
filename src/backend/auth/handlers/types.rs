/**
 * Authentication Handler Types
 *
 * Request fields are optional so that a missing field is reported with a
 * readable 422 instead of a deserialization rejection.
 */

use serde::{Deserialize, Serialize};

use crate::shared::UserProfile;

#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Default)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// `data` of a successful signup or login
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserProfile,
}
