use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::user::Role;

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterPayload {
    #[validate(length(min = 1, max = 80))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
    #[validate(email, length(max = 120))]
    pub email: String,
    pub role: Role,
}

/// Not validated: empty credentials simply fail to authenticate.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginPayload {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn register_payload_rejects_bad_email() {
        let payload: RegisterPayload = serde_json::from_value(json!({
            "username": "ana",
            "password": "pw1",
            "email": "not-an-email",
            "role": "user"
        }))
        .unwrap();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn register_payload_rejects_unknown_role() {
        let parsed = serde_json::from_value::<RegisterPayload>(json!({
            "username": "ana",
            "password": "pw1",
            "email": "ana@x.com",
            "role": "superuser"
        }));
        assert!(parsed.is_err());
    }
}
