//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Extra profile fields supplied at creation time, kept verbatim.
pub type Profile = Map<String, Value>;

/// User domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// Opaque pass-through fields from the creation request.
    ///
    /// Serialized as a nested object so a profile key such as `id` never
    /// collides with the entity's own fields.
    #[serde(default)]
    pub profile: Profile,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user from a creation request.
    ///
    /// Every supplied field is carried over unchanged; no normalization
    /// of name or email happens here.
    pub fn new(request: CreateUserRequest) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: request.name,
            email: request.email,
            profile: request.profile,
            created_at: Utc::now(),
        }
    }
}

impl From<CreateUserRequest> for User {
    fn from(request: CreateUserRequest) -> Self {
        User::new(request)
    }
}

/// User creation data transfer object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    /// User display name
    pub name: String,
    /// User email address
    pub email: String,
    /// Any other field in the payload
    #[serde(flatten)]
    pub profile: Profile,
}

impl CreateUserRequest {
    /// Create a request with no extra profile fields
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            profile: Profile::new(),
        }
    }

    /// Attach an extra profile field
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.profile.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_user_keeps_every_request_field() {
        let request = CreateUserRequest::new("Ana", "Ana@X.com")
            .with_field("age", 31)
            .with_field("city", "Lisbon");

        let user = User::new(request.clone());

        assert_eq!(user.name, "Ana");
        assert_eq!(user.email, "Ana@X.com");
        assert_eq!(user.profile, request.profile);
    }

    #[test]
    fn request_collects_unknown_fields_into_profile() {
        let request: CreateUserRequest = serde_json::from_value(json!({
            "name": "Ana",
            "email": "ana@x.com",
            "age": 31,
            "tags": ["early-adopter"]
        }))
        .unwrap();

        assert_eq!(request.name, "Ana");
        assert_eq!(request.profile.len(), 2);
        assert_eq!(request.profile["age"], json!(31));
    }

    #[test]
    fn request_without_email_is_rejected() {
        let result = serde_json::from_value::<CreateUserRequest>(json!({ "name": "Ana" }));
        assert!(result.is_err());
    }

    #[test]
    fn user_serializes_profile_nested() {
        let user = User::new(CreateUserRequest::new("Ana", "ana@x.com").with_field("age", 31));
        let value = serde_json::to_value(&user).unwrap();

        assert_eq!(value["profile"]["age"], json!(31));
        assert!(value.get("age").is_none());
    }

    #[test]
    fn profile_key_named_like_a_field_round_trips() {
        let request: CreateUserRequest = serde_json::from_value(json!({
            "name": "Ana",
            "email": "ana@x.com",
            "id": "legacy-42",
            "created_at": "yesterday"
        }))
        .unwrap();
        let user = User::new(request);

        let encoded = serde_json::to_string(&user).unwrap();
        let decoded: User = serde_json::from_str(&encoded).unwrap();

        assert_eq!(decoded, user);
        assert_eq!(decoded.profile["id"], json!("legacy-42"));
        assert_ne!(decoded.id.to_string(), "legacy-42");
    }
}
