//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct User {
    /// Opaque unique identifier, assigned on creation and never changed
    #[cfg_attr(feature = "openapi", schema(example = "0b7f4c1e-8d1a-4f7e-9a51-3c2f2d6f1a90"))]
    pub id: String,
    /// Display name
    #[cfg_attr(feature = "openapi", schema(example = "Jane Doe"))]
    pub name: String,
    /// Age in years
    #[cfg_attr(feature = "openapi", schema(example = 30))]
    pub age: i32,
}

impl User {
    /// Build a user record from creation fields under an already generated id.
    pub fn new(id: impl Into<String>, fields: NewUser) -> Self {
        Self {
            id: id.into(),
            name: fields.name,
            age: fields.age,
        }
    }

    /// Merge the supplied fields of `patch` into this record.
    ///
    /// Fields absent from the patch keep their current value; `id` is never touched.
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(age) = patch.age {
            self.age = age;
        }
    }
}

/// Generate a fresh user identifier.
pub fn generate_user_id() -> String {
    Uuid::new_v4().to_string()
}

/// User creation data (every field except `id`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub age: i32,
}

impl NewUser {
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

/// Partial user update; `None` fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPatch {
    pub name: Option<String>,
    pub age: Option<i32>,
}

impl UserPatch {
    /// Patch that only changes the name
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            age: None,
        }
    }

    /// Patch that only changes the age
    pub fn age(age: i32) -> Self {
        Self {
            name: None,
            age: Some(age),
        }
    }

    /// Check if the patch carries no field at all
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn existing() -> User {
        User {
            id: "1".to_string(),
            name: "X".to_string(),
            age: 20,
        }
    }

    #[test]
    fn test_apply_name_only_keeps_age() {
        let mut user = existing();
        user.apply(UserPatch::name("Y"));

        assert_eq!(
            user,
            User {
                id: "1".to_string(),
                name: "Y".to_string(),
                age: 20,
            }
        );
    }

    #[test]
    fn test_apply_empty_patch_is_noop() {
        let mut user = existing();
        let patch = UserPatch::default();
        assert!(patch.is_empty());

        user.apply(patch);
        assert_eq!(user, existing());
    }

    #[test]
    fn test_generated_ids_are_unique() {
        assert_ne!(generate_user_id(), generate_user_id());
    }

    #[test]
    fn test_user_json_shape() {
        let json = serde_json::to_value(existing()).unwrap();
        assert_eq!(json, serde_json::json!({ "id": "1", "name": "X", "age": 20 }));
    }
}
