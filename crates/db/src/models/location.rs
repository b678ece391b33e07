//! Location entity model and DTOs.

use catalog_core::error::CoreError;
use catalog_core::types::{DbId, Timestamp};
use catalog_core::validation::validate_text;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::patch::{nullable, patched_str, required, set};

/// A stock location row from the `locations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Location {
    pub id: DbId,
    pub name: String,
    pub address: String,
    pub notes: Option<String>,
    pub telephone: Option<String>,
    pub email: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new location.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLocation {
    pub name: String,
    pub address: String,
    pub notes: Option<String>,
    pub telephone: Option<String>,
    pub email: Option<String>,
}

impl CreateLocation {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_text([
            ("name", Some(self.name.as_str())),
            ("address", Some(self.address.as_str())),
            ("notes", self.notes.as_deref()),
            ("telephone", self.telephone.as_deref()),
            ("email", self.email.as_deref()),
        ])
    }
}

/// DTO for patching a location. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateLocation {
    #[serde(default, deserialize_with = "required")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "required")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub notes: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub telephone: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub email: Option<Option<String>>,
}

impl UpdateLocation {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_text([
            ("name", self.name.as_deref()),
            ("address", self.address.as_deref()),
            ("notes", patched_str(&self.notes)),
            ("telephone", patched_str(&self.telephone)),
            ("email", patched_str(&self.email)),
        ])
    }

    /// Write the supplied fields onto `location`.
    pub fn apply_to(self, location: &mut Location) {
        set(&mut location.name, self.name);
        set(&mut location.address, self.address);
        set(&mut location.notes, self.notes);
        set(&mut location.telephone, self.telephone);
        set(&mut location.email, self.email);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_cannot_be_nulled() {
        let result: Result<UpdateLocation, _> = serde_json::from_str(r#"{"name": null}"#);
        assert!(result.is_err());
    }

    #[test]
    fn email_can_be_nulled() {
        let patch: UpdateLocation = serde_json::from_str(r#"{"email": null}"#).unwrap();
        assert_eq!(patch.email, Some(None));
        assert!(patch.validate().is_ok());
    }
}
