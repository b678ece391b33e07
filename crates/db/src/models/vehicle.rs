//! Vehicle entity model and DTOs.

use catalog_core::error::CoreError;
use catalog_core::types::{DbId, Timestamp};
use catalog_core::validation::{validate_text, validate_year_range};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::patch::{nullable, patched_str, required, set};

/// A vehicle row from the `vehicles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Vehicle {
    pub id: DbId,
    pub make: String,
    pub model: String,
    pub from_year: i32,
    pub to_year: Option<i32>,
    /// MHEV, PHEV, EV, or any other free-text drivetrain label.
    pub power_type: String,
    pub variant: Option<String>,
    pub body_style: String,
    pub drive_type: String,
    pub trim_level: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new vehicle.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateVehicle {
    pub make: String,
    pub model: String,
    pub from_year: i32,
    pub to_year: Option<i32>,
    pub power_type: String,
    pub variant: Option<String>,
    pub body_style: String,
    pub drive_type: String,
    pub trim_level: Option<String>,
}

impl CreateVehicle {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_year_range(self.from_year, self.to_year)?;
        validate_text([
            ("make", Some(self.make.as_str())),
            ("model", Some(self.model.as_str())),
            ("power_type", Some(self.power_type.as_str())),
            ("variant", self.variant.as_deref()),
            ("body_style", Some(self.body_style.as_str())),
            ("drive_type", Some(self.drive_type.as_str())),
            ("trim_level", self.trim_level.as_deref()),
        ])
    }
}

/// DTO for patching a vehicle. All fields are optional; only `to_year`,
/// `variant` and `trim_level` accept `null`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateVehicle {
    #[serde(default, deserialize_with = "required")]
    pub make: Option<String>,
    #[serde(default, deserialize_with = "required")]
    pub model: Option<String>,
    #[serde(default, deserialize_with = "required")]
    pub from_year: Option<i32>,
    #[serde(default, deserialize_with = "nullable")]
    pub to_year: Option<Option<i32>>,
    #[serde(default, deserialize_with = "required")]
    pub power_type: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub variant: Option<Option<String>>,
    #[serde(default, deserialize_with = "required")]
    pub body_style: Option<String>,
    #[serde(default, deserialize_with = "required")]
    pub drive_type: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub trim_level: Option<Option<String>>,
}

impl UpdateVehicle {
    /// Text checks only. The year range is checked on the merged record.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_text([
            ("make", self.make.as_deref()),
            ("model", self.model.as_deref()),
            ("power_type", self.power_type.as_deref()),
            ("variant", patched_str(&self.variant)),
            ("body_style", self.body_style.as_deref()),
            ("drive_type", self.drive_type.as_deref()),
            ("trim_level", patched_str(&self.trim_level)),
        ])
    }

    /// Write the supplied fields onto `vehicle`.
    pub fn apply_to(self, vehicle: &mut Vehicle) {
        set(&mut vehicle.make, self.make);
        set(&mut vehicle.model, self.model);
        set(&mut vehicle.from_year, self.from_year);
        set(&mut vehicle.to_year, self.to_year);
        set(&mut vehicle.power_type, self.power_type);
        set(&mut vehicle.variant, self.variant);
        set(&mut vehicle.body_style, self.body_style);
        set(&mut vehicle.drive_type, self.drive_type);
        set(&mut vehicle.trim_level, self.trim_level);
    }
}
