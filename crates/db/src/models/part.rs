//! Part entity model and DTOs.

use catalog_core::error::CoreError;
use catalog_core::types::{DbId, Timestamp};
use catalog_core::validation::{validate_price, validate_text};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::patch::{nullable, patched_str, required, set};

/// Stock availability as reported by the supplier. Maps to the
/// `part_availability` Postgres enum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "part_availability")]
pub enum Availability {
    #[default]
    Available,
    Backordered,
    Discontinued,
}

/// A part row from the `parts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Part {
    pub id: DbId,
    pub internal_part_code: String,
    pub oe_part_number: Option<String>,
    pub manufacturer_part_number: String,
    pub description: String,
    pub part_type: String,
    pub system: String,
    pub last_known_price: Option<f64>,
    pub last_known_supplier: Option<String>,
    pub purchase_url: Option<String>,
    pub notes: Option<String>,
    pub image_url: Option<String>,
    pub oe_description: Option<String>,
    pub availability: Availability,
    /// Cross-referenced part ids. Informational only; not foreign keys.
    pub alternatives: Vec<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new part. The internal part code is generated.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePart {
    pub manufacturer_part_number: String,
    pub description: String,
    pub part_type: String,
    pub system: String,
    pub oe_part_number: Option<String>,
    pub last_known_price: Option<f64>,
    pub last_known_supplier: Option<String>,
    pub purchase_url: Option<String>,
    pub notes: Option<String>,
    pub image_url: Option<String>,
    pub oe_description: Option<String>,
    #[serde(default)]
    pub availability: Availability,
    #[serde(default)]
    pub alternatives: Vec<DbId>,
}

impl CreatePart {
    /// Rules serde cannot express: price range and storable text.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_price(self.last_known_price)?;
        validate_text([
            ("manufacturer_part_number", Some(self.manufacturer_part_number.as_str())),
            ("description", Some(self.description.as_str())),
            ("part_type", Some(self.part_type.as_str())),
            ("system", Some(self.system.as_str())),
            ("oe_part_number", self.oe_part_number.as_deref()),
            ("last_known_supplier", self.last_known_supplier.as_deref()),
            ("purchase_url", self.purchase_url.as_deref()),
            ("notes", self.notes.as_deref()),
            ("image_url", self.image_url.as_deref()),
            ("oe_description", self.oe_description.as_deref()),
        ])
    }
}

/// DTO for patching a part. Absent fields are left untouched; nullable
/// columns can be cleared with an explicit `null`, required ones cannot.
///
/// `internal_part_code` has no field here: it is immutable once set.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePart {
    #[serde(default, deserialize_with = "required")]
    pub manufacturer_part_number: Option<String>,
    #[serde(default, deserialize_with = "required")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "required")]
    pub part_type: Option<String>,
    #[serde(default, deserialize_with = "required")]
    pub system: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub oe_part_number: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub last_known_price: Option<Option<f64>>,
    #[serde(default, deserialize_with = "nullable")]
    pub last_known_supplier: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub purchase_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub notes: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub image_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub oe_description: Option<Option<String>>,
    #[serde(default, deserialize_with = "required")]
    pub availability: Option<Availability>,
    #[serde(default, deserialize_with = "required")]
    pub alternatives: Option<Vec<DbId>>,
}

impl UpdatePart {
    /// Write the supplied fields onto `part`.
    pub fn apply_to(self, part: &mut Part) {
        set(&mut part.manufacturer_part_number, self.manufacturer_part_number);
        set(&mut part.description, self.description);
        set(&mut part.part_type, self.part_type);
        set(&mut part.system, self.system);
        set(&mut part.oe_part_number, self.oe_part_number);
        set(&mut part.last_known_price, self.last_known_price);
        set(&mut part.last_known_supplier, self.last_known_supplier);
        set(&mut part.purchase_url, self.purchase_url);
        set(&mut part.notes, self.notes);
        set(&mut part.image_url, self.image_url);
        set(&mut part.oe_description, self.oe_description);
        set(&mut part.availability, self.availability);
        set(&mut part.alternatives, self.alternatives);
    }

    /// Check the supplied fields only; the merged record is not revisited.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_price(self.last_known_price.flatten())?;
        validate_text([
            ("manufacturer_part_number", self.manufacturer_part_number.as_deref()),
            ("description", self.description.as_deref()),
            ("part_type", self.part_type.as_deref()),
            ("system", self.system.as_deref()),
            ("oe_part_number", patched_str(&self.oe_part_number)),
            ("last_known_supplier", patched_str(&self.last_known_supplier)),
            ("purchase_url", patched_str(&self.purchase_url)),
            ("notes", patched_str(&self.notes)),
            ("image_url", patched_str(&self.image_url)),
            ("oe_description", patched_str(&self.oe_description)),
        ])
    }
}
