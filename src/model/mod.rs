//! # Student Model
//!
//! The student entity and its transport payloads.
//!
//! `Student` is what the store returns and what serializes to callers.
//! `StudentPayload` is what callers send; converting it into domain data runs
//! the field validators, so invalid input never reaches the store.

use serde::{Deserialize, Serialize};

use crate::errors::{ServiceError, ServiceResult};
use crate::validation::{validate_alphabetic, validate_digits_only};

/// A persisted student record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Student {
    /// Store-assigned primary key, immutable
    pub id: i64,
    pub name: String,
    pub roll: i64,
    pub city: String,
    /// Opaque correlation id (UUIDv4), generated at creation, immutable
    pub external_id: String,
}

/// Incoming transport payload for create and update.
///
/// `id` and `external_id` are not settable from the transport side; any such
/// keys in the incoming JSON are silently ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentPayload {
    pub name: Option<String>,
    pub roll: Option<i64>,
    pub city: Option<String>,
}

/// Validated field values for a new student (no identity yet)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub roll: i64,
    pub city: String,
}

impl StudentPayload {
    /// Non-partial conversion: every field must be present and valid.
    ///
    /// Used by Create. A missing field fails with `MissingField`; a present
    /// but malformed field fails with `InvalidFieldFormat`.
    pub fn into_new_student(self) -> ServiceResult<NewStudent> {
        let name = self.name.ok_or(ServiceError::MissingField("name"))?;
        let roll = self.roll.ok_or(ServiceError::MissingField("roll"))?;
        let city = self.city.ok_or(ServiceError::MissingField("city"))?;

        validate_alphabetic("name", &name)?;
        validate_digits_only("roll", &roll.to_string())?;
        validate_alphabetic("city", &city)?;

        Ok(NewStudent { name, roll, city })
    }

    /// Partial validation: only supplied fields are checked.
    ///
    /// Used by Update; absent fields are left untouched on the record.
    pub fn validate_partial(&self) -> ServiceResult<()> {
        if let Some(name) = &self.name {
            validate_alphabetic("name", name)?;
        }
        if let Some(roll) = self.roll {
            validate_digits_only("roll", &roll.to_string())?;
        }
        if let Some(city) = &self.city {
            validate_alphabetic("city", city)?;
        }
        Ok(())
    }
}
