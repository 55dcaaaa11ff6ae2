use chrono::{DateTime, Months, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::InstitutionKind;
use crate::errors::CoreError;

/// Board mandate length used to derive the license expiry date.
const LICENSE_TERM_MONTHS: u32 = 48;

/// Profile of a waqf institution under evaluation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Institution {
    pub id: String,
    pub name: String,
    pub kind: InstitutionKind,
    pub capital_omr: f64,
    #[serde(default)]
    pub employees_omani: u32,
    #[serde(default)]
    pub employees_non_omani: u32,
    pub governorate: String,
    pub wilayat: String,
    pub license_number: String,
    pub manager_name: String,
    pub contact_phone: String,
    pub email: String,
    pub establishment_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl Institution {
    /// Expiry of the current license, four years after establishment.
    ///
    /// A Feb 29 establishment date expires on Feb 28.
    #[must_use]
    pub fn license_expiry(&self) -> Option<NaiveDate> {
        self.establishment_date
            .checked_add_months(Months::new(LICENSE_TERM_MONTHS))
    }

    /// Total headcount across both workforce groups.
    #[must_use]
    pub const fn employees_total(&self) -> u32 {
        self.employees_omani + self.employees_non_omani
    }

    /// Check that every profile field is filled in.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` naming the first missing field, or when
    /// the capital is negative or not a number.
    pub fn validate(&self) -> Result<(), CoreError> {
        let required = [
            ("name", &self.name),
            ("governorate", &self.governorate),
            ("wilayat", &self.wilayat),
            ("license_number", &self.license_number),
            ("manager_name", &self.manager_name),
            ("contact_phone", &self.contact_phone),
            ("email", &self.email),
        ];
        if let Some((field, _)) = required.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(CoreError::Validation(format!(
                "institution field '{field}' is required"
            )));
        }
        if self.capital_omr.is_nan() || self.capital_omr < 0.0 {
            return Err(CoreError::Validation(format!(
                "institution capital must be a non-negative amount, got {}",
                self.capital_omr
            )));
        }
        Ok(())
    }
}
