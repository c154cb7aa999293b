//! Organization record extracted from a registry page.

use serde::Serialize;

/// Structured fields of one orginfo.uz organization page.
///
/// Every field is independently optional: `None` means the page did not carry
/// the field (or the label could not be matched), never an empty value.
/// Records are built once per fetched page and never merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrganizationRecord {
    pub name: Option<String>,
    pub tax_id: Option<String>,
    pub status: Option<String>,
    pub registration_date: Option<String>,
    pub address: Option<String>,
    pub director_name: Option<String>,
    pub charter_capital: Option<String>,
}

impl OrganizationRecord {
    /// Returns true when no field could be extracted.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.tax_id.is_none()
            && self.status.is_none()
            && self.registration_date.is_none()
            && self.address.is_none()
            && self.director_name.is_none()
            && self.charter_capital.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record_is_empty() {
        assert!(OrganizationRecord::default().is_empty());
    }

    #[test]
    fn test_single_field_makes_record_non_empty() {
        let record = OrganizationRecord {
            charter_capital: Some("1 000 000 UZS".to_string()),
            ..Default::default()
        };

        assert!(!record.is_empty());
    }
}
