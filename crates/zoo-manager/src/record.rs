//! Core record types for zoo-manager.
//!
//! This module defines the animal record as stored, the validated input used
//! to create one, and the text forms both take on screen.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Day-month-year format used for entering and displaying dates of birth.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Format used for the `dob` column on disk.
pub const STORAGE_DATE_FORMAT: &str = "%Y-%m-%d";

/// One animal's stored attributes plus its assigned identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimalRecord {
    /// Identifier assigned by storage on creation.
    pub id: i64,
    /// The animal's name.
    pub name: String,
    /// Calendar date of birth.
    pub date_of_birth: NaiveDate,
    /// Weight in kilograms.
    pub weight_kg: f64,
    /// Height in metres.
    pub height_m: f64,
    /// Free-text medical notes; may be empty.
    pub medical_condition: String,
}

/// A validated animal that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAnimal {
    /// The animal's name.
    pub name: String,
    /// Calendar date of birth.
    pub date_of_birth: NaiveDate,
    /// Weight in kilograms.
    pub weight_kg: f64,
    /// Height in metres.
    pub height_m: f64,
    /// Free-text medical notes; may be empty.
    pub medical_condition: String,
}

impl NewAnimal {
    /// Attach a storage identifier, producing the stored record.
    #[must_use]
    pub fn with_id(self, id: i64) -> AnimalRecord {
        AnimalRecord {
            id,
            name: self.name,
            date_of_birth: self.date_of_birth,
            weight_kg: self.weight_kg,
            height_m: self.height_m,
            medical_condition: self.medical_condition,
        }
    }
}

/// Parse a day-month-year date as typed into the form.
///
/// Returns `None` for anything that is not a real calendar date.
#[must_use]
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).ok()
}

/// Parse a `dob` column value.
///
/// Accepts the ISO form written by storage and, for older files, the
/// day-month-year form.
#[must_use]
pub fn parse_stored_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), STORAGE_DATE_FORMAT)
        .ok()
        .or_else(|| parse_date(text))
}

/// Render a date in the day-month-year display form.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Render a weight or height for display.
///
/// Whole numbers keep a trailing `.0` so `85.0` reads back as typed.
#[must_use]
pub fn format_measure(value: f64) -> String {
    format!("{value:?}")
}

/// One row of the record table, already rendered as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    /// Identifier of the record this row shows.
    pub id: i64,
    /// Name column.
    pub name: String,
    /// DOB column, day-month-year.
    pub date_of_birth: String,
    /// Weight column.
    pub weight: String,
    /// Height column.
    pub height: String,
    /// Medical condition column.
    pub medical_condition: String,
}

impl TableRow {
    /// Column headings, in display order.
    pub const COLUMNS: [&'static str; 6] =
        ["ID", "Name", "DOB", "Weight", "Height", "Medical Condition"];

    /// The six cells of this row, in the same order as [`Self::COLUMNS`].
    #[must_use]
    pub fn cells(&self) -> [String; 6] {
        [
            self.id.to_string(),
            self.name.clone(),
            self.date_of_birth.clone(),
            self.weight.clone(),
            self.height.clone(),
            self.medical_condition.clone(),
        ]
    }
}

impl From<&AnimalRecord> for TableRow {
    fn from(record: &AnimalRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            date_of_birth: format_date(record.date_of_birth),
            weight: format_measure(record.weight_kg),
            height: format_measure(record.height_m),
            medical_condition: record.medical_condition.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leo() -> NewAnimal {
        NewAnimal {
            name: "Leo".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(2019, 3, 15).unwrap(),
            weight_kg: 190.5,
            height_m: 1.1,
            medical_condition: "none".to_string(),
        }
    }

    #[test]
    fn test_parse_date_valid() {
        assert_eq!(
            parse_date("15-03-2019"),
            NaiveDate::from_ymd_opt(2019, 3, 15)
        );
    }

    #[test]
    fn test_parse_date_rejects_bad_month() {
        assert!(parse_date("31-13-2024").is_none());
    }

    #[test]
    fn test_parse_date_rejects_impossible_day() {
        assert!(parse_date("30-02-2023").is_none());
    }

    #[test]
    fn test_parse_date_rejects_iso() {
        assert!(parse_date("2019-03-15").is_none());
    }

    #[test]
    fn test_parse_date_trims_whitespace() {
        assert_eq!(
            parse_date("  02-07-2021 "),
            NaiveDate::from_ymd_opt(2021, 7, 2)
        );
    }

    #[test]
    fn test_parse_stored_date_accepts_both_forms() {
        let expected = NaiveDate::from_ymd_opt(2021, 7, 2);
        assert_eq!(parse_stored_date("2021-07-02"), expected);
        assert_eq!(parse_stored_date("02-07-2021"), expected);
        assert!(parse_stored_date("yesterday").is_none());
    }

    #[test]
    fn test_format_date_zero_pads() {
        let date = NaiveDate::from_ymd_opt(2021, 7, 2).unwrap();
        assert_eq!(format_date(date), "02-07-2021");
    }

    #[test]
    fn test_format_measure() {
        assert_eq!(format_measure(190.5), "190.5");
        assert_eq!(format_measure(85.0), "85.0");
        assert_eq!(format_measure(0.9), "0.9");
    }

    #[test]
    fn test_with_id() {
        let record = leo().with_id(7);
        assert_eq!(record.id, 7);
        assert_eq!(record.name, "Leo");
        assert_eq!(record.medical_condition, "none");
    }

    #[test]
    fn test_table_row_from_record() {
        let row = TableRow::from(&leo().with_id(1));
        assert_eq!(
            row.cells(),
            [
                "1".to_string(),
                "Leo".to_string(),
                "15-03-2019".to_string(),
                "190.5".to_string(),
                "1.1".to_string(),
                "none".to_string(),
            ]
        );
    }

    #[test]
    fn test_table_columns() {
        assert_eq!(TableRow::COLUMNS[0], "ID");
        assert_eq!(TableRow::COLUMNS[5], "Medical Condition");
    }

    #[test]
    fn test_record_serialize() {
        let json = serde_json::to_string(&leo().with_id(1)).unwrap();
        assert!(json.contains("\"date_of_birth\":\"2019-03-15\""));
        assert!(json.contains("\"weight_kg\":190.5"));
    }
}
