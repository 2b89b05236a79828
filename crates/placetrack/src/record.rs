//! Core placement record types.
//!
//! A [`PlacementRecord`] is one student placement as it is persisted. The
//! admin form edits a [`PlacementDraft`], the raw text of its five inputs,
//! which becomes typed [`PlacementFields`] once it passes the presence check.

use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};

/// Date format produced by the date input and used in storage.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Identifier of a placement record: the creation time in epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub i64);

impl RecordId {
    /// Pick an identifier for a new record in `records`.
    ///
    /// Uses the creation timestamp unless an existing record already holds
    /// that value or a later one, in which case the next free value above the
    /// current maximum is taken. If the maximum is already `i64::MAX`, the
    /// closest free value at or below the timestamp is used instead.
    #[must_use]
    pub fn generate(records: &[PlacementRecord], now: DateTime<Utc>) -> Self {
        let stamp = now.timestamp_millis();
        let Some(max) = records.iter().map(|r| r.id.0).max() else {
            return Self(stamp);
        };
        if let Some(next) = max.checked_add(1) {
            return Self(stamp.max(next));
        }

        // Fewer records than i64 values, so a free one always exists.
        let taken: HashSet<i64> = records.iter().map(|r| r.id.0).collect();
        let mut candidate = stamp;
        while taken.contains(&candidate) {
            candidate = candidate.wrapping_sub(1);
        }
        Self(candidate)
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// A stored placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementRecord {
    /// Unique identifier, fixed at creation.
    pub id: RecordId,
    /// Name of the placed student.
    pub student_name: String,
    /// Student's department.
    pub department: String,
    /// Hiring company.
    pub company_name: String,
    /// Annual package in LPA.
    #[serde(deserialize_with = "deserialize_package")]
    pub package: f64,
    /// Date the placement was made.
    pub date_placed: NaiveDate,
}

impl PlacementRecord {
    /// Build a record from an identifier and its editable fields.
    #[must_use]
    pub fn new(id: RecordId, fields: PlacementFields) -> Self {
        Self {
            id,
            student_name: fields.student_name,
            department: fields.department,
            company_name: fields.company_name,
            package: fields.package,
            date_placed: fields.date_placed,
        }
    }

    /// Replace every field except the identifier.
    pub fn apply(&mut self, fields: PlacementFields) {
        *self = Self::new(self.id, fields);
    }

    /// The editable part of this record.
    #[must_use]
    pub fn fields(&self) -> PlacementFields {
        PlacementFields {
            student_name: self.student_name.clone(),
            department: self.department.clone(),
            company_name: self.company_name.clone(),
            package: self.package,
            date_placed: self.date_placed,
        }
    }
}

/// Typed contents of a submitted placement form.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementFields {
    /// Name of the placed student.
    pub student_name: String,
    /// Student's department.
    pub department: String,
    /// Hiring company.
    pub company_name: String,
    /// Annual package in LPA.
    pub package: f64,
    /// Date the placement was made.
    pub date_placed: NaiveDate,
}

/// Raw text held by the add/edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlacementDraft {
    /// Student name input.
    pub student_name: String,
    /// Department input.
    pub department: String,
    /// Company name input.
    pub company_name: String,
    /// Package input (LPA).
    pub package: String,
    /// Date placed input.
    pub date_placed: String,
}

impl PlacementDraft {
    /// Check that every field is filled in and parse the typed values.
    ///
    /// Text fields are kept as entered; only blankness is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`] for the first blank field, or
    /// [`Error::InvalidPackage`] / [`Error::InvalidDate`] when those inputs
    /// do not parse.
    pub fn parse(&self) -> Result<PlacementFields> {
        let student_name = required("Student Name", &self.student_name)?;
        let department = required("Department", &self.department)?;
        let company_name = required("Company Name", &self.company_name)?;
        let package = required("Package", &self.package)?;
        let date_placed = required("Date Placed", &self.date_placed)?;

        let package = parse_package(package.trim()).ok_or_else(|| Error::InvalidPackage {
            value: package.clone(),
        })?;
        let date_placed =
            NaiveDate::parse_from_str(date_placed.trim(), DATE_FORMAT).map_err(|_| {
                Error::InvalidDate {
                    value: date_placed.clone(),
                }
            })?;

        Ok(PlacementFields {
            student_name,
            department,
            company_name,
            package,
            date_placed,
        })
    }
}

impl From<&PlacementRecord> for PlacementDraft {
    fn from(record: &PlacementRecord) -> Self {
        Self {
            student_name: record.student_name.clone(),
            department: record.department.clone(),
            company_name: record.company_name.clone(),
            package: record.package.to_string(),
            date_placed: record.date_placed.format(DATE_FORMAT).to_string(),
        }
    }
}

fn required(field: &'static str, value: &str) -> Result<String> {
    if value.trim().is_empty() {
        Err(Error::missing_field(field))
    } else {
        Ok(value.to_string())
    }
}

fn parse_package(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|p| p.is_finite())
}

/// Accept `package` as a JSON number or as the numeric string the form stored.
fn deserialize_package<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPackage {
        Number(f64),
        Text(String),
    }

    match RawPackage::deserialize(deserializer)? {
        RawPackage::Number(n) => Ok(n),
        RawPackage::Text(s) => parse_package(s.trim()).ok_or_else(|| {
            serde::de::Error::custom(format!("package is not a number: {s:?}"))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn draft() -> PlacementDraft {
        PlacementDraft {
            student_name: "Asha Rao".to_string(),
            department: "CSE".to_string(),
            company_name: "Acme Corp".to_string(),
            package: "12.5".to_string(),
            date_placed: "2024-03-01".to_string(),
        }
    }

    fn record(id: i64) -> PlacementRecord {
        PlacementRecord::new(RecordId(id), draft().parse().unwrap())
    }

    #[test]
    fn test_draft_parse() {
        let fields = draft().parse().unwrap();
        assert_eq!(fields.student_name, "Asha Rao");
        assert!((fields.package - 12.5).abs() < f64::EPSILON);
        assert_eq!(
            fields.date_placed,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
    }

    #[test]
    fn test_draft_missing_field() {
        let mut d = draft();
        d.department = "   ".to_string();
        let err = d.parse().unwrap_err();
        assert!(matches!(
            err,
            Error::MissingField {
                field: "Department"
            }
        ));
    }

    #[test]
    fn test_draft_reports_first_missing_field() {
        let err = PlacementDraft::default().parse().unwrap_err();
        assert_eq!(err.to_string(), "Student Name is required");
    }

    #[test]
    fn test_draft_invalid_package() {
        let mut d = draft();
        d.package = "twelve".to_string();
        assert!(matches!(d.parse(), Err(Error::InvalidPackage { .. })));

        d.package = "inf".to_string();
        assert!(matches!(d.parse(), Err(Error::InvalidPackage { .. })));
    }

    #[test]
    fn test_draft_invalid_date() {
        let mut d = draft();
        d.date_placed = "2024-02-30".to_string();
        assert!(matches!(d.parse(), Err(Error::InvalidDate { .. })));
    }

    #[test]
    fn test_draft_from_record() {
        let d = PlacementDraft::from(&record(1));
        assert_eq!(d, draft());
    }

    #[test]
    fn test_apply_keeps_id() {
        let mut r = record(42);
        let mut d = draft();
        d.company_name = "Globex".to_string();
        r.apply(d.parse().unwrap());
        assert_eq!(r.id, RecordId(42));
        assert_eq!(r.company_name, "Globex");
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(record(1_700_000_000_000)).unwrap();
        assert_eq!(json["id"], 1_700_000_000_000_i64);
        assert_eq!(json["studentName"], "Asha Rao");
        assert_eq!(json["companyName"], "Acme Corp");
        assert_eq!(json["package"], 12.5);
        assert_eq!(json["datePlaced"], "2024-03-01");
    }

    #[test]
    fn test_deserialize_string_package() {
        let json = r#"{"id":1,"studentName":"A","department":"ECE","companyName":"B","package":"7.2","datePlaced":"2024-01-15"}"#;
        let r: PlacementRecord = serde_json::from_str(json).unwrap();
        assert!((r.package - 7.2).abs() < f64::EPSILON);
    }

    #[test]
    fn test_deserialize_bad_package() {
        let json = r#"{"id":1,"studentName":"A","department":"ECE","companyName":"B","package":"lots","datePlaced":"2024-01-15"}"#;
        assert!(serde_json::from_str::<PlacementRecord>(json).is_err());
    }

    #[test]
    fn test_generate_uses_timestamp() {
        let now = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
        assert_eq!(RecordId::generate(&[], now), RecordId(1_700_000_000_000));
    }

    #[test]
    fn test_generate_never_collides() {
        let now = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
        let records = vec![record(1_700_000_000_000), record(1_700_000_000_001)];
        assert_eq!(
            RecordId::generate(&records, now),
            RecordId(1_700_000_000_002)
        );
    }

    #[test]
    fn test_generate_at_top_of_range() {
        let now = Utc.timestamp_millis_opt(1_000).unwrap();
        let records = vec![record(i64::MAX)];
        assert_eq!(RecordId::generate(&records, now), RecordId(1_000));

        let records = vec![record(i64::MAX), record(1_000), record(999)];
        assert_eq!(RecordId::generate(&records, now), RecordId(998));
    }
}
