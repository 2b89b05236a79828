//! Summary figures shown at the top of both dashboards.

use std::collections::HashSet;

use serde::Serialize;

use crate::record::PlacementRecord;

/// Totals over a placement collection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlacementStats {
    /// Number of placement records.
    pub total_placements: usize,
    /// Number of distinct company names.
    pub companies: usize,
    /// Mean package in LPA, `0.0` when there are no records.
    pub average_package: f64,
}

impl PlacementStats {
    /// Compute the figures for `records`.
    #[must_use]
    pub fn compute(records: &[PlacementRecord]) -> Self {
        let companies = records
            .iter()
            .map(|r| r.company_name.as_str())
            .collect::<HashSet<_>>()
            .len();

        // Running mean: every term is divided before it is added, so finite
        // packages give a finite average even when their sum would overflow.
        let average_package = records.iter().enumerate().fold(0.0, |mean, (i, r)| {
            #[allow(clippy::cast_precision_loss)]
            let n = (i + 1) as f64;
            mean + r.package / n - mean / n
        });

        Self {
            total_placements: records.len(),
            companies,
            average_package,
        }
    }

    /// Average package as the dashboard card shows it, e.g. `₹12.5L`.
    #[must_use]
    pub fn average_label(&self, currency_symbol: &str) -> String {
        format!("{currency_symbol}{:.1}L", self.average_package)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{PlacementDraft, RecordId};

    fn record(id: i64, company: &str, package: &str) -> PlacementRecord {
        let draft = PlacementDraft {
            student_name: format!("Student {id}"),
            department: "CSE".to_string(),
            company_name: company.to_string(),
            package: package.to_string(),
            date_placed: "2024-06-01".to_string(),
        };
        PlacementRecord::new(RecordId(id), draft.parse().unwrap())
    }

    #[test]
    fn test_empty_collection() {
        let stats = PlacementStats::compute(&[]);
        assert_eq!(stats.total_placements, 0);
        assert_eq!(stats.companies, 0);
        assert!(stats.average_package.abs() < f64::EPSILON);
        assert!(stats.average_package.is_finite());
        assert_eq!(stats.average_label("₹"), "₹0.0L");
    }

    #[test]
    fn test_totals() {
        let records = vec![
            record(1, "Acme Corp", "10"),
            record(2, "Globex", "20"),
            record(3, "Acme Corp", "15"),
        ];
        let stats = PlacementStats::compute(&records);
        assert_eq!(stats.total_placements, 3);
        assert_eq!(stats.companies, 2);
        assert!((stats.average_package - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_company_names_are_case_sensitive() {
        let records = vec![record(1, "Acme", "1"), record(2, "acme", "1")];
        assert_eq!(PlacementStats::compute(&records).companies, 2);
    }

    #[test]
    fn test_average_label_rounds_to_one_place() {
        let records = vec![record(1, "A", "7.25"), record(2, "B", "8.1")];
        let stats = PlacementStats::compute(&records);
        assert_eq!(stats.average_label("₹"), "₹7.7L");
        assert_eq!(stats.average_label("$"), "$7.7L");
    }

    #[test]
    fn test_average_of_huge_packages_stays_finite() {
        let records = vec![record(1, "A", "1e308"), record(2, "B", "1e308")];
        let stats = PlacementStats::compute(&records);
        assert!(stats.average_package.is_finite());
        assert!((stats.average_package - 1e308).abs() <= 1e308 * f64::EPSILON);
        assert!(!stats.average_label("₹").contains("inf"));
    }
}
