//! Student dashboard: a read-only, filterable list of placements.

use std::collections::HashSet;
use std::str::FromStr;

use crate::error::Result;
use crate::record::PlacementRecord;
use crate::stats::PlacementStats;
use crate::store::RecordStore;

/// Selector value meaning "every department".
pub const ALL_DEPARTMENTS: &str = "all";

/// Department selector state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DepartmentFilter {
    /// No department restriction.
    #[default]
    All,
    /// Only records whose department equals this value exactly.
    Exact(String),
}

impl DepartmentFilter {
    /// Whether `record` passes this filter.
    #[must_use]
    pub fn matches(&self, record: &PlacementRecord) -> bool {
        match self {
            Self::All => true,
            Self::Exact(dept) => record.department == *dept,
        }
    }
}

impl FromStr for DepartmentFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(if s == ALL_DEPARTMENTS {
            Self::All
        } else {
            Self::Exact(s.to_string())
        })
    }
}

impl std::fmt::Display for DepartmentFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "{ALL_DEPARTMENTS}"),
            Self::Exact(dept) => write!(f, "{dept}"),
        }
    }
}

/// Case-insensitive substring match on student or company name.
///
/// An empty search term matches every record.
#[must_use]
pub fn matches_search(record: &PlacementRecord, search: &str) -> bool {
    let needle = search.to_lowercase();
    record.student_name.to_lowercase().contains(&needle)
        || record.company_name.to_lowercase().contains(&needle)
}

/// Records passing both the search term and the department filter.
#[must_use]
pub fn filter_records<'r>(
    records: &'r [PlacementRecord],
    search: &str,
    department: &DepartmentFilter,
) -> Vec<&'r PlacementRecord> {
    records
        .iter()
        .filter(|r| matches_search(r, search) && department.matches(r))
        .collect()
}

/// Distinct department names in first-seen order.
#[must_use]
pub fn departments(records: &[PlacementRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter(|r| seen.insert(r.department.as_str()))
        .map(|r| r.department.clone())
        .collect()
}

/// State of the student dashboard.
///
/// Holds its own copy of the collection, loaded once; filter changes never
/// go back to the store.
#[derive(Debug, Clone, Default)]
pub struct StudentDashboard {
    placements: Vec<PlacementRecord>,
    search: String,
    department: DepartmentFilter,
    visible: Vec<usize>,
}

impl StudentDashboard {
    /// Load the collection from `store`.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored collection cannot be read.
    pub fn open(store: &RecordStore) -> Result<Self> {
        Ok(Self::from_records(store.load()?))
    }

    /// Build a dashboard over an already loaded collection.
    #[must_use]
    pub fn from_records(placements: Vec<PlacementRecord>) -> Self {
        let mut dashboard = Self {
            placements,
            ..Self::default()
        };
        dashboard.refilter();
        dashboard
    }

    /// All records, unfiltered.
    #[must_use]
    pub fn placements(&self) -> &[PlacementRecord] {
        &self.placements
    }

    /// Summary figures over all records.
    #[must_use]
    pub fn stats(&self) -> PlacementStats {
        PlacementStats::compute(&self.placements)
    }

    /// Options for the department selector, excluding "all".
    #[must_use]
    pub fn departments(&self) -> Vec<String> {
        departments(&self.placements)
    }

    /// Current search term.
    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Current department selection.
    #[must_use]
    pub fn department(&self) -> &DepartmentFilter {
        &self.department
    }

    /// Change the search term.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.refilter();
    }

    /// Change the department selection.
    pub fn set_department(&mut self, department: DepartmentFilter) {
        self.department = department;
        self.refilter();
    }

    /// Records currently shown, in stored order.
    pub fn visible(&self) -> impl Iterator<Item = &PlacementRecord> {
        self.visible.iter().map(|&i| &self.placements[i])
    }

    /// Number of records currently shown.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    fn refilter(&mut self) {
        self.visible = self
            .placements
            .iter()
            .enumerate()
            .filter(|(_, r)| matches_search(r, &self.search) && self.department.matches(r))
            .map(|(i, _)| i)
            .collect();
    }
}
