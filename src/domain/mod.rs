/// Domain models for the application
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// Placeholder shown wherever a launch has no details text
pub const NO_DETAILS: &str = "No details available";

/// Default number of rows per table page
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(5) {
    Some(n) => n,
    None => unreachable!(),
};

/// Page sizes offered by the pagination control
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [5, 10, 25];

/// One launch event, normalized from the external schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchRecord {
    pub id: String,
    pub name: String,
    /// Raw ISO-8601 timestamp as received; parsed lazily for sort and display
    pub launch_date_utc: String,
    pub launchpad_id: Option<String>,
    /// `None` means unknown or pending, not failure
    pub success: Option<bool>,
    pub details: Option<String>,
}

/// Session-scoped launch data and fetch status
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchCollectionState {
    pub records: Vec<LaunchRecord>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl Default for LaunchCollectionState {
    /// A fresh session is loading from the first observation.
    fn default() -> Self {
        Self {
            records: Vec::new(),
            is_loading: true,
            error: None,
        }
    }
}

/// Sortable table columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    /// The "#" column: original position, reversible
    #[default]
    #[serde(alias = "number")]
    Sequence,
    Name,
    Date,
    /// Any column name the table does not know; leaves order untouched
    #[serde(other)]
    Unrecognized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    #[serde(alias = "ascending")]
    Asc,
    #[serde(alias = "descending")]
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSpec {
    pub page_index: usize,
    pub page_size: NonZeroUsize,
}

impl PageSpec {
    pub fn new(page_index: usize, page_size: NonZeroUsize) -> Self {
        Self {
            page_index,
            page_size,
        }
    }
}

impl Default for PageSpec {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }
}

/// One displayed table row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchRow {
    /// Global 1-based row number, continuous across pages
    pub number: usize,
    pub id: String,
    pub name: String,
    pub launch_date: String,
    pub details: String,
    /// Navigation target when the row is clicked
    pub summary_path: String,
}

/// The visible window of the table plus what the pagination control needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchPage {
    pub rows: Vec<LaunchRow>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
    pub page_size_options: Vec<usize>,
    pub sort: SortSpec,
}

/// Listing view
#[derive(Debug, Clone, Serialize)]
pub struct BoardView {
    pub is_loading: bool,
    pub error: Option<String>,
    /// Absent while loading or when the last fetch failed
    pub table: Option<LaunchPage>,
}

/// Detail overlay for a single launch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchSummary {
    pub id: String,
    pub name: String,
    pub launch_date_utc: String,
    pub launch_date: String,
    pub launchpad_id: Option<String>,
    pub launchpad: String,
    pub success: Option<bool>,
    pub outcome: &'static str,
    pub details: String,
}

/// Health check response
#[derive(Serialize)]
pub struct Health {
    pub status: &'static str,
    pub now: DateTime<Utc>,
}
