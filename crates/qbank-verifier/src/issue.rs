//! Verification findings

use serde::Serialize;

/// Issue categories raised outside the keyword rule table.
///
/// Keyword rule groups carry their own category names (for example
/// "Missing Cybersecurity Position").
pub mod issue_category {
    /// No positions at all
    pub const EMPTY_POSITIONS: &str = "Empty Positions";
    /// Entry difficulty without entry seniority
    pub const MISSING_ENTRY_SENIORITY: &str = "Missing Entry Seniority";
    /// Senior level without the competitive interview type
    pub const MISSING_COMPETITIVE_SENIOR: &str = "Missing Competitive for Senior";
    /// Mid level and difficulty without the competitive interview type
    pub const MISSING_COMPETITIVE_MID: &str = "Missing Competitive for Mid";
    /// companyType holds something other than an array
    pub const COMPANY_TYPE_NOT_ARRAY: &str = "Company Type Not Array";
    /// companyType is not the full company-type list
    pub const WRONG_COMPANY_TYPES: &str = "Wrong Company Types";
    /// interviewTypes holds something other than an array
    pub const INTERVIEW_TYPES_NOT_ARRAY: &str = "Interview Types Not Array";
    /// positions holds something other than an array
    pub const POSITIONS_NOT_ARRAY: &str = "Positions Not Array";
    /// A position appears more than once
    pub const DUPLICATE_POSITIONS: &str = "Duplicate Positions";
    /// An interview type appears more than once
    pub const DUPLICATE_INTERVIEW_TYPES: &str = "Duplicate Interview Types";
    /// Positions are not in lexicographic order
    pub const UNSORTED_POSITIONS: &str = "Unsorted Positions";
    /// A position outside the nominal domain
    pub const UNKNOWN_POSITION: &str = "Unknown Position";
    /// A collection could not be read or parsed
    pub const FILE_READ_ERROR: &str = "File Read Error";
}

/// One violated check on one record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    /// Issue category
    pub category: String,
    /// Source collection
    pub collection: String,
    /// Record identifier
    pub record_id: String,
    /// Human-readable explanation
    pub detail: String,
}

impl Issue {
    /// Create an issue
    pub fn new(
        category: impl Into<String>,
        collection: impl Into<String>,
        record_id: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            collection: collection.into(),
            record_id: record_id.into(),
            detail: detail.into(),
        }
    }

    /// Issue for a collection that could not be loaded
    pub fn file_read_error(collection: impl Into<String>, error: impl std::fmt::Display) -> Self {
        Self::new(
            issue_category::FILE_READ_ERROR,
            collection,
            "N/A",
            error.to_string(),
        )
    }
}
