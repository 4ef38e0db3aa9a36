//! Engine types
//!
//! Statistics reported at the end of an export.

use crate::pagination::PaginationState;
use std::time::Duration;

/// Statistics for an export run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportStats {
    /// Requests answered successfully
    pub pages: u64,
    /// Documents written
    pub documents: u64,
    /// `numFound` reported by the last page
    pub num_found: u64,
    /// Wall time of the run
    pub elapsed: Duration,
}

impl ExportStats {
    /// Summarize a finished pagination
    pub fn from_state(state: &PaginationState, num_found: u64, elapsed: Duration) -> Self {
        Self {
            pages: state.pages,
            documents: state.total_fetched,
            num_found,
            elapsed,
        }
    }
}
