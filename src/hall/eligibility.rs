//! Age-based row eligibility policy
//!
//! Minors stay out of the front rows (too close to the screen), seniors out
//! of the back rows. Group constraints intersect: one minor and one senior
//! in the same party restrict both ends.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Age flags for a single patron
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PatronConstraint {
    pub is_minor: bool,
    pub is_senior: bool,
}

impl PatronConstraint {
    pub fn from_age(age: u32) -> Self {
        Self {
            is_minor: age < MINOR_AGE,
            is_senior: age >= SENIOR_AGE,
        }
    }
}

/// Aggregated age flags for a party
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupConstraint {
    pub size: usize,
    pub has_minor: bool,
    pub has_senior: bool,
}

impl GroupConstraint {
    pub fn aggregate(size: usize, members: &[PatronConstraint]) -> Self {
        Self {
            size,
            has_minor: members.iter().any(|m| m.is_minor),
            has_senior: members.iter().any(|m| m.is_senior),
        }
    }

    /// Row range the whole party may sit in
    pub fn row_range(&self, rows: u32) -> RowRange {
        let mut range = RowRange::full(rows);
        if self.has_minor {
            range = range.skip_front();
        }
        if self.has_senior {
            range = range.skip_back(rows);
        }
        range
    }
}

/// Inclusive row interval a patron or party may select within
///
/// `min > max` means no row qualifies; callers report "no eligible seat"
/// rather than treating it as a defect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowRange {
    pub min: u32,
    pub max: u32,
}

impl RowRange {
    pub fn full(rows: u32) -> Self {
        Self { min: 1, max: rows }
    }

    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }

    pub fn contains(&self, row: u32) -> bool {
        row >= self.min && row <= self.max
    }

    fn skip_front(mut self) -> Self {
        self.min = self.min.max(FRONT_ROWS_RESTRICTED + 1);
        self
    }

    fn skip_back(mut self, rows: u32) -> Self {
        self.max = self.max.min(rows.saturating_sub(BACK_ROWS_RESTRICTED));
        self
    }
}

/// Row range for a single patron of the given age
pub fn individual_row_range(age: u32, rows: u32) -> RowRange {
    let mut range = RowRange::full(rows);
    if age < MINOR_AGE {
        range = range.skip_front();
    }
    if age >= SENIOR_AGE {
        range = range.skip_back(rows);
    }
    range
}

/// Row range for a party; member restrictions intersect
pub fn group_row_range(members: &[PatronConstraint], rows: u32) -> RowRange {
    GroupConstraint::aggregate(members.len(), members).row_range(rows)
}
