//! Best-seat and contiguous-block auto-search
//!
//! Individual search spirals outward from the hall's sweet spot (middle row,
//! middle column), preferring seats farther from the screen and to the
//! right. Group search takes the first leftmost run of adjacent free seats
//! in the frontmost eligible row.

use thiserror::Error;

use super::eligibility::{PatronConstraint, group_row_range, individual_row_range};
use super::select::{mark_selected, release_selection};
use super::state::{Hall, HallEvent, SeatRef, SeatState};
use crate::consts::{MAX_GROUP_SIZE, MIN_GROUP_SIZE};

/// Why auto-search came back empty-handed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("no seat matches the age requirements")]
    Exhausted,
    #[error("group size must be between 2 and 20")]
    InvalidGroupSize,
}

/// Pick the best single seat for a patron of the given age
///
/// Clears any existing selection first. Rows are tried outward from the
/// middle row, farther-from-screen side first (mid, mid+1, mid-1, ...);
/// columns outward from the middle column, right side first. The first
/// Available seat under that ordering wins. Beyond the clear, a failed
/// search leaves the hall untouched.
pub fn auto_select_individual(hall: &mut Hall, age: u32) -> Result<SeatRef, SearchError> {
    let rows = hall.config.rows;
    let range = individual_row_range(age, rows);

    release_selection(hall);

    if range.is_empty() {
        hall.push_event(HallEvent::SelectionChanged { selected: 0 });
        return Err(SearchError::Exhausted);
    }

    let mid_row = (rows / 2).max(1);
    for row in outward(mid_row, rows) {
        if !range.contains(row) {
            continue;
        }
        if let Some(seat) = best_in_row(hall, row) {
            mark_selected(hall, seat);
            hall.push_event(HallEvent::SelectionChanged { selected: 1 });
            log::info!("auto-picked seat {} for age {}", seat.label(), age);
            return Ok(seat);
        }
    }

    hall.push_event(HallEvent::SelectionChanged { selected: 0 });
    log::debug!("individual auto-search exhausted for age {}", age);
    Err(SearchError::Exhausted)
}

/// 1..=max visited outward from `mid`, the high side first at each step:
/// mid, mid+1, mid-1, mid+2, mid-2, ...
fn outward(mid: u32, max: u32) -> impl Iterator<Item = u32> {
    (0..=max).flat_map(move |offset| {
        let high = (mid + offset <= max).then(|| mid + offset);
        let low = (offset > 0 && mid > offset).then(|| mid - offset);
        high.into_iter().chain(low)
    })
}

/// First Available seat scanning outward from the middle column, right first
fn best_in_row(hall: &Hall, row: u32) -> Option<SeatRef> {
    let cols = hall.config.cols;
    outward((cols / 2).max(1), cols)
        .find(|&col| is_available(hall, row, col))
        .map(|col| SeatRef::new(row, col))
}

/// Pick a contiguous block of seats for a party
///
/// Clears any existing selection first. Eligible rows are scanned front to
/// back; within a row, the leftmost run of adjacent Available seats that
/// reaches `group_size` is selected whole. Beyond the clear, a failed search
/// selects nothing - there are no partial blocks.
pub fn auto_select_group(
    hall: &mut Hall,
    group_size: usize,
    members: &[PatronConstraint],
) -> Result<Vec<SeatRef>, SearchError> {
    if !(MIN_GROUP_SIZE..=MAX_GROUP_SIZE).contains(&group_size) {
        return Err(SearchError::InvalidGroupSize);
    }

    let rows = hall.config.rows;
    let range = group_row_range(members, rows);

    release_selection(hall);

    if !range.is_empty() {
        for row in range.min..=range.max {
            if let Some(start) = first_run_start(hall, row, group_size) {
                let block: Vec<SeatRef> = (start..start + group_size as u32)
                    .map(|col| SeatRef::new(row, col))
                    .collect();
                for &seat in &block {
                    mark_selected(hall, seat);
                }
                hall.push_event(HallEvent::SelectionChanged {
                    selected: block.len(),
                });
                log::info!(
                    "auto-picked row {} seats {}..{} for a group of {}",
                    row,
                    start,
                    start + group_size as u32 - 1,
                    group_size
                );
                return Ok(block);
            }
        }
    }

    hall.push_event(HallEvent::SelectionChanged { selected: 0 });
    log::debug!("group auto-search exhausted for {} seats", group_size);
    Err(SearchError::Exhausted)
}

/// Start column of the leftmost run of `len` adjacent Available seats
fn first_run_start(hall: &Hall, row: u32, len: usize) -> Option<u32> {
    let mut run = 0usize;
    let mut start = 0u32;
    for col in 1..=hall.config.cols {
        if is_available(hall, row, col) {
            run += 1;
            if run == 1 {
                start = col;
            }
            if run >= len {
                return Some(start);
            }
        } else {
            run = 0;
        }
    }
    None
}

fn is_available(hall: &Hall, row: u32, col: u32) -> bool {
    hall.state_of(SeatRef::new(row, col)) == SeatState::Available
}
