//! Selection state machine
//!
//! Click handling for both ticket modes: a plain click restarts the pick
//! with the clicked seat, a modifier-held click toggles seats into a group
//! pick. Every path mutates the seat states and the selection set together.

use thiserror::Error;

use super::eligibility::RowRange;
use super::state::{Hall, HallEvent, SeatRef, SeatState};
use crate::consts::{MAX_GROUP_SIZE, MIN_GROUP_SIZE};

/// Why a click was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("seat is already sold")]
    SeatOccupied,
    #[error("row is not available for this patron's age")]
    RowIneligible,
    #[error("the whole group is already seated")]
    GroupCapReached,
    #[error("group seats must share a single row")]
    RowMismatch,
    #[error("group size must be between 2 and 20")]
    InvalidGroupSize,
}

/// Single-ticket click: restart the pick with the clicked seat
///
/// An Occupied or Booked seat rejects up front with no state change. An
/// eligible click replaces the previous pick; an ineligible row still clears
/// it (the pick restarted, the new seat just failed to land).
pub fn select_single(
    hall: &mut Hall,
    seat: SeatRef,
    range: RowRange,
) -> Result<(), SelectionError> {
    if is_taken(hall.state_of(seat)) {
        return Err(SelectionError::SeatOccupied);
    }

    release_selection(hall);

    if !range.contains(seat.row) {
        hall.push_event(HallEvent::SelectionChanged { selected: 0 });
        log::debug!("rejected single pick {}: row ineligible", seat.label());
        return Err(SelectionError::RowIneligible);
    }

    mark_selected(hall, seat);
    hall.push_event(HallEvent::SelectionChanged { selected: 1 });
    Ok(())
}

/// Group-ticket click (modifier held): toggle the seat in or out of the pick
///
/// Selecting checks, in order: row eligibility, the group-size cap, and row
/// uniformity against the first picked seat. Deselecting always succeeds.
/// A rejected click leaves all state unchanged.
pub fn toggle_multi(
    hall: &mut Hall,
    seat: SeatRef,
    range: RowRange,
    group_cap: usize,
) -> Result<(), SelectionError> {
    if !(MIN_GROUP_SIZE..=MAX_GROUP_SIZE).contains(&group_cap) {
        return Err(SelectionError::InvalidGroupSize);
    }

    let state = hall.state_of(seat);
    if is_taken(state) {
        return Err(SelectionError::SeatOccupied);
    }

    if state == SeatState::Selected {
        let idx = hall
            .selection
            .iter()
            .position(|&r| r == seat)
            .expect("selected seat missing from selection set");
        hall.selection.remove(idx);
        hall.set_state(seat, SeatState::Available);
        hall.push_event(HallEvent::SelectionChanged {
            selected: hall.selection.len(),
        });
        return Ok(());
    }

    if !range.contains(seat.row) {
        return Err(SelectionError::RowIneligible);
    }
    if hall.selection.len() >= group_cap {
        return Err(SelectionError::GroupCapReached);
    }
    if let Some(first) = hall.selection.first() {
        if first.row != seat.row {
            return Err(SelectionError::RowMismatch);
        }
    }

    mark_selected(hall, seat);
    hall.push_event(HallEvent::SelectionChanged {
        selected: hall.selection.len(),
    });
    Ok(())
}

/// Return every selected seat to the pool and empty the selection
pub fn clear_selection(hall: &mut Hall) {
    release_selection(hall);
    hall.push_event(HallEvent::SelectionChanged { selected: 0 });
}

/// Programmatic select used by auto-search; the caller has already checked
/// eligibility and availability.
pub(crate) fn mark_selected(hall: &mut Hall, seat: SeatRef) {
    debug_assert_eq!(hall.state_of(seat), SeatState::Available);
    hall.set_state(seat, SeatState::Selected);
    hall.selection.push(seat);
}

/// Clear without emitting an event (callers emit their own)
pub(crate) fn release_selection(hall: &mut Hall) {
    let refs = std::mem::take(&mut hall.selection);
    for seat in refs {
        hall.set_state(seat, SeatState::Available);
    }
}

fn is_taken(state: SeatState) -> bool {
    matches!(state, SeatState::Booked | SeatState::Occupied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hall::state::HallConfig;

    fn vacant() -> Hall {
        Hall::vacant(HallConfig::new(10, 20))
    }

    fn full_range() -> RowRange {
        RowRange::full(10)
    }

    #[test]
    fn test_single_select() {
        let mut hall = vacant();
        select_single(&mut hall, SeatRef::new(5, 5), full_range()).unwrap();
        assert_eq!(hall.state_of(SeatRef::new(5, 5)), SeatState::Selected);
        assert_eq!(hall.current_selection(), &[SeatRef::new(5, 5)]);
    }

    #[test]
    fn test_single_select_replaces_previous() {
        let mut hall = vacant();
        select_single(&mut hall, SeatRef::new(5, 5), full_range()).unwrap();
        select_single(&mut hall, SeatRef::new(2, 3), full_range()).unwrap();
        assert_eq!(hall.state_of(SeatRef::new(5, 5)), SeatState::Available);
        assert_eq!(hall.current_selection(), &[SeatRef::new(2, 3)]);
    }

    #[test]
    fn test_single_click_on_occupied_rejects_without_change() {
        let mut hall = vacant();
        select_single(&mut hall, SeatRef::new(5, 5), full_range()).unwrap();

        hall.set_state(SeatRef::new(1, 1), SeatState::Occupied);
        let err = select_single(&mut hall, SeatRef::new(1, 1), full_range());
        assert_eq!(err, Err(SelectionError::SeatOccupied));
        // Previous pick survives an occupied-seat click
        assert_eq!(hall.current_selection(), &[SeatRef::new(5, 5)]);
    }

    #[test]
    fn test_single_click_on_ineligible_row_clears_previous_pick() {
        let mut hall = vacant();
        select_single(&mut hall, SeatRef::new(5, 5), full_range()).unwrap();

        let minor_range = RowRange { min: 4, max: 10 };
        let err = select_single(&mut hall, SeatRef::new(2, 5), minor_range);
        assert_eq!(err, Err(SelectionError::RowIneligible));
        assert!(hall.current_selection().is_empty());
        assert_eq!(hall.count_by_state(SeatState::Selected), 0);
    }

    #[test]
    fn test_toggle_on_and_off() {
        let mut hall = vacant();
        toggle_multi(&mut hall, SeatRef::new(3, 5), full_range(), 4).unwrap();
        toggle_multi(&mut hall, SeatRef::new(3, 6), full_range(), 4).unwrap();
        assert_eq!(hall.current_selection().len(), 2);

        toggle_multi(&mut hall, SeatRef::new(3, 5), full_range(), 4).unwrap();
        assert_eq!(hall.current_selection(), &[SeatRef::new(3, 6)]);
        assert_eq!(hall.state_of(SeatRef::new(3, 5)), SeatState::Available);
    }

    #[test]
    fn test_toggle_enforces_group_cap() {
        let mut hall = vacant();
        toggle_multi(&mut hall, SeatRef::new(3, 5), full_range(), 2).unwrap();
        toggle_multi(&mut hall, SeatRef::new(3, 6), full_range(), 2).unwrap();
        let err = toggle_multi(&mut hall, SeatRef::new(3, 7), full_range(), 2);
        assert_eq!(err, Err(SelectionError::GroupCapReached));
        assert_eq!(hall.current_selection().len(), 2);

        // Deselect is exempt from the cap
        toggle_multi(&mut hall, SeatRef::new(3, 5), full_range(), 2).unwrap();
        assert_eq!(hall.current_selection().len(), 1);
    }

    #[test]
    fn test_toggle_enforces_row_uniformity() {
        let mut hall = vacant();
        toggle_multi(&mut hall, SeatRef::new(3, 5), full_range(), 6).unwrap();
        toggle_multi(&mut hall, SeatRef::new(3, 7), full_range(), 6).unwrap();

        let err = toggle_multi(&mut hall, SeatRef::new(4, 5), full_range(), 6);
        assert_eq!(err, Err(SelectionError::RowMismatch));
        assert_eq!(hall.current_selection().len(), 2);
        assert_eq!(hall.state_of(SeatRef::new(4, 5)), SeatState::Available);
    }

    #[test]
    fn test_toggle_enforces_eligibility() {
        let mut hall = vacant();
        let senior_range = RowRange { min: 1, max: 7 };
        let err = toggle_multi(&mut hall, SeatRef::new(9, 1), senior_range, 4);
        assert_eq!(err, Err(SelectionError::RowIneligible));
        assert!(hall.current_selection().is_empty());
    }

    #[test]
    fn test_toggle_rejects_out_of_range_group_sizes() {
        let mut hall = vacant();
        for cap in [0, 1, 21] {
            let err = toggle_multi(&mut hall, SeatRef::new(3, 5), full_range(), cap);
            assert_eq!(err, Err(SelectionError::InvalidGroupSize));
        }
    }

    #[test]
    fn test_toggle_rejects_taken_seats() {
        let mut hall = vacant();
        hall.set_state(SeatRef::new(3, 5), SeatState::Occupied);
        hall.set_state(SeatRef::new(3, 6), SeatState::Booked);
        for col in [5, 6] {
            let err = toggle_multi(&mut hall, SeatRef::new(3, col), full_range(), 4);
            assert_eq!(err, Err(SelectionError::SeatOccupied));
        }
    }

    #[test]
    fn test_clear_selection_restores_availability() {
        let mut hall = vacant();
        for col in 5..=8 {
            toggle_multi(&mut hall, SeatRef::new(3, col), full_range(), 6).unwrap();
        }
        clear_selection(&mut hall);
        assert!(hall.current_selection().is_empty());
        assert_eq!(hall.count_by_state(SeatState::Selected), 0);
        assert_eq!(hall.count_by_state(SeatState::Available), 200);
    }

    #[test]
    fn test_selection_changed_events() {
        let mut hall = vacant();
        hall.take_events();

        select_single(&mut hall, SeatRef::new(5, 5), full_range()).unwrap();
        assert_eq!(
            hall.take_events(),
            vec![HallEvent::SelectionChanged { selected: 1 }]
        );

        clear_selection(&mut hall);
        assert_eq!(
            hall.take_events(),
            vec![HallEvent::SelectionChanged { selected: 0 }]
        );
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// The selection set and the Selected seat states never diverge,
            /// whatever sequence of clicks arrives.
            #[test]
            fn prop_selection_matches_states(
                seed in 0u64..512,
                ops in proptest::collection::vec(
                    (0u8..3, 1u32..=10, 1u32..=20),
                    1..48,
                ),
            ) {
                let mut hall = Hall::new(HallConfig::new(10, 20), seed);
                let range = RowRange::full(10);
                for (op, row, col) in ops {
                    let seat = SeatRef::new(row, col);
                    match op {
                        0 => { let _ = select_single(&mut hall, seat, range); }
                        1 => { let _ = toggle_multi(&mut hall, seat, range, 5); }
                        _ => clear_selection(&mut hall),
                    }
                    prop_assert!(hall.selection_is_consistent());
                }
            }
        }
    }
}
