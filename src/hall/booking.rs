//! Bulk booking transitions
//!
//! Order-independent state changes applied to the whole working set: book
//! (hold), cancel (release the hold), purchase (sell and emit a ticket
//! draft), refund (return the most recent sale). Selection mechanics stay in
//! [`select`](super::select); these operate on what selection produced.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::state::{Hall, HallEvent, SeatState};

/// The four bulk transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkOp {
    /// Selected -> Booked: hold the pick without paying
    Book,
    /// Booked -> Available: release the hold
    Cancel,
    /// Selected/Booked -> Occupied: sell, yielding a ticket draft
    Purchase,
    /// Occupied -> Available: return the most recent sale
    Refund,
}

/// Seat labels of a completed purchase, ready for the wallet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketDraft {
    pub seats: Vec<String>,
}

/// Why a bulk transition was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("no seats to apply this to - pick seats first")]
    EmptySelection,
}

/// Apply a bulk transition to the current working set
///
/// Every op rejects with [`BookingError::EmptySelection`] when its target
/// set is empty, mutating nothing. Only [`BulkOp::Purchase`] returns a
/// draft.
pub fn apply_bulk(hall: &mut Hall, op: BulkOp) -> Result<Option<TicketDraft>, BookingError> {
    match op {
        BulkOp::Book => {
            if hall.selection.is_empty() {
                return Err(BookingError::EmptySelection);
            }
            let refs = std::mem::take(&mut hall.selection);
            for &seat in &refs {
                hall.set_state(seat, SeatState::Booked);
            }
            let count = refs.len();
            hall.held.extend(refs);
            hall.push_event(HallEvent::SeatsBooked { count });
            log::info!("booked {} seat(s)", count);
            Ok(None)
        }
        BulkOp::Cancel => {
            if hall.held.is_empty() {
                return Err(BookingError::EmptySelection);
            }
            let refs = std::mem::take(&mut hall.held);
            for &seat in &refs {
                hall.set_state(seat, SeatState::Available);
            }
            hall.push_event(HallEvent::BookingCancelled { count: refs.len() });
            log::info!("cancelled {} booked seat(s)", refs.len());
            Ok(None)
        }
        BulkOp::Purchase => {
            if hall.selection.is_empty() && hall.held.is_empty() {
                return Err(BookingError::EmptySelection);
            }
            let mut refs = std::mem::take(&mut hall.selection);
            refs.append(&mut hall.held);
            for &seat in &refs {
                hall.set_state(seat, SeatState::Occupied);
            }
            let draft = TicketDraft {
                seats: refs.iter().map(|s| s.label()).collect(),
            };
            let count = refs.len();
            hall.last_sale = refs;
            hall.push_event(HallEvent::SeatsSold { count });
            log::info!("sold {} seat(s): {}", count, draft.seats.join(", "));
            Ok(Some(draft))
        }
        BulkOp::Refund => {
            if hall.last_sale.is_empty() {
                return Err(BookingError::EmptySelection);
            }
            let refs = std::mem::take(&mut hall.last_sale);
            for &seat in &refs {
                hall.set_state(seat, SeatState::Available);
            }
            hall.push_event(HallEvent::SeatsRefunded { count: refs.len() });
            log::info!("refunded {} seat(s)", refs.len());
            Ok(None)
        }
    }
}
