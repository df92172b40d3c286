//! Deterministic seating engine
//!
//! All seat logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only (hall occupancy is reproducible from the seed)
//! - Stable iteration order (row-major)
//! - No rendering or platform dependencies
//!
//! The seat grid and the selection set are only ever mutated together, so a
//! re-render triggered mid-operation never observes one without the other.

pub mod booking;
pub mod eligibility;
pub mod layout;
pub mod search;
pub mod select;
pub mod state;

pub use booking::{BookingError, BulkOp, TicketDraft, apply_bulk};
pub use eligibility::{
    GroupConstraint, PatronConstraint, RowRange, group_row_range, individual_row_range,
};
pub use layout::{SeatLayout, hit_test};
pub use search::{SearchError, auto_select_group, auto_select_individual};
pub use select::{SelectionError, clear_selection, select_single, toggle_multi};
pub use state::{Hall, HallConfig, HallEvent, RngState, Seat, SeatRef, SeatState};
