//! Hall state and core seating types
//!
//! All state that must be snapshotted for determinism lives here.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::layout::SeatLayout;
use crate::consts::*;

/// Lifecycle stage of a single seat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeatState {
    /// Free to select
    Available,
    /// In the patron's current pick
    Selected,
    /// Reserved but not yet paid for
    Booked,
    /// Sold (pre-sold at hall generation, or purchased this session)
    Occupied,
}

/// Coordinate of a seat, 1-indexed from the front-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatRef {
    pub row: u32,
    pub col: u32,
}

impl SeatRef {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Label drawn on the canvas and printed on tickets ("3-7")
    pub fn label(&self) -> String {
        format!("{}-{}", self.row, self.col)
    }
}

/// A seat entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seat {
    pub row: u32,
    pub col: u32,
    pub state: SeatState,
    /// Canvas-space center, cached from the layout at rebuild
    pub center: Vec2,
    /// Draw/hit radius, cached from the layout at rebuild
    pub radius: f32,
}

impl Seat {
    pub fn seat_ref(&self) -> SeatRef {
        SeatRef::new(self.row, self.col)
    }
}

/// Hall dimensions, immutable per grid build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HallConfig {
    pub rows: u32,
    pub cols: u32,
}

impl HallConfig {
    pub fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }

    pub fn total_seats(&self) -> u32 {
        self.rows * self.cols
    }
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// State-change notifications for the UI layer
///
/// Queued on every mutation and drained with [`Hall::take_events`]; the UI
/// redraws the canvas and status line from these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HallEvent {
    /// Grid was (re)built; any cached render geometry is stale
    GridRebuilt,
    /// The selected set changed
    SelectionChanged { selected: usize },
    /// Selected seats moved into a booking hold
    SeatsBooked { count: usize },
    /// A booking hold was released
    BookingCancelled { count: usize },
    /// Seats were purchased
    SeatsSold { count: usize },
    /// The most recent sale was returned to the pool
    SeatsRefunded { count: usize },
}

/// Complete hall state (deterministic, serializable)
///
/// Owns the seat grid and the selection set. Every mutation goes through the
/// operations in [`select`](super::select), [`search`](super::search), and
/// [`booking`](super::booking), which keep the invariant that `selection`
/// holds exactly the seats whose state is [`SeatState::Selected`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hall {
    pub config: HallConfig,
    /// Seed the current occupancy was generated from
    pub rng_state: RngState,
    /// Seats in row-major order
    pub(crate) seats: Vec<Seat>,
    /// Refs of Selected seats, in pick order
    pub(crate) selection: Vec<SeatRef>,
    /// Refs of Booked seats awaiting payment or cancellation
    pub(crate) held: Vec<SeatRef>,
    /// Refs of the most recent purchase, for refunds
    pub(crate) last_sale: Vec<SeatRef>,
    /// Pending UI notifications (not part of the snapshot)
    #[serde(skip)]
    pub(crate) events: Vec<HallEvent>,
}

impl Hall {
    /// Build a hall with the default pre-sold fraction
    pub fn new(config: HallConfig, seed: u64) -> Self {
        Self::with_occupancy(config, seed, OCCUPIED_FRACTION)
    }

    /// Build a hall with every seat available
    pub fn vacant(config: HallConfig) -> Self {
        Self::with_occupancy(config, 0, 0.0)
    }

    /// Build a hall with a custom pre-sold fraction
    pub fn with_occupancy(config: HallConfig, seed: u64, occupied_fraction: f32) -> Self {
        assert!(
            config.rows > 0 && config.cols > 0,
            "hall dimensions must be positive"
        );
        let mut hall = Self {
            config,
            rng_state: RngState::new(seed),
            seats: Vec::new(),
            selection: Vec::new(),
            held: Vec::new(),
            last_sale: Vec::new(),
            events: Vec::new(),
        };
        hall.rebuild(occupied_fraction);
        hall
    }

    /// Rebuild the grid for a new configuration and seed
    ///
    /// Invalidates the selection, the booking hold, and the refundable sale.
    pub fn reset(&mut self, config: HallConfig, seed: u64) {
        assert!(
            config.rows > 0 && config.cols > 0,
            "hall dimensions must be positive"
        );
        self.config = config;
        self.rng_state = RngState::new(seed);
        self.rebuild(OCCUPIED_FRACTION);
    }

    fn rebuild(&mut self, occupied_fraction: f32) {
        let layout = SeatLayout::new(self.config);
        let mut rng = self.rng_state.to_rng();

        self.seats.clear();
        self.seats.reserve(self.config.total_seats() as usize);
        for row in 1..=self.config.rows {
            for col in 1..=self.config.cols {
                let state = if rng.random::<f32>() < occupied_fraction {
                    SeatState::Occupied
                } else {
                    SeatState::Available
                };
                self.seats.push(Seat {
                    row,
                    col,
                    state,
                    center: layout.center(row, col),
                    radius: layout.radius(),
                });
            }
        }

        self.selection.clear();
        self.held.clear();
        self.last_sale.clear();
        self.events.push(HallEvent::GridRebuilt);

        log::info!(
            "hall rebuilt: {}x{}, {} available / {} occupied (seed {})",
            self.config.rows,
            self.config.cols,
            self.count_by_state(SeatState::Available),
            self.count_by_state(SeatState::Occupied),
            self.rng_state.seed
        );
    }

    fn index_of(&self, seat: SeatRef) -> usize {
        ((seat.row - 1) * self.config.cols + (seat.col - 1)) as usize
    }

    /// Seat lookup by ref. Refs come from hit-testing, search, or grid
    /// iteration and are always in bounds; an out-of-range ref is a defect.
    pub fn seat(&self, seat: SeatRef) -> &Seat {
        &self.seats[self.index_of(seat)]
    }

    /// Bounds-checked seat lookup (1-indexed)
    pub fn get(&self, row: u32, col: u32) -> Option<&Seat> {
        if row == 0 || col == 0 || row > self.config.rows || col > self.config.cols {
            return None;
        }
        Some(&self.seats[((row - 1) * self.config.cols + (col - 1)) as usize])
    }

    /// All seats in row-major order
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn count_by_state(&self, state: SeatState) -> usize {
        self.seats.iter().filter(|s| s.state == state).count()
    }

    /// Seats currently selected, in pick order
    pub fn current_selection(&self) -> &[SeatRef] {
        &self.selection
    }

    /// Seats currently held by an unpaid booking
    pub fn current_hold(&self) -> &[SeatRef] {
        &self.held
    }

    /// Drain pending UI notifications
    pub fn take_events(&mut self) -> Vec<HallEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn set_state(&mut self, seat: SeatRef, state: SeatState) {
        let idx = self.index_of(seat);
        self.seats[idx].state = state;
    }

    pub(crate) fn state_of(&self, seat: SeatRef) -> SeatState {
        self.seat(seat).state
    }

    pub(crate) fn push_event(&mut self, event: HallEvent) {
        self.events.push(event);
    }

    /// Selection set and Selected states agree (checked by the property tests)
    #[cfg(test)]
    pub(crate) fn selection_is_consistent(&self) -> bool {
        let selected: Vec<SeatRef> = self
            .seats
            .iter()
            .filter(|s| s.state == SeatState::Selected)
            .map(Seat::seat_ref)
            .collect();
        let mut from_set = self.selection.clone();
        let mut from_grid = selected;
        from_set.sort_unstable_by_key(|r| (r.row, r.col));
        from_grid.sort_unstable_by_key(|r| (r.row, r.col));
        from_set == from_grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_grid_shape_and_unique_coords() {
        for (rows, cols) in [(10, 10), (10, 20), (10, 30)] {
            let hall = Hall::new(HallConfig::new(rows, cols), 7);
            assert_eq!(hall.seats().len(), (rows * cols) as usize);

            let coords: HashSet<(u32, u32)> =
                hall.seats().iter().map(|s| (s.row, s.col)).collect();
            assert_eq!(coords.len(), (rows * cols) as usize);
        }
    }

    #[test]
    fn test_initial_counts_partition_the_grid() {
        let hall = Hall::new(HallConfig::new(10, 20), 42);
        let available = hall.count_by_state(SeatState::Available);
        let occupied = hall.count_by_state(SeatState::Occupied);
        assert_eq!(available + occupied, 200);
        assert_eq!(hall.count_by_state(SeatState::Selected), 0);
        assert_eq!(hall.count_by_state(SeatState::Booked), 0);
        assert!(hall.current_selection().is_empty());
    }

    #[test]
    fn test_same_seed_same_occupancy() {
        let a = Hall::new(HallConfig::new(10, 20), 99999);
        let b = Hall::new(HallConfig::new(10, 20), 99999);
        for (sa, sb) in a.seats().iter().zip(b.seats().iter()) {
            assert_eq!(sa.state, sb.state);
        }
    }

    #[test]
    fn test_vacant_hall_is_all_available() {
        let hall = Hall::vacant(HallConfig::new(10, 10));
        assert_eq!(hall.count_by_state(SeatState::Available), 100);
        assert_eq!(hall.count_by_state(SeatState::Occupied), 0);
    }

    #[test]
    fn test_reset_invalidates_selection_and_hold() {
        let mut hall = Hall::vacant(HallConfig::new(10, 10));
        hall.set_state(SeatRef::new(5, 5), SeatState::Selected);
        hall.selection.push(SeatRef::new(5, 5));
        hall.held.push(SeatRef::new(6, 6));

        hall.reset(HallConfig::new(10, 20), 1);
        assert_eq!(hall.config.cols, 20);
        assert!(hall.current_selection().is_empty());
        assert!(hall.current_hold().is_empty());
        assert_eq!(hall.count_by_state(SeatState::Selected), 0);
    }

    #[test]
    fn test_get_bounds() {
        let hall = Hall::vacant(HallConfig::new(10, 20));
        assert!(hall.get(1, 1).is_some());
        assert!(hall.get(10, 20).is_some());
        assert!(hall.get(0, 1).is_none());
        assert!(hall.get(11, 1).is_none());
        assert!(hall.get(1, 21).is_none());
    }

    #[test]
    fn test_snapshot_roundtrip() {
        let hall = Hall::new(HallConfig::new(10, 20), 123);
        let json = serde_json::to_string(&hall).unwrap();
        let back: Hall = serde_json::from_str(&json).unwrap();
        assert_eq!(back.config, hall.config);
        assert_eq!(back.seats().len(), hall.seats().len());
        for (a, b) in hall.seats().iter().zip(back.seats().iter()) {
            assert_eq!(a.state, b.state);
            assert!((a.center - b.center).length() < f32::EPSILON);
        }
    }
}
