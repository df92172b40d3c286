//! Seatpick - a movie-theater seat-selection engine
//!
//! Core modules:
//! - `hall`: Deterministic seating engine (layout, hit-testing, selection,
//!   auto-search, booking)
//! - `wallet`: Ticket wallet shared between the picker and wallet pages
//! - `settings`: Hall-size presets and show metadata
//!
//! Rendering, DOM input normalization, and session storage live in the UI
//! layer. The engine consumes pointer coordinates already mapped into canvas
//! space and emits [`hall::HallEvent`]s for the UI to redraw from.

pub mod hall;
pub mod settings;
pub mod wallet;

pub use hall::{Hall, HallConfig};
pub use settings::{HallPreset, ShowInfo};
pub use wallet::Wallet;

/// Engine configuration constants
pub mod consts {
    /// Canvas dimensions the layout is computed against
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 500.0;

    /// Vertical offset of the first row (screen edge at the top)
    pub const ROW_START_Y: f32 = 50.0;
    /// Vertical distance between row centerlines
    pub const ROW_SPACING: f32 = 40.0;

    /// Seat radius and horizontal spacing at the reference column count
    pub const BASE_RADIUS: f32 = 15.0;
    pub const BASE_SPACING: f32 = 25.0;
    /// Column count the base radius/spacing are tuned for
    pub const BASE_COLS: u32 = 20;
    /// Floors so oversized halls stay clickable
    pub const MIN_RADIUS: f32 = 6.0;
    pub const MIN_SPACING: f32 = 12.0;

    /// Quadratic arc factor: rows bow toward the screen at the edges
    pub const CURVE_FACTOR: f32 = 0.4;

    /// Fraction of seats pre-sold when a hall is generated
    pub const OCCUPIED_FRACTION: f32 = 0.2;

    /// Patrons under this age must skip the front rows
    pub const MINOR_AGE: u32 = 15;
    /// Patrons at or above this age must skip the back rows
    pub const SENIOR_AGE: u32 = 60;
    /// Rows closed off at the front for minors / at the back for seniors
    pub const FRONT_ROWS_RESTRICTED: u32 = 3;
    pub const BACK_ROWS_RESTRICTED: u32 = 3;

    /// Supported group-booking sizes (inclusive)
    pub const MIN_GROUP_SIZE: usize = 2;
    pub const MAX_GROUP_SIZE: usize = 20;
}
