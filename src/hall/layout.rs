//! Seat layout geometry and pointer hit-testing
//!
//! Rows are laid out top-to-bottom (row 1 nearest the screen) and bowed
//! toward it at the edges by a quadratic arc. Radius and spacing shrink for
//! halls wider than the reference column count so every hall fits the same
//! canvas.

use glam::Vec2;

use super::state::{Hall, HallConfig, SeatRef};
use crate::consts::*;

/// Derived layout parameters for one hall configuration
///
/// Pure function of the configuration; recomputed on every rebuild and
/// cached into each seat's `center`/`radius`.
#[derive(Debug, Clone, Copy)]
pub struct SeatLayout {
    cols: u32,
    scale: f32,
    radius: f32,
    spacing: f32,
}

impl SeatLayout {
    pub fn new(config: HallConfig) -> Self {
        let scale = (BASE_COLS as f32 / config.cols as f32).min(1.0);
        Self {
            cols: config.cols,
            scale,
            radius: (BASE_RADIUS * scale).max(MIN_RADIUS),
            spacing: (BASE_SPACING * scale).max(MIN_SPACING),
        }
    }

    /// Shrink factor relative to the reference hall width (1.0 at or below it)
    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Seat radius shared by every seat in the hall
    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Horizontal distance between seat centers within a row
    #[inline]
    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// Canvas-space center of a seat (1-indexed row/col)
    pub fn center(&self, row: u32, col: u32) -> Vec2 {
        let r = (row - 1) as f32;
        let c = (col - 1) as f32;
        let n = self.cols as f32;

        let start_x = CANVAS_WIDTH / 2.0 - ((n - 1.0) * self.spacing) / 2.0;
        let x = start_x + c * self.spacing;

        // Quadratic bow: edge seats lift toward the screen
        let half = (n - 1.0) / 2.0;
        let curve = (c - half).abs().powi(2) * (CURVE_FACTOR * self.scale);
        let y = ROW_START_Y + r * ROW_SPACING - curve;

        Vec2::new(x, y)
    }
}

/// Map a pointer position to the seat under it
///
/// The point must already be in canvas space (the UI divides out CSS scaling
/// and device pixel ratio before calling). Scans row-major and returns the
/// first seat whose center lies within its own radius of the point. Neighbor
/// discs overlap a little at full scale, so the scan order is the tie-break.
pub fn hit_test(hall: &Hall, point: Vec2) -> Option<SeatRef> {
    hall.seats()
        .iter()
        .find(|seat| seat.center.distance(point) <= seat.radius)
        .map(|seat| seat.seat_ref())
}
