/*
 * Camera Module
 *
 * This module defines the auto-fitting Camera used by the viewer. Every frame
 * the camera is refitted from scratch: a uniform zoom and a translation are
 * derived from the flock's bounding box so that the flock covers a fixed
 * fraction of the shorter window dimension, centered on the window. Nothing
 * is persisted across frames.
 */

use nannou::prelude::*;

pub struct Camera {
    /// World-space point mapped to the window center (the flock centroid).
    pub position: Vec2,
    /// Pixels per simulation unit.
    pub zoom: f32,
}

impl Camera {
    /// Fit the camera to the given positions.
    ///
    /// `zoom = min(window dims) * coverage / max(x_span, y_span)`, spans being
    /// the bounding-box extents of `positions`. A flock collapsed to a single
    /// point has zero span, so the division yields a non-finite zoom; callers
    /// get exactly that value back, nothing here guards against it.
    ///
    /// Expects at least one position.
    pub fn fit(positions: &[Point2], window_rect: Rect, coverage: f32) -> Self {
        let (min, max) = bounds(positions);
        let span = (max.x - min.x).max(max.y - min.y);
        let zoom = window_rect.w().min(window_rect.h()) * coverage / span;

        Self {
            position: centroid(positions),
            zoom,
        }
    }

    // Convert a point from world space to screen space
    pub fn world_to_screen(&self, point: Vec2, window_rect: Rect) -> Vec2 {
        // Apply zoom and translation
        let zoomed = (point - self.position) * self.zoom;
        // Convert to screen coordinates
        zoomed + window_rect.xy()
    }
}

// Axis-aligned bounding box of the positions
fn bounds(positions: &[Point2]) -> (Point2, Point2) {
    let mut min = positions[0];
    let mut max = positions[0];

    for &p in &positions[1..] {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }

    (min, max)
}

/// Mean position of the flock, as a proper (x, y) pair.
pub fn centroid(positions: &[Point2]) -> Point2 {
    let sum = positions
        .iter()
        .fold(Vec2::ZERO, |acc, &p| acc + Vec2::new(p.x, p.y));
    sum / positions.len() as f32
}
