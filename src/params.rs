/*
 * Viewer Parameters Module
 *
 * This module defines the ViewerParams struct holding the adjustable display
 * parameters. It also provides snapshot-based change detection so the app can
 * react when the UI alters the actor count or the target frame rate.
 */

pub struct ViewerParams {
    pub num_boids: usize,
    pub target_fps: f32,
    pub screen_coverage: f32,
    pub show_trails: bool,
    pub show_debug: bool,
    pub pause_simulation: bool,

    // Internal state for tracking changes
    previous_values: Option<ParamSnapshot>,
}

// A snapshot of parameter values used for change detection
struct ParamSnapshot {
    num_boids: usize,
    target_fps: f32,
}

impl Default for ViewerParams {
    fn default() -> Self {
        Self {
            num_boids: 50,
            target_fps: 60.0,
            screen_coverage: 0.5,
            show_trails: false,
            show_debug: false,
            pause_simulation: false,
            previous_values: None,
        }
    }
}

impl ViewerParams {
    /// Seconds advanced per simulation step at the current target rate.
    pub fn timestep(&self) -> f32 {
        1.0 / self.target_fps
    }

    // Take a snapshot of current parameter values for change detection
    pub fn take_snapshot(&mut self) {
        self.previous_values = Some(ParamSnapshot {
            num_boids: self.num_boids,
            target_fps: self.target_fps,
        });
    }

    // Check what changed since the last snapshot.
    // Returns (num_boids_changed, target_fps_changed).
    pub fn detect_changes(&self) -> (bool, bool) {
        match &self.previous_values {
            Some(prev) => (
                self.num_boids != prev.num_boids,
                self.target_fps != prev.target_fps,
            ),
            None => (false, false),
        }
    }

    // Parameter ranges for UI sliders
    pub fn num_boids_range() -> std::ops::RangeInclusive<usize> {
        2..=2000
    }

    pub fn target_fps_range() -> std::ops::RangeInclusive<f32> {
        15.0..=240.0
    }

    pub fn coverage_range() -> std::ops::RangeInclusive<f32> {
        0.1..=0.9
    }
}
