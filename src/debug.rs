/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct with the runtime metrics shown in
 * the overlay: frame rate, frame time, and the number of simulation steps
 * advanced so far.
 */

use std::time::Duration;

pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub steps: u64,
}

impl Default for DebugInfo {
    fn default() -> Self {
        Self {
            fps: 0.0,
            frame_time: Duration::ZERO,
            steps: 0,
        }
    }
}
