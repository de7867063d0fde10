/*
 * Flock Viewer - Module Definitions
 *
 * This file defines the module structure for the flock viewer application.
 * The render loop talks to the simulation only through the Simulation trait,
 * so the flocking engine can be swapped without touching the display code.
 */

// Re-export key components for easier access
pub use app::Model;
pub use camera::Camera;
pub use debug::DebugInfo;
pub use flock::{Boid, Flock, FlockParams};
pub use params::ViewerParams;
pub use simulation::Simulation;

// Define modules
pub mod app;
pub mod camera;
pub mod debug;
pub mod flock;
pub mod input;
pub mod params;
pub mod renderer;
pub mod simulation;
pub mod sprite;
pub mod ui;

// Constants
pub const WINDOW_WIDTH: u32 = 720;
pub const WINDOW_HEIGHT: u32 = 720;
pub const ARROW_SIZE: f32 = 6.0;
