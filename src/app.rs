/*
 * Application Module
 *
 * This module defines the main application model and the per-frame update
 * logic. One frame: poll events (handled by nannou/input), run the UI, then
 * advance the simulation by one fixed timestep unless paused. A requested
 * quit takes effect before any further simulation step or render.
 */

use log::info;
use nannou::app::LoopMode;
use nannou::prelude::*;
use nannou_egui::Egui;

use crate::debug::DebugInfo;
use crate::flock::{Flock, FlockParams};
use crate::params::ViewerParams;
use crate::renderer;
use crate::simulation::Simulation;
use crate::ui;
use crate::{input, WINDOW_HEIGHT, WINDOW_WIDTH};

// Main model for the application
pub struct Model {
    pub sim: Box<dyn Simulation>,
    pub params: ViewerParams,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub exit_requested: bool,
}

// Outcome of one frame of control flow
#[derive(Debug, PartialEq, Eq)]
pub enum Tick {
    Stepped,
    Paused,
    Quit,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let params = ViewerParams::default();

    app.set_loop_mode(LoopMode::rate_fps(params.target_fps as f64));

    // Create the main window with the fixed viewer dimensions
    let window_id = app
        .new_window()
        .title("Flock Viewer")
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .resizable(false)
        .view(renderer::view)
        .key_pressed(input::key_pressed)
        .raw_event(input::raw_window_event)
        .build()
        .unwrap();

    // Get the window
    let window = app.window(window_id).unwrap();

    // Create the UI
    let egui = Egui::from_window(&window);

    // Create the simulation
    let mut sim: Box<dyn Simulation> = Box::new(Flock::new(FlockParams::default()));
    sim.setup(params.num_boids);

    info!(
        "starting viewer: {} boids, {}x{} window, target {} fps",
        params.num_boids, WINDOW_WIDTH, WINDOW_HEIGHT, params.target_fps
    );

    Model {
        sim,
        params,
        egui,
        debug_info: DebugInfo::default(),
        exit_requested: false,
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    // Update debug info
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    // Update UI and detect parameter changes
    let (should_reset, num_boids_changed, fps_changed) =
        ui::update_ui(&mut model.egui, &mut model.params, &model.debug_info);

    if fps_changed {
        app.set_loop_mode(LoopMode::rate_fps(model.params.target_fps as f64));
    }

    if should_reset || num_boids_changed {
        info!("resetting flock to {} boids", model.params.num_boids);
        model.sim.setup(model.params.num_boids);
    }

    match tick(model.sim.as_mut(), &model.params, model.exit_requested) {
        Tick::Stepped => model.debug_info.steps += 1,
        Tick::Paused => {}
        Tick::Quit => {
            info!("quit requested after {} steps", model.debug_info.steps);
            app.quit();
        }
    }
}

/// Advance one frame of control flow. A pending quit wins over everything
/// else: the simulation receives no further step.
pub fn tick(sim: &mut dyn Simulation, params: &ViewerParams, exit_requested: bool) -> Tick {
    if exit_requested {
        return Tick::Quit;
    }

    if params.pause_simulation {
        return Tick::Paused;
    }

    sim.step(params.timestep());
    Tick::Stepped
}
