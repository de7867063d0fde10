/*
 * Input Module
 *
 * This module handles user input events for the viewer.
 *
 * Keys:
 * - Escape / Q: quit
 * - Space: pause / resume the simulation
 * - T: toggle motion trails
 * - D: toggle the debug overlay
 * - R: reset the flock
 */

use nannou::prelude::*;

use crate::app::Model;

// Key pressed event handler
pub fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    match key {
        Key::Escape | Key::Q => {
            model.exit_requested = true;
        }
        Key::Space => {
            model.params.pause_simulation = !model.params.pause_simulation;
        }
        Key::T => {
            model.params.show_trails = !model.params.show_trails;
        }
        Key::D => {
            model.params.show_debug = !model.params.show_debug;
        }
        Key::R => {
            model.sim.setup(model.params.num_boids);
        }
        _ => {}
    }
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
