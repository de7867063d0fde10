/*
 * UI Module
 *
 * This module contains functions for creating and updating the user interface
 * using nannou_egui. Parameter change detection is handled by the ViewerParams
 * struct.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::params::ViewerParams;

// Update the UI. Returns whether the flock should be reset, whether the actor
// count changed, and whether the target frame rate changed.
pub fn update_ui(
    egui: &mut Egui,
    params: &mut ViewerParams,
    debug_info: &DebugInfo,
) -> (bool, bool, bool) {
    let mut should_reset = false;

    // Take a snapshot of current parameter values for change detection
    params.take_snapshot();

    let ctx = egui.begin_frame();

    egui::Window::new("Viewer Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Flock", |ui| {
                ui.add(
                    egui::Slider::new(&mut params.num_boids, ViewerParams::num_boids_range())
                        .text("Number of Boids"),
                );

                if ui.button("Reset Flock").clicked() {
                    should_reset = true;
                }
            });

            ui.collapsing("Display", |ui| {
                ui.add(
                    egui::Slider::new(&mut params.screen_coverage, ViewerParams::coverage_range())
                        .text("Screen Coverage"),
                );
                ui.add(
                    egui::Slider::new(&mut params.target_fps, ViewerParams::target_fps_range())
                        .text("Target FPS"),
                );
                ui.checkbox(&mut params.show_trails, "Show Motion Trails");
            });

            ui.checkbox(&mut params.show_debug, "Show Debug Info");
            ui.checkbox(&mut params.pause_simulation, "Pause Simulation");
        });

    // Detect parameter changes
    let (num_boids_changed, fps_changed) = params.detect_changes();

    (should_reset, num_boids_changed, fps_changed)
}

// Draw debug information on the screen
pub fn draw_debug_info(
    draw: &nannou::Draw,
    debug_info: &DebugInfo,
    window_rect: nannou::geom::Rect,
    boid_count: usize,
    camera_zoom: f32,
) {
    // Create a background panel in the top-left corner
    let margin = 20.0;
    let line_height = 20.0;
    let panel_width = 200.0;
    let panel_height = line_height * 5.0 + margin;
    let panel_x = window_rect.left() + panel_width / 2.0;
    let panel_y = window_rect.top() - panel_height / 2.0;

    // Draw the background panel
    draw.rect()
        .x_y(panel_x, panel_y)
        .w_h(panel_width, panel_height)
        .color(nannou::color::rgba(0.0, 0.0, 0.0, 0.7));

    let text_x = window_rect.left() + margin;
    let text_y = window_rect.top() - margin;

    // Draw each line of text
    let debug_texts = [
        format!("FPS: {:.1}", debug_info.fps),
        format!(
            "Frame time: {:.2} ms",
            debug_info.frame_time.as_secs_f64() * 1000.0
        ),
        format!("Boids: {}", boid_count),
        format!("Zoom: {:.2} px/unit", camera_zoom),
        format!("Steps: {}", debug_info.steps),
    ];

    for (i, text) in debug_texts.iter().enumerate() {
        let y = text_y - (i as f32 * line_height);

        // Position the text with a fixed offset from the left edge
        draw.text(text)
            .x_y(text_x + 70.0, y)
            .color(nannou::color::WHITE)
            .font_size(14);
    }
}
