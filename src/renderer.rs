/*
 * Renderer Module
 *
 * This module handles one render pass of the viewer: recompute the actor
 * positions, refit the camera, map every actor to a placement rectangle and
 * draw an arrow there. With trails enabled the background is not cleared
 * between frames, so motion trajectories stay visible.
 */

use std::f32::consts::FRAC_PI_2;

use nannou::prelude::*;

use crate::app::Model;
use crate::camera::Camera;
use crate::{sprite, ui};

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    // Begin drawing
    let draw = app.draw();
    let window_rect = app.window_rect();

    // Clear the background unless trails are on; the very first frame always
    // clears so trails never start from an undefined framebuffer
    if !model.params.show_trails || frame.nth() == 0 {
        draw.background().color(WHITE);
    }

    // Actors -> positions -> transform -> rectangles -> pixels
    let positions = model.sim.positions();

    if !positions.is_empty() {
        let camera = Camera::fit(&positions, window_rect, model.params.screen_coverage);

        let screen_positions: Vec<Point2> = positions
            .iter()
            .map(|&p| camera.world_to_screen(p, window_rect))
            .collect();

        let rects = sprite::placements(&screen_positions, sprite::arrow_wh());
        let headings = model.sim.headings();

        let arrow_color = rgb(40u8, 40, 40);
        for (i, &rect) in rects.iter().enumerate() {
            // Engines without orientation get upright arrows
            let heading = headings.as_ref().map_or(FRAC_PI_2, |h| h[i]);
            sprite::draw_arrow(&draw, rect, heading, arrow_color);
        }

        if model.params.show_debug {
            ui::draw_debug_info(
                &draw,
                &model.debug_info,
                window_rect,
                positions.len(),
                camera.zoom,
            );
        }
    }

    // Finish drawing
    draw.to_frame(app, &frame).unwrap();

    // Draw the egui UI
    model.egui.draw_to_frame(&frame).unwrap();
}
