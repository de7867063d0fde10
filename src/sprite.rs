/*
 * Sprite Module
 *
 * This module draws the arrow glyph that represents an actor and computes the
 * per-frame list of placement rectangles, one per actor. The arrow is a
 * triangle drawn through nannou rather than a blitted image asset.
 */

use nannou::prelude::*;

use crate::ARROW_SIZE;

/// Triangle outline of the arrowhead, pointing along +x, centered on origin.
pub fn arrow_points(size: f32) -> [Point2; 3] {
    [
        pt2(size, 0.0),
        pt2(-size, size / 2.0),
        pt2(-size, -size / 2.0),
    ]
}

/// Bounding size of the arrow glyph in pixels.
pub fn arrow_wh() -> Vec2 {
    vec2(ARROW_SIZE * 2.0, ARROW_SIZE)
}

/// One placement rectangle per transformed actor position. The list is
/// rebuilt every frame and always has the same length as its input.
pub fn placements(screen_positions: &[Point2], wh: Vec2) -> Vec<Rect> {
    screen_positions
        .iter()
        .map(|&p| Rect::from_x_y_w_h(p.x, p.y, wh.x, wh.y))
        .collect()
}

/// Positions back out of a batch of placement rectangles.
pub fn placement_positions(rects: &[Rect]) -> Vec<Point2> {
    rects.iter().map(|rect| rect.xy()).collect()
}

// Draw one arrow at the given placement, rotated to its heading
pub fn draw_arrow(draw: &Draw, rect: Rect, heading: f32, color: Rgb<u8>) {
    let points = arrow_points(rect.w() / 2.0);

    draw.polygon()
        .color(color)
        .points(points.iter().cloned())
        .xy(rect.xy())
        .rotate(heading);
}
