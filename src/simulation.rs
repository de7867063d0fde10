/*
 * Simulation Contract
 *
 * This module defines the trait the render loop consumes. Any engine that can
 * enumerate 2D actor positions and advance them in place by a timestep can be
 * displayed by the viewer.
 */

use nannou::prelude::*;

pub trait Simulation {
    /// (Re)initialize the simulation with `nboids` actors. Calling this again
    /// discards the previous population.
    fn setup(&mut self, nboids: usize);

    /// Current actor positions in simulation space, one entry per actor.
    /// Rebuilt on every call; the viewer does not hold onto it across frames.
    fn positions(&self) -> Vec<Point2>;

    /// Advance every actor by one timestep of `dt` seconds, in place.
    fn step(&mut self, dt: f32);

    /// Heading angle per actor in radians, if the engine knows one.
    /// Engines without a notion of orientation return `None` and the viewer
    /// draws their sprites pointing up.
    fn headings(&self) -> Option<Vec<f32>> {
        None
    }

    fn len(&self) -> usize {
        self.positions().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
