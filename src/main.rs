/*
 * Flock Viewer
 *
 * Live 2D animation of a boid flocking simulation. Every frame advances the
 * simulation by one fixed timestep and draws each actor as a rotated arrow,
 * with the camera zoomed and centered so the whole flock stays in view.
 */

use flockview::app;

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    nannou::app(app::model).update(app::update).run();
}
