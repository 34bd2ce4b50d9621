//! Skills-to-careers demo slice.

mod render;
mod state;
mod update;

pub use render::render_demo;
pub use state::{DemoPhase, DemoState};
pub use update::handle_demo_event;
