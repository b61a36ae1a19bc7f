pub mod extrude;
pub mod helix;
pub mod sketch;
pub mod types;

pub use extrude::{execute_extrusion, ExtrusionSpec};
pub use helix::{execute_thread_sweep, ThreadSpec, ThreadSweep};
pub use sketch::{create_sketch, edit_sketch};
pub use types::OpError;
