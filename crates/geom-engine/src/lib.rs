pub mod mock_engine;
pub mod traits;
pub mod types;

pub use mock_engine::{InjectedFailure, MockEngine, PartSummary};
pub use traits::GeomEngine;
pub use types::*;
