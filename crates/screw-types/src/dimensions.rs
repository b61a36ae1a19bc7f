use serde::{Deserialize, Serialize};

/// Number of scalar parameters a screw build consumes.
pub const DIMENSION_COUNT: usize = 6;

/// The six user-supplied screw dimensions.
///
/// Field letters follow the drawing convention the values are entered
/// against: D (hat diameter), m (slot depth), l (smooth part),
/// b (thread part), H (hat height), n (slot width).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Hat diameter (D).
    pub hat_diameter: f64,
    /// Screwdriver slot depth (m).
    pub slot_depth: f64,
    /// Length of the unthreaded shank section (l).
    pub smooth_length: f64,
    /// Length of the threaded shank section (b).
    pub thread_length: f64,
    /// Hat height (H).
    pub hat_height: f64,
    /// Screwdriver slot width (n).
    pub slot_width: f64,
}

impl Dimensions {
    /// Build from a six-value slice in entry order (D, m, l, b, H, n).
    /// Returns None for any other length.
    pub fn from_slice(values: &[f64]) -> Option<Self> {
        if values.len() != DIMENSION_COUNT {
            return None;
        }
        Some(Self {
            hat_diameter: values[0],
            slot_depth: values[1],
            smooth_length: values[2],
            thread_length: values[3],
            hat_height: values[4],
            slot_width: values[5],
        })
    }

    /// The six values in entry order.
    pub fn as_array(&self) -> [f64; DIMENSION_COUNT] {
        [
            self.hat_diameter,
            self.slot_depth,
            self.smooth_length,
            self.thread_length,
            self.hat_height,
            self.slot_width,
        ]
    }
}

impl Default for Dimensions {
    /// The stock screw every form opens with.
    fn default() -> Self {
        Self {
            hat_diameter: 27.0,
            slot_depth: 5.0,
            smooth_length: 15.0,
            thread_length: 64.0,
            hat_height: 10.0,
            slot_width: 5.4,
        }
    }
}
