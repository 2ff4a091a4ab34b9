pub mod error;
pub mod math;
pub mod operations;
pub mod path;

pub use error::{PlanarError, Result};
