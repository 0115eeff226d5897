//! Linegraph Core
//!
//! Shared primitives for the linegraph crates: domain samples, timestamps,
//! colors, and the logging/profiling bootstrap.

pub mod color;
pub mod logging;
pub mod point;
pub mod profiling;
pub mod time;

pub use color::{Color, ColorError};
pub use point::GraphPoint;
pub use time::Timestamp;
