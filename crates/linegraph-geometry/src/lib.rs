//! Linegraph Geometry - paths for smooth line graphs
//!
//! This crate provides:
//! - Domain-to-pixel coordinate mapping inside a padded drawing rect
//! - Smooth path generation from ordered `(date, value)` samples
//! - Curve inversion (the y of a path at a given x) for scrubbing
//! - The path model shared with renderers and transitions
//!
//! # Example
//!
//! ```
//! use linegraph_core::GraphPoint;
//! use linegraph_geometry::*;
//!
//! let points = [
//!     GraphPoint::from((0, 0.0)),
//!     GraphPoint::from((1, 10.0)),
//!     GraphPoint::from((2, 0.0)),
//! ];
//! let range = GraphRange::auto().resolve(&points).unwrap();
//! let rect = DrawingRect::new(100.0, 100.0, 3.0, 3.0);
//! let builder = GraphPathBuilder::new(range, rect, GraphPathConfig::default());
//!
//! let paths = builder.build_with_fill(&points);
//! let x = builder.mapper().x(points[1].date);
//! let y = y_for_x(paths.path.commands(), x).unwrap();
//! assert!((y - 3.0).abs() < 1.0);
//! ```

// Core primitives
mod curve;
mod path;

// Mapping
mod mapper;
mod range;
mod rect;

// Generation and inversion
mod builder;
mod inverter;

pub use curve::*;
pub use path::*;

pub use mapper::*;
pub use range::*;
pub use rect::*;

pub use builder::*;
pub use inverter::*;
