//! Measurement and sizing contract between a widget and its parent.
//!
//! Layout happens in two passes. The parent first measures each child with a
//! [`MeasureSpec`] per axis, then positions it by assigning a frame in its own
//! coordinate space (see [`crate::widgets::Bounds`]).

pub mod measure;
pub mod params;

pub use measure::{default_size, resolve_size, MeasureMode, MeasureSpec, Size};
pub use params::{child_measure_spec, measure_child, Dimension, LayoutParams};
