//! A layout container that rotates its single child.
//!
//! [`RotateLayout`](widgets::RotateLayout) measures, lays out, paints and
//! routes pointer input for a child as if the child lived in rotated space.
//! The rest of the crate is the small widget contract it plugs into:
//! measurement specs, frames, a recording paint context and change tracking.
//!
//! ```
//! use rotate_layout::prelude::*;
//!
//! let mut layout = rotate_layout(block(100, 200)).angle(90);
//! let size = layout.measure(MeasureSpec::unspecified(), MeasureSpec::unspecified());
//! assert_eq!(size, Size::new(200, 100));
//! ```

pub mod config;
pub mod host;
pub mod layout;
pub mod reactive;
pub mod renderer;
pub mod transform;
pub mod widgets;

pub mod prelude {
    pub use crate::config::{AttrError, RotateLayoutConfig};
    pub use crate::host::{Host, HostConfig};
    pub use crate::layout::{Dimension, LayoutParams, MeasureMode, MeasureSpec, Size};
    pub use crate::reactive::{ChangeFlags, WidgetId};
    pub use crate::renderer::{DrawCommand, PaintContext};
    pub use crate::transform::Transform;
    pub use crate::widgets::{
        block, rotate_layout, Block, Bounds, Color, Event, EventResponse, MouseButton, Rect,
        RotateLayout, ScrollSource, Widget,
    };
}
