pub mod block;
pub mod rotate;
pub mod widget;

pub use block::{block, Block, ClickCallback};
pub use rotate::{
    normalize_angle, rotate_layout, rotated_bounding_size, rotated_bounds, rotation_transform,
    RotateLayout,
};
pub use widget::{
    dispatch_to_child, paint_child, Bounds, Color, Event, EventResponse, MouseButton, Rect,
    ScrollSource, Widget,
};
