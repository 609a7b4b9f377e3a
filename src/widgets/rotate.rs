//! A container that rotates its single child.
//!
//! The child is laid out in rotated space: the container reports a size that
//! fits the rotated child, lays the child out inside the rotated bounds of its
//! own frame, rotates the paint context by the opposite angle around its
//! center, and runs pointer coordinates through the layout rotation so input
//! lands where the child is drawn.
//!
//! Two angle policies are available. With `snap_to_right_angles` (the
//! default) the angle is truncated to a multiple of 90 degrees and the child
//! fills the rotated bounds. Without it any angle is accepted and the child
//! keeps its natural size, centered, while the container grows to the
//! child's rotated bounding box.

use crate::config::RotateLayoutConfig;
use crate::layout::{
    default_size, measure_child, resolve_size, LayoutParams, MeasureSpec, Size,
};
use crate::reactive::WidgetId;
use crate::renderer::PaintContext;
use crate::transform::{cos_sin_degrees, Transform};

use super::widget::{dispatch_to_child, paint_child, Bounds, Event, EventResponse, Rect, Widget};

pub struct RotateLayout {
    widget_id: WidgetId,
    /// Angle as last requested, before normalization
    requested_angle: i32,
    angle: i32,
    snap_to_right_angles: bool,
    /// Cached geometry is stale
    angle_changed: bool,
    child: Option<Box<dyn Widget>>,
    params: LayoutParams,
    min_size: Size,
    measured: Size,
    frame: Bounds,
    rotate_transform: Transform,
    child_rect_rotated: Bounds,
}

impl RotateLayout {
    pub fn new() -> Self {
        Self::with_config(RotateLayoutConfig::default())
    }

    pub fn with_config(config: RotateLayoutConfig) -> Self {
        let snap_to_right_angles = config.snap_to_right_angles;
        Self {
            widget_id: WidgetId::next(),
            requested_angle: config.angle,
            angle: normalize_angle(config.angle, snap_to_right_angles),
            snap_to_right_angles,
            angle_changed: true,
            child: None,
            params: LayoutParams::WRAP_CONTENT,
            min_size: Size::zero(),
            measured: Size::zero(),
            frame: Bounds::default(),
            rotate_transform: Transform::IDENTITY,
            child_rect_rotated: Bounds::default(),
        }
    }

    /// Set the child widget
    pub fn child(mut self, child: impl Widget + 'static) -> Self {
        self.child = Some(Box::new(child));
        self
    }

    /// Set the initial angle. It is normalized by whichever policy is in
    /// effect once the builder is done, regardless of call order.
    pub fn angle(mut self, angle: i32) -> Self {
        self.requested_angle = angle;
        self.angle = normalize_angle(angle, self.snap_to_right_angles);
        self
    }

    pub fn snap_to_right_angles(mut self, snap: bool) -> Self {
        self.snap_to_right_angles = snap;
        self.angle = normalize_angle(self.requested_angle, snap);
        self
    }

    pub fn params(mut self, params: LayoutParams) -> Self {
        self.params = params;
        self
    }

    /// Size reported when there is no child and the parent leaves a
    /// dimension unspecified.
    pub fn min_size(mut self, width: i32, height: i32) -> Self {
        self.min_size = Size::new(width, height);
        self
    }

    /// Current angle in degrees
    pub fn get_angle(&self) -> i32 {
        self.angle
    }

    /// Change the angle.
    ///
    /// When snapping, the angle is first truncated to a multiple of 90
    /// degrees (89 becomes 0, 91 becomes 90). Nothing happens if the result
    /// equals the current angle.
    pub fn set_angle(&mut self, angle: i32) {
        self.requested_angle = angle;
        let angle = normalize_angle(angle, self.snap_to_right_angles);
        if self.angle == angle {
            return;
        }

        log::debug!(
            "RotateLayout {:?}: angle {} -> {}",
            self.widget_id,
            self.angle,
            angle
        );
        self.angle = angle;
        self.angle_changed = true;
        self.widget_id.request_layout();
        if !self.snap_to_right_angles {
            self.widget_id.request_paint();
        }
    }

    pub fn snaps_to_right_angles(&self) -> bool {
        self.snap_to_right_angles
    }

    pub fn get_child(&self) -> Option<&dyn Widget> {
        self.child.as_deref()
    }

    pub fn get_child_mut(&mut self) -> Option<&mut (dyn Widget + 'static)> {
        self.child.as_deref_mut()
    }

    /// Replace the child, returning the previous one.
    pub fn set_child(&mut self, child: Option<Box<dyn Widget>>) -> Option<Box<dyn Widget>> {
        self.widget_id.request_layout();
        std::mem::replace(&mut self.child, child)
    }

    /// The rotation currently used for layout and pointer mapping.
    pub fn rotation(&self) -> Transform {
        self.rotate_transform
    }
}

impl Default for RotateLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for RotateLayout {
    fn id(&self) -> WidgetId {
        self.widget_id
    }

    fn layout_params(&self) -> LayoutParams {
        self.params
    }

    fn measure(&mut self, width_spec: MeasureSpec, height_spec: MeasureSpec) -> Size {
        let angle = self.angle;
        self.measured = match self.child.as_deref_mut() {
            Some(child) => measure_rotated(child, angle, width_spec, height_spec),
            None => Size::new(
                default_size(self.min_size.width, width_spec),
                default_size(self.min_size.height, height_spec),
            ),
        };
        self.measured
    }

    fn measured_size(&self) -> Size {
        self.measured
    }

    fn layout(&mut self, frame: Bounds) {
        let changed = frame != self.frame;
        self.frame = frame;

        if self.angle_changed || changed {
            let (width, height) = (frame.width(), frame.height());
            self.rotate_transform = rotation_transform(self.angle, width, height);
            self.child_rect_rotated = self
                .rotate_transform
                .map_rect(Rect::new(0.0, 0.0, width as f32, height as f32))
                .round();
            self.angle_changed = false;
            log::debug!(
                "RotateLayout {:?}: {}x{} at {} degrees, rotated bounds {:?}",
                self.widget_id,
                width,
                height,
                self.angle,
                self.child_rect_rotated
            );
        }

        let Some(child) = self.child.as_deref_mut() else {
            return;
        };

        let child_frame = if self.snap_to_right_angles {
            self.child_rect_rotated
        } else {
            let size = child.measured_size();
            let left = (frame.width() - size.width) / 2;
            let top = (frame.height() - size.height) / 2;
            Bounds::new(left, top, left + size.width, top + size.height)
        };
        child.layout(child_frame);
    }

    fn frame(&self) -> Bounds {
        self.frame
    }

    fn paint(&self, ctx: &mut PaintContext) {
        let Some(child) = self.child.as_deref() else {
            return;
        };

        let (cx, cy) = (
            self.frame.width() as f32 / 2.0,
            self.frame.height() as f32 / 2.0,
        );
        let mut ctx = ctx.save();
        ctx.rotate_about(-(self.angle.rem_euclid(360) as f32), cx, cy);
        paint_child(&mut ctx, child);
    }

    fn event(&mut self, event: &mut Event) -> EventResponse {
        let Some(child) = self.child.as_deref_mut() else {
            return EventResponse::Ignored;
        };
        let Some((x, y)) = event.coords() else {
            return dispatch_to_child(child, event);
        };

        let (child_x, child_y) = self.rotate_transform.transform_point(x, y);
        log::trace!(
            "RotateLayout {:?}: pointer ({}, {}) -> ({}, {})",
            self.widget_id,
            x,
            y,
            child_x,
            child_y
        );

        event.set_coords(child_x, child_y);
        let response = dispatch_to_child(child, event);
        event.set_coords(x, y);
        response
    }

    /// The child's dirty region does not map onto an axis-aligned region of
    /// ours, so the whole container is repainted.
    fn invalidate_child_in_parent(&mut self, _dirty: Bounds) -> Option<Bounds> {
        self.widget_id.request_paint();
        Some(self.frame)
    }
}

fn measure_rotated(
    child: &mut dyn Widget,
    angle: i32,
    width_spec: MeasureSpec,
    height_spec: MeasureSpec,
) -> Size {
    if (angle % 180).abs() == 90 {
        let child_size = measure_child(child, height_spec, width_spec);
        Size::new(
            resolve_size(child_size.height, width_spec),
            resolve_size(child_size.width, height_spec),
        )
    } else if angle % 180 == 0 {
        let child_size = measure_child(child, width_spec, height_spec);
        Size::new(
            resolve_size(child_size.width, width_spec),
            resolve_size(child_size.height, height_spec),
        )
    } else {
        let natural = measure_child(child, MeasureSpec::unspecified(), MeasureSpec::unspecified());
        let bounding = rotated_bounding_size(natural, angle);
        Size::new(
            resolve_size(bounding.width, width_spec),
            resolve_size(bounding.height, height_spec),
        )
    }
}

/// Truncate toward zero to a multiple of 90 degrees when snapping.
pub fn normalize_angle(angle: i32, snap_to_right_angles: bool) -> i32 {
    if snap_to_right_angles {
        (angle / 90) * 90
    } else {
        angle
    }
}

/// Rotation by `angle` degrees around the center of a `width` x `height`
/// frame.
pub fn rotation_transform(angle: i32, width: i32, height: i32) -> Transform {
    Transform::rotate_degrees_about(
        angle.rem_euclid(360) as f32,
        width as f32 / 2.0,
        height as f32 / 2.0,
    )
}

/// The frame `(0, 0, width, height)` rotated by `angle` degrees around its
/// center, bounded and rounded to whole pixels.
pub fn rotated_bounds(angle: i32, width: i32, height: i32) -> Bounds {
    rotation_transform(angle, width, height)
        .map_rect(Rect::new(0.0, 0.0, width as f32, height as f32))
        .round()
}

/// Smallest whole-pixel size containing `size` rotated by `angle` degrees.
pub fn rotated_bounding_size(size: Size, angle: i32) -> Size {
    let (cos, sin) = cos_sin_degrees(angle.rem_euclid(360) as f64);
    let (cos, sin) = (cos.abs(), sin.abs());
    let (w, h) = (size.width as f64, size.height as f64);
    Size::new(
        (w * cos + h * sin).ceil() as i32,
        (w * sin + h * cos).ceil() as i32,
    )
}

/// Create a rotate layout around `child`
pub fn rotate_layout(child: impl Widget + 'static) -> RotateLayout {
    RotateLayout::new().child(child)
}
