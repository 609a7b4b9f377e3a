use crate::layout::{LayoutParams, MeasureSpec, Size};
use crate::reactive::WidgetId;
use crate::renderer::PaintContext;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
            a: 1.0,
        }
    }

    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);
}

impl Default for Color {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

/// A floating-point rectangle, used for transformed geometry and painting.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_size(size: Size) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: size.width as f32,
            height: size.height as f32,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Snap each edge to the nearest pixel, rounding halves up.
    pub fn round(&self) -> Bounds {
        fn round_half_up(v: f32) -> i32 {
            (v + 0.5).floor() as i32
        }
        Bounds::new(
            round_half_up(self.x),
            round_half_up(self.y),
            round_half_up(self.right()),
            round_half_up(self.bottom()),
        )
    }
}

/// A pixel-aligned frame given by its four edges, in the parent's
/// coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Bounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Bounds {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// A frame of `size` anchored at the origin.
    pub const fn from_size(size: Size) -> Self {
        Self::new(0, 0, size.width, size.height)
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    pub fn center(&self) -> (f32, f32) {
        (
            (self.left + self.right) as f32 / 2.0,
            (self.top + self.bottom) as f32 / 2.0,
        )
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self::new(
            self.left + dx,
            self.top + dy,
            self.right + dx,
            self.bottom + dy,
        )
    }

    /// Smallest frame covering both.
    pub fn union(&self, other: Bounds) -> Bounds {
        Bounds::new(
            self.left.min(other.left),
            self.top.min(other.top),
            self.right.max(other.right),
            self.bottom.max(other.bottom),
        )
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left as f32 && x < self.right as f32 && y >= self.top as f32 && y < self.bottom as f32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Scroll source - discrete (mouse wheel) or smooth (touchpad/touchscreen)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollSource {
    /// Mouse wheel - discrete steps (converted to pixels)
    Wheel,
    /// Touchpad/touchscreen - smooth pixel-based scrolling
    Finger,
}

/// Pointer input, delivered in the receiving widget's local coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Finger or button pressed
    PointerDown { x: f32, y: f32, button: MouseButton },
    /// Pointer moved
    PointerMove { x: f32, y: f32 },
    /// Finger or button released
    PointerUp { x: f32, y: f32, button: MouseButton },
    /// The gesture was taken over by someone else
    PointerCancel { x: f32, y: f32 },
    /// Pointer left the surface
    PointerLeave,
    /// Scroll event (wheel, touchpad, or touchscreen)
    Scroll {
        x: f32,
        y: f32,
        /// Horizontal scroll delta in pixels (positive = right)
        delta_x: f32,
        /// Vertical scroll delta in pixels (positive = down)
        delta_y: f32,
        source: ScrollSource,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResponse {
    Ignored,
    Handled,
}

impl Event {
    /// Get the coordinates from this event, if any
    pub fn coords(&self) -> Option<(f32, f32)> {
        match self {
            Event::PointerDown { x, y, .. }
            | Event::PointerMove { x, y }
            | Event::PointerUp { x, y, .. }
            | Event::PointerCancel { x, y }
            | Event::Scroll { x, y, .. } => Some((*x, *y)),
            Event::PointerLeave => None,
        }
    }

    /// Move the event to a new location in place. No-op for events without
    /// coordinates.
    pub fn set_coords(&mut self, new_x: f32, new_y: f32) {
        match self {
            Event::PointerDown { x, y, .. }
            | Event::PointerMove { x, y }
            | Event::PointerUp { x, y, .. }
            | Event::PointerCancel { x, y }
            | Event::Scroll { x, y, .. } => {
                *x = new_x;
                *y = new_y;
            }
            Event::PointerLeave => {}
        }
    }
}

/// The contract between a widget and whatever hosts it.
///
/// A parent drives its children through two layout passes (`measure`, then
/// `layout`), paints them with `paint`, and hands them pointer input with
/// `event`. All coordinates a widget sees in `paint` and `event` are local to
/// its own frame.
pub trait Widget {
    fn id(&self) -> WidgetId;

    fn layout_params(&self) -> LayoutParams {
        LayoutParams::WRAP_CONTENT
    }

    /// Measure against the parent's specs and remember the result.
    fn measure(&mut self, width_spec: MeasureSpec, height_spec: MeasureSpec) -> Size;

    /// The size recorded by the last `measure` call.
    fn measured_size(&self) -> Size;

    /// Accept the frame assigned by the parent and position any children.
    fn layout(&mut self, frame: Bounds);

    fn frame(&self) -> Bounds;

    fn paint(&self, ctx: &mut PaintContext);

    fn event(&mut self, event: &mut Event) -> EventResponse {
        let _ = event;
        EventResponse::Ignored
    }

    /// A child at `dirty` (in this widget's local space) asked to be
    /// repainted. Returns the region to invalidate in the parent's space, or
    /// `None` to stop propagation.
    fn invalidate_child_in_parent(&mut self, dirty: Bounds) -> Option<Bounds> {
        let frame = self.frame();
        Some(dirty.offset(frame.left, frame.top))
    }
}

impl Widget for Box<dyn Widget> {
    fn id(&self) -> WidgetId {
        (**self).id()
    }
    fn layout_params(&self) -> LayoutParams {
        (**self).layout_params()
    }
    fn measure(&mut self, width_spec: MeasureSpec, height_spec: MeasureSpec) -> Size {
        (**self).measure(width_spec, height_spec)
    }
    fn measured_size(&self) -> Size {
        (**self).measured_size()
    }
    fn layout(&mut self, frame: Bounds) {
        (**self).layout(frame)
    }
    fn frame(&self) -> Bounds {
        (**self).frame()
    }
    fn paint(&self, ctx: &mut PaintContext) {
        (**self).paint(ctx)
    }
    fn event(&mut self, event: &mut Event) -> EventResponse {
        (**self).event(event)
    }
    fn invalidate_child_in_parent(&mut self, dirty: Bounds) -> Option<Bounds> {
        (**self).invalidate_child_in_parent(dirty)
    }
}

/// Default child painting: move the context to the child's frame origin and
/// let the child paint in its own space.
pub fn paint_child(ctx: &mut PaintContext, child: &dyn Widget) {
    let frame = child.frame();
    let mut ctx = ctx.save();
    ctx.translate(frame.left as f32, frame.top as f32);
    child.paint(&mut ctx);
}

/// Default child dispatch: route `event` (in the parent's space) to `child`.
///
/// Presses and scrolls only reach the child when they land inside its
/// frame; moves, releases and cancels are always forwarded so a child that
/// saw the press also sees the end of the gesture. The event is moved into
/// the child's space for the call and moved back before returning.
pub fn dispatch_to_child(child: &mut dyn Widget, event: &mut Event) -> EventResponse {
    let Some((x, y)) = event.coords() else {
        return child.event(event);
    };

    let frame = child.frame();
    let hit_tested = matches!(event, Event::PointerDown { .. } | Event::Scroll { .. });
    if hit_tested && !frame.contains(x, y) {
        return EventResponse::Ignored;
    }

    event.set_coords(x - frame.left as f32, y - frame.top as f32);
    let response = child.event(event);
    event.set_coords(x, y);
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_hex() {
        let color = Color::from_hex(0xFF0000);
        assert_eq!(color, Color::rgb(1.0, 0.0, 0.0));
        assert_eq!(Color::from_hex(0x0000FF), Color::rgb(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_color_default() {
        assert_eq!(Color::default(), Color::TRANSPARENT);
    }

    #[test]
    fn test_rect_round_half_up() {
        let rect = Rect::new(-50.5, 10.4, 100.0, 0.2);
        assert_eq!(rect.round(), Bounds::new(-50, 10, 50, 11));

        let rect = Rect::new(0.5, -0.5, 1.0, 1.0);
        assert_eq!(rect.round(), Bounds::new(1, 0, 2, 1));
    }

    #[test]
    fn test_bounds_geometry() {
        let bounds = Bounds::new(50, -50, 150, 150);
        assert_eq!(bounds.width(), 100);
        assert_eq!(bounds.height(), 200);
        assert_eq!(bounds.size(), Size::new(100, 200));
        assert_eq!(bounds.center(), (100.0, 50.0));
        assert_eq!(bounds.offset(10, 10), Bounds::new(60, -40, 160, 160));
        assert_eq!(
            bounds.union(Bounds::new(0, 0, 10, 300)),
            Bounds::new(0, -50, 150, 300)
        );
        assert_eq!(Bounds::from_size(Size::new(3, 4)), Bounds::new(0, 0, 3, 4));
    }

    #[test]
    fn test_bounds_contains_is_half_open() {
        let bounds = Bounds::new(0, 0, 10, 10);
        assert!(bounds.contains(0.0, 0.0));
        assert!(bounds.contains(9.9, 9.9));
        assert!(!bounds.contains(10.0, 5.0));
        assert!(!bounds.contains(-0.1, 5.0));
    }

    #[test]
    fn test_event_coords() {
        let mut event = Event::PointerDown {
            x: 1.0,
            y: 2.0,
            button: MouseButton::Left,
        };
        assert_eq!(event.coords(), Some((1.0, 2.0)));

        event.set_coords(5.0, 6.0);
        assert_eq!(
            event,
            Event::PointerDown {
                x: 5.0,
                y: 6.0,
                button: MouseButton::Left,
            }
        );
    }

    #[test]
    fn test_event_without_coords() {
        let mut event = Event::PointerLeave;
        assert_eq!(event.coords(), None);
        event.set_coords(1.0, 1.0);
        assert_eq!(event, Event::PointerLeave);
    }

    #[test]
    fn test_scroll_keeps_deltas() {
        let mut event = Event::Scroll {
            x: 0.0,
            y: 0.0,
            delta_x: 3.0,
            delta_y: -4.0,
            source: ScrollSource::Finger,
        };
        event.set_coords(7.0, 8.0);
        assert_eq!(
            event,
            Event::Scroll {
                x: 7.0,
                y: 8.0,
                delta_x: 3.0,
                delta_y: -4.0,
                source: ScrollSource::Finger,
            }
        );
    }
}
