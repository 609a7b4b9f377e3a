use std::sync::Arc;

use crate::layout::{resolve_size, LayoutParams, MeasureSpec, Size};
use crate::reactive::WidgetId;
use crate::renderer::PaintContext;

use super::widget::{Bounds, Color, Event, EventResponse, MouseButton, Rect, Widget};

/// Called with the release position, in the block's local coordinates.
pub type ClickCallback = Arc<dyn Fn(f32, f32) + Send + Sync>;

/// A solid rectangle with a preferred size. Handles presses and reports
/// clicks that start and end inside it.
pub struct Block {
    widget_id: WidgetId,
    preferred: Size,
    params: LayoutParams,
    color: Color,
    on_click: Option<ClickCallback>,
    measured: Size,
    frame: Bounds,
    is_pressed: bool,
    last_pointer: Option<(f32, f32)>,
}

impl Block {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            widget_id: WidgetId::next(),
            preferred: Size::new(width, height),
            params: LayoutParams::WRAP_CONTENT,
            color: Color::WHITE,
            on_click: None,
            measured: Size::zero(),
            frame: Bounds::default(),
            is_pressed: false,
            last_pointer: None,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn params(mut self, params: LayoutParams) -> Self {
        self.params = params;
        self
    }

    pub fn on_click<F: Fn(f32, f32) + Send + Sync + 'static>(mut self, callback: F) -> Self {
        self.on_click = Some(Arc::new(callback));
        self
    }

    pub fn is_pressed(&self) -> bool {
        self.is_pressed
    }

    /// Local position of the last pointer event this block accepted.
    pub fn last_pointer(&self) -> Option<(f32, f32)> {
        self.last_pointer
    }

    fn local_bounds(&self) -> Bounds {
        Bounds::from_size(self.frame.size())
    }
}

impl Widget for Block {
    fn id(&self) -> WidgetId {
        self.widget_id
    }

    fn layout_params(&self) -> LayoutParams {
        self.params
    }

    fn measure(&mut self, width_spec: MeasureSpec, height_spec: MeasureSpec) -> Size {
        self.measured = Size::new(
            resolve_size(self.preferred.width, width_spec),
            resolve_size(self.preferred.height, height_spec),
        );
        self.measured
    }

    fn measured_size(&self) -> Size {
        self.measured
    }

    fn layout(&mut self, frame: Bounds) {
        self.frame = frame;
    }

    fn frame(&self) -> Bounds {
        self.frame
    }

    fn paint(&self, ctx: &mut PaintContext) {
        ctx.draw_rect(Rect::from_size(self.frame.size()), self.color);
    }

    fn event(&mut self, event: &mut Event) -> EventResponse {
        match *event {
            Event::PointerDown { x, y, button } => {
                if button != MouseButton::Left || !self.local_bounds().contains(x, y) {
                    return EventResponse::Ignored;
                }
                self.is_pressed = true;
                self.last_pointer = Some((x, y));
                EventResponse::Handled
            }
            Event::PointerMove { x, y } if self.is_pressed => {
                self.last_pointer = Some((x, y));
                EventResponse::Handled
            }
            Event::PointerUp { x, y, button } if self.is_pressed => {
                self.is_pressed = false;
                self.last_pointer = Some((x, y));
                if button == MouseButton::Left && self.local_bounds().contains(x, y) {
                    if let Some(ref callback) = self.on_click {
                        callback(x, y);
                    }
                }
                EventResponse::Handled
            }
            Event::PointerCancel { .. } | Event::PointerLeave => {
                self.is_pressed = false;
                EventResponse::Ignored
            }
            _ => EventResponse::Ignored,
        }
    }
}

/// Create a block with the given preferred size
pub fn block(width: i32, height: i32) -> Block {
    Block::new(width, height)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    fn laid_out(width: i32, height: i32) -> Block {
        let mut block = block(width, height);
        block.measure(MeasureSpec::unspecified(), MeasureSpec::unspecified());
        block.layout(Bounds::new(0, 0, width, height));
        block
    }

    #[test]
    fn test_measure_resolves_preferred_size() {
        let mut block = block(100, 40);
        assert_eq!(
            block.measure(MeasureSpec::at_most(60), MeasureSpec::exactly(80)),
            Size::new(60, 80)
        );
        assert_eq!(block.measured_size(), Size::new(60, 80));
    }

    #[test]
    fn test_paint_fills_frame() {
        let block = laid_out(30, 20);
        let mut ctx = PaintContext::new();
        block.paint(&mut ctx);
        assert_eq!(ctx.commands().len(), 1);
        assert_eq!(ctx.commands()[0].rect, Rect::new(0.0, 0.0, 30.0, 20.0));
    }

    #[test]
    fn test_click_inside() {
        let clicks = Arc::new(AtomicUsize::new(0));
        let counter = clicks.clone();
        let mut block = laid_out(30, 20).on_click(move |_, _| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let mut down = Event::PointerDown {
            x: 5.0,
            y: 5.0,
            button: MouseButton::Left,
        };
        assert_eq!(block.event(&mut down), EventResponse::Handled);
        assert!(block.is_pressed());

        let mut up = Event::PointerUp {
            x: 6.0,
            y: 7.0,
            button: MouseButton::Left,
        };
        assert_eq!(block.event(&mut up), EventResponse::Handled);
        assert!(!block.is_pressed());
        assert_eq!(clicks.load(Ordering::SeqCst), 1);
        assert_eq!(block.last_pointer(), Some((6.0, 7.0)));
    }

    #[test]
    fn test_press_outside_is_ignored() {
        let mut block = laid_out(30, 20);
        let mut down = Event::PointerDown {
            x: 35.0,
            y: 5.0,
            button: MouseButton::Left,
        };
        assert_eq!(block.event(&mut down), EventResponse::Ignored);
        assert!(!block.is_pressed());
    }

    #[test]
    fn test_cancel_releases_press() {
        let mut block = laid_out(30, 20);
        block.event(&mut Event::PointerDown {
            x: 1.0,
            y: 1.0,
            button: MouseButton::Left,
        });
        block.event(&mut Event::PointerCancel { x: 1.0, y: 1.0 });
        assert!(!block.is_pressed());
    }
}
