//! Drives a widget tree the way a windowing backend would: one measure and
//! layout pass when something asked for it, a repaint when needed, pointer
//! input delivered to the root, and child damage walked up to the surface.

use crate::layout::MeasureSpec;
use crate::reactive::take_changes;
use crate::renderer::PaintContext;
use crate::widgets::{Bounds, Event, EventResponse, Widget};

/// Surface size offered to the root widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostConfig {
    pub width: i32,
    pub height: i32,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            width: 1080,
            height: 1920,
        }
    }
}

/// Owns the root widget and its paint context.
///
/// Change requests are tracked per UI thread, so a thread should run a single
/// host at a time.
pub struct Host<W: Widget> {
    config: HostConfig,
    root: W,
    paint_ctx: PaintContext,
    first_frame: bool,
    /// Surface region invalidated since the last paint
    damage: Option<Bounds>,
}

impl<W: Widget> Host<W> {
    pub fn new(root: W) -> Self {
        Self::with_config(HostConfig::default(), root)
    }

    pub fn with_config(config: HostConfig, root: W) -> Self {
        Self {
            config,
            root,
            paint_ctx: PaintContext::new(),
            first_frame: true,
            damage: None,
        }
    }

    pub fn root(&self) -> &W {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut W {
        &mut self.root
    }

    /// Commands recorded by the last painted frame.
    pub fn paint_context(&self) -> &PaintContext {
        &self.paint_ctx
    }

    pub fn resize(&mut self, width: i32, height: i32) {
        if self.config.width == width && self.config.height == height {
            return;
        }
        log::info!("Resizing surface to {}x{}", width, height);
        self.config.width = width;
        self.config.height = height;
        self.root.id().request_layout();
    }

    /// Run one frame. Returns true if the root was repainted.
    pub fn frame(&mut self) -> bool {
        let changes = take_changes();
        let needs_layout = self.first_frame || changes.needs_layout();
        let needs_paint = needs_layout || changes.needs_paint() || self.damage.is_some();
        self.first_frame = false;
        self.damage = None;

        if needs_layout {
            let size = self.root.measure(
                MeasureSpec::at_most(self.config.width),
                MeasureSpec::at_most(self.config.height),
            );
            self.root.layout(Bounds::from_size(size));
            log::debug!(
                "Laid out root at {}x{} (surface {}x{})",
                size.width,
                size.height,
                self.config.width,
                self.config.height
            );
        }

        if needs_paint {
            self.paint_ctx.clear();
            self.root.paint(&mut self.paint_ctx);
        }
        needs_paint
    }

    /// A child of the root needs repainting at `dirty`, given in the root's
    /// local space. The root decides how that maps onto the surface; the
    /// result is kept as damage for the next frame and returned.
    pub fn invalidate_child(&mut self, dirty: Bounds) -> Option<Bounds> {
        let damage = self.root.invalidate_child_in_parent(dirty)?;
        log::trace!("Child damage {:?} -> surface {:?}", dirty, damage);
        self.damage = Some(match self.damage {
            Some(pending) => pending.union(damage),
            None => damage,
        });
        Some(damage)
    }

    /// Surface region waiting to be repainted by the next frame.
    pub fn damage(&self) -> Option<Bounds> {
        self.damage
    }

    /// Deliver surface-space input to the root.
    pub fn dispatch(&mut self, mut event: Event) -> EventResponse {
        let frame = self.root.frame();
        if let Some((x, y)) = event.coords() {
            event.set_coords(x - frame.left as f32, y - frame.top as f32);
        }
        self.root.event(&mut event)
    }
}
