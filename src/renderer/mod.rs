//! Paint recording.
//!
//! Widgets paint into a [`PaintContext`], which records draw commands along
//! with the transform that was current when each command was issued. A
//! backend replays the commands; tests inspect them directly.

use std::ops::{Deref, DerefMut};

use crate::transform::Transform;
use crate::widgets::{Color, Rect};

/// A recorded fill, with the rectangle in the painting widget's local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub rect: Rect,
    pub color: Color,
    /// Local space → surface space
    pub transform: Transform,
}

impl DrawCommand {
    /// Axis-aligned surface-space bounds of the painted rectangle.
    pub fn surface_bounds(&self) -> Rect {
        self.transform.map_rect(self.rect)
    }
}

pub struct PaintContext {
    commands: Vec<DrawCommand>,
    current: Transform,
    /// Transforms saved by live [`SaveGuard`]s, innermost last
    saved: Vec<Transform>,
}

impl PaintContext {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    /// Create a PaintContext with pre-allocated capacity to avoid per-frame allocations
    pub fn with_capacity(commands: usize) -> Self {
        Self {
            commands: Vec::with_capacity(commands),
            current: Transform::IDENTITY,
            saved: Vec::with_capacity(4),
        }
    }

    /// Clear all buffers for reuse, preserving allocated capacity
    pub fn clear(&mut self) {
        self.commands.clear();
        self.saved.clear();
        self.current = Transform::IDENTITY;
    }

    /// Save the current transform. It is restored when the returned guard
    /// is dropped, however the caller leaves the scope.
    pub fn save(&mut self) -> SaveGuard<'_> {
        self.saved.push(self.current);
        SaveGuard { ctx: self }
    }

    /// Number of saves not yet restored.
    pub fn save_depth(&self) -> usize {
        self.saved.len()
    }

    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.concat(&Transform::translate(dx, dy));
    }

    /// Rotate by `angle_degrees` (clockwise on screen) around `(px, py)`.
    pub fn rotate_about(&mut self, angle_degrees: f32, px: f32, py: f32) {
        self.concat(&Transform::rotate_degrees_about(angle_degrees, px, py));
    }

    /// Pre-concatenate `transform`: it applies to local coordinates before
    /// everything already on the context.
    pub fn concat(&mut self, transform: &Transform) {
        self.current = self.current.then(transform);
    }

    pub fn current_transform(&self) -> Transform {
        self.current
    }

    pub fn draw_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand {
            rect,
            color,
            transform: self.current,
        });
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }
}

impl Default for PaintContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Scoped save of a [`PaintContext`]; restores the saved transform on drop.
pub struct SaveGuard<'a> {
    ctx: &'a mut PaintContext,
}

impl Deref for SaveGuard<'_> {
    type Target = PaintContext;

    fn deref(&self) -> &PaintContext {
        self.ctx
    }
}

impl DerefMut for SaveGuard<'_> {
    fn deref_mut(&mut self) -> &mut PaintContext {
        self.ctx
    }
}

impl Drop for SaveGuard<'_> {
    fn drop(&mut self) {
        if let Some(saved) = self.ctx.saved.pop() {
            self.ctx.current = saved;
        }
    }
}
