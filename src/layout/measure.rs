/// A measured or requested size in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub const fn zero() -> Self {
        Self {
            width: 0,
            height: 0,
        }
    }
}

/// How a parent constrains one dimension of a child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeasureMode {
    /// The child must be exactly `size`.
    Exactly,
    /// The child may be as large as it wants up to `size`.
    AtMost,
    /// No constraint; `size` is only a hint.
    Unspecified,
}

/// A single-dimension measurement constraint handed down by a parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeasureSpec {
    pub size: i32,
    pub mode: MeasureMode,
}

impl MeasureSpec {
    pub const fn new(size: i32, mode: MeasureMode) -> Self {
        Self { size, mode }
    }

    pub const fn exactly(size: i32) -> Self {
        Self::new(size, MeasureMode::Exactly)
    }

    pub const fn at_most(size: i32) -> Self {
        Self::new(size, MeasureMode::AtMost)
    }

    /// Unconstrained, with a zero size hint.
    pub const fn unspecified() -> Self {
        Self::new(0, MeasureMode::Unspecified)
    }
}

impl Default for MeasureSpec {
    fn default() -> Self {
        Self::unspecified()
    }
}

/// Reconcile a desired size with the parent's constraint.
pub fn resolve_size(size: i32, spec: MeasureSpec) -> i32 {
    match spec.mode {
        MeasureMode::Exactly => spec.size,
        MeasureMode::AtMost => size.min(spec.size),
        MeasureMode::Unspecified => size,
    }
}

/// Size of a widget with no content of its own: its minimum when
/// unconstrained, otherwise whatever the parent offers.
pub fn default_size(min: i32, spec: MeasureSpec) -> i32 {
    match spec.mode {
        MeasureMode::Unspecified => min,
        MeasureMode::AtMost | MeasureMode::Exactly => spec.size,
    }
}
