use super::measure::{MeasureMode, MeasureSpec};
use crate::widgets::Widget;

use super::Size;

/// How a child wants to be sized along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dimension {
    /// As large as the parent allows.
    MatchParent,
    /// Just large enough for the content.
    #[default]
    WrapContent,
    /// A fixed number of pixels.
    Exact(i32),
}

/// Sizing preferences a child hands to its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutParams {
    pub width: Dimension,
    pub height: Dimension,
}

impl LayoutParams {
    pub const WRAP_CONTENT: Self = Self {
        width: Dimension::WrapContent,
        height: Dimension::WrapContent,
    };

    pub const fn new(width: Dimension, height: Dimension) -> Self {
        Self { width, height }
    }

    pub const fn exact(width: i32, height: i32) -> Self {
        Self {
            width: Dimension::Exact(width),
            height: Dimension::Exact(height),
        }
    }
}

/// Derive a child measure spec from the parent's measure spec and the child's
/// preferred dimension on the same axis.
pub fn child_measure_spec(parent: MeasureSpec, dimension: Dimension) -> MeasureSpec {
    let size = parent.size.max(0);
    match (parent.mode, dimension) {
        (_, Dimension::Exact(px)) if px >= 0 => MeasureSpec::exactly(px),
        (_, Dimension::Exact(_)) => MeasureSpec::unspecified(),
        (MeasureMode::Exactly, Dimension::MatchParent) => MeasureSpec::exactly(size),
        (MeasureMode::AtMost, Dimension::MatchParent) => MeasureSpec::at_most(size),
        (MeasureMode::Exactly | MeasureMode::AtMost, Dimension::WrapContent) => {
            MeasureSpec::at_most(size)
        }
        (MeasureMode::Unspecified, Dimension::MatchParent | Dimension::WrapContent) => {
            MeasureSpec::unspecified()
        }
    }
}

/// Measure `child` against the parent's specs, honoring its layout params.
pub fn measure_child(
    child: &mut dyn Widget,
    width_spec: MeasureSpec,
    height_spec: MeasureSpec,
) -> Size {
    let params = child.layout_params();
    child.measure(
        child_measure_spec(width_spec, params.width),
        child_measure_spec(height_spec, params.height),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_dimension_ignores_parent() {
        for parent in [
            MeasureSpec::exactly(10),
            MeasureSpec::at_most(10),
            MeasureSpec::unspecified(),
        ] {
            assert_eq!(
                child_measure_spec(parent, Dimension::Exact(40)),
                MeasureSpec::exactly(40)
            );
        }
    }

    #[test]
    fn test_match_parent() {
        assert_eq!(
            child_measure_spec(MeasureSpec::exactly(120), Dimension::MatchParent),
            MeasureSpec::exactly(120)
        );
        assert_eq!(
            child_measure_spec(MeasureSpec::at_most(120), Dimension::MatchParent),
            MeasureSpec::at_most(120)
        );
        assert_eq!(
            child_measure_spec(MeasureSpec::unspecified(), Dimension::MatchParent),
            MeasureSpec::unspecified()
        );
    }

    #[test]
    fn test_wrap_content() {
        assert_eq!(
            child_measure_spec(MeasureSpec::exactly(120), Dimension::WrapContent),
            MeasureSpec::at_most(120)
        );
        assert_eq!(
            child_measure_spec(MeasureSpec::at_most(120), Dimension::WrapContent),
            MeasureSpec::at_most(120)
        );
        assert_eq!(
            child_measure_spec(MeasureSpec::new(50, MeasureMode::Unspecified), Dimension::WrapContent),
            MeasureSpec::unspecified()
        );
    }

    #[test]
    fn test_negative_parent_size_is_clamped() {
        assert_eq!(
            child_measure_spec(MeasureSpec::at_most(-5), Dimension::WrapContent),
            MeasureSpec::at_most(0)
        );
    }

    #[test]
    fn test_layout_params_default_wraps() {
        assert_eq!(LayoutParams::default(), LayoutParams::WRAP_CONTENT);
        assert_eq!(
            LayoutParams::exact(3, 4),
            LayoutParams::new(Dimension::Exact(3), Dimension::Exact(4))
        );
    }
}
