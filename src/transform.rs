use crate::widgets::Rect;

/// A 2D affine transformation matrix stored in row-major order.
///
/// Only the top two rows are stored; the implicit third row is `[0, 0, 1]`.
/// Used both for painting (composed parent→child on the paint context) and
/// for remapping pointer coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Matrix data in row-major order: [a, b, tx, c, d, ty]
    pub data: [f32; 6],
}

impl Transform {
    /// Identity matrix (no transformation)
    pub const IDENTITY: Self = Self {
        data: [
            1.0, 0.0, 0.0, // row 0
            0.0, 1.0, 0.0, // row 1
        ],
    };

    /// Create an identity transform
    pub fn identity() -> Self {
        Self::IDENTITY
    }

    /// Create a translation transform
    pub fn translate(x: f32, y: f32) -> Self {
        Self {
            data: [
                1.0, 0.0, x, // row 0
                0.0, 1.0, y, // row 1
            ],
        }
    }

    /// Create a rotation transform from a precomputed cosine and sine.
    fn from_cos_sin(cos: f32, sin: f32) -> Self {
        Self {
            data: [
                cos, -sin, 0.0, // row 0
                sin, cos, 0.0, // row 1
            ],
        }
    }

    /// Create a rotation transform from degrees.
    ///
    /// Quarter turns produce exact matrices, so rotating a pixel-aligned
    /// rectangle by 90 degrees stays pixel-aligned.
    pub fn rotate_degrees(angle_degrees: f32) -> Self {
        let (cos, sin) = cos_sin_degrees(angle_degrees as f64);
        Self::from_cos_sin(cos as f32, sin as f32)
    }

    /// Create a rotation by `angle_degrees` around the pivot `(px, py)`.
    pub fn rotate_degrees_about(angle_degrees: f32, px: f32, py: f32) -> Self {
        Self::translate(px, py)
            .then(&Self::rotate_degrees(angle_degrees))
            .then(&Self::translate(-px, -py))
    }

    /// Compose this transform with another: self * other
    /// Applies `other` first, then `self`.
    pub fn then(&self, other: &Transform) -> Transform {
        let [a0, b0, tx0, c0, d0, ty0] = self.data;
        let [a1, b1, tx1, c1, d1, ty1] = other.data;

        Transform {
            data: [
                a0 * a1 + b0 * c1,
                a0 * b1 + b0 * d1,
                a0 * tx1 + b0 * ty1 + tx0,
                c0 * a1 + d0 * c1,
                c0 * b1 + d0 * d1,
                c0 * tx1 + d0 * ty1 + ty0,
            ],
        }
    }

    /// Transform a 2D point by this matrix
    pub fn transform_point(&self, x: f32, y: f32) -> (f32, f32) {
        let [a, b, tx, c, d, ty] = self.data;
        (a * x + b * y + tx, c * x + d * y + ty)
    }

    /// Map `src` points into `dst`, pairwise. Extra entries in the longer
    /// slice are left untouched.
    pub fn map_points(&self, dst: &mut [(f32, f32)], src: &[(f32, f32)]) {
        for (out, &(x, y)) in dst.iter_mut().zip(src) {
            *out = self.transform_point(x, y);
        }
    }

    /// Map a rectangle and return the axis-aligned rectangle bounding the
    /// four transformed corners.
    pub fn map_rect(&self, rect: Rect) -> Rect {
        let right = rect.x + rect.width;
        let bottom = rect.y + rect.height;
        let corners = [
            (rect.x, rect.y),
            (right, rect.y),
            (right, bottom),
            (rect.x, bottom),
        ];
        let mut mapped = [(0.0, 0.0); 4];
        self.map_points(&mut mapped, &corners);

        let (mut min_x, mut min_y) = mapped[0];
        let (mut max_x, mut max_y) = mapped[0];
        for &(x, y) in &mapped[1..] {
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }

        Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    /// Check if this is the identity transform
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Cosine and sine of an angle in degrees, exact on quarter turns.
pub fn cos_sin_degrees(angle_degrees: f64) -> (f64, f64) {
    let turned = angle_degrees.rem_euclid(360.0);
    if turned == 0.0 {
        (1.0, 0.0)
    } else if turned == 90.0 {
        (0.0, 1.0)
    } else if turned == 180.0 {
        (-1.0, 0.0)
    } else if turned == 270.0 {
        (0.0, -1.0)
    } else {
        let radians = turned.to_radians();
        (radians.cos(), radians.sin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_identity() {
        let t = Transform::identity();
        assert_eq!(t, Transform::IDENTITY);
        assert!(t.is_identity());
        assert!(Transform::default().is_identity());
    }

    #[test]
    fn test_translate() {
        let t = Transform::translate(10.0, 20.0);
        assert_eq!(t.transform_point(0.0, 0.0), (10.0, 20.0));
        assert_eq!(t.transform_point(5.0, 5.0), (15.0, 25.0));
    }

    #[test]
    fn test_rotate_degrees_is_exact_on_quarter_turns() {
        assert_eq!(Transform::rotate_degrees(90.0).transform_point(1.0, 0.0), (0.0, 1.0));
        assert_eq!(Transform::rotate_degrees(-90.0).transform_point(1.0, 0.0), (0.0, -1.0));
        assert_eq!(Transform::rotate_degrees(180.0).transform_point(2.0, 3.0), (-2.0, -3.0));
        assert!(Transform::rotate_degrees(360.0).is_identity());
        assert!(Transform::rotate_degrees(-720.0).is_identity());
    }

    #[test]
    fn test_rotate_about_keeps_pivot_fixed() {
        for angle in [-135.0, 0.0, 30.0, 90.0, 270.0] {
            let t = Transform::rotate_degrees_about(angle, 100.0, 50.0);
            let (x, y) = t.transform_point(100.0, 50.0);
            assert!(approx_eq(x, 100.0), "angle {angle}: x = {x}");
            assert!(approx_eq(y, 50.0), "angle {angle}: y = {y}");
        }
    }

    #[test]
    fn test_rotate_about_quarter_turn() {
        let t = Transform::rotate_degrees_about(90.0, 100.0, 50.0);
        // (0, 0) is 100 left and 50 above the pivot; a clockwise quarter
        // turn puts it 50 right and 100 above.
        assert_eq!(t.transform_point(0.0, 0.0), (150.0, -50.0));
    }

    #[test]
    fn test_compose() {
        // Point (0,0) -> translate -> (10,0) -> rotate 90 -> (0,10)
        let composed = Transform::rotate_degrees(90.0).then(&Transform::translate(10.0, 0.0));
        assert_eq!(composed.transform_point(0.0, 0.0), (0.0, 10.0));
    }

    #[test]
    fn test_map_points() {
        let t = Transform::translate(1.0, 2.0);
        let mut dst = [(0.0, 0.0); 2];
        t.map_points(&mut dst, &[(0.0, 0.0), (3.0, 3.0)]);
        assert_eq!(dst, [(1.0, 2.0), (4.0, 5.0)]);
    }

    #[test]
    fn test_map_rect_quarter_turn_swaps_extent() {
        let t = Transform::rotate_degrees_about(90.0, 100.0, 50.0);
        let mapped = t.map_rect(Rect::new(0.0, 0.0, 200.0, 100.0));
        assert_eq!(mapped, Rect::new(50.0, -50.0, 100.0, 200.0));
    }

    #[test]
    fn test_map_rect_diagonal_grows() {
        let t = Transform::rotate_degrees_about(45.0, 5.0, 5.0);
        let mapped = t.map_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        let diagonal = 10.0 * std::f32::consts::SQRT_2;
        assert!(approx_eq(mapped.width, diagonal));
        assert!(approx_eq(mapped.height, diagonal));
        assert!(approx_eq(mapped.x, 5.0 - diagonal / 2.0));
    }

    #[test]
    fn test_cos_sin_degrees() {
        assert_eq!(cos_sin_degrees(90.0), (0.0, 1.0));
        assert_eq!(cos_sin_degrees(-90.0), (0.0, -1.0));
        assert_eq!(cos_sin_degrees(450.0), (0.0, 1.0));
        let (cos, sin) = cos_sin_degrees(45.0);
        assert!((cos - sin).abs() < 1e-12);
    }
}
