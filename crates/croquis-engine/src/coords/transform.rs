use super::Vec2;

/// Cumulative 2D view transform (rotation + translation).
///
/// Models the fixed-function matrix stack as an explicit value: `translate`
/// and `rotate` compose on the right, so each call is applied in the local
/// frame established by all previous calls. The transform is never reset
/// between frames; repeated pan/rotate inputs compound.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewTransform {
    // Column-major 2x2 linear part.
    m: [[f32; 2]; 2],
    t: Vec2,
}

impl ViewTransform {
    #[inline]
    pub const fn identity() -> Self {
        Self {
            m: [[1.0, 0.0], [0.0, 1.0]],
            t: Vec2::zero(),
        }
    }

    /// Post-multiplies by a translation of `(dx, dy)`.
    ///
    /// The offset is expressed in the current local frame: after a rotation,
    /// translating along +x moves along the rotated x axis.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.t = self.t + self.apply_linear(Vec2::new(dx, dy));
    }

    /// Post-multiplies by a counter-clockwise rotation in degrees.
    pub fn rotate(&mut self, degrees: f32) {
        let rad = degrees.to_radians();
        let (sin, cos) = rad.sin_cos();

        let [[m00, m10], [m01, m11]] = self.m;
        self.m = [
            [m00 * cos + m01 * sin, m10 * cos + m11 * sin],
            [-m00 * sin + m01 * cos, -m10 * sin + m11 * cos],
        ];
    }

    /// Transforms a point from model space into view space.
    #[inline]
    pub fn apply(&self, p: Vec2) -> Vec2 {
        self.apply_linear(p) + self.t
    }

    /// Current translation component.
    #[inline]
    pub fn translation(&self) -> Vec2 {
        self.t
    }

    #[inline]
    fn apply_linear(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            self.m[0][0] * p.x + self.m[1][0] * p.y,
            self.m[0][1] * p.x + self.m[1][1] * p.y,
        )
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::identity()
    }
}
