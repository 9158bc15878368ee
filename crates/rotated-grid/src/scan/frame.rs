use crate::angle::Angle;
use crate::line::Line;
use crate::vec2::{rotate_around_sin_cos, Vec2};

/// Axis-aligned box wrapping the rotated rectangle (rotated space).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WrappingBox {
    pub min: Vec2,
    pub extent: Vec2,
}

impl WrappingBox {
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.extent
    }
}

/// Rectangle `[0, width] x [0, height]` rotated about its center.
///
/// Invariants:
/// - `angle` is already normalized; `sin`/`cos` are its sine and cosine.
/// - Edge lines run top: tr→tl, left: tl→bl, bottom: bl→br, right: tr→br,
///   all taken from the rotated corners.
#[derive(Clone, Debug)]
pub struct RectFrame {
    center: Vec2,
    sin: f64,
    cos: f64,
    corners: [Vec2; 4],
    top: Line,
    left: Line,
    bottom: Line,
    right: Line,
    wrapping: WrappingBox,
}

impl RectFrame {
    /// Pre: `width`, `height` positive and finite; `angle` normalized.
    pub fn new(width: f32, height: f32, angle: Angle) -> Self {
        let (sin, cos) = angle.sin_cos();

        let tl = Vec2::new(0.0, 0.0);
        let tr = Vec2::new(width, 0.0);
        let bl = Vec2::new(0.0, height);
        let br = Vec2::new(width, height);
        let center = (tl + tr + bl + br) * 0.25;

        let [tl, tr, bl, br] =
            [tl, tr, bl, br].map(|p| rotate_around_sin_cos(p, center, sin, cos));

        let extent = Vec2::new(
            (f64::from(width) * cos + f64::from(height) * sin) as f32,
            (f64::from(width) * sin + f64::from(height) * cos) as f32,
        );

        Self {
            center,
            sin,
            cos,
            corners: [tl, tr, bl, br],
            top: Line::through(tr, tl),
            left: Line::through(tl, bl),
            bottom: Line::through(bl, br),
            right: Line::through(tr, br),
            wrapping: WrappingBox {
                min: center - extent * 0.5,
                extent,
            },
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Rotated corners in order top-left, top-right, bottom-left, bottom-right.
    #[inline]
    pub fn corners(&self) -> [Vec2; 4] {
        self.corners
    }

    /// Edge lines in order top, left, bottom, right.
    #[inline]
    pub fn edges(&self) -> [Line; 4] {
        [self.top, self.left, self.bottom, self.right]
    }

    #[inline]
    pub fn wrapping_box(&self) -> WrappingBox {
        self.wrapping
    }

    /// Rotated space → original (axis-aligned rectangle) space.
    #[inline]
    pub fn to_original(&self, p: Vec2) -> Vec2 {
        rotate_around_sin_cos(p, self.center, -self.sin, self.cos)
    }

    /// Original space → rotated space.
    #[inline]
    pub fn to_rotated(&self, p: Vec2) -> Vec2 {
        rotate_around_sin_cos(p, self.center, self.sin, self.cos)
    }

    /// Entry and exit points of the horizontal row at `y`, if it crosses the rectangle.
    ///
    /// The row spans the full wrapping box; top/bottom edges are bounded by the
    /// box width, left/right by the box height (see `Line::intersection_t`).
    pub fn row_span(&self, y: f32) -> Option<(Vec2, Vec2)> {
        let bx = self.wrapping;
        let ray = Line::through(
            Vec2::new(bx.min.x, y),
            Vec2::new(bx.min.x + bx.extent.x, y),
        );
        let (lo, hi) = [
            (&self.top, bx.extent.x),
            (&self.bottom, bx.extent.x),
            (&self.left, bx.extent.y),
            (&self.right, bx.extent.y),
        ]
        .into_iter()
        .filter_map(|(edge, max_u)| ray.intersection_t(edge, max_u))
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), t| {
            (lo.min(t), hi.max(t))
        });
        (lo.is_finite() && hi.is_finite())
            .then(|| (ray.project_out(lo), ray.project_out(hi)))
    }
}
