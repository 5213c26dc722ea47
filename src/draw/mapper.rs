use crate::draw::model::Point;

/// On-screen origin of the drawing surface, in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfaceBounds {
    pub left: f32,
    pub top: f32,
}

impl SurfaceBounds {
    pub const fn new(left: f32, top: f32) -> Self {
        Self { left, top }
    }
}

/// Converts viewport coordinates into surface-local pixels.
///
/// The mapping is 1:1. A surface shown at a display size different from its
/// buffer size will receive distorted coordinates; no DPI correction is done.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CoordinateMapper {
    bounds: SurfaceBounds,
}

impl CoordinateMapper {
    pub fn new(bounds: SurfaceBounds) -> Self {
        Self { bounds }
    }

    pub fn bounds(&self) -> SurfaceBounds {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: SurfaceBounds) {
        self.bounds = bounds;
    }

    pub fn to_local(&self, viewport: Point) -> Point {
        Point::new(viewport.x - self.bounds.left, viewport.y - self.bounds.top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtracts_surface_origin() {
        let mapper = CoordinateMapper::new(SurfaceBounds::new(40.0, 12.5));
        assert_eq!(mapper.to_local(Point::new(50.0, 20.0)), Point::new(10.0, 7.5));
    }

    #[test]
    fn points_left_of_origin_go_negative() {
        let mapper = CoordinateMapper::new(SurfaceBounds::new(100.0, 100.0));
        assert_eq!(mapper.to_local(Point::new(90.0, 100.0)), Point::new(-10.0, 0.0));
    }

    #[test]
    fn updated_bounds_apply_to_later_points() {
        let mut mapper = CoordinateMapper::default();
        assert_eq!(mapper.to_local(Point::new(5.0, 5.0)), Point::new(5.0, 5.0));
        mapper.set_bounds(SurfaceBounds::new(5.0, 0.0));
        assert_eq!(mapper.to_local(Point::new(5.0, 5.0)), Point::new(0.0, 5.0));
    }
}
