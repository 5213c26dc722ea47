use crate::draw::model::{Color, Point, ToolState};
use crate::draw::surface::{DirtyRect, PixelSurface};

/// Incrementally paints a polyline onto a [`PixelSurface`].
///
/// Each segment is rasterised as a capsule: every pixel whose centre lies
/// inside the disc-swept region of radius `width / 2` around the segment is
/// overwritten. The boundary is half-open (centres exactly on the edge count
/// only on the top/left side), so a straight stroke covers exactly `width`
/// pixels across wherever it sits relative to the pixel grid. Consecutive capsules share their end discs, which gives round
/// caps and round joins without tracking the previous direction.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeRenderer {
    background: Color,
    cursor: Option<Point>,
}

impl StrokeRenderer {
    pub fn new(background: Color) -> Self {
        Self {
            background,
            cursor: None,
        }
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Last point visited by the current path, if one is open.
    pub fn cursor(&self) -> Option<Point> {
        self.cursor
    }

    /// Starts a new path at `point`. Nothing is painted.
    pub fn begin_path(&mut self, point: Point) {
        self.cursor = is_finite(point).then_some(point);
    }

    pub fn end_path(&mut self) {
        self.cursor = None;
    }

    /// Paints a segment from the cursor to `point` with the given tool and
    /// moves the cursor. Returns the surface region that was written.
    pub fn extend_path(
        &mut self,
        surface: &mut PixelSurface,
        point: Point,
        tool: &ToolState,
    ) -> Option<DirtyRect> {
        if !is_finite(point) {
            tracing::debug!(?point, "dropping non-finite stroke point");
            return None;
        }
        let start = self.cursor?;
        self.cursor = Some(point);
        paint_segment(
            surface,
            start,
            point,
            tool.paint_color(self.background),
            tool.paint_width(),
        )
    }
}

/// Rasterises one round-capped segment of `stroke_width` pixels.
pub fn paint_segment(
    surface: &mut PixelSurface,
    start: Point,
    end: Point,
    color: Color,
    stroke_width: u32,
) -> Option<DirtyRect> {
    let radius = (stroke_width.max(1) as f32) * 0.5;
    let radius_sq = radius * radius;

    let bounds = segment_bounds(start, end, radius).clamp(surface.width(), surface.height())?;

    let mut painted: Option<DirtyRect> = None;
    for y in bounds.y..(bounds.y + bounds.height) {
        let mut row: Option<(i32, i32)> = None;
        for x in bounds.x..(bounds.x + bounds.width) {
            let centre = Point::new(x as f32 + 0.5, y as f32 + 0.5);
            let (dx, dy) = offset_from_segment(centre, start, end);
            let d2 = dx * dx + dy * dy;
            if d2 < radius_sq || (d2 == radius_sq && on_leading_edge(dx, dy)) {
                surface.set_pixel(x, y, color);
                row = Some(match row {
                    Some((min, _)) => (min, x),
                    None => (x, x),
                });
            }
        }
        if let Some((min_x, max_x)) = row {
            let rect = DirtyRect {
                x: min_x,
                y,
                width: max_x - min_x + 1,
                height: 1,
            };
            painted = Some(match painted {
                Some(acc) => acc.union(rect),
                None => rect,
            });
        }
    }
    painted
}

/// Conservative pixel bounds of a capsule, before clamping to the surface.
pub fn segment_bounds(start: Point, end: Point, radius: f32) -> DirtyRect {
    let min_x = (start.x.min(end.x) - radius).floor() as i32;
    let min_y = (start.y.min(end.y) - radius).floor() as i32;
    let max_x = (start.x.max(end.x) + radius).ceil() as i32;
    let max_y = (start.y.max(end.y) + radius).ceil() as i32;
    DirtyRect {
        x: min_x,
        y: min_y,
        width: max_x.saturating_sub(min_x).saturating_add(1).max(1),
        height: max_y.saturating_sub(min_y).saturating_add(1).max(1),
    }
}

/// Vector from the closest point of the segment to `point`.
///
/// Alongside the segment the offset is built from the cross product rather
/// than the projected foot point, so axis-aligned strokes get exact offsets.
fn offset_from_segment(point: Point, start: Point, end: Point) -> (f32, f32) {
    let vx = end.x - start.x;
    let vy = end.y - start.y;
    let wx = point.x - start.x;
    let wy = point.y - start.y;
    let len_sq = vx * vx + vy * vy;
    if len_sq <= f32::EPSILON {
        return (wx, wy);
    }
    let along = wx * vx + wy * vy;
    if along <= 0.0 {
        return (wx, wy);
    }
    if along >= len_sq {
        return (point.x - end.x, point.y - end.y);
    }
    let cross = wx * vy - wy * vx;
    (cross * vy / len_sq, -cross * vx / len_sq)
}

/// Tie-break for centres exactly `radius` away: keep those above, or level
/// and to the left.
fn on_leading_edge(dx: f32, dy: f32) -> bool {
    dy < 0.0 || (dy == 0.0 && dx < 0.0)
}

fn is_finite(point: Point) -> bool {
    point.x.is_finite() && point.y.is_finite()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::model::{Tool, BACKGROUND, SWATCHES};

    const BLACK: Color = Color::rgb(0, 0, 0);

    fn white(width: u32, height: u32) -> PixelSurface {
        PixelSurface::new(width, height, BACKGROUND).unwrap()
    }

    fn column_run(surface: &PixelSurface, x: u32, color: Color) -> usize {
        (0..surface.height())
            .filter(|&y| surface.pixel(x, y) == Some(color))
            .count()
    }

    #[test]
    fn begin_path_paints_nothing() {
        let mut surface = white(32, 32);
        let mut renderer = StrokeRenderer::new(BACKGROUND);
        renderer.begin_path(Point::new(10.0, 10.0));
        assert_eq!(surface.count_not(BACKGROUND), 0);
        assert_eq!(renderer.cursor(), Some(Point::new(10.0, 10.0)));

        let tool = ToolState::default();
        renderer.extend_path(&mut surface, Point::new(20.0, 10.0), &tool);
        assert!(surface.count_not(BACKGROUND) > 0);
        assert_eq!(renderer.cursor(), Some(Point::new(20.0, 10.0)));
    }

    #[test]
    fn extend_without_open_path_is_a_no_op() {
        let mut surface = white(16, 16);
        let mut renderer = StrokeRenderer::new(BACKGROUND);
        let dirty = renderer.extend_path(&mut surface, Point::new(4.0, 4.0), &ToolState::default());
        assert_eq!(dirty, None);
        assert_eq!(surface.count_not(BACKGROUND), 0);
        assert_eq!(renderer.cursor(), None);
    }

    #[test]
    fn cross_section_is_exact_at_any_grid_offset() {
        for y in [30.0_f32, 30.5, 30.25, 29.8] {
            for width in 1..=9_u32 {
                let mut surface = white(64, 64);
                paint_segment(
                    &mut surface,
                    Point::new(10.0, y),
                    Point::new(50.0, y),
                    BLACK,
                    width,
                );
                assert_eq!(
                    column_run(&surface, 30, BLACK),
                    width as usize,
                    "width {width} at y {y}"
                );
            }
        }
    }

    #[test]
    fn vertical_cross_section_is_exact_at_any_grid_offset() {
        for x in [30.0_f32, 30.5] {
            for width in [1_u32, 2, 5, 12] {
                let mut surface = white(64, 64);
                paint_segment(
                    &mut surface,
                    Point::new(x, 10.0),
                    Point::new(x, 50.0),
                    BLACK,
                    width,
                );
                let row = (0..64)
                    .filter(|&px| surface.pixel(px, 30) == Some(BLACK))
                    .count();
                assert_eq!(row, width as usize, "width {width} at x {x}");
            }
        }
    }

    #[test]
    fn eraser_width_is_exact_on_both_alignments() {
        for y in [32.0_f32, 32.5] {
            for width in [1_u32, 3, 4] {
                let mut surface = PixelSurface::new(64, 64, BLACK).unwrap();
                let mut renderer = StrokeRenderer::new(BACKGROUND);
                let eraser = ToolState::new(Tool::Eraser, SWATCHES[0], width);
                renderer.begin_path(Point::new(5.0, y));
                renderer.extend_path(&mut surface, Point::new(60.0, y), &eraser);
                assert_eq!(
                    column_run(&surface, 30, BACKGROUND),
                    (width * 3) as usize,
                    "width {width} at y {y}"
                );
            }
        }
    }

    #[test]
    fn eraser_overpaints_with_background_at_triple_width() {
        let mut surface = PixelSurface::new(64, 64, BLACK).unwrap();
        let mut renderer = StrokeRenderer::new(BACKGROUND);
        let eraser = ToolState::new(Tool::Eraser, SWATCHES[0], 4);
        renderer.begin_path(Point::new(5.0, 32.0));
        renderer.extend_path(&mut surface, Point::new(60.0, 32.0), &eraser);

        assert_eq!(column_run(&surface, 30, BACKGROUND), 12);
        assert_eq!(column_run(&surface, 30, SWATCHES[0]), 0);
    }

    #[test]
    fn round_caps_extend_past_endpoints() {
        let mut surface = white(64, 64);
        paint_segment(
            &mut surface,
            Point::new(20.5, 20.5),
            Point::new(30.5, 20.5),
            BLACK,
            9,
        );
        // Cap reaches ~4px beyond each end on the axis, but not the square corner.
        assert_eq!(surface.pixel(16, 20), Some(BLACK));
        assert_eq!(surface.pixel(34, 20), Some(BLACK));
        assert_eq!(surface.pixel(16, 16), Some(BACKGROUND));
        assert_eq!(surface.pixel(34, 24), Some(BACKGROUND));
    }

    #[test]
    fn diagonal_hairline_has_no_gaps() {
        let mut surface = white(40, 40);
        paint_segment(
            &mut surface,
            Point::new(2.0, 3.0),
            Point::new(37.0, 29.0),
            BLACK,
            1,
        );
        for x in 3..36 {
            assert!(column_run(&surface, x, BLACK) >= 1, "gap at column {x}");
        }
    }

    #[test]
    fn dirty_rect_covers_painted_pixels_and_is_clamped() {
        let mut surface = white(32, 32);
        let dirty = paint_segment(
            &mut surface,
            Point::new(-10.0, 5.0),
            Point::new(10.0, 5.0),
            BLACK,
            4,
        )
        .unwrap();
        assert_eq!(dirty.x, 0);
        assert_eq!(dirty.y, 3);
        assert_eq!(dirty.height, 4);
        assert!(dirty.x + dirty.width <= 32);

        let outside = paint_segment(
            &mut surface,
            Point::new(100.0, 100.0),
            Point::new(120.0, 100.0),
            BLACK,
            4,
        );
        assert_eq!(outside, None);
    }

    #[test]
    fn non_finite_points_are_ignored() {
        let mut surface = white(16, 16);
        let mut renderer = StrokeRenderer::new(BACKGROUND);
        renderer.begin_path(Point::new(2.0, 2.0));
        let dirty = renderer.extend_path(
            &mut surface,
            Point::new(f32::NAN, 4.0),
            &ToolState::default(),
        );
        assert_eq!(dirty, None);
        assert_eq!(renderer.cursor(), Some(Point::new(2.0, 2.0)));
        assert_eq!(surface.count_not(BACKGROUND), 0);
    }

    #[test]
    fn same_segment_paints_same_pixels() {
        let draw = || {
            let mut surface = white(48, 48);
            let mut renderer = StrokeRenderer::new(BACKGROUND);
            let tool = ToolState::new(Tool::Pen, SWATCHES[3], 7);
            renderer.begin_path(Point::new(3.3, 40.1));
            renderer.extend_path(&mut surface, Point::new(44.7, 6.2), &tool);
            surface
        };
        assert_eq!(draw(), draw());
    }
}
