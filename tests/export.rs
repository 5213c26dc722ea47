use study_board::draw::model::{Color, Point, Tool, ToolState, BACKGROUND};
use study_board::draw::{BoardConfig, DrawError, DrawingSurface, PointerInput};
use tempfile::tempdir;

const BLACK: Color = Color::rgb(0, 0, 0);

fn segment_board() -> DrawingSurface {
    let mut board = DrawingSurface::new(
        64,
        32,
        BoardConfig {
            tools: ToolState::new(Tool::Pen, BLACK, 5),
            ..BoardConfig::default()
        },
    );
    board.on_pointer_down(Point::new(10.0, 10.0));
    board.on_pointer_move(Point::new(50.0, 10.0));
    board.on_pointer_up(Point::new(50.0, 10.0));
    board
}

#[test]
fn exported_png_matches_surface_pixels() {
    let board = segment_board();
    let bytes = board.export_image().unwrap();
    let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();

    assert_eq!(decoded.dimensions(), (64, 32));
    assert_eq!(
        decoded.as_raw().as_slice(),
        board.pixels().unwrap().rgba_pixels()
    );
    let black = [0, 0, 0, 255];
    let background = BACKGROUND.to_rgba_array();

    // Width 5 centred on y = 10 covers rows 7..=11.
    for y in 0..32 {
        let expected = if (7..=11).contains(&y) { black } else { background };
        assert_eq!(decoded.get_pixel(30, y).0, expected, "row {y}");
    }
    for x in 10..=50 {
        assert_eq!(decoded.get_pixel(x, 10).0, black, "column {x}");
    }

    // Nothing outside the round-capped segment's box was touched, and the
    // only ink is the pen color.
    for (x, y, px) in decoded.enumerate_pixels() {
        if px.0 == background {
            continue;
        }
        assert_eq!(px.0, black, "stray color at ({x}, {y})");
        assert!(
            (7..=52).contains(&x) && (7..=12).contains(&y),
            "ink outside the segment at ({x}, {y})"
        );
    }
}

#[test]
fn export_to_writes_whiteboard_png() {
    let dir = tempdir().unwrap();
    let board = segment_board();
    let path = board.export_to(dir.path()).unwrap();
    assert_eq!(path.file_name().unwrap(), "whiteboard.png");

    let decoded = image::open(&path).unwrap().to_rgba8();
    assert_eq!(
        decoded.as_raw().as_slice(),
        board.pixels().unwrap().rgba_pixels()
    );

    // A second export overwrites the same file.
    let again = board.export_to(dir.path()).unwrap();
    assert_eq!(again, path);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn export_leaves_the_surface_untouched() {
    let board = segment_board();
    let before = board.pixels().unwrap().clone();
    board.export_image().unwrap();
    assert_eq!(board.pixels().unwrap(), &before);
    assert!(!board.is_drawing());
}

#[test]
fn unavailable_surface_exports_nothing() {
    let dir = tempdir().unwrap();
    let board = DrawingSurface::new(0, 10, BoardConfig::default());
    assert!(matches!(
        board.export_image(),
        Err(DrawError::SurfaceUnavailable(_))
    ));
    assert!(board.export_to(dir.path()).is_err());
    assert!(!dir.path().join("whiteboard.png").exists());
}
