use study_board::draw::model::{Point, Tool, BACKGROUND};
use study_board::draw::session::BoardLifecycle;
use study_board::draw::{BoardSession, PointerInput};
use study_board::settings::Settings;

#[test]
fn session_uses_configured_tools_and_discards_on_close() {
    let settings = Settings {
        background: "#000000".into(),
        default_color: "#ef4444".into(),
        default_width: 6,
        ..Settings::default()
    };
    let mut session = BoardSession::new(settings.board_config());

    let board = session.open(48, 24);
    assert_eq!(board.tool_state().width, 6);
    assert_eq!(board.background().to_hex(), "#000000");
    board.on_pointer_down(Point::new(4.0, 12.0));
    board.on_pointer_move(Point::new(40.0, 12.0));
    board.palette().select_tool(Tool::Eraser);

    assert_eq!(session.toggle(48, 24), BoardLifecycle::Closed);
    let board = session.open(48, 24);
    assert_eq!(board.tool_state().tool, Tool::Pen);
    assert_eq!(board.pixels().unwrap().count_not(board.background()), 0);
}

#[test]
fn closed_session_has_no_board() {
    let mut session = BoardSession::default();
    assert!(session.board_mut().is_none());
    assert!(!session.close());
    session.open(8, 8);
    assert_eq!(
        session.board().unwrap().pixels().unwrap().count_not(BACKGROUND),
        0
    );
}
