use hexchess_board::board::Board;
use hexchess_board::color::Color;
use hexchess_board::coord::HexCoord;
use hexchess_board::event::BoardEvent;
use hexchess_board::piece::PieceKind;
use hexchess_board::test_util::{FakeCanvas, FakeTimers, GridLayer};
use hexchess_board::wire;


pub type TestBoard = Board<GridLayer, FakeTimers>;

pub const VIEWPORT: (f64, f64) = (1000.0, 800.0);

// An 11-wide main surface stand-in and the 2x2 promotion overlay.
pub fn test_board() -> TestBoard {
    Board::new(GridLayer::new(11, 11), GridLayer::new(2, 2), FakeTimers::new(), VIEWPORT.0, VIEWPORT.1)
}

pub fn render_frame(board: &mut TestBoard) -> FakeCanvas {
    let mut canvas = FakeCanvas::new();
    board.render(&mut canvas, VIEWPORT.0, VIEWPORT.1);
    canvas
}

// Renders enough frames for any pending repaint work to drain.
pub fn render_until_clean(board: &mut TestBoard) {
    for _ in 0..3 {
        render_frame(board);
    }
    assert!(board.main_repaint().is_clean());
}

pub fn drain_events(board: &mut TestBoard) -> Vec<BoardEvent> {
    std::iter::from_fn(|| board.poll_event()).collect()
}

pub fn piece_word(kind: PieceKind, color: Color, q: u8, r: u8) -> u16 {
    wire::encode_piece(&hexchess_board::piece::Piece::new(kind, color, HexCoord::new(q, r)))
}
