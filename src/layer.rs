use crate::coord::HexCoord;
use crate::dirty::Repaint;
use crate::effect::Highlight;
use crate::piece::Piece;


// The one drawing-context operation the orchestrator performs itself; all
// other drawing goes through `Layer::render` and `TimerWidget::render`.
pub trait Canvas {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
}

// Borrowed view of the entities a surface draws. Piece and highlight state is
// owned by the board orchestrator; a surface only ever sees it for the
// duration of one render call. Vacant piece slots exist only to keep wire
// indices stable and are skipped by `pieces()`.
#[derive(Clone, Copy, Debug)]
pub struct Scene<'a> {
    pieces: &'a [Option<Piece>],
    pub highlights: &'a [Highlight],
}

impl<'a> Scene<'a> {
    pub fn new(pieces: &'a [Option<Piece>], highlights: &'a [Highlight]) -> Self {
        Scene { pieces, highlights }
    }

    pub fn pieces(&self) -> impl Iterator<Item = &'a Piece> { self.pieces.iter().flatten() }
}

// Geometry/render surface contract. Implementations own cell geometry for
// their shape (hex main board, square promotion overlay), draw to a `Canvas`,
// and resolve pointer positions back to cell coordinates.
//
// `flipped` mirrors the board for the other player's perspective; it affects
// `pixel_center` and click resolution but not which coordinates are valid.
pub trait Layer {
    type Canvas: Canvas;

    fn resize(&mut self, radius: f64);
    fn move_to(&mut self, x: f64, y: f64);
    // Largest cell radius at which the surface fits the given bounding box.
    fn appropriate_radius(&self, max_width: f64, max_height: f64) -> f64;

    fn width(&self) -> f64;
    fn height(&self) -> f64;
    fn pixel_center(&self, pos: HexCoord) -> (f64, f64);
    fn contains(&self, pos: HexCoord) -> bool;

    fn set_flipped(&mut self, flipped: bool);

    fn render(&mut self, canvas: &mut Self::Canvas, scene: Scene<'_>, repaint: &Repaint);
    // Resolves a pending pointer event against this surface's geometry.
    // Returns at most one click per frame; `None` when the pointer did not
    // land on a valid cell.
    fn take_click(&mut self, canvas: &mut Self::Canvas) -> Option<HexCoord>;
}
