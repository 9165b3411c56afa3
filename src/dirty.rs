use std::collections::HashSet;
use std::mem;

use crate::coord::HexCoord;


// Per-surface repaint plan. One value of this enum replaces what would
// otherwise be a dirty-cell set plus two boolean flags ("repaint everything
// this frame" / "...and the next one too") with no invalid combinations.
//
// `FullNextFrame` still tracks cells: the current frame renders incrementally,
// the full repaint only starts on the next one.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Repaint {
    Clean,
    Cells(HashSet<HexCoord>),
    FullNextFrame(HashSet<HexCoord>),
    FullNow { next_frame_too: bool },
}

impl Repaint {
    pub fn new() -> Self { Repaint::Clean }

    pub fn mark_cell(&mut self, pos: HexCoord) {
        match self {
            Repaint::Clean => *self = Repaint::Cells(HashSet::from([pos])),
            Repaint::Cells(cells) | Repaint::FullNextFrame(cells) => {
                cells.insert(pos);
            }
            Repaint::FullNow { .. } => {}
        }
    }

    // The current frame stays incremental; everything is repainted next frame.
    pub fn schedule_full_next_frame(&mut self) {
        match self {
            Repaint::Clean => *self = Repaint::FullNextFrame(HashSet::new()),
            Repaint::Cells(cells) => {
                let cells = mem::take(cells);
                *self = Repaint::FullNextFrame(cells);
            }
            Repaint::FullNextFrame(_) => {}
            Repaint::FullNow { next_frame_too } => *next_frame_too = true,
        }
    }

    pub fn force_full_now(&mut self) {
        let next_frame_too = matches!(
            self,
            Repaint::FullNextFrame(_) | Repaint::FullNow { next_frame_too: true }
        );
        *self = Repaint::FullNow { next_frame_too };
    }

    pub fn force_full_now_and_next(&mut self) {
        *self = Repaint::FullNow { next_frame_too: true };
    }

    pub fn is_full_now(&self) -> bool { matches!(self, Repaint::FullNow { .. }) }

    pub fn is_clean(&self) -> bool { matches!(self, Repaint::Clean) }

    // Cells to redraw this frame, when not repainting in full.
    pub fn cells(&self) -> Option<&HashSet<HexCoord>> {
        match self {
            Repaint::Cells(cells) | Repaint::FullNextFrame(cells) => Some(cells),
            _ => None,
        }
    }

    // End-of-frame shift: a deferred full repaint becomes due, everything
    // already painted becomes clean.
    pub fn finish_frame(&mut self) {
        *self = match self {
            Repaint::FullNextFrame(_) | Repaint::FullNow { next_frame_too: true } => {
                Repaint::FullNow { next_frame_too: false }
            }
            _ => Repaint::Clean,
        };
    }
}

impl Default for Repaint {
    fn default() -> Self { Repaint::new() }
}


#[cfg(test)]
mod tests {
    use super::*;

    const A: HexCoord = HexCoord::new(1, 2);
    const B: HexCoord = HexCoord::new(3, 4);

    #[test]
    fn cells_accumulate() {
        let mut repaint = Repaint::new();
        repaint.mark_cell(A);
        repaint.mark_cell(B);
        repaint.mark_cell(A);
        assert_eq!(repaint.cells().unwrap().len(), 2);
        repaint.finish_frame();
        assert!(repaint.is_clean());
    }

    #[test]
    fn full_now_absorbs_cells() {
        let mut repaint = Repaint::new();
        repaint.force_full_now();
        repaint.mark_cell(A);
        assert!(repaint.is_full_now());
        assert_eq!(repaint.cells(), None);
        repaint.finish_frame();
        assert!(repaint.is_clean());
    }

    #[test]
    fn full_pair_spans_two_frames() {
        let mut repaint = Repaint::new();
        repaint.force_full_now_and_next();
        assert!(repaint.is_full_now());
        repaint.finish_frame();
        assert!(repaint.is_full_now());
        repaint.finish_frame();
        assert!(repaint.is_clean());
    }

    #[test]
    fn deferred_full_keeps_current_frame_incremental() {
        let mut repaint = Repaint::new();
        repaint.mark_cell(A);
        repaint.schedule_full_next_frame();
        assert!(!repaint.is_full_now());
        assert!(repaint.cells().unwrap().contains(&A));
        repaint.finish_frame();
        assert!(repaint.is_full_now());
        repaint.finish_frame();
        assert!(repaint.is_clean());
    }

    #[test]
    fn force_full_now_preserves_deferred_full() {
        let mut repaint = Repaint::new();
        repaint.schedule_full_next_frame();
        repaint.force_full_now();
        repaint.finish_frame();
        assert!(repaint.is_full_now());
    }
}
