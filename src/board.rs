use std::collections::VecDeque;
use std::time::Duration;

use itertools::Itertools;
use log::debug;

use crate::color::Color;
use crate::coord::HexCoord;
use crate::dirty::Repaint;
use crate::effect::Highlight;
use crate::event::BoardEvent;
use crate::layer::{Canvas, Layer, Scene};
use crate::piece::Piece;
use crate::promotion::{candidate_at, PromotionState, PROMOTION_CHOICES};
use crate::registry::PieceRegistry;
use crate::timer::TimerWidget;
use crate::wire;


// Fraction of the viewport the main surface may occupy.
pub const BOARD_WIDTH_FRACTION: f64 = 0.95;
pub const BOARD_HEIGHT_FRACTION: f64 = 0.80;


// The board orchestrator. Owns the main surface, the promotion-choice
// overlay, the timer widget and all entity state; applies decoded wire
// updates and drives the per-frame render pass.
//
// Everything here is synchronous and single-threaded: the host event loop
// interleaves update calls and one `render` call per display refresh, never
// concurrently. Malformed input (stale piece indices, out-of-bounds
// highlights, undecodable entries) is a silent per-entry no-op: the sender is
// trusted to eventually converge via a full `set_pieces`, and a renderer must
// never fault on a transient mismatch.
pub struct Board<L: Layer, T: TimerWidget<Canvas = L::Canvas>> {
    main: L,
    promotion: L,
    timers: T,
    pieces: PieceRegistry,
    highlights: Vec<Highlight>,
    promotion_pieces: [Option<Piece>; 4],
    promoting: PromotionState,
    main_repaint: Repaint,
    promotion_repaint: Repaint,
    events: VecDeque<BoardEvent>,
}

impl<L: Layer, T: TimerWidget<Canvas = L::Canvas>> Board<L, T> {
    pub fn new(main: L, promotion: L, timers: T, viewport_width: f64, viewport_height: f64) -> Self {
        let mut board = Board {
            main,
            promotion,
            timers,
            pieces: PieceRegistry::new(),
            highlights: Vec::new(),
            promotion_pieces: PROMOTION_CHOICES
                .map(|(kind, pos)| Some(Piece::new(kind, Color::Light, pos))),
            promoting: PromotionState::Idle,
            main_repaint: Repaint::new(),
            promotion_repaint: Repaint::new(),
            events: VecDeque::new(),
        };
        // Nothing is on screen yet; the first frame paints from scratch.
        board.main_repaint.force_full_now();
        board.promotion_repaint.force_full_now();
        board.resize(viewport_width, viewport_height);
        board
    }

    pub fn promotion_state(&self) -> PromotionState { self.promoting }
    pub fn pieces(&self) -> &PieceRegistry { &self.pieces }
    pub fn highlights(&self) -> &[Highlight] { &self.highlights }
    pub fn main_repaint(&self) -> &Repaint { &self.main_repaint }
    pub fn main_layer(&self) -> &L { &self.main }
    pub fn main_layer_mut(&mut self) -> &mut L { &mut self.main }
    pub fn promotion_layer(&self) -> &L { &self.promotion }
    pub fn promotion_layer_mut(&mut self) -> &mut L { &mut self.promotion }
    pub fn timers_mut(&mut self) -> &mut T { &mut self.timers }

    pub fn poll_event(&mut self) -> Option<BoardEvent> { self.events.pop_front() }

    // Replaces the entire piece list. Incremental dirty-tracking is void after
    // a full replace, so both this frame and the next repaint in full.
    pub fn set_pieces(&mut self, words: &[u16]) {
        self.main_repaint.force_full_now_and_next();
        self.pieces.replace_all(words.iter().map(|&word| {
            let piece = wire::decode_piece(word);
            if piece.is_none() {
                debug!("piece entry {word:#06x} has an unassigned kind code; slot left vacant");
            }
            piece
        }));
    }

    pub fn move_pieces(&mut self, words: &[u16]) {
        for &word in words {
            let (index, to) = wire::decode_move(word);
            let Some(id) = self.pieces.by_wire_index(index) else {
                debug!("move entry {word:#06x} references piece {index} of {}", self.pieces.len());
                continue;
            };
            let Some(piece) = self.pieces.get_mut(id) else {
                continue;
            };
            let from = piece.pos;
            piece.pos = to;
            self.main_repaint.mark_cell(from);
            self.main_repaint.mark_cell(to);
        }
    }

    // The piece stays put; only its kind changes.
    pub fn promote_pieces(&mut self, words: &[u16]) {
        for &word in words {
            let (kind, index) = wire::decode_promotion(word);
            let Some(kind) = kind else {
                debug!("promote entry {word:#06x} has an unassigned kind code");
                continue;
            };
            let Some(id) = self.pieces.by_wire_index(index) else {
                debug!("promote entry {word:#06x} references piece {index} of {}", self.pieces.len());
                continue;
            };
            let Some(piece) = self.pieces.get_mut(id) else {
                continue;
            };
            piece.kind = kind;
            let pos = piece.pos;
            self.main_repaint.mark_cell(pos);
        }
    }

    // Replaces the highlight list. Every cell highlighted before or after the
    // call gets redrawn: old cells to erase the decoration, new cells to draw
    // it. A cell present in both lists is marked twice, which the dirty set
    // collapses into one redraw.
    pub fn highlight(&mut self, words: &[u16]) {
        for highlight in &self.highlights {
            self.main_repaint.mark_cell(highlight.pos);
        }

        self.highlights = words
            .iter()
            .filter_map(|&word| wire::decode_highlight(word))
            .filter(|highlight| {
                let in_bounds = self.main.contains(highlight.pos);
                if !in_bounds {
                    debug!("highlight at {:?} is outside the board", highlight.pos);
                }
                in_bounds
            })
            .collect_vec();
        for highlight in &self.highlights {
            self.main_repaint.mark_cell(highlight.pos);
        }
    }

    pub fn show_promotion_prompt(&mut self, color: Color, pos: HexCoord) {
        self.promoting = PromotionState::AwaitingSelection { color, pos };
        self.promotion_repaint.force_full_now();
        for piece in self.promotion_pieces.iter_mut().flatten() {
            piece.color = color;
        }

        // Center the overlay on the target cell, in the main surface's
        // current (possibly flipped) pixel mapping.
        let (x, y) = self.main.pixel_center(pos);
        self.promotion
            .move_to(x - self.promotion.width() / 2.0, y - self.promotion.height() / 2.0);
    }

    // Re-derives the prompt placement from stored state, e.g. after a resize
    // or a perspective flip. No-op while idle.
    fn reload_promotion_prompt(&mut self) {
        if let PromotionState::AwaitingSelection { color, pos } = self.promoting {
            self.show_promotion_prompt(color, pos);
        }
    }

    pub fn flip(&mut self, state: bool) {
        self.main.set_flipped(state);
        self.timers.set_flipped(state);
        self.reload_promotion_prompt();
    }

    pub fn resize(&mut self, viewport_width: f64, viewport_height: f64) {
        let radius = self.main.appropriate_radius(
            BOARD_WIDTH_FRACTION * viewport_width,
            BOARD_HEIGHT_FRACTION * viewport_height,
        );
        self.main.resize(radius);
        self.main.move_to(
            (viewport_width - self.main.width()) / 2.0,
            (viewport_height - self.main.height()) / 2.0,
        );
        self.promotion.resize(radius);
        self.reload_promotion_prompt();
    }

    pub fn hide_timers(&mut self) {
        self.timers.set_hidden(true);
    }

    pub fn set_timers(&mut self, light: Duration, dark: Duration, active: Color) {
        self.timers.set_hidden(false);
        self.timers.set_state(light, dark, active);
    }

    // One frame. Updates applied before this call are guaranteed visible;
    // pointer input goes to the promotion overlay exclusively while a prompt
    // is up, to the main surface otherwise.
    pub fn render(&mut self, canvas: &mut L::Canvas, width: f64, height: f64) {
        if self.main_repaint.is_full_now() {
            canvas.clear_rect(0.0, 0.0, width, height);
        }
        self.timers
            .render(canvas, 0.0, 0.0, width, height, self.main_repaint.is_full_now());
        if self.timers.take_expired().is_some() {
            self.events.push_back(BoardEvent::TimerExpired);
        }

        let scene = Scene::new(self.pieces.slots(), &self.highlights);
        self.main.render(canvas, scene, &self.main_repaint);

        if self.promoting.is_idle() {
            if let Some(pos) = self.main.take_click(canvas) {
                self.events.push_back(BoardEvent::HexClicked { pos });
            }
        } else {
            // The overlay takes input exclusively; a pointer event that only
            // the main surface could resolve is dropped, not deferred.
            let _ = self.main.take_click(canvas);
            let scene = Scene::new(&self.promotion_pieces, &[]);
            self.promotion.render(canvas, scene, &self.promotion_repaint);
            if let Some(pos) = self.promotion.take_click(canvas) {
                if let Some(kind) = candidate_at(pos) {
                    // The overlay may have obscured arbitrary board cells.
                    self.main_repaint.schedule_full_next_frame();
                    self.promoting = PromotionState::Idle;
                    self.events.push_back(BoardEvent::PromotionChosen { kind });
                }
            }
            self.promotion_repaint.finish_frame();
        }

        self.main_repaint.finish_frame();
    }
}
