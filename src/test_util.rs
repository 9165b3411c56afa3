// Test doubles for the `Layer`, `Canvas` and `TimerWidget` seams. Geometry is
// a plain rectangular grid with square cells of side `2 * radius`, which is
// enough to exercise placement, flipping and click resolution without a real
// rendering backend.

use std::collections::VecDeque;
use std::time::Duration;

use instant::Instant;

use crate::color::Color;
use crate::coord::HexCoord;
use crate::dirty::Repaint;
use crate::layer::{Canvas, Layer, Scene};
use crate::timer::{ClockPair, TimerWidget};


#[derive(Clone, Debug, Default)]
pub struct FakeCanvas {
    pub cleared_rects: Vec<(f64, f64, f64, f64)>,
}

impl FakeCanvas {
    pub fn new() -> Self { Self::default() }
}

impl Canvas for FakeCanvas {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.cleared_rects.push((x, y, width, height));
    }
}


// What a surface was asked to draw in one frame.
#[derive(Clone, Debug)]
pub struct RenderRecord {
    pub repaint: Repaint,
    pub piece_count: usize,
    pub highlight_count: usize,
}

pub struct GridLayer {
    cols: u8,
    rows: u8,
    radius: f64,
    x: f64,
    y: f64,
    flipped: bool,
    pending_clicks: VecDeque<(f64, f64)>,
    pub renders: Vec<RenderRecord>,
}

impl GridLayer {
    pub fn new(cols: u8, rows: u8) -> Self {
        GridLayer {
            cols,
            rows,
            radius: 1.0,
            x: 0.0,
            y: 0.0,
            flipped: false,
            pending_clicks: VecDeque::new(),
            renders: Vec::new(),
        }
    }

    fn cell_size(&self) -> f64 { 2.0 * self.radius }

    pub fn position(&self) -> (f64, f64) { (self.x, self.y) }

    // Queues a pointer event at pixel coordinates, to be resolved by the next
    // `take_click`.
    pub fn push_click(&mut self, x: f64, y: f64) {
        self.pending_clicks.push_back((x, y));
    }

    // Queues a click at the center of the given cell.
    pub fn push_click_on(&mut self, pos: HexCoord) {
        let (x, y) = self.pixel_center(pos);
        self.push_click(x, y);
    }

    fn cell_at(&self, px: f64, py: f64) -> Option<HexCoord> {
        let col = ((px - self.x) / self.cell_size()).floor();
        let row = ((py - self.y) / self.cell_size()).floor();
        if col < 0.0 || col >= self.cols as f64 || row < 0.0 || row >= self.rows as f64 {
            return None;
        }
        let (mut q, mut r) = (col as u8, row as u8);
        if self.flipped {
            q = self.cols - 1 - q;
            r = self.rows - 1 - r;
        }
        Some(HexCoord::new(q, r))
    }
}

impl Layer for GridLayer {
    type Canvas = FakeCanvas;

    fn resize(&mut self, radius: f64) {
        self.radius = radius;
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    fn appropriate_radius(&self, max_width: f64, max_height: f64) -> f64 {
        (max_width / self.cols as f64).min(max_height / self.rows as f64) / 2.0
    }

    fn width(&self) -> f64 { self.cols as f64 * self.cell_size() }
    fn height(&self) -> f64 { self.rows as f64 * self.cell_size() }

    fn pixel_center(&self, pos: HexCoord) -> (f64, f64) {
        let (mut col, mut row) = (pos.q(), pos.r());
        if self.flipped {
            col = self.cols - 1 - col;
            row = self.rows - 1 - row;
        }
        (
            self.x + (col as f64 + 0.5) * self.cell_size(),
            self.y + (row as f64 + 0.5) * self.cell_size(),
        )
    }

    fn contains(&self, pos: HexCoord) -> bool { pos.q() < self.cols && pos.r() < self.rows }

    fn set_flipped(&mut self, flipped: bool) {
        self.flipped = flipped;
    }

    fn render(&mut self, _canvas: &mut FakeCanvas, scene: Scene<'_>, repaint: &Repaint) {
        self.renders.push(RenderRecord {
            repaint: repaint.clone(),
            piece_count: scene.pieces().count(),
            highlight_count: scene.highlights.len(),
        });
    }

    fn take_click(&mut self, _canvas: &mut FakeCanvas) -> Option<HexCoord> {
        let (px, py) = self.pending_clicks.pop_front()?;
        self.cell_at(px, py)
    }
}


pub struct FakeTimers {
    clock: ClockPair,
    pub hidden: bool,
    pub flipped: bool,
    pub render_calls: usize,
}

impl FakeTimers {
    pub fn new() -> Self {
        FakeTimers {
            clock: ClockPair::new(),
            hidden: false,
            flipped: false,
            render_calls: 0,
        }
    }
}

impl Default for FakeTimers {
    fn default() -> Self { FakeTimers::new() }
}

impl TimerWidget for FakeTimers {
    type Canvas = FakeCanvas;

    fn set_state(&mut self, light: Duration, dark: Duration, active: Color) {
        self.clock.set_state(light, dark, active, Instant::now());
    }

    fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    fn set_flipped(&mut self, flipped: bool) {
        self.flipped = flipped;
    }

    fn render(
        &mut self, _canvas: &mut FakeCanvas, _x: f64, _y: f64, _width: f64, _height: f64,
        _force_full_repaint: bool,
    ) {
        if !self.hidden {
            self.render_calls += 1;
        }
    }

    fn take_expired(&mut self) -> Option<Color> { self.clock.expired(Instant::now()) }
}
