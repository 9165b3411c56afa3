use std::fmt;
use std::time::Duration;

use enum_map::{enum_map, EnumMap};
use instant::Instant;
use strum::IntoEnumIterator;

use crate::color::Color;
use crate::layer::Canvas;


// Turn-clock widget contract. The widget draws two countdown clocks at the
// top and bottom edges of the viewport; `flipped` follows board perspective.
// Expiry is polled once per frame rather than delivered via callback.
pub trait TimerWidget {
    type Canvas: Canvas;

    fn set_state(&mut self, light: Duration, dark: Duration, active: Color);
    fn set_hidden(&mut self, hidden: bool);
    fn set_flipped(&mut self, flipped: bool);
    fn render(
        &mut self, canvas: &mut Self::Canvas, x: f64, y: f64, width: f64, height: f64,
        force_full_repaint: bool,
    );
    fn take_expired(&mut self) -> Option<Color>;
}


pub fn duration_to_mss(d: Duration) -> String {
    let mut ret = String::new();
    format_duration_to_mss(d, &mut ret).unwrap();
    ret
}

fn format_duration_to_mss(d: Duration, f: &mut impl fmt::Write) -> fmt::Result {
    let s = d.as_secs();
    let minutes = s / 60;
    let seconds = s % 60;
    write!(f, "{minutes}:{seconds:02}")
}


// Countdown bookkeeping shared by widget implementations: remaining time per
// color as of the last `set_state`, with the active color's clock running
// against wall time. Expiry is reported once per `set_state`.
#[derive(Clone, Debug)]
pub struct ClockPair {
    remaining: EnumMap<Color, Duration>,
    active: Option<Color>,
    updated_at: Option<Instant>,
    expiry_reported: bool,
}

impl ClockPair {
    pub fn new() -> Self {
        ClockPair {
            remaining: enum_map! { _ => Duration::ZERO },
            active: None,
            updated_at: None,
            expiry_reported: false,
        }
    }

    pub fn set_state(&mut self, light: Duration, dark: Duration, active: Color, now: Instant) {
        self.remaining = enum_map! {
            Color::Light => light,
            Color::Dark => dark,
        };
        self.active = Some(active);
        self.updated_at = Some(now);
        self.expiry_reported = false;
    }

    pub fn active(&self) -> Option<Color> { self.active }

    pub fn remaining(&self, color: Color, now: Instant) -> Duration {
        let base = self.remaining[color];
        match (self.active, self.updated_at) {
            (Some(active), Some(updated_at)) if active == color => {
                base.saturating_sub(now - updated_at)
            }
            _ => base,
        }
    }

    // One-shot: returns the flagged color the first time a running clock hits
    // zero after the latest `set_state`.
    pub fn expired(&mut self, now: Instant) -> Option<Color> {
        if self.expiry_reported {
            return None;
        }
        let expired = Color::iter()
            .find(|&color| Some(color) == self.active && self.remaining(color, now).is_zero());
        if expired.is_some() {
            self.expiry_reported = true;
        }
        expired
    }
}

impl Default for ClockPair {
    fn default() -> Self { ClockPair::new() }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatting() {
        assert_eq!(duration_to_mss(Duration::from_secs(0)), "0:00");
        assert_eq!(duration_to_mss(Duration::from_secs(65)), "1:05");
        assert_eq!(duration_to_mss(Duration::from_secs(600)), "10:00");
    }

    #[test]
    fn active_clock_runs_down() {
        let start = Instant::now();
        let mut clock = ClockPair::new();
        clock.set_state(Duration::from_secs(60), Duration::from_secs(90), Color::Light, start);
        let later = start + Duration::from_secs(10);
        assert_eq!(clock.remaining(Color::Light, later), Duration::from_secs(50));
        assert_eq!(clock.remaining(Color::Dark, later), Duration::from_secs(90));
    }

    #[test]
    fn expiry_is_one_shot() {
        let start = Instant::now();
        let mut clock = ClockPair::new();
        clock.set_state(Duration::from_secs(1), Duration::from_secs(1), Color::Dark, start);
        let later = start + Duration::from_secs(2);
        assert_eq!(clock.expired(later), Some(Color::Dark));
        assert_eq!(clock.expired(later), None);
        // A fresh server update re-arms the clock.
        clock.set_state(Duration::from_secs(1), Duration::ZERO, Color::Dark, later);
        assert_eq!(clock.expired(later), Some(Color::Dark));
    }
}
