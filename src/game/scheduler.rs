//! Fixed-tick scheduling on top of a display-rate frame callback, plus the
//! render-side interpolation between two ticks.

use std::collections::VecDeque;

use super::grid::Cell;

/// What the current frame should do. `advance` implies `render`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameDecision {
    pub advance: bool,
    pub render: bool,
}

/// Decides per frame whether to step the simulation and whether to draw.
/// Timestamps are milliseconds from `performance.now()` / rAF.
#[derive(Clone, Debug)]
pub struct FrameScheduler {
    tick_interval_ms: f64,
    frame_interval_ms: Option<f64>,
    last_tick_ms: Option<f64>,
    last_render_ms: Option<f64>,
}

impl FrameScheduler {
    pub fn new(tick_interval_ms: f64, target_fps: Option<f64>) -> Self {
        Self {
            tick_interval_ms: tick_interval_ms.max(1.0),
            frame_interval_ms: frame_interval(target_fps),
            last_tick_ms: None,
            last_render_ms: None,
        }
    }

    pub fn tick_interval_ms(&self) -> f64 {
        self.tick_interval_ms
    }

    pub fn set_tick_interval(&mut self, ms: f64) {
        self.tick_interval_ms = ms.max(1.0);
    }

    /// Drop the time origin; the next `poll` re-anchors at its timestamp.
    pub fn reset(&mut self) {
        self.last_tick_ms = None;
        self.last_render_ms = None;
    }

    pub fn poll(&mut self, now: f64) -> FrameDecision {
        let (Some(last_tick), Some(last_render)) = (self.last_tick_ms, self.last_render_ms) else {
            // first frame is the origin: draw, never tick
            self.last_tick_ms = Some(now);
            self.last_render_ms = Some(now);
            return FrameDecision { advance: false, render: true };
        };

        let since_render = now - last_render;
        let render_due = match self.frame_interval_ms {
            Some(interval) => since_render >= interval,
            None => true,
        };
        if !render_due {
            return FrameDecision::default();
        }
        self.last_render_ms = Some(match self.frame_interval_ms {
            // keep the throttle phase so a 60 Hz display still lands near the target rate
            Some(interval) => now - since_render % interval,
            None => now,
        });

        let interval = self.tick_interval_ms;
        let since_tick = now - last_tick;
        let advance = since_tick >= interval;
        if advance {
            // stay on the tick grid; a frame two or more ticks late re-anchors
            // instead of firing catch-up ticks
            self.last_tick_ms = Some(if since_tick >= 2.0 * interval {
                now
            } else {
                last_tick + interval
            });
        }
        FrameDecision { advance, render: true }
    }

    /// Fraction of the current tick interval that has elapsed, clamped to [0, 1].
    pub fn interpolation(&self, now: f64) -> f64 {
        match self.last_tick_ms {
            Some(last) => ((now - last) / self.tick_interval_ms).clamp(0.0, 1.0),
            None => 0.0,
        }
    }
}

fn frame_interval(target_fps: Option<f64>) -> Option<f64> {
    target_fps.filter(|fps| *fps > 0.0).map(|fps| 1000.0 / fps)
}

/// Blend each segment from its previous-tick cell to its current cell, in cell
/// units. A segment with no previous counterpart (fresh growth) starts from the
/// previous tail.
pub fn segment_positions(previous: &VecDeque<Cell>, current: &VecDeque<Cell>, f: f64) -> Vec<(f64, f64)> {
    let f = f.clamp(0.0, 1.0);
    current
        .iter()
        .enumerate()
        .map(|(i, cur)| {
            let from = previous.get(i).or(previous.back()).unwrap_or(cur);
            (lerp(from.x as f64, cur.x as f64, f), lerp(from.y as f64, cur.y as f64, f))
        })
        .collect()
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
